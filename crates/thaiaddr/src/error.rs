use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThaiAddrError {
    #[error("Embedded dataset decode error: {0}")]
    DatasetDecode(#[from] serde_json::Error),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ThaiAddrError>;
