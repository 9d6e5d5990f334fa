//! Thaiaddr - Thai Administrative Address Lookup Library
//!
//! Thaiaddr provides read-only lookup over a bundled dataset of Thai
//! administrative address units: province → district → subdistrict → postal
//! code. The dataset is embedded at compile time, so the library works out of
//! the box without downloads, files, or configuration.
//!
//! # Quick Start
//!
//! ```rust
//! use thaiaddr::AddressDirectory;
//!
//! // Construct a directory over the embedded dataset
//! let directory = AddressDirectory::new_embedded()?;
//!
//! // Every subdistrict record carrying a postal code
//! for record in directory.find_by_zip("10240") {
//!     println!("{} / {} / {}", record.province, record.district, record.subdistrict);
//! }
//!
//! // Walk the hierarchy one level at a time
//! for province in directory.provinces() {
//!     let districts = directory.districts(&province.code);
//!     println!("{}: {} districts", province.name, districts.len());
//! }
//!
//! // Resolve a single subdistrict; absence is a normal outcome
//! if let Some(record) = directory.find_by_subdistrict_code("32140200") {
//!     println!("zip {}", record.zip);
//! }
//! # Ok::<(), thaiaddr::error::ThaiAddrError>(())
//! ```
//!
//! # Queries
//!
//! - **Lookup**: [`AddressDirectory::find_by_zip`] and
//!   [`AddressDirectory::find_by_subdistrict_code`] return full records.
//! - **Enumeration**: [`AddressDirectory::provinces`],
//!   [`AddressDirectory::districts`], and [`AddressDirectory::subdistricts`]
//!   return deduplicated `{name, code}` summaries sorted by name;
//!   [`AddressDirectory::zips`] lists every distinct postal code.
//!
//! Every query is total: unknown input codes produce empty results, never
//! errors. String comparison is exact, with plain code-point ordering for
//! sorts (no locale-aware collation).
//!
//! # Data
//!
//! The embedded dataset is generated upstream from the DOPA ccaatt registry
//! and the Wikipedia postal code index, then committed with the crate;
//! [`AddressDirectory::data_version`] reports its version tag.

use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

mod data;
mod directory;
pub mod error;
mod record;

pub use data::DatasetMetadata;
pub use directory::AddressDirectory;
pub use record::{AddressRecord, AddressSummary};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the thaiaddr library.
///
/// Sets up structured logging with configurable levels and filtering. Call
/// this once at the start of your application to enable logging output from
/// thaiaddr operations; the `RUST_LOG` environment variable overrides the
/// given level.
///
/// # Examples
///
/// ```rust
/// use thaiaddr::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), thaiaddr::error::ThaiAddrError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::ThaiAddrError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?;

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}
