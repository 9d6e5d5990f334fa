//! Embedded dataset that ships with the library.
//!
//! The address data and its metadata are compiled into the artifact with
//! `include_str!` and parsed once when an [`crate::AddressDirectory`] is
//! constructed. The files are produced by an upstream generation step (DOPA
//! ccaatt registry joined with the Wikipedia postal code index) and are
//! treated here as pre-validated constants; this crate performs no trimming,
//! normalization, or consistency checking of its own.

use serde::Deserialize;
use tracing::info;

use crate::{error::Result, record::AddressRecord};

// Embedded data files (generated upstream, committed with the crate)
const EMBEDDED_ADDRESSES: &str = include_str!("embedded/addresses.json");
const EMBEDDED_METADATA: &str = include_str!("embedded/metadata.json");

/// Provenance of the embedded dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetMetadata {
    pub version: String,
    pub source: String,
    pub generated_at: String,
    pub record_count: usize,
}

/// Parse the embedded dataset that ships with the library.
///
/// This is the only fallible path in the crate; it fails only if the
/// committed JSON is corrupt, which a release build cannot normally hit.
pub(crate) fn load_embedded_data() -> Result<(Vec<AddressRecord>, DatasetMetadata)> {
    let metadata: DatasetMetadata = serde_json::from_str(EMBEDDED_METADATA)?;
    let records: Vec<AddressRecord> = serde_json::from_str(EMBEDDED_ADDRESSES)?;

    info!(
        version = %metadata.version,
        records = records.len(),
        "Loaded embedded address dataset"
    );

    Ok((records, metadata))
}
