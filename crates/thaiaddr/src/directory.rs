//! Core address lookup functionality.
//!
//! This module provides the main [`AddressDirectory`] interface for querying
//! the bundled Thai administrative address dataset. Every query is a pure
//! function over the immutable in-memory record list: lookups by postal code
//! or subdistrict code, and enumerations of provinces, districts, and
//! subdistricts filtered by parent code.
//!
//! # Quick Start
//!
//! ```rust
//! use thaiaddr::AddressDirectory;
//!
//! let directory = AddressDirectory::new_embedded()?;
//!
//! // Every record sharing a postal code
//! let hits = directory.find_by_zip("10240");
//!
//! // Districts of a province, sorted by Thai name
//! let districts = directory.districts("10000000");
//! # Ok::<(), thaiaddr::error::ThaiAddrError>(())
//! ```

use itertools::Itertools;
use tracing::{info, instrument};

use crate::{
    data::load_embedded_data,
    error::Result,
    record::{AddressRecord, AddressSummary},
};

/// Read-only directory over the bundled address dataset.
///
/// The directory owns its records for its whole lifetime; nothing mutates
/// them after construction, so a single instance can be shared freely across
/// threads by reference. Query results are owned values, never aliases into
/// internal storage.
///
/// # Examples
///
/// ```rust
/// use thaiaddr::AddressDirectory;
///
/// let directory = AddressDirectory::new_embedded()?;
/// println!("dataset version {}", directory.data_version());
/// # Ok::<(), thaiaddr::error::ThaiAddrError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AddressDirectory {
    records: Vec<AddressRecord>,
    version: String,
}

impl AddressDirectory {
    /// Create an `AddressDirectory` from the dataset embedded at compile
    /// time.
    ///
    /// Fails only if the embedded JSON cannot be decoded, which indicates a
    /// broken build rather than a runtime condition.
    #[instrument(name = "Create AddressDirectory with Embedded Data", level = "info")]
    pub fn new_embedded() -> Result<Self> {
        let t_init = std::time::Instant::now();
        let (records, metadata) = load_embedded_data()?;

        info!(
            elapsed = ?t_init.elapsed(),
            version = %metadata.version,
            "AddressDirectory ready"
        );

        Ok(Self {
            records,
            version: metadata.version,
        })
    }

    /// Create a directory over an explicit record list.
    ///
    /// Intended for tests and for callers that bring their own dataset. The
    /// records are taken as-is: storage order is significant for the
    /// first-occurrence tie-breaks in [`find_by_subdistrict_code`] and the
    /// enumeration queries.
    ///
    /// [`find_by_subdistrict_code`]: Self::find_by_subdistrict_code
    pub fn from_records(records: Vec<AddressRecord>, version: impl Into<String>) -> Self {
        Self {
            records,
            version: version.into(),
        }
    }

    /// All records whose postal code equals `zip_code`, in dataset order.
    ///
    /// A postal code can span several subdistricts, so the result is not
    /// deduplicated. An unknown or empty `zip_code` yields an empty vector.
    #[must_use]
    pub fn find_by_zip(&self, zip_code: &str) -> Vec<AddressRecord> {
        self.records
            .iter()
            .filter(|record| record.zip == zip_code)
            .cloned()
            .collect()
    }

    /// The first record whose subdistrict code equals `code`, or `None`.
    ///
    /// Absence is a normal outcome, not an error. Subdistrict codes are
    /// expected to be unique in the dataset; should a duplicate slip in, the
    /// earliest record in storage order wins (implementation-defined, not a
    /// contract).
    #[must_use]
    pub fn find_by_subdistrict_code(&self, code: &str) -> Option<AddressRecord> {
        self.records
            .iter()
            .find(|record| record.subdistrict_code == code)
            .cloned()
    }

    /// All distinct postal codes, sorted ascending.
    #[must_use]
    pub fn zips(&self) -> Vec<String> {
        let mut zips: Vec<String> = self
            .records
            .iter()
            .map(|record| record.zip.clone())
            .unique()
            .collect();
        zips.sort();
        zips
    }

    /// One summary per province, sorted ascending by province name.
    ///
    /// Deduplication is keyed on `province_code` while the sort is keyed on
    /// `province`, so the result order is alphabetical by name (code-point
    /// order), not by code.
    #[must_use]
    pub fn provinces(&self) -> Vec<AddressSummary> {
        let mut provinces: Vec<AddressSummary> = self
            .records
            .iter()
            .unique_by(|record| record.province_code.clone())
            .map(|record| AddressSummary::new(&record.province, &record.province_code))
            .collect();
        provinces.sort_by(|a, b| a.name.cmp(&b.name));
        provinces
    }

    /// Districts of the province with code `province_code`, one summary per
    /// distinct district code, sorted ascending by district name.
    ///
    /// Deduplication runs on the filtered records in storage order, before
    /// the sort; which record survives a shared district code is decided by
    /// dataset insertion order.
    #[must_use]
    pub fn districts(&self, province_code: &str) -> Vec<AddressSummary> {
        let mut districts: Vec<AddressSummary> = self
            .records
            .iter()
            .filter(|record| record.province_code == province_code)
            .unique_by(|record| record.district_code.clone())
            .map(|record| AddressSummary::new(&record.district, &record.district_code))
            .collect();
        districts.sort_by(|a, b| a.name.cmp(&b.name));
        districts
    }

    /// Subdistricts of the district with code `district_code`, one summary
    /// per distinct subdistrict code, sorted ascending by subdistrict name.
    ///
    /// Same pipeline as [`districts`]: filter, dedup in storage order, then
    /// sort by name.
    ///
    /// [`districts`]: Self::districts
    #[must_use]
    pub fn subdistricts(&self, district_code: &str) -> Vec<AddressSummary> {
        let mut subdistricts: Vec<AddressSummary> = self
            .records
            .iter()
            .filter(|record| record.district_code == district_code)
            .unique_by(|record| record.subdistrict_code.clone())
            .map(|record| AddressSummary::new(&record.subdistrict, &record.subdistrict_code))
            .collect();
        subdistricts.sort_by(|a, b| a.name.cmp(&b.name));
        subdistricts
    }

    /// Version tag of the dataset this directory was built from.
    #[must_use]
    pub fn data_version(&self) -> &str {
        &self.version
    }

    /// The full record list in storage order.
    #[must_use]
    pub fn records(&self) -> &[AddressRecord] {
        &self.records
    }

    /// Number of records in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
