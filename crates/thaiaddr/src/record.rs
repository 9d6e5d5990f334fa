//! Record types shared by every query in the crate.
//!
//! The dataset is a flat list of [`AddressRecord`]s, one per subdistrict.
//! Enumeration queries reduce records to [`AddressSummary`] pairs.

use serde::{Deserialize, Serialize};

/// One fully resolved subdistrict-level address unit.
///
/// Every field is a non-empty string in the bundled dataset. Several records
/// may share the same `zip` (a postal code can span subdistricts) and the
/// same `province_code`/`district_code` (hierarchical fan-out), while
/// `subdistrict_code` identifies a record uniquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub province: String,
    #[serde(rename = "provinceCode")]
    pub province_code: String,
    pub district: String,
    #[serde(rename = "districtCode")]
    pub district_code: String,
    pub subdistrict: String,
    #[serde(rename = "subdistrictCode")]
    pub subdistrict_code: String,
    pub zip: String,
}

/// Reduced `{name, code}` projection returned by the enumeration queries.
///
/// Depending on which query produced it, the pair names a province, a
/// district, or a subdistrict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSummary {
    pub name: String,
    pub code: String,
}

impl AddressSummary {
    pub(crate) fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.to_owned(),
            code: code.to_owned(),
        }
    }
}
