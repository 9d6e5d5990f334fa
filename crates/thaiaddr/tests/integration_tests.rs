//! Integration tests for thaiaddr address lookup
//!
//! These tests run against the full public API and the embedded dataset,
//! verifying the documented query semantics end to end.

use thaiaddr::AddressDirectory;

fn setup_test_env() {
    let _ = thaiaddr::init_logging(tracing::Level::WARN);
}

#[test]
fn test_full_workflow() {
    setup_test_env();

    let directory = AddressDirectory::new_embedded().expect("Should create directory");

    // 1. Lookup by postal code: several subdistricts share 10240
    let hits = directory.find_by_zip("10240");
    assert!(!hits.is_empty(), "Should find records for zip 10240");
    assert!(
        hits.iter().all(|record| record.zip == "10240"),
        "Every hit should carry the queried zip"
    );

    // 2. Enumerate districts of a province, sorted by district name
    let districts = directory.districts("32000000");
    assert!(
        !districts.is_empty(),
        "Province 32000000 should have districts"
    );
    assert!(
        districts.windows(2).all(|w| w[0].name <= w[1].name),
        "Districts should be sorted ascending by name"
    );

    // 3. Enumerate subdistricts of one of those districts
    let subdistricts = directory.subdistricts("32140000");
    assert!(
        !subdistricts.is_empty(),
        "District 32140000 should have subdistricts"
    );
    assert!(
        subdistricts
            .iter()
            .any(|summary| summary.code == "32140200"),
        "Subdistrict 32140200 should be listed under its district"
    );

    // 4. Resolve a single subdistrict record
    let record = directory
        .find_by_subdistrict_code("32140200")
        .expect("Subdistrict 32140200 should resolve");
    assert_eq!(record.district_code, "32140000");
    assert_eq!(record.province_code, "32000000");
    assert_eq!(record.zip, "32140");
}

#[test]
fn test_provinces_cover_dataset() {
    setup_test_env();

    let directory = AddressDirectory::new_embedded().expect("Should create directory");

    let provinces = directory.provinces();
    assert!(!provinces.is_empty(), "Should enumerate provinces");
    assert!(
        provinces.windows(2).all(|w| w[0].name <= w[1].name),
        "Provinces should be sorted ascending by name"
    );

    // One summary per distinct code, and every record's province is covered
    let mut codes: Vec<&str> = provinces.iter().map(|p| p.code.as_str()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), provinces.len(), "No duplicate province codes");

    for record in directory.records() {
        assert!(
            provinces.iter().any(|p| p.code == record.province_code),
            "Province {} should be enumerated",
            record.province_code
        );
    }
}

#[test]
fn test_zips_are_distinct_sorted_and_complete() {
    setup_test_env();

    let directory = AddressDirectory::new_embedded().expect("Should create directory");

    let zips = directory.zips();
    assert!(
        zips.windows(2).all(|w| w[0] < w[1]),
        "Zips should be strictly ascending"
    );

    for zip in &zips {
        assert!(
            !directory.find_by_zip(zip).is_empty(),
            "Listed zip {zip} should resolve to records"
        );
    }
    for record in directory.records() {
        assert!(
            zips.binary_search(&record.zip).is_ok(),
            "Record zip {} should be listed",
            record.zip
        );
    }
}

#[test]
fn test_hierarchy_is_consistent() {
    setup_test_env();

    let directory = AddressDirectory::new_embedded().expect("Should create directory");

    for province in directory.provinces() {
        let districts = directory.districts(&province.code);
        assert!(
            !districts.is_empty(),
            "Province {} should have districts",
            province.name
        );

        for district in districts {
            let subdistricts = directory.subdistricts(&district.code);
            assert!(
                !subdistricts.is_empty(),
                "District {} should have subdistricts",
                district.name
            );

            for subdistrict in subdistricts {
                let record = directory
                    .find_by_subdistrict_code(&subdistrict.code)
                    .expect("Enumerated subdistrict should resolve to a record");
                assert_eq!(record.district_code, district.code);
                assert_eq!(record.province_code, province.code);
            }
        }
    }
}

#[test]
fn test_absent_codes_are_normal_outcomes() {
    setup_test_env();

    let directory = AddressDirectory::new_embedded().expect("Should create directory");

    assert!(directory.find_by_zip("00000").is_empty());
    assert!(directory.find_by_zip("").is_empty());
    assert!(directory.find_by_subdistrict_code("99999999").is_none());
    assert!(directory.districts("99000000").is_empty());
    assert!(directory.subdistricts("99990000").is_empty());
}

#[test]
fn test_repeated_queries_are_stable() {
    setup_test_env();

    let directory = AddressDirectory::new_embedded().expect("Should create directory");

    assert_eq!(directory.find_by_zip("10240"), directory.find_by_zip("10240"));
    assert_eq!(directory.zips(), directory.zips());
    assert_eq!(directory.provinces(), directory.provinces());
    assert_eq!(
        directory.districts("32000000"),
        directory.districts("32000000")
    );
}

#[test]
fn test_shared_across_threads() {
    setup_test_env();

    let directory = AddressDirectory::new_embedded().expect("Should create directory");

    // Read-only data needs no locking; concurrent readers see equal results
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let provinces = directory.provinces();
                assert_eq!(provinces, directory.provinces());
            });
        }
    });
}
