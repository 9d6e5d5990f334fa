//! Basic address lookup functionality
//!
//! This example demonstrates the fundamental query operations:
//! - Creating a directory instance over the embedded dataset
//! - Looking up records by postal code and subdistrict code
//! - Enumerating the province → district → subdistrict hierarchy

use thaiaddr::{AddressDirectory, AddressRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a directory over the embedded dataset (no downloads needed)
    let directory = AddressDirectory::new_embedded()?;
    println!(
        "Loaded {} records, dataset version {}",
        directory.len(),
        directory.data_version()
    );

    // Lookup by postal code: a zip can span several subdistricts
    println!("\nRecords for zip 10240:");
    for record in directory.find_by_zip("10240") {
        print_record(&record);
    }

    // Lookup one subdistrict by its code; absence is a normal outcome
    println!("\nLookup of subdistrict code 32140200:");
    match directory.find_by_subdistrict_code("32140200") {
        Some(record) => print_record(&record),
        None => println!("  not in the dataset"),
    }

    // Walk one level of the hierarchy per query
    println!("\nProvinces and their district counts:");
    for province in directory.provinces() {
        let districts = directory.districts(&province.code);
        println!("  {} ({}): {} districts", province.name, province.code, districts.len());
    }

    Ok(())
}

fn print_record(record: &AddressRecord) {
    println!(
        "  {} / {} / {} (zip {})",
        record.province, record.district, record.subdistrict, record.zip
    );
}
