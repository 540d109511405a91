// Shared test helpers for building GeoNames fixtures on disk.
//
// Rows carry all 19 GeoNames columns so the reader sees real-shaped input.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// One GeoNames row with the columns the loader keeps filled in.
#[allow(dead_code)] // Used by other test files
pub fn geonames_row(id: i64, name: &str, lat: f64, lon: f64, country: &str) -> String {
    format!(
        "{id}\t{name}\t{name}\t{name},\"{name}\"\t{lat}\t{lon}\tP\tPPL\t{country}\t\t00\t\t\t\t1000\t\t35\tEurope/Paris\t2024-01-01"
    )
}

/// The four-city scenario: Paris, Lyon, London, Berlin.
pub fn scenario_rows() -> Vec<String> {
    vec![
        geonames_row(1, "Paris", 48.8566, 2.3522, "FR"),
        geonames_row(2, "Lyon", 45.7640, 4.8357, "FR"),
        geonames_row(3, "London", 51.5074, -0.1278, "GB"),
        geonames_row(4, "Berlin", 52.5200, 13.4050, "DE"),
    ]
}

/// Writes `rows` to `<dir>/cities.txt`.
#[allow(dead_code)] // Used by other test files
pub fn write_tsv(dir: &TempDir, rows: &[String]) -> PathBuf {
    let path = dir.path().join("cities.txt");
    let mut file = File::create(&path).expect("Failed to create fixture");
    for row in rows {
        writeln!(file, "{row}").expect("Failed to write fixture row");
    }
    path
}

/// Writes `rows` as `member` inside `<dir>/cities.zip`.
#[allow(dead_code)] // Used by other test files
pub fn write_zip(dir: &TempDir, member: &str, rows: &[String]) -> PathBuf {
    let path = dir.path().join("cities.zip");
    let file = File::create(&path).expect("Failed to create archive");
    let mut zip = ZipWriter::new(file);
    zip.start_file(member, SimpleFileOptions::default())
        .expect("Failed to start archive member");
    for row in rows {
        writeln!(zip, "{row}").expect("Failed to write archive row");
    }
    zip.finish().expect("Failed to finish archive");
    path
}
