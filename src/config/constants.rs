//! Configuration constants.
//!
//! Defaults for the dataset location, the HTTP listener, and the distance model.

/// Default dataset path (GeoNames `cities1000` extract, zipped or plain TSV)
pub const DEFAULT_DATASET_PATH: &str = "./cities1000.zip";

/// File inside the zip archive that holds the tab-separated rows
pub const DEFAULT_ARCHIVE_MEMBER: &str = "cities1000.txt";

/// Default bind address for the HTTP API
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for the HTTP API
pub const DEFAULT_PORT: u16 = 8080;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// GeoNames column layout (0-based)
// Columns 3 (alternate names), 6 and 7 (feature class/code) and everything
// after 8 are ignored.

/// `geonameid` column
pub const COL_ID: usize = 0;
/// `name` column
pub const COL_NAME: usize = 1;
/// `asciiname` column
pub const COL_ASCII_NAME: usize = 2;
/// `latitude` column
pub const COL_LATITUDE: usize = 4;
/// `longitude` column
pub const COL_LONGITUDE: usize = 5;
/// `country code` column
pub const COL_COUNTRY_CODE: usize = 8;

/// Minimum number of columns a row needs to reach the country code
pub const MIN_COLUMNS: usize = COL_COUNTRY_CODE + 1;

/// HTTP `limit` value meaning "no limit".
///
/// Clients send `-1`, but every negative value is treated the same way.
pub const UNLIMITED_SENTINEL: i64 = -1;
