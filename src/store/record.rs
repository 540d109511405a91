//! Place records and the raw rows they are built from.

use serde::Serialize;

use crate::error_handling::LoadError;

/// One populated place. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    /// GeoNames identifier
    pub id: i64,
    /// Name as written locally (UTF-8)
    pub name: String,
    /// Name in plain ASCII
    pub ascii_name: String,
    /// Degrees; not range-checked
    pub latitude: f64,
    /// Degrees; not range-checked
    pub longitude: f64,
    /// ISO-3166 alpha-2 code; may be empty
    pub country_code: String,
}

impl PlaceRecord {
    /// Builds a record from already-typed values.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        ascii_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            ascii_name: ascii_name.into(),
            latitude,
            longitude,
            country_code: country_code.into(),
        }
    }
}

/// A row as it comes out of the extract: the six kept columns, still text.
///
/// `line` is the 1-based source line, used only for error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPlaceRow {
    /// 1-based line in the source file
    pub line: u64,
    /// Identifier column, unparsed
    pub id: String,
    /// Name column
    pub name: String,
    /// ASCII name column
    pub ascii_name: String,
    /// Latitude column, unparsed
    pub latitude: String,
    /// Longitude column, unparsed
    pub longitude: String,
    /// Country code column
    pub country_code: String,
}

impl RawPlaceRow {
    /// Builds a row from the six kept columns in GeoNames order
    /// `(id, name, ascii_name, latitude, longitude, country_code)`.
    pub fn from_fields(line: u64, fields: [&str; 6]) -> Self {
        let [id, name, ascii_name, latitude, longitude, country_code] = fields;
        Self {
            line,
            id: id.to_string(),
            name: name.to_string(),
            ascii_name: ascii_name.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            country_code: country_code.to_string(),
        }
    }

    /// Parses the numeric columns.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MalformedRow` naming the first column that is not a number.
    pub fn parse(self) -> Result<PlaceRecord, LoadError> {
        let id = parse_field::<i64>(self.line, "id", &self.id)?;
        let latitude = parse_field::<f64>(self.line, "latitude", &self.latitude)?;
        let longitude = parse_field::<f64>(self.line, "longitude", &self.longitude)?;

        Ok(PlaceRecord {
            id,
            name: self.name,
            ascii_name: self.ascii_name,
            latitude,
            longitude,
            country_code: self.country_code,
        })
    }
}

fn parse_field<T: std::str::FromStr>(
    line: u64,
    field: &'static str,
    value: &str,
) -> Result<T, LoadError> {
    value.trim().parse::<T>().map_err(|_| LoadError::MalformedRow {
        line,
        field,
        value: value.to_string(),
    })
}
