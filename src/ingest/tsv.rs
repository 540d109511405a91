//! GeoNames tab-separated row reader.
//!
//! GeoNames extracts are not CSV: fields are never quoted and may contain
//! stray `"` characters, and the alternate-names column can be very long.
//! The reader therefore disables quoting and accepts ragged rows; the column
//! count is checked per row instead.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::config::{
    COL_ASCII_NAME, COL_COUNTRY_CODE, COL_ID, COL_LATITUDE, COL_LONGITUDE, COL_NAME, MIN_COLUMNS,
};
use crate::error_handling::LoadError;
use crate::store::RawPlaceRow;

/// Streams the six kept columns of every row in `reader`.
///
/// Rows are produced lazily; an error is yielded in place of the offending
/// row and the caller decides whether to stop.
pub fn read_rows<R: Read>(reader: R) -> impl Iterator<Item = Result<RawPlaceRow, LoadError>> {
    let reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    reader.into_records().map(|record| {
        let record = record?;
        row_from_record(&record)
    })
}

fn row_from_record(record: &StringRecord) -> Result<RawPlaceRow, LoadError> {
    let line = record.position().map_or(0, |position| position.line());
    if record.len() < MIN_COLUMNS {
        return Err(LoadError::ShortRow {
            line,
            found: record.len(),
            expected: MIN_COLUMNS,
        });
    }

    let column = |index: usize| record.get(index).unwrap_or_default();
    Ok(RawPlaceRow::from_fields(
        line,
        [
            column(COL_ID),
            column(COL_NAME),
            column(COL_ASCII_NAME),
            column(COL_LATITUDE),
            column(COL_LONGITUDE),
            column(COL_COUNTRY_CODE),
        ],
    ))
}
