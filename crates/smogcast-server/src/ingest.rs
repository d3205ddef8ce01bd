//! CSV decoding at the upload boundary.

use smogcast::PollutionRecord;

/// Decode an uploaded CSV body into raw records.
///
/// The first line is treated as the header and columns bind to record
/// fields by exact name (`State`, `City`, `PM2.5`, ...). Unknown columns are
/// ignored and missing ones deserialize to empty strings, which the
/// training pipeline later filters out row by row.
///
/// # Errors
///
/// Returns the underlying [`csv::Error`] for structurally broken input,
/// such as a row with more fields than the header.
pub fn parse_records(body: &[u8]) -> Result<Vec<PollutionRecord>, csv::Error> {
    csv::Reader::from_reader(body).deserialize().collect()
}
