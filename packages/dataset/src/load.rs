//! CSV parsing for the food access atlas.
//!
//! Rows are deserialized through [`RawRow`], whose fields are all
//! optional: a row with any required field absent, blank, or non-finite
//! is excluded from the table rather than failing the load. Structural
//! problems (unreadable file, missing header column) stay fatal.

use std::io::Read;

use food_access_models::{BandValues, CountyRecord};
use serde::Deserialize;

use crate::DatasetError;

/// Header columns that must be present for the file to be usable.
const REQUIRED_COLUMNS: &[&str] = &[
    "State",
    "County",
    "FIPS",
    "Low_Income_Rate_1-2_Mile",
    "Low_Income_Rate_1_Mile",
    "Low_Income_Rate_10_Miles",
    "Low_Income_Rate_20_Miles",
    "Vehicle_Access_1-2_Mile",
    "Vehicle_Access_1_Mile",
    "Vehicle_Access_10_Miles",
    "Vehicle_Access_20_Miles",
];

/// One CSV row as it appears in the source file, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "State")]
    state: Option<String>,
    #[serde(rename = "County")]
    county: Option<String>,
    #[serde(rename = "FIPS")]
    fips: Option<String>,
    #[serde(rename = "Low_Income_Rate_1-2_Mile")]
    low_income_half_mile: Option<f64>,
    #[serde(rename = "Low_Income_Rate_1_Mile")]
    low_income_one_mile: Option<f64>,
    #[serde(rename = "Low_Income_Rate_10_Miles")]
    low_income_ten_miles: Option<f64>,
    #[serde(rename = "Low_Income_Rate_20_Miles")]
    low_income_twenty_miles: Option<f64>,
    #[serde(rename = "Vehicle_Access_1-2_Mile")]
    vehicle_half_mile: Option<f64>,
    #[serde(rename = "Vehicle_Access_1_Mile")]
    vehicle_one_mile: Option<f64>,
    #[serde(rename = "Vehicle_Access_10_Miles")]
    vehicle_ten_miles: Option<f64>,
    #[serde(rename = "Vehicle_Access_20_Miles")]
    vehicle_twenty_miles: Option<f64>,
}

impl RawRow {
    /// Validates the row into a [`CountyRecord`], normalizing the FIPS
    /// join key. Returns `None` if any required field is missing.
    fn into_record(self) -> Option<CountyRecord> {
        let state = self.state.filter(|s| !s.trim().is_empty())?;
        let county = self.county.filter(|s| !s.trim().is_empty())?;
        let fips = food_access_geography::fips::normalize_county(self.fips.as_deref()?)?;

        let low_income_rate = BandValues {
            half_mile: finite(self.low_income_half_mile)?,
            one_mile: finite(self.low_income_one_mile)?,
            ten_miles: finite(self.low_income_ten_miles)?,
            twenty_miles: finite(self.low_income_twenty_miles)?,
        };
        let vehicle_access = BandValues {
            half_mile: finite(self.vehicle_half_mile)?,
            one_mile: finite(self.vehicle_one_mile)?,
            ten_miles: finite(self.vehicle_ten_miles)?,
            twenty_miles: finite(self.vehicle_twenty_miles)?,
        };

        Some(CountyRecord {
            state,
            county,
            fips,
            low_income_rate,
            vehicle_access,
        })
    }
}

/// Treats absent and non-finite values alike: both exclude the row from
/// aggregate computations.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Reads and validates every usable record from a CSV byte stream.
///
/// # Errors
///
/// Returns [`DatasetError`] if the stream cannot be read or the header
/// row is missing a required column.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CountyRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(DatasetError::MissingColumn {
                name: (*column).to_string(),
            });
        }
    }

    let mut records = Vec::new();
    let mut skipped: u64 = 0;

    for row in csv_reader.deserialize::<RawRow>() {
        match row {
            Ok(raw) => match raw.into_record() {
                Some(record) => records.push(record),
                None => skipped += 1,
            },
            // Row-scoped shape problems exclude the row; I/O failures
            // mid-stream abort the load.
            Err(e) => match e.kind() {
                csv::ErrorKind::Io(_) => return Err(e.into()),
                _ => {
                    log::debug!("Unparseable row: {e}");
                    skipped += 1;
                }
            },
        }
    }

    if skipped > 0 {
        log::warn!(
            "Excluded {skipped} row(s) with missing or malformed required fields ({} usable)",
            records.len()
        );
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "State,County,FIPS,Low_Income_Rate_1-2_Mile,Low_Income_Rate_1_Mile,Low_Income_Rate_10_Miles,Low_Income_Rate_20_Miles,Vehicle_Access_1-2_Mile,Vehicle_Access_1_Mile,Vehicle_Access_10_Miles,Vehicle_Access_20_Miles";

    fn with_rows(rows: &[&str]) -> Vec<CountyRecord> {
        let csv = format!("{HEADER}\n{}\n", rows.join("\n"));
        read_records(csv.as_bytes()).expect("header is valid")
    }

    #[test]
    fn complete_row_is_kept() {
        let records = with_rows(&["X,Alpha,1001,0.3,0.4,0.5,0.6,12,10,4,1"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fips, "01001");
        assert!((records[0].low_income_rate.half_mile - 0.3).abs() < f64::EPSILON);
        assert!((records[0].vehicle_access.half_mile - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn row_missing_rate_is_excluded() {
        let records = with_rows(&[
            "X,Alpha,1001,0.3,0.4,0.5,0.6,12,10,4,1",
            "X,Beta,1003,,0.3,0.4,0.5,8,6,3,1",
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].county, "Alpha");
    }

    #[test]
    fn row_with_blank_names_is_excluded() {
        let records = with_rows(&[
            " ,Alpha,1001,0.3,0.4,0.5,0.6,12,10,4,1",
            "X,,1003,0.3,0.4,0.5,0.6,12,10,4,1",
        ]);
        assert!(records.is_empty());
    }

    #[test]
    fn row_with_bad_fips_is_excluded() {
        let records = with_rows(&["X,Alpha,99001,0.3,0.4,0.5,0.6,12,10,4,1"]);
        assert!(records.is_empty());
    }

    #[test]
    fn row_with_unparseable_number_is_excluded() {
        let records = with_rows(&[
            "X,Alpha,1001,not-a-number,0.4,0.5,0.6,12,10,4,1",
            "X,Beta,1003,0.2,0.3,0.4,0.5,8,6,3,1",
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].county, "Beta");
    }

    #[test]
    fn non_finite_values_are_excluded() {
        let records = with_rows(&["X,Alpha,1001,NaN,0.4,0.5,0.6,12,10,4,1"]);
        assert!(records.is_empty());
    }

    #[test]
    fn extra_columns_are_tolerated() {
        let csv = format!("{HEADER},Urban\nX,Alpha,1001,0.3,0.4,0.5,0.6,12,10,4,1,1\n");
        let records = read_records(csv.as_bytes()).expect("extra columns are fine");
        assert_eq!(records.len(), 1);
    }
}
