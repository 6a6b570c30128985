#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! In-memory store over the food access atlas.
//!
//! The dataset is loaded once at startup from a CSV file and never
//! mutated afterwards, so the store is a plain `Vec` of records shared
//! read-only across all request handlers. Every query is a linear scan;
//! the table is one row per US county, small enough that indexing would
//! buy nothing.

mod load;

use std::io::Read;
use std::path::Path;

use food_access_models::CountyRecord;

/// Errors that can occur while loading the dataset.
///
/// All of these are fatal at startup: the process must not serve a
/// partially loaded dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// File could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV structure was malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("missing required column '{name}'")]
    MissingColumn {
        /// Name of the absent column.
        name: String,
    },

    /// The file parsed but contained no usable rows.
    #[error("dataset contains no usable rows")]
    Empty,
}

/// The immutable in-memory table of county records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<CountyRecord>,
}

impl Dataset {
    /// Loads the dataset from a CSV file on disk.
    ///
    /// Rows missing any required field, or carrying an FIPS code that
    /// cannot be normalized to a real county code, are excluded and
    /// summarized with a single warning.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read, the CSV
    /// header is missing a required column, or no usable rows remain.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        log::info!(
            "Loaded {} county records from {}",
            dataset.records.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Loads the dataset from any CSV byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] under the same conditions as
    /// [`Dataset::load`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let records = load::read_records(reader)?;
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { records })
    }

    /// Returns every record in source order.
    #[must_use]
    pub fn records(&self) -> &[CountyRecord] {
        &self.records
    }

    /// Returns the distinct state names, ordered by first appearance in
    /// the source.
    #[must_use]
    pub fn states(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .map(|r| r.state.as_str())
            .filter(|state| seen.insert(*state))
            .collect()
    }

    /// Returns the distinct county names of a state, ordered by first
    /// appearance. An unknown state yields an empty list, not an error.
    #[must_use]
    pub fn counties_for(&self, state: &str) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .filter(|r| r.state == state)
            .map(|r| r.county.as_str())
            .filter(|county| seen.insert(*county))
            .collect()
    }

    /// Filters records by the optional state and county.
    ///
    /// No state means no filter at all: the county value is ignored
    /// unless a state is also set. Lookup misses yield empty results.
    #[must_use]
    pub fn filter(&self, state: Option<&str>, county: Option<&str>) -> Vec<&CountyRecord> {
        match (state, county) {
            (None, _) => self.records.iter().collect(),
            (Some(s), None) => self.records.iter().filter(|r| r.state == s).collect(),
            (Some(s), Some(c)) => self
                .records
                .iter()
                .filter(|r| r.state == s && r.county == c)
                .collect(),
        }
    }
}
