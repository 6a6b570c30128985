#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! County FIPS join-key handling for the choropleth map.
//!
//! The dashboard joins tabular county rows to boundary polygons by the
//! five-digit county FIPS code. The boundary file itself is an opaque
//! external collaborator (the frontend hands [`COUNTY_BOUNDARIES_URL`]
//! straight to the charting library), so the only geographic concern in
//! this workspace is producing join keys in the exact format that file
//! uses.

pub mod fips;

/// Publicly hosted GeoJSON of US county boundaries, keyed by five-digit
/// county FIPS codes. Joined client-side by the choropleth trace.
pub const COUNTY_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/geojson-counties-fips.json";
