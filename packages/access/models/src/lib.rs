#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Core vocabulary types for the food access map.
//!
//! This crate defines the canonical distance-band taxonomy of the USDA
//! food access atlas, the per-county record shape shared across the
//! workspace, and the selection pair that drives every dashboard view.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Distance-to-supermarket band, one of the four fixed proximity
/// thresholds measured by the atlas.
///
/// Every rate/count measure in the dataset exists once per band. The
/// band order is fixed and meaningful: charts plot bands left to right
/// in increasing distance.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DistanceBand {
    /// Within 1/2 mile of the nearest supermarket.
    HalfMile,
    /// Within 1 mile.
    OneMile,
    /// Within 10 miles.
    TenMiles,
    /// Within 20 miles.
    TwentyMiles,
}

impl DistanceBand {
    /// Returns the distance in miles that this band represents.
    #[must_use]
    pub const fn miles(self) -> f64 {
        match self {
            Self::HalfMile => 0.5,
            Self::OneMile => 1.0,
            Self::TenMiles => 10.0,
            Self::TwentyMiles => 20.0,
        }
    }

    /// Returns all bands in increasing distance order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::HalfMile,
            Self::OneMile,
            Self::TenMiles,
            Self::TwentyMiles,
        ]
    }
}

/// One numeric measure sampled at each of the four distance bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandValues {
    /// Value at the 1/2-mile band.
    pub half_mile: f64,
    /// Value at the 1-mile band.
    pub one_mile: f64,
    /// Value at the 10-mile band.
    pub ten_miles: f64,
    /// Value at the 20-mile band.
    pub twenty_miles: f64,
}

impl BandValues {
    /// Returns the value for the given band.
    #[must_use]
    pub const fn get(self, band: DistanceBand) -> f64 {
        match band {
            DistanceBand::HalfMile => self.half_mile,
            DistanceBand::OneMile => self.one_mile,
            DistanceBand::TenMiles => self.ten_miles,
            DistanceBand::TwentyMiles => self.twenty_miles,
        }
    }
}

/// One county's food access statistics.
///
/// Records are immutable once loaded; the whole set is loaded once at
/// startup and shared read-only for the process lifetime. Uniqueness of
/// `(state, county)` pairs is assumed but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    /// Full state name as it appears in the source file.
    pub state: String,
    /// County name.
    pub county: String,
    /// Five-digit zero-padded county FIPS code, the join key for
    /// geographic boundary polygons.
    pub fips: String,
    /// Fraction of the county population classified as low-income, per
    /// distance band.
    pub low_income_rate: BandValues,
    /// Number of households without vehicle access, per distance band.
    pub vehicle_access: BandValues,
}

/// Which selector control changed.
///
/// Views subscribe to the selection inputs they depend on; an input
/// change notifies only subscribed views.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SelectionInput {
    /// The state selector.
    State,
    /// The county selector.
    County,
}

/// The pair of user-controlled selector values driving the dashboard.
///
/// Selection is scoped per client session and passed explicitly into
/// every update function; the server never stores it. A set county is
/// only meaningful within the selected state. The county picker is
/// repopulated whenever the state changes, which is the sole
/// enforcement of that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected state, `None` when no state is chosen.
    pub state: Option<String>,
    /// Selected county, `None` when no county is chosen.
    pub county: Option<String>,
}

impl Selection {
    /// Builds a selection from raw selector values, treating empty
    /// strings as "nothing selected" (the value an HTML select submits
    /// for its blank option).
    #[must_use]
    pub fn from_parts(state: Option<String>, county: Option<String>) -> Self {
        let normalize = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            state: normalize(state),
            county: normalize(county),
        }
    }

    /// Returns the selected state, if any.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Returns the selected county, if any.
    #[must_use]
    pub fn county(&self) -> Option<&str> {
        self.county.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    #[test]
    fn band_order_and_miles() {
        let miles: Vec<f64> = DistanceBand::all().iter().map(|b| b.miles()).collect();
        assert_eq!(miles, vec![0.5, 1.0, 10.0, 20.0]);
    }

    #[test]
    fn band_display_round_trip() {
        for band in DistanceBand::all() {
            let name = band.to_string();
            assert_eq!(DistanceBand::from_str(&name).ok(), Some(*band));
        }
    }

    #[test]
    fn band_values_lookup() {
        let values = BandValues {
            half_mile: 0.3,
            one_mile: 0.4,
            ten_miles: 0.5,
            twenty_miles: 0.6,
        };
        assert!((values.get(DistanceBand::HalfMile) - 0.3).abs() < f64::EPSILON);
        assert!((values.get(DistanceBand::TwentyMiles) - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn selection_from_parts_normalizes_empty() {
        let selection = Selection::from_parts(Some(String::new()), Some("  ".to_string()));
        assert_eq!(selection, Selection::default());

        let selection = Selection::from_parts(Some("Alabama".to_string()), None);
        assert_eq!(selection.state(), Some("Alabama"));
        assert_eq!(selection.county(), None);
    }

    #[test]
    fn selection_input_parses_lowercase() {
        assert_eq!(
            SelectionInput::from_str("state").ok(),
            Some(SelectionInput::State)
        );
        assert_eq!(
            SelectionInput::from_str("county").ok(),
            Some(SelectionInput::County)
        );
        assert!(SelectionInput::from_str("zip").is_err());
    }
}
