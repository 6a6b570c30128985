#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Figure builders for the food access dashboard.
//!
//! Each public module builds one chart panel as a Plotly figure
//! specification: the frontend passes `figure.data` and `figure.layout`
//! straight to `Plotly.react`. Builders are pure functions over an
//! already-filtered record slice; selection filtering happens upstream
//! in the view synchronizer.

pub mod choropleth;
pub mod plotly;
pub mod scatter;
pub mod stats;
pub mod trend;

pub use plotly::Figure;

/// Errors that can occur while constructing a figure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FigureError {
    /// A chart value was NaN or infinite. Plotly's JSON wire format has
    /// no representation for these, so they must never be serialized.
    #[error("non-finite {quantity} value cannot be charted")]
    NonFinite {
        /// Which quantity carried the non-finite value.
        quantity: &'static str,
    },
}

/// Checks a slice of chart values before they are committed to a trace.
fn ensure_finite(values: &[f64], quantity: &'static str) -> Result<(), FigureError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(FigureError::NonFinite { quantity })
    }
}
