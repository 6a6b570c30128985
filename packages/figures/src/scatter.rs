//! Scatter plot of low-income rate against vehicle access.

use food_access_models::{CountyRecord, DistanceBand};

use crate::plotly::{Axis, Figure, Layout, Marker, Trace};
use crate::{FigureError, ensure_finite};

const TITLE: &str =
    "Low Income Percentage vs No Vehicle Access Houses (over 1/2 mile from supermarket)";
const X_TITLE: &str = "Low Income Population Percentage";
const Y_TITLE: &str = "No Vehicle Access Households";

/// Builds the income-vs-access scatter over an already-filtered record
/// set: one point per record at the 1/2-mile band, labeled with the
/// county name, with uniform markers and nearest-point hover.
///
/// An empty record set yields the no-data placeholder.
///
/// # Errors
///
/// Returns [`FigureError::NonFinite`] if any plotted value is NaN or
/// infinite.
pub fn render(records: &[&CountyRecord]) -> Result<Figure, FigureError> {
    if records.is_empty() {
        return Ok(Figure::no_data(TITLE));
    }

    let x: Vec<f64> = records
        .iter()
        .map(|r| r.low_income_rate.get(DistanceBand::HalfMile))
        .collect();
    let y: Vec<f64> = records
        .iter()
        .map(|r| r.vehicle_access.get(DistanceBand::HalfMile))
        .collect();
    let text: Vec<String> = records.iter().map(|r| r.county.clone()).collect();

    ensure_finite(&x, "low-income rate")?;
    ensure_finite(&y, "vehicle access count")?;

    let trace = Trace {
        x: Some(x),
        y: Some(y),
        mode: Some("markers".to_string()),
        text: Some(text),
        marker: Some(Marker {
            size: 10,
            color: "blue".to_string(),
            opacity: 0.5,
        }),
        ..Trace::scatter()
    };

    Ok(Figure {
        data: vec![trace],
        layout: Layout {
            title: Some(TITLE.to_string()),
            xaxis: Some(Axis {
                title: X_TITLE.to_string(),
            }),
            yaxis: Some(Axis {
                title: Y_TITLE.to_string(),
            }),
            hovermode: Some("closest".to_string()),
            ..Layout::default()
        },
    })
}
