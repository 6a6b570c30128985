//! Line chart of average low-income rate by distance band.

use food_access_models::{CountyRecord, DistanceBand};

use crate::plotly::{Axis, Figure, Layout, Trace};
use crate::{FigureError, ensure_finite, stats};

const TITLE: &str = "Average Low Income Rates at Different Distances";
const X_TITLE: &str = "Distance (miles)";
const Y_TITLE: &str = "Average Low Income Rate";
const SERIES_NAME: &str = "Low Income Rate";

/// Builds the distance-trend figure over an already-filtered record
/// set: one lines+markers series with exactly one point per distance
/// band, each y value the mean low-income rate across the records.
///
/// An empty record set yields the no-data placeholder: the mean of
/// zero rows is undefined and must not surface as NaN.
///
/// # Errors
///
/// Returns [`FigureError::NonFinite`] if a computed mean is NaN or
/// infinite (possible only if non-finite rates reach the record set).
pub fn render(records: &[&CountyRecord]) -> Result<Figure, FigureError> {
    let mut x = Vec::with_capacity(DistanceBand::all().len());
    let mut y = Vec::with_capacity(DistanceBand::all().len());

    for band in DistanceBand::all() {
        let Some(average) = stats::mean(records.iter().map(|r| r.low_income_rate.get(*band)))
        else {
            return Ok(Figure::no_data(TITLE));
        };
        x.push(band.miles());
        y.push(average);
    }

    ensure_finite(&y, "mean low-income rate")?;

    let trace = Trace {
        x: Some(x),
        y: Some(y),
        mode: Some("lines+markers".to_string()),
        name: Some(SERIES_NAME.to_string()),
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
            ..Layout::default()
        },
    })
}
