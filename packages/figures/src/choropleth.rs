//! Choropleth map of low-income rates by county.

use food_access_models::{CountyRecord, DistanceBand};

use crate::plotly::{ColorBar, Figure, Geo, Layout, Trace};
use crate::{FigureError, ensure_finite};

const TITLE: &str = "Low Income Rates by County";
const LEGEND_LABEL: &str = "Low Income Rate";
const COLORSCALE: &str = "Reds";

/// Builds the choropleth figure over an already-filtered record set:
/// one map trace colored by the low-income rate at the 1/2-mile band,
/// joined to county boundary polygons by FIPS code.
///
/// An empty record set still renders the map scaffold (USA scope, no
/// shaded counties); this panel is always drawn.
///
/// # Errors
///
/// Returns [`FigureError::NonFinite`] if any rate is NaN or infinite.
pub fn render(records: &[&CountyRecord]) -> Result<Figure, FigureError> {
    let locations: Vec<String> = records.iter().map(|r| r.fips.clone()).collect();
    let z: Vec<f64> = records
        .iter()
        .map(|r| r.low_income_rate.get(DistanceBand::HalfMile))
        .collect();
    let text: Vec<String> = records.iter().map(|r| r.county.clone()).collect();

    ensure_finite(&z, "low-income rate")?;

    let trace = Trace {
        locations: Some(locations),
        z: Some(z),
        text: Some(text),
        geojson: Some(food_access_geography::COUNTY_BOUNDARIES_URL.to_string()),
        colorscale: Some(COLORSCALE.to_string()),
        colorbar: Some(ColorBar {
            title: LEGEND_LABEL.to_string(),
        }),
        ..Trace::choropleth()
    };

    Ok(Figure {
        data: vec![trace],
        layout: Layout {
            title: Some(TITLE.to_string()),
            geo: Some(Geo {
                scope: "usa".to_string(),
            }),
            ..Layout::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use food_access_models::BandValues;

    fn record(county: &str, fips: &str, low_income_half: f64) -> CountyRecord {
        CountyRecord {
            state: "X".to_string(),
            county: county.to_string(),
            fips: fips.to_string(),
            low_income_rate: BandValues {
                half_mile: low_income_half,
                one_mile: 0.4,
                ten_miles: 0.5,
                twenty_miles: 0.6,
            },
            vehicle_access: BandValues {
                half_mile: 12.0,
                one_mile: 10.0,
                ten_miles: 4.0,
                twenty_miles: 1.0,
            },
        }
    }

    #[test]
    fn joins_by_fips_with_fixed_metric() {
        let a = record("Alpha", "01001", 0.3);
        let b = record("Beta", "01003", 0.2);
        let figure = render(&[&a, &b]).unwrap();

        let trace = &figure.data[0];
        assert_eq!(trace.trace_type, "choropleth");
        assert_eq!(
            trace.locations.as_deref(),
            Some(&["01001".to_string(), "01003".to_string()][..])
        );
        assert_eq!(trace.z.as_deref(), Some(&[0.3, 0.2][..]));
        assert_eq!(
            trace.geojson.as_deref(),
            Some(food_access_geography::COUNTY_BOUNDARIES_URL)
        );
    }

    #[test]
    fn fixed_title_scale_and_legend() {
        let a = record("Alpha", "01001", 0.3);
        let figure = render(&[&a]).unwrap();

        assert_eq!(figure.layout.title.as_deref(), Some(TITLE));
        assert_eq!(figure.layout.geo.as_ref().unwrap().scope, "usa");
        let trace = &figure.data[0];
        assert_eq!(trace.colorscale.as_deref(), Some(COLORSCALE));
        assert_eq!(trace.colorbar.as_ref().unwrap().title, LEGEND_LABEL);
    }

    #[test]
    fn empty_set_still_renders_the_map() {
        let figure = render(&[]).unwrap();
        assert_eq!(figure.data.len(), 1);
        assert!(figure.data[0].locations.as_ref().unwrap().is_empty());
        assert_eq!(figure.layout.geo.as_ref().unwrap().scope, "usa");
    }

    #[test]
    fn non_finite_rate_is_an_error() {
        let bad = record("Alpha", "01001", f64::NAN);
        assert!(matches!(
            render(&[&bad]),
            Err(FigureError::NonFinite { .. })
        ));
    }
}
