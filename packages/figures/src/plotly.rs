//! Plotly figure specification types.
//!
//! A deliberately small subset of Plotly's schema: only the keys the
//! dashboard's three panels actually set. Field names serialize to the
//! exact lowercase keys Plotly expects, and unset options are omitted
//! from the JSON entirely so the library's defaults apply.

use serde::{Deserialize, Serialize};

/// A complete figure: traces plus layout, the unit every chart panel
/// renders from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// The traces to draw.
    pub data: Vec<Trace>,
    /// Titles, axes, and other presentation options.
    pub layout: Layout,
}

impl Figure {
    /// Builds the placeholder shown when a selection filters to zero
    /// records: no traces, just an annotation explaining the gap.
    #[must_use]
    pub fn no_data(title: &str) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout {
                title: Some(title.to_string()),
                annotations: vec![Annotation::centered("No data for the current selection")],
                ..Layout::default()
            },
        }
    }
}

/// One Plotly trace. Which fields are set depends on `trace_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Plotly trace type, e.g. `"scatter"` or `"choropleth"`.
    #[serde(rename = "type")]
    pub trace_type: String,
    /// X values (scatter traces).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    /// Y values (scatter traces).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    /// Draw mode, e.g. `"markers"` or `"lines+markers"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Legend name of the trace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Per-point hover labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    /// Marker styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    /// Boundary join keys (choropleth traces).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    /// Color values, one per location (choropleth traces).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<f64>>,
    /// URL of the boundary GeoJSON (choropleth traces).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geojson: Option<String>,
    /// Named sequential colorscale (choropleth traces).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    /// Colorbar legend options (choropleth traces).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

impl Trace {
    /// Starts a scatter-family trace.
    #[must_use]
    pub fn scatter() -> Self {
        Self {
            trace_type: "scatter".to_string(),
            ..Self::default()
        }
    }

    /// Starts a choropleth trace.
    #[must_use]
    pub fn choropleth() -> Self {
        Self {
            trace_type: "choropleth".to_string(),
            ..Self::default()
        }
    }
}

/// Marker styling for scatter traces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker size in pixels.
    pub size: u32,
    /// CSS color name or hex value.
    pub color: String,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

/// Colorbar legend options for a choropleth trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    /// Legend label shown alongside the color scale.
    pub title: String,
}

/// Axis options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis title.
    pub title: String,
}

/// Geographic projection options for map traces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    /// Map scope, e.g. `"usa"`.
    pub scope: String,
}

/// A free-floating text annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation text.
    pub text: String,
    /// Whether to draw an arrow to an anchor point.
    pub showarrow: bool,
    /// X reference frame.
    pub xref: String,
    /// Y reference frame.
    pub yref: String,
    /// X position within the reference frame.
    pub x: f64,
    /// Y position within the reference frame.
    pub y: f64,
}

impl Annotation {
    /// An annotation centered in the plot area.
    #[must_use]
    pub fn centered(text: &str) -> Self {
        Self {
            text: text.to_string(),
            showarrow: false,
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            x: 0.5,
            y: 0.5,
        }
    }
}

/// Figure layout options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Figure title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// X axis options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Y axis options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    /// Hover behavior, e.g. `"closest"` for nearest-point hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    /// Geographic projection options for map figures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    /// Free-floating annotations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}
