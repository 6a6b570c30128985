#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the food access map server.
//!
//! These types are serialized to JSON for the dashboard API. They are
//! separate from the core view types to allow independent evolution of
//! the API contract.

use food_access_models::Selection;
use food_access_sync::graph::ViewRender;
use food_access_sync::{Fragment, ViewId};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Query parameters carrying a client's selection.
///
/// Selection is per client session and travels with every request;
/// empty strings mean "nothing selected", matching what an HTML select
/// submits for its blank option.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionParams {
    /// Selected state, if any.
    pub state: Option<String>,
    /// Selected county, if any.
    pub county: Option<String>,
}

impl SelectionParams {
    /// Normalizes the raw parameters into a [`Selection`].
    #[must_use]
    pub fn into_selection(self) -> Selection {
        Selection::from_parts(self.state, self.county)
    }
}

/// Query parameters for the update endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParams {
    /// Which selector changed: `"state"` or `"county"`.
    pub changed: String,
    /// Selected state, if any.
    pub state: Option<String>,
    /// Selected county, if any.
    pub county: Option<String>,
}

/// One rendered view fragment, or its view-scoped failure.
///
/// Exactly one of `fragment` and `error` is present. A failed view
/// never suppresses the other fragments in the same response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFragment {
    /// Which view this fragment belongs to.
    pub view: ViewId,
    /// The rendered fragment, when the view succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<Fragment>,
    /// The failure message, when the view failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ViewRender> for ApiFragment {
    fn from(render: ViewRender) -> Self {
        match render.result {
            Ok(fragment) => Self {
                view: render.view,
                fragment: Some(fragment),
                error: None,
            },
            Err(e) => Self {
                view: render.view,
                fragment: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Response of the dashboard and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDashboard {
    /// The normalized selection the fragments were rendered against.
    pub selection: Selection,
    /// The recomputed fragments, in notification order.
    pub fragments: Vec<ApiFragment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_params_normalize_empty_strings() {
        let params = SelectionParams {
            state: Some(String::new()),
            county: Some("Alpha".to_string()),
        };
        let selection = params.into_selection();
        assert_eq!(selection.state(), None);
        assert_eq!(selection.county(), Some("Alpha"));
    }

    #[test]
    fn failed_fragment_carries_only_the_error() {
        let render = ViewRender {
            view: ViewId::DistanceTrend,
            result: Err(food_access_sync::ViewError::Unregistered {
                view: ViewId::DistanceTrend,
            }),
        };
        let api: ApiFragment = render.into();
        assert!(api.fragment.is_none());
        assert!(api.error.is_some());
    }
}
