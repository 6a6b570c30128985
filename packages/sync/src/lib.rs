#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Selection-to-view synchronization for the food access dashboard.
//!
//! Four render targets hang off two selector values. Each view
//! subscribes to the selection inputs it depends on; when an input
//! changes, only the subscribed views recompute. [`graph::ViewGraph`]
//! holds the subscriptions and runs stateless updates (the HTTP API's
//! model), while [`session::DashboardSession`] layers per-session
//! selection state and the view phase machine on top.

pub mod graph;
pub mod session;

pub use graph::{ViewGraph, ViewRender};
pub use session::{DashboardSession, ViewPhase};

use food_access_figures::{Figure, FigureError};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The four dependent render targets of the dashboard.
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
pub enum ViewId {
    /// The county picker's available choices.
    CountyOptions,
    /// The choropleth map panel.
    Choropleth,
    /// The low-income-rate-by-distance line chart panel.
    DistanceTrend,
    /// The income-vs-vehicle-access scatter panel.
    IncomeAccessScatter,
}

/// What a view renders: either the county picker's option list or a
/// chart figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Fragment {
    /// Replacement choices for the county picker. Always a full
    /// replacement, never a merge with prior choices.
    Options {
        /// County names in first-appearance order.
        options: Vec<String>,
    },
    /// A chart panel figure.
    Figure {
        /// The Plotly figure specification.
        figure: Figure,
    },
}

/// Errors produced while recomputing a single view.
///
/// A view failure is scoped to that view: the synchronizer keeps
/// recomputing the other dependents and surfaces the error alongside
/// their results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// Figure construction failed.
    #[error("figure construction failed: {0}")]
    Figure(#[from] FigureError),

    /// The requested view has no registration in the graph.
    #[error("view '{view}' is not registered")]
    Unregistered {
        /// The unknown view.
        view: ViewId,
    },
}
