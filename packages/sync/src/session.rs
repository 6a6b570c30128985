//! Per-session selection state over the view graph.
//!
//! The HTTP API is stateless (clients resend their selection with
//! every request), but the view lifecycle is still stateful per
//! client: each view is idle until a watched input changes, recomputes,
//! and settles on its rendered fragment. [`DashboardSession`] owns one
//! client's selection together with that per-view state.

use std::collections::BTreeMap;
use std::sync::Arc;

use food_access_models::{Selection, SelectionInput};
use serde::{Deserialize, Serialize};

use crate::graph::{ViewGraph, ViewRender};
use crate::{Fragment, ViewId};

/// Lifecycle of one dependent view.
///
/// Every view starts `Idle`, moves to `Recomputing` whenever a watched
/// input changes, and settles at `Rendered`. There is no error phase:
/// a failed recompute still settles at `Rendered` and carries its error
/// in the render result for the boundary to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewPhase {
    /// Never computed.
    Idle,
    /// A watched input changed; the view is being recomputed.
    Recomputing,
    /// The last recompute finished.
    Rendered,
}

/// One client session: a selection and the views it drives.
pub struct DashboardSession {
    graph: Arc<ViewGraph>,
    selection: Selection,
    phases: BTreeMap<ViewId, ViewPhase>,
    fragments: BTreeMap<ViewId, Fragment>,
}

impl DashboardSession {
    /// Creates a session with nothing selected and every view `Idle`.
    #[must_use]
    pub fn new(graph: Arc<ViewGraph>) -> Self {
        let phases = graph
            .views()
            .into_iter()
            .map(|view| (view, ViewPhase::Idle))
            .collect();
        Self {
            graph,
            selection: Selection::default(),
            phases,
            fragments: BTreeMap::new(),
        }
    }

    /// The session's current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The current phase of a view (`Idle` if the graph doesn't know
    /// the view at all).
    #[must_use]
    pub fn phase(&self, view: ViewId) -> ViewPhase {
        self.phases.get(&view).copied().unwrap_or(ViewPhase::Idle)
    }

    /// The view's last successfully rendered fragment, if any.
    #[must_use]
    pub fn fragment(&self, view: ViewId) -> Option<&Fragment> {
        self.fragments.get(&view)
    }

    /// Renders every view against the current selection (initial page
    /// load).
    pub fn render_all(&mut self) -> Vec<ViewRender> {
        let views = self.graph.views();
        for view in &views {
            self.phases.insert(*view, ViewPhase::Recomputing);
        }
        let renders = self.graph.render_all(&self.selection);
        self.settle(&renders);
        renders
    }

    /// Changes the selected state, clearing the selected county: the
    /// county picker is repopulated from scratch for the new state, so
    /// a stale county value must never survive a state change.
    ///
    /// Returns the renders of exactly the views subscribed to the
    /// changed inputs; an unchanged value is a no-op.
    pub fn set_state(&mut self, state: Option<String>) -> Vec<ViewRender> {
        if self.selection.state == state {
            return Vec::new();
        }

        let county_cleared = self.selection.county.take().is_some();
        self.selection.state = state;

        let changed: &[SelectionInput] = if county_cleared {
            &[SelectionInput::State, SelectionInput::County]
        } else {
            &[SelectionInput::State]
        };
        self.apply(changed)
    }

    /// Changes the selected county. Returns the renders of exactly the
    /// views subscribed to the county input; an unchanged value is a
    /// no-op.
    pub fn set_county(&mut self, county: Option<String>) -> Vec<ViewRender> {
        if self.selection.county == county {
            return Vec::new();
        }

        self.selection.county = county;
        self.apply(&[SelectionInput::County])
    }

    fn apply(&mut self, changed: &[SelectionInput]) -> Vec<ViewRender> {
        for input in changed {
            for view in self.graph.dependents_of(*input) {
                self.phases.insert(view, ViewPhase::Recomputing);
            }
        }
        let renders = self.graph.update_many(changed, &self.selection);
        self.settle(&renders);
        renders
    }

    fn settle(&mut self, renders: &[ViewRender]) {
        for render in renders {
            self.phases.insert(render.view, ViewPhase::Rendered);
            if let Ok(fragment) = &render.result {
                self.fragments.insert(render.view, fragment.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use food_access_dataset::Dataset;

    const SAMPLE: &str = "\
State,County,FIPS,Low_Income_Rate_1-2_Mile,Low_Income_Rate_1_Mile,Low_Income_Rate_10_Miles,Low_Income_Rate_20_Miles,Vehicle_Access_1-2_Mile,Vehicle_Access_1_Mile,Vehicle_Access_10_Miles,Vehicle_Access_20_Miles
X,Alpha,1001,0.3,0.4,0.5,0.6,12,10,4,1
X,Beta,1003,0.2,0.3,0.4,0.5,8,6,3,1
Y,Gamma,6037,0.5,0.6,0.7,0.8,40,30,12,5
";

    fn session() -> DashboardSession {
        let dataset = Arc::new(Dataset::from_reader(SAMPLE.as_bytes()).unwrap());
        DashboardSession::new(Arc::new(ViewGraph::standard(&dataset)))
    }

    #[test]
    fn views_start_idle() {
        let session = session();
        assert_eq!(session.phase(ViewId::CountyOptions), ViewPhase::Idle);
        assert_eq!(session.phase(ViewId::Choropleth), ViewPhase::Idle);
        assert!(session.fragment(ViewId::Choropleth).is_none());
    }

    #[test]
    fn render_all_settles_every_view() {
        let mut session = session();
        let renders = session.render_all();
        assert_eq!(renders.len(), 4);
        for view in [
            ViewId::CountyOptions,
            ViewId::Choropleth,
            ViewId::DistanceTrend,
            ViewId::IncomeAccessScatter,
        ] {
            assert_eq!(session.phase(view), ViewPhase::Rendered);
            assert!(session.fragment(view).is_some());
        }
    }

    #[test]
    fn state_change_recomputes_all_four_views() {
        let mut session = session();
        let renders = session.set_state(Some("X".to_string()));
        assert_eq!(renders.len(), 4);
        assert_eq!(
            session.fragment(ViewId::CountyOptions),
            Some(&Fragment::Options {
                options: vec!["Alpha".to_string(), "Beta".to_string()]
            })
        );
    }

    #[test]
    fn county_change_recomputes_only_the_chart_panels() {
        let mut session = session();
        session.set_state(Some("X".to_string()));
        let map_before = session.fragment(ViewId::Choropleth).cloned();

        let renders = session.set_county(Some("Alpha".to_string()));
        let views: Vec<ViewId> = renders.iter().map(|r| r.view).collect();
        assert_eq!(views, vec![ViewId::DistanceTrend, ViewId::IncomeAccessScatter]);

        // The map fragment is untouched, not merely equal.
        assert_eq!(session.fragment(ViewId::Choropleth).cloned(), map_before);
    }

    #[test]
    fn state_change_clears_the_selected_county() {
        let mut session = session();
        session.set_state(Some("X".to_string()));
        session.set_county(Some("Alpha".to_string()));

        let renders = session.set_state(Some("Y".to_string()));
        assert_eq!(session.selection().county(), None);
        // County was cleared along with the state change, so all four
        // views recompute, the picker to Y's counties.
        assert_eq!(renders.len(), 4);
        assert_eq!(
            session.fragment(ViewId::CountyOptions),
            Some(&Fragment::Options {
                options: vec!["Gamma".to_string()]
            })
        );
    }

    #[test]
    fn clearing_the_state_empties_the_county_options() {
        let mut session = session();
        session.set_state(Some("X".to_string()));
        session.set_state(None);
        assert_eq!(
            session.fragment(ViewId::CountyOptions),
            Some(&Fragment::Options { options: vec![] })
        );
    }

    #[test]
    fn unchanged_values_do_no_work() {
        let mut session = session();
        session.set_state(Some("X".to_string()));
        assert!(session.set_state(Some("X".to_string())).is_empty());
        assert!(session.set_county(None).is_empty());
    }

    #[test]
    fn selecting_a_county_narrows_the_scatter_to_one_point() {
        let mut session = session();
        session.set_state(Some("X".to_string()));
        session.set_county(Some("Alpha".to_string()));

        let Some(Fragment::Figure { figure }) = session.fragment(ViewId::IncomeAccessScatter)
        else {
            panic!("scatter must have rendered a figure");
        };
        assert_eq!(figure.data[0].x.as_deref(), Some(&[0.3][..]));
        assert_eq!(figure.data[0].y.as_deref(), Some(&[12.0][..]));
    }
}
