//! The selection-to-view dependency graph.
//!
//! An explicit observer registry: each view registers the selection
//! inputs it subscribes to together with its recompute function. A
//! changed input notifies only subscribed views, in registration
//! order. The standard wiring registers the county options first so a
//! state change always repopulates the picker before the chart panels
//! render.

use std::sync::Arc;

use food_access_dataset::Dataset;
use food_access_figures::{choropleth, scatter, trend};
use food_access_models::{Selection, SelectionInput};

use crate::{Fragment, ViewError, ViewId};

type ComputeFn = Box<dyn Fn(&Selection) -> Result<Fragment, ViewError> + Send + Sync>;

struct Registration {
    view: ViewId,
    inputs: Vec<SelectionInput>,
    compute: ComputeFn,
}

/// The result of recomputing one view.
#[derive(Debug, Clone)]
pub struct ViewRender {
    /// Which view was recomputed.
    pub view: ViewId,
    /// The rendered fragment, or the view-scoped failure.
    pub result: Result<Fragment, ViewError>,
}

/// Maps selection-input changes to the views that must recompute.
///
/// The graph itself is immutable after construction and holds no
/// selection state, so one instance is safely shared by reference
/// across all concurrent sessions.
pub struct ViewGraph {
    registrations: Vec<Registration>,
}

impl ViewGraph {
    /// Creates an empty graph with no registered views.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    /// Wires the four standard dashboard views over a shared dataset.
    #[must_use]
    pub fn standard(dataset: &Arc<Dataset>) -> Self {
        let mut graph = Self::new();

        let ds = Arc::clone(dataset);
        graph.register(ViewId::CountyOptions, &[SelectionInput::State], move |sel| {
            let options = sel.state().map_or_else(Vec::new, |state| {
                ds.counties_for(state)
                    .into_iter()
                    .map(ToString::to_string)
                    .collect()
            });
            Ok(Fragment::Options { options })
        });

        // The county selector is not an input here: the map always
        // shows the whole selected state.
        let ds = Arc::clone(dataset);
        graph.register(ViewId::Choropleth, &[SelectionInput::State], move |sel| {
            let records = ds.filter(sel.state(), None);
            Ok(Fragment::Figure {
                figure: choropleth::render(&records)?,
            })
        });

        let ds = Arc::clone(dataset);
        graph.register(
            ViewId::DistanceTrend,
            &[SelectionInput::State, SelectionInput::County],
            move |sel| {
                let records = ds.filter(sel.state(), sel.county());
                Ok(Fragment::Figure {
                    figure: trend::render(&records)?,
                })
            },
        );

        let ds = Arc::clone(dataset);
        graph.register(
            ViewId::IncomeAccessScatter,
            &[SelectionInput::State, SelectionInput::County],
            move |sel| {
                let records = ds.filter(sel.state(), sel.county());
                Ok(Fragment::Figure {
                    figure: scatter::render(&records)?,
                })
            },
        );

        graph
    }

    /// Registers a view with the inputs it subscribes to and its
    /// recompute function. Registration order is notification order.
    pub fn register(
        &mut self,
        view: ViewId,
        inputs: &[SelectionInput],
        compute: impl Fn(&Selection) -> Result<Fragment, ViewError> + Send + Sync + 'static,
    ) {
        self.registrations.push(Registration {
            view,
            inputs: inputs.to_vec(),
            compute: Box::new(compute),
        });
    }

    /// Returns every registered view, in registration order.
    #[must_use]
    pub fn views(&self) -> Vec<ViewId> {
        self.registrations.iter().map(|r| r.view).collect()
    }

    /// Returns the views subscribed to an input, in registration order.
    #[must_use]
    pub fn dependents_of(&self, input: SelectionInput) -> Vec<ViewId> {
        self.registrations
            .iter()
            .filter(|r| r.inputs.contains(&input))
            .map(|r| r.view)
            .collect()
    }

    /// Recomputes a single view against the given selection.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Unregistered`] for an unknown view, or the
    /// view's own failure.
    pub fn recompute(&self, view: ViewId, selection: &Selection) -> Result<Fragment, ViewError> {
        let registration = self
            .registrations
            .iter()
            .find(|r| r.view == view)
            .ok_or(ViewError::Unregistered { view })?;
        (registration.compute)(selection)
    }

    /// Recomputes exactly the views subscribed to a changed input.
    ///
    /// A failure in one view never suppresses the others: every
    /// dependent produces a [`ViewRender`], successful or not.
    #[must_use]
    pub fn update(&self, changed: SelectionInput, selection: &Selection) -> Vec<ViewRender> {
        self.update_many(&[changed], selection)
    }

    /// Recomputes the union of dependents of several changed inputs,
    /// each view at most once, in registration order.
    #[must_use]
    pub fn update_many(
        &self,
        changed: &[SelectionInput],
        selection: &Selection,
    ) -> Vec<ViewRender> {
        self.registrations
            .iter()
            .filter(|r| r.inputs.iter().any(|input| changed.contains(input)))
            .map(|r| ViewRender {
                view: r.view,
                result: (r.compute)(selection),
            })
            .collect()
    }

    /// Recomputes every registered view (the initial full render).
    #[must_use]
    pub fn render_all(&self, selection: &Selection) -> Vec<ViewRender> {
        self.registrations
            .iter()
            .map(|r| ViewRender {
                view: r.view,
                result: (r.compute)(selection),
            })
            .collect()
    }
}

impl Default for ViewGraph {
    fn default() -> Self {
        Self::new()
    }
}
