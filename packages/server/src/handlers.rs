//! HTTP handler functions for the dashboard API.

use actix_web::{HttpResponse, web};
use food_access_models::{Selection, SelectionInput};
use food_access_server_models::{
    ApiDashboard, ApiFragment, ApiHealth, SelectionParams, UpdateParams,
};
use food_access_sync::graph::ViewRender;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/states`
///
/// Returns the distinct state names in source order, for the state
/// picker's choices.
pub async fn states(state: web::Data<AppState>) -> HttpResponse {
    let states: Vec<String> = state
        .dataset
        .states()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    HttpResponse::Ok().json(states)
}

/// `GET /api/dashboard`
///
/// Renders all four views against the request's selection, for the
/// initial page load.
pub async fn dashboard(
    state: web::Data<AppState>,
    params: web::Query<SelectionParams>,
) -> HttpResponse {
    let selection = params.into_inner().into_selection();
    let renders = state.graph.render_all(&selection);
    HttpResponse::Ok().json(to_response(selection, renders))
}

/// `GET /api/update`
///
/// Renders only the views subscribed to the changed selector. This is
/// the dependency-driven path: a county change never recomputes the
/// county picker or the map.
pub async fn update(state: web::Data<AppState>, params: web::Query<UpdateParams>) -> HttpResponse {
    let params = params.into_inner();

    let Ok(changed) = params.changed.parse::<SelectionInput>() else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("unknown selector '{}'", params.changed)
        }));
    };

    let selection = Selection::from_parts(params.state, params.county);
    let renders = state.graph.update(changed, &selection);
    HttpResponse::Ok().json(to_response(selection, renders))
}

/// Converts view renders into the API response, logging each view
/// failure without suppressing the rest.
fn to_response(selection: Selection, renders: Vec<ViewRender>) -> ApiDashboard {
    let fragments: Vec<ApiFragment> = renders.into_iter().map(ApiFragment::from).collect();
    for fragment in &fragments {
        if let Some(error) = &fragment.error {
            log::error!("View {} failed to render: {error}", fragment.view);
        }
    }
    ApiDashboard {
        selection,
        fragments,
    }
}
