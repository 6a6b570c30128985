#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the food access dashboard.
//!
//! Loads the county dataset once at startup, wires the standard view
//! graph over it, and serves the dashboard API plus the static
//! frontend. Selection travels as query parameters on every request;
//! the server holds no per-client state, so concurrent sessions share
//! nothing but the read-only dataset.

mod handlers;
pub mod interactive;

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use food_access_dataset::Dataset;
use food_access_sync::ViewGraph;

/// Shared application state.
pub struct AppState {
    /// The immutable county dataset.
    pub dataset: Arc<Dataset>,
    /// The selection-to-view dependency graph.
    pub graph: Arc<ViewGraph>,
}

/// Resolves the dataset path from the `FOOD_ACCESS_DATA` environment
/// variable, defaulting to `data/food_access.csv`.
#[must_use]
pub fn dataset_path() -> PathBuf {
    std::env::var("FOOD_ACCESS_DATA")
        .map_or_else(|_| PathBuf::from("data/food_access.csv"), PathBuf::from)
}

/// Starts the food access dashboard server.
///
/// Loads the dataset, builds the view graph, and starts the Actix-Web
/// HTTP server. This is a regular async function; the caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if the dataset cannot be loaded: the process must not serve
/// with a missing or partially loaded dataset.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let path = dataset_path();
    log::info!("Loading dataset from {}...", path.display());
    let dataset = Arc::new(Dataset::load(&path).expect("Failed to load food access dataset"));
    log::info!("{} states available", dataset.states().len());

    let graph = Arc::new(ViewGraph::standard(&dataset));

    let state = web::Data::new(AppState { dataset, graph });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/states", web::get().to(handlers::states))
                    .route("/dashboard", web::get().to(handlers::dashboard))
                    .route("/update", web::get().to(handlers::update)),
            )
            // Serve the static frontend
            .service(Files::new("/", "app").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
