#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point for the food access dashboard server.

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if std::env::args().any(|arg| arg == "--interactive") {
        food_access_server::interactive::run().await
    } else {
        food_access_server::run_server().await
    }
}
