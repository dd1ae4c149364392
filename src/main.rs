// Define data modules
mod models;     // Data structures (Movie, Director)
mod error;      // Error types and their HTTP mapping
mod store;      // Persistent storage (load/save movies.json)
mod validation; // Required-field checks and typed decoding of request bodies
mod repository; // In-memory collection synchronized to the data file
mod config;     // Command-line / environment configuration
mod app;        // Router and shared state
mod routes_movies; // HTTP handlers for movie CRUD

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::repository::MovieRepo;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    // Refuse to serve anything if the data file cannot be fully loaded
    let repo = match MovieRepo::open(&config.data_file) {
        Ok(repo) => repo,
        Err(err) => {
            tracing::error!(error = %err, "failed to load movies");
            return Err(err.into());
        }
    };

    tracing::info!(
        listen_addr = %config.listen_addr,
        data_file = %repo.path().display(),
        movies = repo.list().len(),
        "starting movie catalog server"
    );

    let app = app::router(app::AppState::new(Arc::new(repo)));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
