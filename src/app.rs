use std::sync::Arc;

use axum::{
    routing::get, // HTTP method helpers
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::repository::MovieRepo;
use crate::routes_movies;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<MovieRepo>,
}

impl AppState {
    pub fn new(repo: Arc<MovieRepo>) -> Self {
        Self { repo }
    }
}

pub fn router(state: AppState) -> Router {
    let collection = get(routes_movies::list_movies).post(routes_movies::create_movie);

    // request logging: one event when a request arrives, one when the response leaves
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        // "/movies" and "/movies/" are the same collection
        .route("/movies", collection.clone())
        .route("/movies/", collection)
        .route(
            "/movies/:id",
            get(routes_movies::get_movie)
                .put(routes_movies::update_movie)
                .delete(routes_movies::delete_movie),
        )
        .layer(trace)
        .with_state(state)
}
