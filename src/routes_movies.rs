// --------------------------------------------------
// Handles API endpoints for movie CRUD operations.
//
// Responsibilities:
// - Decode request bodies into JSON objects
// - Call into the repository
// - Map results to status codes / JSON bodies
// --------------------------------------------------

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::app::AppState;
use crate::error::MovieError;
use crate::models::Movie;

// Bodies that are not a JSON object never reach the repository
fn parse_object(body: &[u8]) -> Result<Map<String, Value>, MovieError> {
    serde_json::from_slice(body).map_err(|_| MovieError::MalformedRequest)
}

// -----------------------------
// GET /movies/
// Returns every movie in insertion order
// -----------------------------
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.repo.list())
}

// -----------------------------
// GET /movies/:id
// -----------------------------
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, MovieError> {
    state.repo.get(&id).map(Json)
}

// -----------------------------
// POST /movies/
// Validates and stores a new movie, 201 on success
// -----------------------------
pub async fn create_movie(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, MovieError> {
    let data = parse_object(&body)?;
    let movie = state.repo.create(data)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

// -----------------------------
// PUT /movies/:id
// Partial update, only supplied fields change
// -----------------------------
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Movie>, MovieError> {
    let data = parse_object(&body)?;
    state.repo.update(&id, data).map(Json)
}

// -----------------------------
// DELETE /movies/:id
// -----------------------------
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, MovieError> {
    state.repo.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
