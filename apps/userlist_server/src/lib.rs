//! HTTP surface for the user directory.
//!
//! All routes are read-only and live under `/api/users`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use userlist_core::{
    AllNames, AlphabetBucket, AlphabetSummary, DirectoryHandle, NameRecord, PageRequest,
    PageResult, SearchRequest,
};

/// Name list shipped with the server, resolved independently of the working
/// directory.
pub const BUNDLED_NAMES_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/usernames.txt");

#[derive(Clone)]
pub struct AppState {
    pub directory: DirectoryHandle,
}

pub fn router(directory: DirectoryHandle) -> Router {
    let users = Router::new()
        .route("/", get(list_users))
        .route("/all", get(all_users))
        .route("/letter/:letter", get(users_by_letter))
        .route("/search", get(search_users))
        .route("/alphabet", get(alphabet))
        .route("/alphabet/:letter", get(alphabet_letter))
        .route("/count", get(count))
        .route("/health", get(health));

    Router::new()
        .nest("/api/users", users)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { directory })
}

/// A path letter must be exactly one character.
pub fn parse_letter(raw: &str) -> Result<char, StatusCode> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

async fn list_users(
    State(state): State<AppState>,
    Query(req): Query<PageRequest>,
) -> Json<PageResult<NameRecord>> {
    Json(state.directory.page(&req))
}

async fn all_users(State(state): State<AppState>) -> Json<AllNames> {
    Json(state.directory.all())
}

async fn users_by_letter(
    State(state): State<AppState>,
    Path(letter): Path<String>,
    Query(req): Query<PageRequest>,
) -> Result<Json<PageResult<NameRecord>>, StatusCode> {
    let letter = parse_letter(&letter)?;
    Ok(Json(state.directory.page_by_letter(letter, &req)))
}

async fn search_users(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Json<PageResult<NameRecord>> {
    Json(state.directory.search(&req))
}

async fn alphabet(State(state): State<AppState>) -> Json<AlphabetSummary> {
    Json(state.directory.alphabet())
}

async fn alphabet_letter(
    State(state): State<AppState>,
    Path(letter): Path<String>,
) -> Result<Json<AlphabetBucket>, StatusCode> {
    let letter = parse_letter(&letter)?;
    state.directory.bucket_for(letter).map(Json).ok_or_else(|| {
        tracing::debug!(%letter, "no bucket for letter");
        StatusCode::NOT_FOUND
    })
}

async fn count(State(state): State<AppState>) -> Json<usize> {
    Json(state.directory.total_count())
}

async fn health(State(state): State<AppState>) -> String {
    format!(
        "User API is running. Total users: {}",
        state.directory.total_count()
    )
}
