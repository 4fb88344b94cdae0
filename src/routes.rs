use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::{sequence_ref::CurrentSource, snapshot::Snapshot, state::AppState};

pub fn make_router<S: AppState>(state: S) -> Router {
    Router::new()
        .route("/", get(display_handler::<S>))
        .route("/sequence", get(snapshot_handler::<S>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// The rendered current ordinal, as the display shows it.
async fn display_handler<S: AppState>(state: State<S>) -> (StatusCode, String) {
    match state.sequence().snapshot().await {
        Some(snapshot) => (StatusCode::OK, snapshot.rendered),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "sequence is not running".to_string(),
        ),
    }
}

async fn snapshot_handler<S: AppState>(state: State<S>) -> Result<Json<Snapshot>, StatusCode> {
    state
        .sequence()
        .snapshot()
        .await
        .map(Json)
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)
}
