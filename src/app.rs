use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mood/select", post(handlers::select_mood_form))
        .route("/checkin", post(handlers::check_in_form))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/mood", post(handlers::select_mood))
        .route("/api/checkin", post(handlers::check_in))
        .with_state(state)
}
