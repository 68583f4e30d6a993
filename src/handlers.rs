use crate::errors::AppError;
use crate::models::{DashboardResponse, MoodLevel, MoodRequest};
use crate::state::AppState;
use crate::ui::render_dashboard;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Datelike, Local};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.dashboard.lock().await.snapshot();
    let year = Local::now().year();
    Html(render_dashboard(&view, year, state.config.notice_hold.as_secs().max(1)))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    Json(state.dashboard.lock().await.snapshot())
}

pub async fn select_mood(
    State(state): State<AppState>,
    payload: Result<Json<MoodRequest>, JsonRejection>,
) -> Result<Json<DashboardResponse>, AppError> {
    let Json(payload) = payload?;
    let level = MoodLevel::try_from(payload.value)?;
    let mut dashboard = state.dashboard.lock().await;
    dashboard.select_mood(level);
    Ok(Json(dashboard.snapshot()))
}

pub async fn check_in(State(state): State<AppState>) -> Json<DashboardResponse> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.submit(state.config.notice_hold);
    Json(dashboard.snapshot())
}

pub async fn select_mood_form(
    State(state): State<AppState>,
    payload: Result<Form<MoodRequest>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(payload) = payload?;
    let level = MoodLevel::try_from(payload.value)?;
    state.dashboard.lock().await.select_mood(level);
    Ok(Redirect::to("/"))
}

pub async fn check_in_form(State(state): State<AppState>) -> Redirect {
    state
        .dashboard
        .lock()
        .await
        .submit(state.config.notice_hold);
    Redirect::to("/")
}
