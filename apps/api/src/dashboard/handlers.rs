use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dashboard::activity::{self, ActivityEntry};
use crate::dashboard::streak::{self, Streak};
use crate::dashboard::theme::{self, Theme};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub persisted: bool,
}

#[derive(Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

#[derive(Serialize)]
pub struct ActivityItem {
    #[serde(flatten)]
    pub entry: ActivityEntry,
    pub ago: String,
}

#[derive(Serialize)]
pub struct VisitResponse {
    #[serde(flatten)]
    pub streak: Streak,
    pub persisted: bool,
}

fn save_theme(state: &AppState, theme: Theme) -> Json<ThemeResponse> {
    let persisted = match theme::save(state.store.as_ref(), theme) {
        Ok(()) => true,
        Err(e) => {
            warn!("Theme preference not persisted: {e}");
            false
        }
    };
    Json(ThemeResponse { theme, persisted })
}

/// GET /api/preferences/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        theme: theme::load(state.store.as_ref()),
        persisted: true,
    })
}

/// PUT /api/preferences/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(req): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>, AppError> {
    let theme = req.theme.parse::<Theme>().map_err(AppError::Validation)?;
    Ok(save_theme(&state, theme))
}

/// POST /api/preferences/theme/toggle
pub async fn handle_toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let next = theme::load(state.store.as_ref()).toggled();
    save_theme(&state, next)
}

/// GET /api/activity
pub async fn handle_activity(State(state): State<AppState>) -> Json<Vec<ActivityItem>> {
    let now = Utc::now();
    Json(
        activity::entries(state.store.as_ref())
            .into_iter()
            .map(|entry| ActivityItem {
                ago: activity::time_ago(entry.at, now),
                entry,
            })
            .collect(),
    )
}

/// POST /api/streak/visit
pub async fn handle_record_visit(State(state): State<AppState>) -> Json<VisitResponse> {
    let (streak, err) = streak::record_visit(state.store.as_ref(), Utc::now().date_naive());
    Json(VisitResponse {
        streak,
        persisted: err.is_none(),
    })
}
