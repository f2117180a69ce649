use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::dashboard::achievements::{self, AchievementStatus};
use crate::dashboard::{activity, streak};
use crate::errors::AppError;
use crate::progress::{PhaseProgress, Progress, ProgressStats};
use crate::roadmap::RoadmapId;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RoadmapProgress {
    pub id: RoadmapId,
    pub title: String,
    pub progress: Progress,
}

#[derive(Serialize)]
pub struct ProgressOverview {
    pub global: Progress,
    pub roadmaps: Vec<RoadmapProgress>,
    pub stats: ProgressStats,
    pub achievements: Vec<AchievementStatus>,
    pub streak: streak::Streak,
}

#[derive(Serialize)]
pub struct NodeToggleResponse {
    pub done: bool,
    /// False when the local store refused the write; the toggle still applies.
    pub persisted: bool,
    pub roadmap: Progress,
    pub phase: PhaseProgress,
    pub global: Progress,
}

#[derive(Serialize)]
pub struct SubToggleResponse {
    pub done: bool,
    pub persisted: bool,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub persisted: bool,
    pub global: Progress,
}

/// GET /api/progress
pub async fn handle_progress_overview(
    State(state): State<AppState>,
) -> Result<Json<ProgressOverview>, AppError> {
    let (global, roadmaps, stats) = {
        let ledger = state.ledger.lock();
        let roadmaps = state
            .catalog
            .roadmaps()
            .iter()
            .map(|r| -> Result<RoadmapProgress, AppError> {
                Ok(RoadmapProgress {
                    id: r.id.clone(),
                    title: r.title.clone(),
                    progress: ledger.roadmap_progress(r.id.as_str())?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        (ledger.global_progress(), roadmaps, ledger.stats())
    };

    Ok(Json(ProgressOverview {
        global,
        roadmaps,
        stats,
        achievements: achievements::evaluate(&stats),
        streak: streak::load(state.store.as_ref()),
    }))
}

/// POST /api/roadmaps/:id/phases/:phase/nodes/:node/toggle
pub async fn handle_toggle_node(
    State(state): State<AppState>,
    Path((id, phase, node)): Path<(String, usize, usize)>,
) -> Result<Json<NodeToggleResponse>, AppError> {
    let (response, completed) = {
        let mut ledger = state.ledger.lock();
        let toggled = ledger.toggle_node(&id, phase, node)?;
        let response = NodeToggleResponse {
            done: toggled.done,
            persisted: toggled.flush.is_saved(),
            roadmap: ledger.roadmap_progress(&id)?,
            phase: ledger.phase_progress(&id, phase)?,
            global: ledger.global_progress(),
        };
        (response, toggled.done)
    };

    if completed {
        let roadmap = state.catalog.roadmap(&id)?;
        let name = &state.catalog.node(&id, phase, node)?.name;
        activity::record_best_effort(
            state.store.as_ref(),
            format!("Completed {name} in {}", roadmap.title),
        );
    }
    Ok(Json(response))
}

/// POST /api/roadmaps/:id/phases/:phase/nodes/:node/subs/:sub/toggle
pub async fn handle_toggle_sub(
    State(state): State<AppState>,
    Path((id, phase, node, sub)): Path<(String, usize, usize, usize)>,
) -> Result<Json<SubToggleResponse>, AppError> {
    let toggled = state.ledger.lock().toggle_sub(&id, phase, node, sub)?;
    Ok(Json(SubToggleResponse {
        done: toggled.done,
        persisted: toggled.flush.is_saved(),
    }))
}

/// DELETE /api/roadmaps/:id/progress
pub async fn handle_reset_roadmap(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResetResponse>, AppError> {
    let response = {
        let mut ledger = state.ledger.lock();
        let flush = ledger.reset_roadmap(&id)?;
        ResetResponse {
            persisted: flush.is_saved(),
            global: ledger.global_progress(),
        }
    };
    let title = &state.catalog.roadmap(&id)?.title;
    activity::record_best_effort(state.store.as_ref(), format!("Reset progress for {title}"));
    Ok(Json(response))
}

/// DELETE /api/progress
pub async fn handle_reset_all(State(state): State<AppState>) -> Json<ResetResponse> {
    let response = {
        let mut ledger = state.ledger.lock();
        let flush = ledger.reset_all();
        ResetResponse {
            persisted: flush.is_saved(),
            global: ledger.global_progress(),
        }
    };
    activity::record_best_effort(state.store.as_ref(), "Reset all progress");
    Json(response)
}
