use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::progress::{PhaseProgress, Progress, ProgressLedger};
use crate::roadmap::{Difficulty, Roadmap, RoadmapId, RoadmapKind};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub kind: Option<RoadmapKind>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// A catalog card: the roadmap without its phases, plus current progress.
#[derive(Serialize)]
pub struct RoadmapSummary {
    pub id: RoadmapId,
    pub icon: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RoadmapKind,
    pub difficulty: Difficulty,
    pub duration: String,
    pub description: String,
    pub tags: Vec<String>,
    pub nodes: usize,
    pub progress: Progress,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub hits: Vec<RoadmapSummary>,
}

#[derive(Serialize)]
pub struct NodeState {
    pub done: bool,
    pub subs: Vec<bool>,
}

#[derive(Serialize)]
pub struct PhaseState {
    #[serde(flatten)]
    pub progress: PhaseProgress,
    pub nodes: Vec<NodeState>,
}

#[derive(Serialize)]
pub struct RoadmapDetail {
    pub roadmap: Roadmap,
    pub progress: Progress,
    pub phases: Vec<PhaseState>,
}

fn summarize(ledger: &ProgressLedger, roadmap: &Roadmap) -> Result<RoadmapSummary, AppError> {
    Ok(RoadmapSummary {
        id: roadmap.id.clone(),
        icon: roadmap.icon.clone(),
        title: roadmap.title.clone(),
        kind: roadmap.kind,
        difficulty: roadmap.difficulty,
        duration: roadmap.duration.clone(),
        description: roadmap.description.clone(),
        tags: roadmap.tags.clone(),
        nodes: roadmap.node_count(),
        progress: ledger.roadmap_progress(roadmap.id.as_str())?,
    })
}

/// GET /api/roadmaps?type=role|skill
pub async fn handle_list_roadmaps(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<RoadmapSummary>>, AppError> {
    let ledger = state.ledger.lock();
    let summaries = state
        .catalog
        .filter(query.kind)
        .map(|r| summarize(&ledger, r))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(summaries))
}

/// GET /api/roadmaps/search?q=
pub async fn handle_search_roadmaps(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let ledger = state.ledger.lock();
    let hits = state
        .catalog
        .search(&query.q)
        .into_iter()
        .map(|r| summarize(&ledger, r))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(SearchResponse {
        query: query.q,
        hits,
    }))
}

/// GET /api/roadmaps/:id
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RoadmapDetail>, AppError> {
    let roadmap = state.catalog.roadmap(&id)?;
    let ledger = state.ledger.lock();

    let mut phases = Vec::with_capacity(roadmap.phases.len());
    for (pi, phase) in roadmap.phases.iter().enumerate() {
        let mut nodes = Vec::with_capacity(phase.nodes.len());
        for (ni, node) in phase.nodes.iter().enumerate() {
            let subs = (0..node.subs.len())
                .map(|si| ledger.is_sub_complete(&id, pi, ni, si))
                .collect::<Result<Vec<_>, _>>()?;
            nodes.push(NodeState {
                done: ledger.is_node_complete(&id, pi, ni)?,
                subs,
            });
        }
        phases.push(PhaseState {
            progress: ledger.phase_progress(&id, pi)?,
            nodes,
        });
    }

    Ok(Json(RoadmapDetail {
        roadmap: roadmap.clone(),
        progress: ledger.roadmap_progress(&id)?,
        phases,
    }))
}
