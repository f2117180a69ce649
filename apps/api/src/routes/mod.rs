pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::auth::handlers as auth;
use crate::dashboard::handlers as dashboard;
use crate::progress::handlers as progress;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

/// Multipart overhead allowed on top of the avatar itself.
const PROFILE_FORM_SLACK: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads_dir);

    Router::new()
        .route("/api/health", get(health::health_handler))
        // Catalog
        .route("/api/roadmaps", get(roadmap::handle_list_roadmaps))
        .route("/api/roadmaps/search", get(roadmap::handle_search_roadmaps))
        .route("/api/roadmaps/:id", get(roadmap::handle_get_roadmap))
        // Progress ledger
        .route(
            "/api/progress",
            get(progress::handle_progress_overview).delete(progress::handle_reset_all),
        )
        .route(
            "/api/roadmaps/:id/progress",
            delete(progress::handle_reset_roadmap),
        )
        .route(
            "/api/roadmaps/:id/phases/:phase/nodes/:node/toggle",
            post(progress::handle_toggle_node),
        )
        .route(
            "/api/roadmaps/:id/phases/:phase/nodes/:node/subs/:sub/toggle",
            post(progress::handle_toggle_sub),
        )
        // Dashboard
        .route(
            "/api/preferences/theme",
            get(dashboard::handle_get_theme).put(dashboard::handle_set_theme),
        )
        .route(
            "/api/preferences/theme/toggle",
            post(dashboard::handle_toggle_theme),
        )
        .route("/api/activity", get(dashboard::handle_activity))
        .route("/api/streak/visit", post(dashboard::handle_record_visit))
        // Accounts
        .route("/api/auth/register", post(auth::handle_register))
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/google", get(auth::handle_google_start))
        .route("/api/auth/google/callback", get(auth::handle_google_callback))
        .route("/api/auth/github", get(auth::handle_github_start))
        .route("/api/auth/github/callback", get(auth::handle_github_callback))
        .route("/api/me", get(auth::handle_me))
        .route("/api/workspace", post(auth::handle_save_workspace))
        .route(
            "/api/profile",
            post(auth::handle_save_profile)
                .layer(DefaultBodyLimit::max(auth::MAX_AVATAR_BYTES + PROFILE_FORM_SLACK)),
        )
        .nest_service("/uploads", uploads)
        .with_state(state)
}
