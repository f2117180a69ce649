use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::oauth::Provider;
use super::validation::{
    validate_display_name, validate_signup, validate_workspace, SignupRequest, WorkspaceRequest,
};
use super::AuthUser;
use crate::errors::{AppError, FieldErrors};
use crate::models::{Profile, PublicUser, UserSummary, Workspace};
use crate::state::AppState;

/// Largest avatar accepted, in bytes.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;
const AVATAR_TYPES: [(&str, &str); 3] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
];

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserSummary,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub avatar_url: Option<String>,
}

#[derive(Serialize)]
pub struct MeResponse {
    pub user: PublicUser,
    pub workspace: Option<Workspace>,
    pub profile: Option<ProfileView>,
}

#[derive(Serialize)]
pub struct WorkspaceResponse {
    pub message: &'static str,
    pub workspace: Workspace,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub message: &'static str,
    pub profile: ProfileView,
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

fn profile_view(state: &AppState, profile: Profile) -> ProfileView {
    let avatar_url = profile
        .avatar_path
        .as_ref()
        .map(|path| format!("{}{path}", state.config.public_url));
    ProfileView {
        profile,
        avatar_url,
    }
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let account = validate_signup(&req).map_err(AppError::Fields)?;
    let accounts = state.accounts.clone();
    let user = tokio::task::spawn_blocking(move || accounts.register(account))
        .await
        .map_err(anyhow::Error::from)??;
    let token = state.tokens.issue(user.id, &user.email)?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Account created.",
            token,
            user: UserSummary::from(&user),
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    let accounts = state.accounts.clone();
    let user = tokio::task::spawn_blocking(move || accounts.authenticate(&email, &password))
        .await
        .map_err(anyhow::Error::from)??;
    info!("Login {}", user.email);
    Ok(Json(LoginResponse {
        token: state.tokens.issue(user.id, &user.email)?,
        user: UserSummary::from(&user),
    }))
}

/// GET /api/me
pub async fn handle_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MeResponse>, AppError> {
    let user = state.accounts.find(auth.id)?;
    Ok(Json(MeResponse {
        user: PublicUser::from(&user),
        workspace: state.accounts.workspace(user.id),
        profile: state
            .accounts
            .profile(user.id)
            .map(|p| profile_view(&state, p)),
    }))
}

/// POST /api/workspace
pub async fn handle_save_workspace(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<WorkspaceRequest>,
) -> Result<(StatusCode, Json<WorkspaceResponse>), AppError> {
    let input = validate_workspace(&req).map_err(AppError::Fields)?;
    let workspace = state.accounts.save_workspace(auth.id, input);
    Ok((
        StatusCode::CREATED,
        Json(WorkspaceResponse {
            message: "Workspace saved.",
            workspace,
        }),
    ))
}

struct Avatar {
    extension: &'static str,
    data: Bytes,
}

/// POST /api/profile (multipart: displayName, bio, interests, avatar)
pub async fn handle_save_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    let mut display_name = None;
    let mut bio = String::new();
    let mut interests = Vec::new();
    let mut avatar = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "displayName" => display_name = Some(field.text().await.map_err(multipart_error)?),
            "bio" => bio = field.text().await.map_err(multipart_error)?.trim().to_string(),
            "interests" => {
                let raw = field.text().await.map_err(multipart_error)?;
                interests = serde_json::from_str(&raw).unwrap_or_default();
            }
            "avatar" => {
                let extension = field
                    .content_type()
                    .and_then(|ct| AVATAR_TYPES.iter().find(|(mime, _)| *mime == ct))
                    .map(|(_, ext)| *ext)
                    .ok_or_else(unsupported_avatar_type)?;
                let data = field.bytes().await.map_err(multipart_error)?;
                if data.len() > MAX_AVATAR_BYTES {
                    return Err(avatar_too_large());
                }
                if !data.is_empty() {
                    avatar = Some(Avatar { extension, data });
                }
            }
            _ => {}
        }
    }

    let display_name = validate_display_name(display_name.as_deref()).map_err(AppError::Fields)?;

    let avatar_path = match avatar {
        Some(avatar) => Some(store_avatar(&state, avatar).await?),
        None => None,
    };
    let profile = state
        .accounts
        .save_profile(auth.id, display_name, bio, interests, avatar_path);
    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            message: "Profile saved!",
            profile: profile_view(&state, profile),
        }),
    ))
}

fn unsupported_avatar_type() -> AppError {
    AppError::Fields(FieldErrors::from([(
        "avatar",
        "Only JPG, PNG, WEBP allowed.".to_string(),
    )]))
}

fn avatar_too_large() -> AppError {
    AppError::PayloadTooLarge("Avatar must be under 2 MB.".into())
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        avatar_too_large()
    } else {
        AppError::Validation(e.body_text())
    }
}

/// Writes the avatar under the uploads directory and returns its public path.
async fn store_avatar(state: &AppState, avatar: Avatar) -> Result<String, AppError> {
    let file_name = format!("avatar-{}.{}", Uuid::new_v4(), avatar.extension);
    let dir = &state.config.uploads_dir;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(anyhow::Error::from)?;
    tokio::fs::write(dir.join(&file_name), &avatar.data)
        .await
        .map_err(anyhow::Error::from)?;
    info!("Stored avatar {file_name} ({} bytes)", avatar.data.len());
    Ok(format!("/uploads/{file_name}"))
}

// ────────────────────────────────────────────────────────────────────────────
// OAuth redirects
// ────────────────────────────────────────────────────────────────────────────

fn start(state: &AppState, provider: Provider) -> Redirect {
    match state.oauth.begin(provider) {
        Ok(url) => Redirect::to(&url),
        Err(e) => {
            warn!("{provider} sign-in unavailable: {e}");
            Redirect::to(&format!("/?error={provider}_unavailable"))
        }
    }
}

async fn finish(state: &AppState, provider: Provider, query: CallbackQuery) -> Redirect {
    let failed = || Redirect::to(&format!("/?error={provider}_failed"));

    let (code, csrf) = match (query.code, query.state, query.error) {
        (Some(code), Some(csrf), None) => (code, csrf),
        (_, _, error) => {
            warn!("{provider} callback rejected: {}", error.unwrap_or_else(|| "missing code".into()));
            return failed();
        }
    };
    let identity = match state.oauth.complete(provider, &code, &csrf).await {
        Ok(identity) => identity,
        Err(e) => {
            warn!("{provider} sign-in failed: {e}");
            return failed();
        }
    };
    let user = state.accounts.find_or_create_oauth(identity);
    match state.tokens.issue(user.id, &user.email) {
        Ok(token) => Redirect::to(&format!("/?token={token}&oauth={provider}")),
        Err(e) => {
            warn!("Could not issue token after {provider} sign-in: {e}");
            failed()
        }
    }
}

/// GET /api/auth/google
pub async fn handle_google_start(State(state): State<AppState>) -> Redirect {
    start(&state, Provider::Google)
}

/// GET /api/auth/google/callback
pub async fn handle_google_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Redirect {
    finish(&state, Provider::Google, query).await
}

/// GET /api/auth/github
pub async fn handle_github_start(State(state): State<AppState>) -> Redirect {
    start(&state, Provider::Github)
}

/// GET /api/auth/github/callback
pub async fn handle_github_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Redirect {
    finish(&state, Provider::Github, query).await
}
