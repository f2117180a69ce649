use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One profile per user; saving again replaces it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub display_name: String,
    pub bio: String,
    pub interests: Vec<String>,
    /// Server-relative path such as `/uploads/avatar-<uuid>.png`.
    pub avatar_path: Option<String>,
    pub updated_at: DateTime<Utc>,
}
