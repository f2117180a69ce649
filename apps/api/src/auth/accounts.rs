use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use super::oauth::{OAuthIdentity, Provider};
use super::password::{hash_password, verify_password};
use super::validation::{NewAccount, WorkspaceInput};
use super::AuthError;
use crate::models::{Profile, User, Workspace};

#[derive(Default)]
struct Accounts {
    users: Vec<User>,
    workspaces: HashMap<Uuid, Workspace>,
    profiles: HashMap<Uuid, Profile>,
}

impl Accounts {
    fn by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim().to_lowercase();
        self.users.iter().find(|u| u.email == email)
    }
}

/// Users with their workspace and profile, held in memory.
#[derive(Default)]
pub struct AccountStore {
    inner: RwLock<Accounts>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, account: NewAccount) -> Result<User, AuthError> {
        if self.inner.read().by_email(&account.email).is_some() {
            return Err(AuthError::EmailTaken);
        }
        let password_hash = hash_password(&account.password)?;

        let mut accounts = self.inner.write();
        // Re-check under the write lock; hashing ran unlocked.
        if accounts.by_email(&account.email).is_some() {
            return Err(AuthError::EmailTaken);
        }
        let user = User {
            id: Uuid::new_v4(),
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email,
            password_hash: Some(password_hash),
            google_id: None,
            github_id: None,
            avatar_url: None,
            created_at: Utc::now(),
        };
        accounts.users.push(user.clone());
        info!("Registered {}", user.email);
        Ok(user)
    }

    /// Unknown emails, password-less accounts and wrong passwords all fail
    /// the same way.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .inner
            .read()
            .by_email(email)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;
        if !verify_password(password, hash)? {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(user)
    }

    pub fn find(&self, id: Uuid) -> Result<User, AuthError> {
        self.inner
            .read()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(AuthError::UserNotFound)
    }

    /// Matches by provider id, then links by email, else creates a new
    /// password-less account.
    pub fn find_or_create_oauth(&self, identity: OAuthIdentity) -> User {
        let mut accounts = self.inner.write();

        if let Some(user) = accounts
            .users
            .iter()
            .find(|u| provider_id(u, identity.provider) == Some(identity.provider_id.as_str()))
        {
            return user.clone();
        }

        if let Some(email) = identity.email.as_deref().filter(|e| !e.trim().is_empty()) {
            let email = email.trim().to_lowercase();
            if let Some(user) = accounts.users.iter_mut().find(|u| u.email == email) {
                set_provider_id(user, identity.provider, identity.provider_id);
                info!("Linked {} account to {}", identity.provider, user.email);
                return user.clone();
            }
        }

        let email = identity
            .email
            .as_deref()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("{}_{}@oauth.verdant", identity.provider, identity.provider_id));
        let mut user = User {
            id: Uuid::new_v4(),
            first_name: identity
                .first_name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "User".to_string()),
            last_name: identity.last_name.unwrap_or_default(),
            email,
            password_hash: None,
            google_id: None,
            github_id: None,
            avatar_url: identity.avatar_url,
            created_at: Utc::now(),
        };
        set_provider_id(&mut user, identity.provider, identity.provider_id);
        info!("New user via {}: {}", identity.provider, user.email);
        accounts.users.push(user.clone());
        user
    }

    pub fn save_workspace(&self, user_id: Uuid, input: WorkspaceInput) -> Workspace {
        let workspace = Workspace {
            id: Uuid::new_v4(),
            user_id,
            name: input.name,
            kind: input.kind,
            team_size: input.team_size,
            created_at: Utc::now(),
        };
        self.inner
            .write()
            .workspaces
            .insert(user_id, workspace.clone());
        workspace
    }

    pub fn save_profile(
        &self,
        user_id: Uuid,
        display_name: String,
        bio: String,
        interests: Vec<String>,
        avatar_path: Option<String>,
    ) -> Profile {
        let profile = Profile {
            id: Uuid::new_v4(),
            user_id,
            display_name,
            bio,
            interests,
            avatar_path,
            updated_at: Utc::now(),
        };
        self.inner.write().profiles.insert(user_id, profile.clone());
        profile
    }

    pub fn workspace(&self, user_id: Uuid) -> Option<Workspace> {
        self.inner.read().workspaces.get(&user_id).cloned()
    }

    pub fn profile(&self, user_id: Uuid) -> Option<Profile> {
        self.inner.read().profiles.get(&user_id).cloned()
    }
}

fn provider_id(user: &User, provider: Provider) -> Option<&str> {
    match provider {
        Provider::Google => user.google_id.as_deref(),
        Provider::Github => user.github_id.as_deref(),
    }
}

fn set_provider_id(user: &mut User, provider: Provider, id: String) {
    match provider {
        Provider::Google => user.google_id = Some(id),
        Provider::Github => user.github_id = Some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TeamSize, WorkspaceType};

    fn account(email: &str) -> NewAccount {
        NewAccount {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password: "analytical".to_string(),
        }
    }

    fn identity(provider: Provider, id: &str, email: Option<&str>) -> OAuthIdentity {
        OAuthIdentity {
            provider,
            provider_id: id.to_string(),
            email: email.map(str::to_string),
            first_name: Some("Grace".to_string()),
            last_name: None,
            avatar_url: None,
        }
    }

    #[test]
    fn test_register_then_authenticate() {
        let store = AccountStore::new();
        let user = store.register(account("ada@example.com")).unwrap();
        let found = store.authenticate("ADA@example.com ", "analytical").unwrap();
        assert_eq!(found.id, user.id);
    }

    #[test]
    fn test_duplicate_email_is_rejected() {
        let store = AccountStore::new();
        store.register(account("ada@example.com")).unwrap();
        assert!(matches!(
            store.register(account("ada@example.com")),
            Err(AuthError::EmailTaken)
        ));
    }

    #[test]
    fn test_wrong_password_and_unknown_email_look_the_same() {
        let store = AccountStore::new();
        store.register(account("ada@example.com")).unwrap();
        assert!(matches!(
            store.authenticate("ada@example.com", "difference"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            store.authenticate("nobody@example.com", "analytical"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_oauth_links_existing_email() {
        let store = AccountStore::new();
        let user = store.register(account("ada@example.com")).unwrap();
        let linked =
            store.find_or_create_oauth(identity(Provider::Github, "42", Some("Ada@Example.com")));
        assert_eq!(linked.id, user.id);
        assert_eq!(linked.github_id.as_deref(), Some("42"));

        // Second sign-in matches on the provider id.
        let again = store.find_or_create_oauth(identity(Provider::Github, "42", None));
        assert_eq!(again.id, user.id);
    }

    #[test]
    fn test_oauth_creates_passwordless_user() {
        let store = AccountStore::new();
        let user = store.find_or_create_oauth(OAuthIdentity {
            first_name: None,
            ..identity(Provider::Google, "g-7", None)
        });
        assert_eq!(user.email, "google_g-7@oauth.verdant");
        assert_eq!(user.first_name, "User");
        assert!(user.password_hash.is_none());
        assert!(matches!(
            store.authenticate("google_g-7@oauth.verdant", ""),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_workspace_is_replaced() {
        let store = AccountStore::new();
        let user = store.register(account("ada@example.com")).unwrap();
        let input = |name: &str| WorkspaceInput {
            name: name.to_string(),
            kind: WorkspaceType::Startup,
            team_size: TeamSize::Solo,
        };
        store.save_workspace(user.id, input("First"));
        store.save_workspace(user.id, input("Second"));
        assert_eq!(store.workspace(user.id).unwrap().name, "Second");
        assert!(store.profile(user.id).is_none());
    }

    #[test]
    fn test_find_unknown_user() {
        let store = AccountStore::new();
        assert!(matches!(store.find(Uuid::new_v4()), Err(AuthError::UserNotFound)));
    }
}
