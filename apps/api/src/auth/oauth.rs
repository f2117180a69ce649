//! Sign-in through Google and GitHub using the authorization-code flow.
//!
//! `OAuthService` hands out a one-time `state` with each consent URL and only
//! accepts a callback that returns it. Each provider sits behind the
//! [`IdentityProvider`] trait so the HTTP calls can be replaced in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use reqwest::{header, Client, Url};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::AuthError;
use crate::config::{Config, OAuthCredentials};

/// How long a consent `state` stays redeemable.
const STATE_TTL_MINUTES: i64 = 10;
const HTTP_TIMEOUT_SECS: u64 = 15;
const USER_AGENT: &str = "verdant";

const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const GITHUB_USER_URL: &str = "https://api.github.com/user";
const GITHUB_EMAILS_URL: &str = "https://api.github.com/user/emails";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Google,
    Github,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Github => "github",
        }
    }

    fn scope(self) -> &'static str {
        match self {
            Provider::Google => "openid profile email",
            Provider::Github => "user:email",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a provider tells us about the person who signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthIdentity {
    pub provider: Provider,
    pub provider_id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn provider(&self) -> Provider;

    /// Consent page URL carrying `state`.
    fn authorize_url(&self, state: &str) -> Result<String, AuthError>;

    /// Trades an authorization code for the signed-in identity.
    async fn exchange(&self, code: &str) -> Result<OAuthIdentity, AuthError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP-backed providers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct GoogleUser {
    sub: String,
    email: Option<String>,
    given_name: Option<String>,
    family_name: Option<String>,
    picture: Option<String>,
}

#[derive(Deserialize)]
struct GithubUser {
    id: u64,
    login: String,
    name: Option<String>,
    email: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Deserialize)]
struct GithubEmail {
    email: String,
    primary: bool,
}

pub struct HttpIdentityProvider {
    provider: Provider,
    credentials: OAuthCredentials,
    client: Client,
}

impl HttpIdentityProvider {
    pub fn new(provider: Provider, credentials: OAuthCredentials) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(provider_error)?;
        Ok(Self {
            provider,
            credentials,
            client,
        })
    }

    async fn access_token(&self, code: &str) -> Result<String, AuthError> {
        let url = match self.provider {
            Provider::Google => GOOGLE_TOKEN_URL,
            Provider::Github => GITHUB_TOKEN_URL,
        };
        let response: TokenResponse = self
            .client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("redirect_uri", self.credentials.callback_url.as_str()),
                ("grant_type", "authorization_code"),
                ("code", code),
            ])
            .send()
            .await
            .map_err(provider_error)?
            .json()
            .await
            .map_err(provider_error)?;

        match (response.access_token, response.error) {
            (Some(token), _) => Ok(token),
            (None, error) => Err(AuthError::Provider(format!(
                "{} token exchange failed: {}",
                self.provider,
                error.unwrap_or_else(|| "no access token".to_string())
            ))),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
    ) -> Result<T, AuthError> {
        self.client
            .get(url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(provider_error)?
            .json()
            .await
            .map_err(provider_error)
    }

    async fn google_identity(&self, token: &str) -> Result<OAuthIdentity, AuthError> {
        let user: GoogleUser = self.get_json(GOOGLE_USERINFO_URL, token).await?;
        Ok(OAuthIdentity {
            provider: Provider::Google,
            provider_id: user.sub,
            email: user.email,
            first_name: user.given_name,
            last_name: user.family_name,
            avatar_url: user.picture,
        })
    }

    async fn github_identity(&self, token: &str) -> Result<OAuthIdentity, AuthError> {
        let user: GithubUser = self.get_json(GITHUB_USER_URL, token).await?;
        let email = match user.email {
            Some(email) => Some(email),
            None => match self.get_json::<Vec<GithubEmail>>(GITHUB_EMAILS_URL, token).await {
                Ok(emails) => pick_github_email(emails),
                Err(e) => {
                    warn!("Could not list GitHub emails: {e}");
                    None
                }
            },
        };
        let (first_name, last_name) = split_display_name(user.name.as_deref(), &user.login);
        Ok(OAuthIdentity {
            provider: Provider::Github,
            provider_id: user.id.to_string(),
            email,
            first_name: Some(first_name),
            last_name: Some(last_name),
            avatar_url: user.avatar_url,
        })
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn authorize_url(&self, state: &str) -> Result<String, AuthError> {
        let base = match self.provider {
            Provider::Google => GOOGLE_AUTHORIZE_URL,
            Provider::Github => GITHUB_AUTHORIZE_URL,
        };
        Url::parse_with_params(
            base,
            &[
                ("client_id", self.credentials.client_id.as_str()),
                ("redirect_uri", self.credentials.callback_url.as_str()),
                ("response_type", "code"),
                ("scope", self.provider.scope()),
                ("state", state),
            ],
        )
        .map(String::from)
        .map_err(provider_error)
    }

    async fn exchange(&self, code: &str) -> Result<OAuthIdentity, AuthError> {
        let token = self.access_token(code).await?;
        match self.provider {
            Provider::Google => self.google_identity(&token).await,
            Provider::Github => self.github_identity(&token).await,
        }
    }
}

fn provider_error(e: impl fmt::Display) -> AuthError {
    AuthError::Provider(e.to_string())
}

/// The primary address, else the first one listed.
fn pick_github_email(emails: Vec<GithubEmail>) -> Option<String> {
    let primary = emails.iter().position(|e| e.primary).unwrap_or(0);
    emails.into_iter().nth(primary).map(|e| e.email)
}

/// First word of the display name (or the login) and the rest.
fn split_display_name(name: Option<&str>, login: &str) -> (String, String) {
    let name = name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or(login);
    match name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (name.to_string(), String::new()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Service
// ────────────────────────────────────────────────────────────────────────────

struct PendingState {
    provider: Provider,
    issued_at: DateTime<Utc>,
}

/// Configured providers plus the consent states awaiting a callback.
#[derive(Default)]
pub struct OAuthService {
    providers: HashMap<Provider, Arc<dyn IdentityProvider>>,
    pending: Mutex<HashMap<String, PendingState>>,
}

impl OAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an HTTP provider for each one with credentials in `config`.
    pub fn from_config(config: &Config) -> Result<Self, AuthError> {
        let mut service = Self::new();
        for (provider, credentials) in [
            (Provider::Google, &config.google),
            (Provider::Github, &config.github),
        ] {
            match credentials {
                Some(credentials) => {
                    service = service.with_provider(Arc::new(HttpIdentityProvider::new(
                        provider,
                        credentials.clone(),
                    )?));
                    info!("{provider} sign-in enabled");
                }
                None => warn!("{provider} sign-in not configured"),
            }
        }
        Ok(service)
    }

    pub fn with_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.providers.insert(provider.provider(), provider);
        self
    }

    pub fn is_configured(&self, provider: Provider) -> bool {
        self.providers.contains_key(&provider)
    }

    fn provider(&self, provider: Provider) -> Result<&Arc<dyn IdentityProvider>, AuthError> {
        self.providers
            .get(&provider)
            .ok_or_else(|| AuthError::Provider(format!("{provider} is not configured")))
    }

    /// Issues a fresh state and returns the consent URL carrying it.
    pub fn begin(&self, provider: Provider) -> Result<String, AuthError> {
        let state = Uuid::new_v4().simple().to_string();
        let url = self.provider(provider)?.authorize_url(&state)?;
        let now = Utc::now();
        let mut pending = self.pending.lock();
        pending.retain(|_, p| !expired(p, now));
        pending.insert(
            state,
            PendingState {
                provider,
                issued_at: now,
            },
        );
        Ok(url)
    }

    /// Redeems `state` (once) and exchanges `code` with the provider.
    pub async fn complete(
        &self,
        provider: Provider,
        code: &str,
        state: &str,
    ) -> Result<OAuthIdentity, AuthError> {
        let idp = self.provider(provider)?.clone();
        let pending = self.pending.lock().remove(state);
        match pending {
            Some(p) if p.provider == provider && !expired(&p, Utc::now()) => {}
            _ => {
                return Err(AuthError::Provider(format!(
                    "{provider} callback with unknown or expired state"
                )))
            }
        }
        idp.exchange(code).await
    }
}

fn expired(pending: &PendingState, now: DateTime<Utc>) -> bool {
    now - pending.issued_at > Duration::minutes(STATE_TTL_MINUTES)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Accepts the code `"good"` and reports a fixed identity.
    pub(crate) struct FakeProvider {
        pub provider: Provider,
        pub identity: OAuthIdentity,
    }

    #[async_trait]
    impl IdentityProvider for FakeProvider {
        fn provider(&self) -> Provider {
            self.provider
        }

        fn authorize_url(&self, state: &str) -> Result<String, AuthError> {
            Ok(format!("https://idp.test/authorize?state={state}"))
        }

        async fn exchange(&self, code: &str) -> Result<OAuthIdentity, AuthError> {
            if code == "good" {
                Ok(self.identity.clone())
            } else {
                Err(AuthError::Provider("bad code".to_string()))
            }
        }
    }

    pub(crate) fn fake_github() -> Arc<dyn IdentityProvider> {
        Arc::new(FakeProvider {
            provider: Provider::Github,
            identity: OAuthIdentity {
                provider: Provider::Github,
                provider_id: "1001".to_string(),
                email: Some("octo@example.com".to_string()),
                first_name: Some("Octo".to_string()),
                last_name: Some("Cat".to_string()),
                avatar_url: None,
            },
        })
    }

    fn state_of(url: &str) -> String {
        url.rsplit("state=").next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_state_round_trip() {
        let service = OAuthService::new().with_provider(fake_github());
        let url = service.begin(Provider::Github).unwrap();
        let state = state_of(&url);
        let identity = service
            .complete(Provider::Github, "good", &state)
            .await
            .unwrap();
        assert_eq!(identity.provider_id, "1001");

        // A state is single-use.
        assert!(service
            .complete(Provider::Github, "good", &state)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_unknown_state_is_rejected() {
        let service = OAuthService::new().with_provider(fake_github());
        assert!(service
            .complete(Provider::Github, "good", "forged")
            .await
            .is_err());
    }

    #[test]
    fn test_unconfigured_provider() {
        let service = OAuthService::new().with_provider(fake_github());
        assert!(service.is_configured(Provider::Github));
        assert!(!service.is_configured(Provider::Google));
        assert!(service.begin(Provider::Google).is_err());
    }

    #[test]
    fn test_authorize_url_is_encoded() {
        let idp = HttpIdentityProvider::new(
            Provider::Google,
            OAuthCredentials {
                client_id: "cid".to_string(),
                client_secret: "secret".to_string(),
                callback_url: "http://localhost:3000/api/auth/google/callback".to_string(),
            },
        )
        .unwrap();
        let url = idp.authorize_url("abc").unwrap();
        assert!(url.starts_with(GOOGLE_AUTHORIZE_URL));
        assert!(url.contains("client_id=cid"));
        assert!(url.contains("state=abc"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000"));
        assert!(!url.contains("secret"));
    }

    #[test]
    fn test_split_display_name() {
        assert_eq!(
            split_display_name(Some("Grace Brewster Hopper"), "gh"),
            ("Grace".to_string(), "Brewster Hopper".to_string())
        );
        assert_eq!(
            split_display_name(None, "octocat"),
            ("octocat".to_string(), String::new())
        );
    }

    #[test]
    fn test_pick_github_email_prefers_primary() {
        let emails = vec![
            GithubEmail {
                email: "work@example.com".to_string(),
                primary: false,
            },
            GithubEmail {
                email: "home@example.com".to_string(),
                primary: true,
            },
        ];
        assert_eq!(pick_github_email(emails).as_deref(), Some("home@example.com"));
        assert_eq!(pick_github_email(Vec::new()), None);
    }
}
