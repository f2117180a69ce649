use std::path::PathBuf;

use anyhow::{Context, Result};

/// Development-only signing secret used when `JWT_SECRET` is unset.
pub const DEV_JWT_SECRET: &str = "verdant-dev-secret";

/// Client credentials for one OAuth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub jwt_secret: String,
    pub data_dir: PathBuf,
    pub uploads_dir: PathBuf,
    /// Origin the browser app is served from; used for CORS and avatar URLs.
    pub public_url: String,
    pub google: Option<OAuthCredentials>,
    pub github: Option<OAuthCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        let public_url = lookup("PUBLIC_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_string();

        let oauth = |prefix: &str, provider: &str| {
            let client_id = configured(lookup(&format!("{prefix}_CLIENT_ID")))?;
            let client_secret = configured(lookup(&format!("{prefix}_CLIENT_SECRET")))?;
            let callback_url = configured(lookup(&format!("{prefix}_CALLBACK_URL")))
                .unwrap_or_else(|| format!("{public_url}/api/auth/{provider}/callback"));
            Some(OAuthCredentials {
                client_id,
                client_secret,
                callback_url,
            })
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            jwt_secret: configured(lookup("JWT_SECRET"))
                .unwrap_or_else(|| DEV_JWT_SECRET.to_string()),
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            uploads_dir: lookup("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            google: oauth("GOOGLE", "google"),
            github: oauth("GITHUB", "github"),
            public_url,
        })
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

/// Empty values and `.env.example` placeholders (`your_..._here`) count as unset.
fn configured(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.starts_with("your_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.public_url, "http://localhost:3000");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.uses_dev_secret());
        assert!(config.google.is_none());
        assert!(config.github.is_none());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config(&[("PORT", "eighty")]).is_err());
    }

    #[test]
    fn test_placeholder_credentials_are_ignored() {
        let config = config(&[
            ("GOOGLE_CLIENT_ID", "your_google_client_id_here"),
            ("GOOGLE_CLIENT_SECRET", "secret"),
        ])
        .unwrap();
        assert!(config.google.is_none());
    }

    #[test]
    fn test_oauth_callback_defaults_to_public_url() {
        let config = config(&[
            ("PUBLIC_URL", "https://verdant.example/"),
            ("GITHUB_CLIENT_ID", "id"),
            ("GITHUB_CLIENT_SECRET", "secret"),
        ])
        .unwrap();
        let github = config.github.unwrap();
        assert_eq!(
            github.callback_url,
            "https://verdant.example/api/auth/github/callback"
        );
    }
}
