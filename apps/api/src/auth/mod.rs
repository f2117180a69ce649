//! Account registration, sign-in and bearer-token identity.
//!
//! Accounts are kept in process memory only; a restart forgets them.

use thiserror::Error;

pub mod accounts;
pub mod extract;
pub mod handlers;
pub mod oauth;
pub mod password;
pub mod token;
pub mod validation;

pub use accounts::AccountStore;
pub use extract::AuthUser;
pub use oauth::OAuthService;
pub use token::TokenIssuer;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email already registered")]
    EmailTaken,

    #[error("user not found")]
    UserNotFound,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("token signing failed: {0}")]
    Token(String),

    #[error("identity provider error: {0}")]
    Provider(String),
}
