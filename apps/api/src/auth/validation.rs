use serde::Deserialize;

use crate::errors::FieldErrors;
use crate::models::{TeamSize, WorkspaceType};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// A signup that passed validation. Names are trimmed; the email is trimmed
/// and lowercased.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRequest {
    pub workspace_name: Option<String>,
    pub workspace_type: Option<String>,
    pub team_size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceInput {
    pub name: String,
    pub kind: WorkspaceType,
    pub team_size: TeamSize,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_signup(req: &SignupRequest) -> Result<NewAccount, FieldErrors> {
    let mut errors = FieldErrors::new();

    let first_name = present(&req.first_name);
    if first_name.is_none() {
        errors.insert("firstName", "First name is required.".to_string());
    }
    let last_name = present(&req.last_name);
    if last_name.is_none() {
        errors.insert("lastName", "Last name is required.".to_string());
    }
    match req.email.as_deref() {
        Some(email) if !email.trim().is_empty() => {
            if !is_valid_email(email) {
                errors.insert("email", "Invalid email address.".to_string());
            }
        }
        _ => {
            errors.insert("email", "Email is required.".to_string());
        }
    }
    match req.password.as_deref() {
        None | Some("") => {
            errors.insert("password", "Password is required.".to_string());
        }
        Some(p) if p.chars().count() < MIN_PASSWORD_LEN => {
            errors.insert(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters."),
            );
        }
        Some(_) => {}
    }

    match (first_name, last_name, req.email.as_deref(), req.password.as_deref()) {
        (Some(first), Some(last), Some(email), Some(password)) if errors.is_empty() => {
            Ok(NewAccount {
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.trim().to_lowercase(),
                password: password.to_string(),
            })
        }
        _ => Err(errors),
    }
}

pub fn validate_workspace(req: &WorkspaceRequest) -> Result<WorkspaceInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = present(&req.workspace_name);
    if name.is_none() {
        errors.insert("workspaceName", "Required.".to_string());
    }
    let kind = req.workspace_type.as_deref().and_then(|t| t.parse().ok());
    if kind.is_none() {
        errors.insert("workspaceType", "Select a type.".to_string());
    }
    let team_size = req.team_size.as_deref().and_then(|t| t.parse().ok());
    if team_size.is_none() {
        errors.insert("teamSize", "Select a size.".to_string());
    }

    match (name, kind, team_size) {
        (Some(name), Some(kind), Some(team_size)) => Ok(WorkspaceInput {
            name: name.to_string(),
            kind,
            team_size,
        }),
        _ => Err(errors),
    }
}

/// Returns the trimmed display name.
pub fn validate_display_name(display_name: Option<&str>) -> Result<String, FieldErrors> {
    match display_name.map(str::trim).filter(|v| !v.is_empty()) {
        Some(name) => Ok(name.to_string()),
        None => Err(FieldErrors::from([(
            "displayName",
            "Display name is required.".to_string(),
        )])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(first: &str, last: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example."));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("ada lovelace@example.com"));
    }

    #[test]
    fn test_valid_signup_is_normalized() {
        let account = validate_signup(&signup(" Ada ", "Lovelace", "Ada@Example.COM", "analytical"))
            .unwrap();
        assert_eq!(account.first_name, "Ada");
        assert_eq!(account.email, "ada@example.com");
    }

    #[test]
    fn test_empty_signup_reports_every_field() {
        let errors = validate_signup(&SignupRequest::default()).unwrap_err();
        assert_eq!(errors["firstName"], "First name is required.");
        assert_eq!(errors["lastName"], "Last name is required.");
        assert_eq!(errors["email"], "Email is required.");
        assert_eq!(errors["password"], "Password is required.");
    }

    #[test]
    fn test_short_password_and_bad_email() {
        let errors = validate_signup(&signup("A", "B", "not-an-email", "short")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["email"], "Invalid email address.");
        assert_eq!(errors["password"], "Password must be at least 8 characters.");
    }

    #[test]
    fn test_workspace_choices() {
        let ok = validate_workspace(&WorkspaceRequest {
            workspace_name: Some("  Lab ".to_string()),
            workspace_type: Some("research".to_string()),
            team_size: Some("small".to_string()),
        })
        .unwrap();
        assert_eq!(ok.name, "Lab");
        assert_eq!(ok.kind, WorkspaceType::Research);
        assert_eq!(ok.team_size, TeamSize::Small);

        let errors = validate_workspace(&WorkspaceRequest {
            workspace_name: Some(" ".to_string()),
            workspace_type: Some("agency".to_string()),
            team_size: None,
        })
        .unwrap_err();
        assert_eq!(errors["workspaceName"], "Required.");
        assert_eq!(errors["workspaceType"], "Select a type.");
        assert_eq!(errors["teamSize"], "Select a size.");
    }

    #[test]
    fn test_display_name_required() {
        assert_eq!(validate_display_name(Some(" Ada ")).unwrap(), "Ada");
        assert!(validate_display_name(Some("   ")).is_err());
        assert!(validate_display_name(None).is_err());
    }
}
