use crate::shared::validation::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

/// Body of the logout call; the refresh token is revoked server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

impl Validate for LoginResponse {
    fn validate(&self) -> Result<(), String> {
        if self.access_token.is_empty() {
            return Err("access_token is empty".into());
        }
        Ok(())
    }
}

impl Validate for UserInfo {
    fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("user id is empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user: UserInfo = serde_json::from_str(
            r#"{"id":"u1","username":"jsmith","full_name":"  ","email":null}"#,
        )
        .unwrap();
        assert!(!user.is_admin);
        assert_eq!(user.display_name(), "jsmith");

        user.full_name = Some("Jo Smith".into());
        assert_eq!(user.display_name(), "Jo Smith");
    }

    #[test]
    fn test_login_response_requires_token() {
        let response = LoginResponse {
            access_token: String::new(),
            refresh_token: "r".into(),
            user: UserInfo {
                id: "u1".into(),
                username: "jsmith".into(),
                full_name: None,
                email: None,
                is_admin: false,
            },
        };
        assert!(response.validate().is_err());
    }
}
