//! User accounts and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user within their organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Owner,
    Admin,
    Member,
    Viewer,
}

/// A user account as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_role() -> UserRole {
    UserRole::Member
}

/// Access/refresh token pair issued on login or refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub tokens: AuthTokens,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_with_missing_optional_fields() {
        let json = r#"{"id":"u-1","email":"user@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.role, UserRole::Member);
        assert!(user.created_at.is_none());
    }

    #[test]
    fn login_response_round_trip() {
        let json = r#"{
            "user": {"id":"u-1","email":"user@example.com","name":"Test","role":"admin"},
            "tokens": {"access_token":"at","refresh_token":"rt","token_type":"bearer","expires_in":3600}
        }"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.role, UserRole::Admin);
        assert_eq!(resp.tokens.access_token, "at");
    }
}
