//! API models for request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User entity as stored in the database
///
/// Never serialized to clients directly; responses go through
/// [`UserResponse`], which drops the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for user creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

/// Response for user operations
///
/// The type has no password field, so the secret cannot leak through
/// serialization.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// Query parameters for listing users
///
/// Unsigned so that negative values are rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListUsersParams {
    pub fn skip(&self) -> i64 {
        i64::from(self.skip.unwrap_or(0))
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.limit.unwrap_or(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_drops_password_hash() {
        let user = User {
            id: 1,
            email: "a@x.com".to_string(),
            name: Some("A".to_string()),
            password_hash: "argon2-hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["name"], "A");
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn list_params_defaults() {
        let params: ListUsersParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip(), 0);
        assert_eq!(params.limit(), 100);
    }

    #[test]
    fn list_params_reject_negative() {
        let result = serde_json::from_str::<ListUsersParams>(r#"{"skip": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_request_requires_email_and_password() {
        let result = serde_json::from_str::<CreateUserRequest>(r#"{"name": "A"}"#);
        assert!(result.is_err());

        let ok: CreateUserRequest =
            serde_json::from_str(r#"{"email": "a@x.com", "password": "p"}"#).unwrap();
        assert_eq!(ok.email, "a@x.com");
        assert!(ok.name.is_none());
    }
}
