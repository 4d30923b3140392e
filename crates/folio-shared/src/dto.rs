//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Returned by a successful sign-in. The token is also set as a cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
    pub size: usize,
    pub mime_type: String,
}

/// Acknowledgement for a public contact submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

/// `GET /api/blog?published=true`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListQuery {
    pub published: Option<bool>,
}

/// `GET /api/portfolio?featured=true`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioListQuery {
    pub featured: Option<bool>,
}

/// `GET /api/contacts?read=false&replied=true`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListQuery {
    pub read: Option<bool>,
    pub replied: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_password_reads_camel_case() {
        let req: ChangePasswordRequest = serde_json::from_str(
            r#"{"currentPassword":"old-secret","newPassword":"new-secret"}"#,
        )
        .unwrap();
        assert_eq!(req.current_password, "old-secret");
        assert_eq!(req.new_password, "new-secret");
    }

    #[test]
    fn missing_passwords_default_to_empty() {
        let req: ChangePasswordRequest = serde_json::from_str("{}").unwrap();
        assert!(req.current_password.is_empty());
    }

    #[test]
    fn upload_response_is_camel_case() {
        let value = serde_json::to_value(UploadResponse {
            url: "/uploads/a.png".into(),
            filename: "a.png".into(),
            size: 10,
            mime_type: "image/png".into(),
        })
        .unwrap();
        assert_eq!(value["mimeType"], "image/png");
    }
}
