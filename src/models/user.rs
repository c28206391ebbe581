//! User data models

use serde::{Deserialize, Serialize};

/// User as returned by `/api/v1/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// Body of `POST /api/v1/users`
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub profile: NewUserProfile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub login: String,
    pub team: String,
}

impl CreateUserRequest {
    /// The login is always the email
    pub fn new(email: &str, first_name: &str, last_name: &str, team: &str) -> Self {
        Self {
            profile: NewUserProfile {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                login: email.to_string(),
                team: team.to_string(),
            },
        }
    }
}
