//! Session user model and the demo credentials.

use serde::{Deserialize, Serialize};

/// The signed-in user record persisted for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// The only username the demo accepts.
pub const DEMO_USERNAME: &str = "testuser";

/// The only password the demo accepts.
pub const DEMO_PASSWORD: &str = "123456";

/// Profile stored for the demo user on a successful login.
pub fn demo_user() -> User {
    User {
        id: "12345".to_string(),
        username: "AbidShahriar".to_string(),
        name: "Abid Shahriar".to_string(),
        avatar: Some(
            "https://i.ibb.co.com/JRVphK0J/Whats-App-Image-2024-01-13-at-17-24-46-48b3caa5-modified.png"
                .to_string(),
        ),
    }
}
