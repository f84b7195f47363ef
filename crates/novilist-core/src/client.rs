//! Backend Client Interface
//!
//! Every request the UI makes goes through `NovelClient`. The in-memory
//! `MockClient` implements it today; a real HTTP client can replace it
//! without touching callers.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{Comment, Notification, Novel, Review, Session, Thread};

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientError {
    /// The request was understood but rejected; `field` names the culprit
    Validation { field: String, message: String },
    NotFound(String),
    /// The request never got an answer
    Transport(String),
}

impl ClientError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        ClientError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Form field a validation error belongs to
    pub fn field(&self) -> Option<&str> {
        match self {
            ClientError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// Text suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation { message, .. } => message.clone(),
            ClientError::NotFound(what) => format!("{} could not be found", what),
            ClientError::Transport(_) => "Network error, please try again".to_string(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation { field, message } => write!(f, "Invalid {}: {}", field, message),
            ClientError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ClientError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

// ========================
// Request Types
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub display_name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub novel_id: u32,
    pub rating: u8,
    pub body: String,
    #[serde(default)]
    pub spoiler: bool,
}

/// Non-whitespace characters a review body needs
pub const MIN_REVIEW_CHARS: usize = 10;
pub const MIN_PASSWORD_CHARS: usize = 8;

impl ReviewDraft {
    pub fn validate(&self) -> ClientResult<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(ClientError::validation("rating", "Pick a rating from 1 to 5 stars"));
        }
        if self.body.chars().filter(|c| !c.is_whitespace()).count() < MIN_REVIEW_CHARS {
            return Err(ClientError::validation(
                "body",
                format!("Reviews need at least {} characters", MIN_REVIEW_CHARS),
            ));
        }
        Ok(())
    }
}

impl RegisterRequest {
    pub fn validate(&self) -> ClientResult<()> {
        let name = self.username.trim();
        let len = name.chars().count();
        if !(3..=20).contains(&len) {
            return Err(ClientError::validation("username", "Usernames are 3 to 20 characters"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ClientError::validation(
                "username",
                "Usernames may only contain letters, digits and underscores",
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ClientError::validation(
                "password",
                format!("Passwords need at least {} characters", MIN_PASSWORD_CHARS),
            ));
        }
        Ok(())
    }
}

/// Backend operations used by the UI
#[async_trait(?Send)]
pub trait NovelClient {
    // Catalog
    async fn list_novels(&self) -> ClientResult<Vec<Novel>>;

    async fn get_novel(&self, id: u32) -> ClientResult<Novel>;

    async fn search_novels(&self, query: &str) -> ClientResult<Vec<Novel>>;

    // Reviews
    async fn list_reviews(&self, novel_id: u32) -> ClientResult<Vec<Review>>;

    async fn submit_review(&self, draft: ReviewDraft) -> ClientResult<Review>;

    async fn vote_helpful(&self, review_id: u32) -> ClientResult<Review>;

    // Discussion
    async fn list_comments(&self, novel_id: u32) -> ClientResult<Vec<Comment>>;

    async fn post_comment(&self, novel_id: u32, body: &str) -> ClientResult<Comment>;

    async fn list_threads(&self) -> ClientResult<Vec<Thread>>;

    // Library
    async fn set_following(&self, novel_id: u32, follow: bool) -> ClientResult<Session>;

    // Notifications
    async fn list_notifications(&self) -> ClientResult<Vec<Notification>>;

    async fn mark_notification_read(&self, id: u32) -> ClientResult<()>;

    async fn mark_all_read(&self) -> ClientResult<()>;

    // Account
    async fn current_session(&self) -> ClientResult<Option<Session>>;

    async fn login(&self, credentials: Credentials) -> ClientResult<Session>;

    async fn register(&self, request: RegisterRequest) -> ClientResult<Session>;

    async fn logout(&self) -> ClientResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: u8, body: &str) -> ReviewDraft {
        ReviewDraft { novel_id: 1, rating, body: body.to_string(), spoiler: false }
    }

    #[test]
    fn test_review_draft_validation() {
        assert!(draft(5, "Loved every arc of it").validate().is_ok());
        assert!(matches!(
            draft(0, "Loved every arc of it").validate(),
            Err(ClientError::Validation { field, .. }) if field == "rating"
        ));
        assert!(matches!(
            draft(4, "   meh    ").validate(),
            Err(ClientError::Validation { field, .. }) if field == "body"
        ));
        assert!(matches!(
            draft(3, "a         b").validate(),
            Err(ClientError::Validation { field, .. }) if field == "body"
        ));
        assert!(draft(3, "ten chars!").validate().is_ok());
    }

    #[test]
    fn test_register_validation() {
        let ok = RegisterRequest {
            username: "night_reader".to_string(),
            display_name: "Night Reader".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_name = RegisterRequest { username: "no spaces".to_string(), ..ok.clone() };
        assert!(bad_name.validate().is_err());

        let short_pw = RegisterRequest { password: "short".to_string(), ..ok };
        assert!(matches!(
            short_pw.validate(),
            Err(ClientError::Validation { field, .. }) if field == "password"
        ));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ClientError::validation("password", "Incorrect password").user_message(),
            "Incorrect password"
        );
        assert!(ClientError::Transport("timeout".to_string()).is_transport());
        assert_eq!(
            ClientError::NotFound("Novel 7".to_string()).to_string(),
            "Not found: Novel 7"
        );
    }
}
