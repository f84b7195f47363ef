//! Mock Backend
//!
//! In-memory `NovelClient` seeded with a small catalog. State lives for as
//! long as the client does; nothing is persisted.

mod data;

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use crate::client::{ClientError, ClientResult, Credentials, NovelClient, RegisterRequest, ReviewDraft};
use crate::model::{Comment, Notification, Novel, Review, Session, Thread};
use data::Account;

pub struct MockClient {
    novels: RefCell<Vec<Novel>>,
    reviews: RefCell<Vec<Review>>,
    comments: RefCell<Vec<Comment>>,
    threads: Vec<Thread>,
    notifications: RefCell<Vec<Notification>>,
    accounts: RefCell<Vec<Account>>,
    session: RefCell<Option<Session>>,
    next_id: Cell<u32>,
    offline: Cell<bool>,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            novels: RefCell::new(data::novels()),
            reviews: RefCell::new(data::reviews()),
            comments: RefCell::new(data::comments()),
            threads: data::threads(),
            notifications: RefCell::new(data::notifications()),
            accounts: RefCell::new(data::accounts()),
            session: RefCell::new(None),
            next_id: Cell::new(1000),
            offline: Cell::new(false),
        }
    }

    /// Make every request fail with a transport error
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    fn check_online(&self) -> ClientResult<()> {
        if self.offline.get() {
            Err(ClientError::Transport("network unreachable".to_string()))
        } else {
            Ok(())
        }
    }

    fn fresh_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn require_session(&self) -> ClientResult<Session> {
        self.session
            .borrow()
            .clone()
            .ok_or_else(|| ClientError::validation("session", "Sign in to continue"))
    }

    fn require_novel(&self, id: u32) -> ClientResult<()> {
        if self.novels.borrow().iter().any(|n| n.id == id) {
            Ok(())
        } else {
            Err(ClientError::NotFound(format!("Novel {}", id)))
        }
    }

    fn start_session(&self, account: &Account) -> Session {
        let session = Session {
            username: account.username.clone(),
            display_name: account.display_name.clone(),
            joined_at: account.joined_at.clone(),
            following: account.following.clone(),
        };
        *self.session.borrow_mut() = Some(session.clone());
        session
    }

    /// Recompute a novel's average from its reviews
    fn refresh_rating(&self, novel_id: u32) {
        let ratings: Vec<f32> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.novel_id == novel_id)
            .map(|r| r.rating)
            .collect();
        if ratings.is_empty() {
            return;
        }
        let average = ratings.iter().sum::<f32>() / ratings.len() as f32;
        if let Some(novel) = self.novels.borrow_mut().iter_mut().find(|n| n.id == novel_id) {
            novel.rating = Some((average * 10.0).round() / 10.0);
        }
    }
}

#[async_trait(?Send)]
impl NovelClient for MockClient {
    async fn list_novels(&self) -> ClientResult<Vec<Novel>> {
        self.check_online()?;
        Ok(self.novels.borrow().clone())
    }

    async fn get_novel(&self, id: u32) -> ClientResult<Novel> {
        self.check_online()?;
        self.novels
            .borrow()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Novel {}", id)))
    }

    async fn search_novels(&self, query: &str) -> ClientResult<Vec<Novel>> {
        self.check_online()?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(ClientError::validation("query", "Type something to search for"));
        }
        let hits = self
            .novels
            .borrow()
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&query)
                    || n.author.to_lowercase().contains(&query)
                    || n.genres.iter().any(|g| g.to_lowercase().contains(&query))
            })
            .cloned()
            .collect();
        Ok(hits)
    }

    async fn list_reviews(&self, novel_id: u32) -> ClientResult<Vec<Review>> {
        self.check_online()?;
        self.require_novel(novel_id)?;
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.novel_id == novel_id)
            .cloned()
            .collect())
    }

    async fn submit_review(&self, draft: ReviewDraft) -> ClientResult<Review> {
        self.check_online()?;
        let session = self.require_session()?;
        self.require_novel(draft.novel_id)?;
        draft.validate()?;

        let already = self
            .reviews
            .borrow()
            .iter()
            .any(|r| r.novel_id == draft.novel_id && r.author == session.username);
        if already {
            return Err(ClientError::validation("novel", "You have already reviewed this novel"));
        }

        let review = Review {
            id: self.fresh_id(),
            novel_id: draft.novel_id,
            author: session.username,
            rating: f32::from(draft.rating),
            body: draft.body.trim().to_string(),
            created_at: Self::now(),
            helpful: 0,
            spoiler: draft.spoiler,
        };
        self.reviews.borrow_mut().push(review.clone());
        self.refresh_rating(draft.novel_id);
        tracing::info!(target: "novilist::mock", review_id = review.id, novel_id = review.novel_id, "review stored");
        Ok(review)
    }

    async fn vote_helpful(&self, review_id: u32) -> ClientResult<Review> {
        self.check_online()?;
        let mut reviews = self.reviews.borrow_mut();
        let review = reviews
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or_else(|| ClientError::NotFound(format!("Review {}", review_id)))?;
        review.helpful += 1;
        Ok(review.clone())
    }

    async fn list_comments(&self, novel_id: u32) -> ClientResult<Vec<Comment>> {
        self.check_online()?;
        self.require_novel(novel_id)?;
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.novel_id == novel_id)
            .cloned()
            .collect())
    }

    async fn post_comment(&self, novel_id: u32, body: &str) -> ClientResult<Comment> {
        self.check_online()?;
        let session = self.require_session()?;
        self.require_novel(novel_id)?;
        let body = body.trim();
        if body.is_empty() {
            return Err(ClientError::validation("body", "Comments cannot be empty"));
        }
        let comment = Comment {
            id: self.fresh_id(),
            novel_id,
            author: session.username,
            body: body.to_string(),
            created_at: Self::now(),
            likes: 0,
        };
        self.comments.borrow_mut().push(comment.clone());
        Ok(comment)
    }

    async fn list_threads(&self) -> ClientResult<Vec<Thread>> {
        self.check_online()?;
        Ok(self.threads.clone())
    }

    async fn set_following(&self, novel_id: u32, follow: bool) -> ClientResult<Session> {
        self.check_online()?;
        let mut session = self.require_session()?;
        self.require_novel(novel_id)?;

        let was_following = session.is_following(novel_id);
        if was_following == follow {
            return Ok(session);
        }

        if follow {
            session.following.push(novel_id);
        } else {
            session.following.retain(|id| *id != novel_id);
        }

        if let Some(novel) = self.novels.borrow_mut().iter_mut().find(|n| n.id == novel_id) {
            novel.followers = if follow {
                novel.followers + 1
            } else {
                novel.followers.saturating_sub(1)
            };
        }
        if let Some(account) = self
            .accounts
            .borrow_mut()
            .iter_mut()
            .find(|a| a.username == session.username)
        {
            account.following = session.following.clone();
        }
        *self.session.borrow_mut() = Some(session.clone());
        Ok(session)
    }

    async fn list_notifications(&self) -> ClientResult<Vec<Notification>> {
        self.check_online()?;
        Ok(self.notifications.borrow().clone())
    }

    async fn mark_notification_read(&self, id: u32) -> ClientResult<()> {
        self.check_online()?;
        let mut notifications = self.notifications.borrow_mut();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Notification {}", id)))?;
        notification.read = true;
        Ok(())
    }

    async fn mark_all_read(&self) -> ClientResult<()> {
        self.check_online()?;
        for notification in self.notifications.borrow_mut().iter_mut() {
            notification.read = true;
        }
        Ok(())
    }

    async fn current_session(&self) -> ClientResult<Option<Session>> {
        self.check_online()?;
        Ok(self.session.borrow().clone())
    }

    async fn login(&self, credentials: Credentials) -> ClientResult<Session> {
        self.check_online()?;
        let username = credentials.username.trim();
        let accounts = self.accounts.borrow();
        let account = accounts
            .iter()
            .find(|a| a.username.eq_ignore_ascii_case(username))
            .ok_or_else(|| ClientError::validation("username", "No account with that username"))?;
        if account.password != credentials.password {
            tracing::debug!(target: "novilist::mock", username, "password mismatch");
            return Err(ClientError::validation("password", "Incorrect password"));
        }
        Ok(self.start_session(account))
    }

    async fn register(&self, request: RegisterRequest) -> ClientResult<Session> {
        self.check_online()?;
        request.validate()?;
        let username = request.username.trim().to_string();
        let taken = self
            .accounts
            .borrow()
            .iter()
            .any(|a| a.username.eq_ignore_ascii_case(&username));
        if taken {
            return Err(ClientError::validation("username", "Username is already taken"));
        }

        let display_name = match request.display_name.trim() {
            "" => username.clone(),
            name => name.to_string(),
        };
        let account = Account {
            username,
            display_name,
            password: request.password,
            joined_at: Self::now(),
            following: Vec::new(),
        };
        let session = self.start_session(&account);
        self.accounts.borrow_mut().push(account);
        Ok(session)
    }

    async fn logout(&self) -> ClientResult<()> {
        self.check_online()?;
        *self.session.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn signed_in() -> MockClient {
        let client = MockClient::new();
        client
            .login(Credentials { username: "reader".to_string(), password: "password123".to_string() })
            .await
            .expect("seed account should log in");
        client
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let client = MockClient::new();
        let err = client
            .login(Credentials { username: "reader".to_string(), password: "nope".to_string() })
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::validation("password", "Incorrect password"));
        assert_eq!(client.current_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_register_taken_username() {
        let client = MockClient::new();
        let err = client
            .register(RegisterRequest {
                username: "Reader".to_string(),
                display_name: String::new(),
                password: "longenough".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::validation("username", "Username is already taken"));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let client = MockClient::new();
        let session = client
            .register(RegisterRequest {
                username: "new_reader".to_string(),
                display_name: "  ".to_string(),
                password: "longenough".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(session.display_name, "new_reader");
        client.logout().await.unwrap();
        let again = client
            .login(Credentials { username: "new_reader".to_string(), password: "longenough".to_string() })
            .await
            .unwrap();
        assert_eq!(again.username, "new_reader");
    }

    #[tokio::test]
    async fn test_offline_is_transport_error() {
        let client = MockClient::new();
        client.set_offline(true);
        assert!(client.list_novels().await.unwrap_err().is_transport());
        client.set_offline(false);
        assert_eq!(client.list_novels().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_review_requires_session() {
        let client = MockClient::new();
        let draft = ReviewDraft { novel_id: 6, rating: 4, body: "Numbers all the way down".to_string(), spoiler: false };
        assert!(matches!(
            client.submit_review(draft).await,
            Err(ClientError::Validation { field, .. }) if field == "session"
        ));
    }

    #[tokio::test]
    async fn test_submit_review_updates_rating() {
        let client = signed_in().await;
        let draft = ReviewDraft { novel_id: 6, rating: 4, body: "Numbers all the way down".to_string(), spoiler: false };
        let review = client.submit_review(draft.clone()).await.unwrap();
        assert_eq!(review.author, "reader");
        assert_eq!(review.rating, 4.0);
        assert_eq!(client.get_novel(6).await.unwrap().rating, Some(4.0));
        assert_eq!(client.list_reviews(6).await.unwrap().len(), 1);

        // one review per reader per novel
        assert!(client.submit_review(draft).await.is_err());
    }

    #[tokio::test]
    async fn test_vote_helpful() {
        let client = MockClient::new();
        let before = client.list_reviews(1).await.unwrap()[0].helpful;
        let after = client.vote_helpful(1).await.unwrap();
        assert_eq!(after.helpful, before + 1);
        assert!(matches!(client.vote_helpful(9999).await, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_follow_and_unfollow() {
        let client = signed_in().await;
        let followers = client.get_novel(2).await.unwrap().followers;

        let session = client.set_following(2, true).await.unwrap();
        assert!(session.is_following(2));
        assert_eq!(client.get_novel(2).await.unwrap().followers, followers + 1);

        // idempotent
        client.set_following(2, true).await.unwrap();
        assert_eq!(client.get_novel(2).await.unwrap().followers, followers + 1);

        let session = client.set_following(2, false).await.unwrap();
        assert!(!session.is_following(2));
        assert_eq!(client.get_novel(2).await.unwrap().followers, followers);
    }

    #[tokio::test]
    async fn test_search_novels() {
        let client = MockClient::new();
        let hits = client.search_novels("XIANXIA").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
        assert!(client.search_novels("  ").await.is_err());
    }

    #[tokio::test]
    async fn test_notifications_mark_read() {
        let client = MockClient::new();
        client.mark_notification_read(1).await.unwrap();
        let feed = client.list_notifications().await.unwrap();
        assert!(feed.iter().find(|n| n.id == 1).unwrap().read);

        client.mark_all_read().await.unwrap();
        assert!(client.list_notifications().await.unwrap().iter().all(|n| n.read));
    }

    #[tokio::test]
    async fn test_post_comment() {
        let client = signed_in().await;
        let comment = client.post_comment(4, "  Loved the tea ceremony case  ").await.unwrap();
        assert_eq!(comment.body, "Loved the tea ceremony case");
        assert!(client.post_comment(4, "   ").await.is_err());
        assert!(matches!(client.list_comments(404).await, Err(ClientError::NotFound(_))));
    }
}
