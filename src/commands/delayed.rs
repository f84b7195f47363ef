//! Simulated Network Latency
//!
//! Wraps any client and sleeps before each request so the UI exercises its
//! loading states the way it would against a real server.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use novilist_core::{
    AppConfig, ClientResult, Comment, Credentials, Notification, Novel, NovelClient,
    RegisterRequest, Review, ReviewDraft, Session, Thread,
};

/// Latency plus a share of the jitter window; `roll` is in [0, 1)
fn delay_ms(latency_ms: u32, jitter_ms: u32, roll: f64) -> u32 {
    let jitter = (roll * f64::from(jitter_ms)) as u32;
    latency_ms.saturating_add(jitter)
}

pub struct DelayedClient<C> {
    inner: C,
    latency_ms: u32,
    jitter_ms: u32,
}

impl<C: NovelClient> DelayedClient<C> {
    pub fn new(inner: C, config: &AppConfig) -> Self {
        Self {
            inner,
            latency_ms: config.latency_ms,
            jitter_ms: config.jitter_ms,
        }
    }

    async fn delay(&self) {
        let total = delay_ms(self.latency_ms, self.jitter_ms, js_sys::Math::random());
        if total > 0 {
            TimeoutFuture::new(total).await;
        }
    }
}

#[async_trait(?Send)]
impl<C: NovelClient> NovelClient for DelayedClient<C> {
    async fn list_novels(&self) -> ClientResult<Vec<Novel>> {
        self.delay().await;
        self.inner.list_novels().await
    }

    async fn get_novel(&self, id: u32) -> ClientResult<Novel> {
        self.delay().await;
        self.inner.get_novel(id).await
    }

    async fn search_novels(&self, query: &str) -> ClientResult<Vec<Novel>> {
        self.delay().await;
        self.inner.search_novels(query).await
    }

    async fn list_reviews(&self, novel_id: u32) -> ClientResult<Vec<Review>> {
        self.delay().await;
        self.inner.list_reviews(novel_id).await
    }

    async fn submit_review(&self, draft: ReviewDraft) -> ClientResult<Review> {
        self.delay().await;
        self.inner.submit_review(draft).await
    }

    async fn vote_helpful(&self, review_id: u32) -> ClientResult<Review> {
        self.delay().await;
        self.inner.vote_helpful(review_id).await
    }

    async fn list_comments(&self, novel_id: u32) -> ClientResult<Vec<Comment>> {
        self.delay().await;
        self.inner.list_comments(novel_id).await
    }

    async fn post_comment(&self, novel_id: u32, body: &str) -> ClientResult<Comment> {
        self.delay().await;
        self.inner.post_comment(novel_id, body).await
    }

    async fn list_threads(&self) -> ClientResult<Vec<Thread>> {
        self.delay().await;
        self.inner.list_threads().await
    }

    async fn set_following(&self, novel_id: u32, follow: bool) -> ClientResult<Session> {
        self.delay().await;
        self.inner.set_following(novel_id, follow).await
    }

    async fn list_notifications(&self) -> ClientResult<Vec<Notification>> {
        self.delay().await;
        self.inner.list_notifications().await
    }

    async fn mark_notification_read(&self, id: u32) -> ClientResult<()> {
        self.delay().await;
        self.inner.mark_notification_read(id).await
    }

    async fn mark_all_read(&self) -> ClientResult<()> {
        self.delay().await;
        self.inner.mark_all_read().await
    }

    async fn current_session(&self) -> ClientResult<Option<Session>> {
        self.delay().await;
        self.inner.current_session().await
    }

    async fn login(&self, credentials: Credentials) -> ClientResult<Session> {
        self.delay().await;
        self.inner.login(credentials).await
    }

    async fn register(&self, request: RegisterRequest) -> ClientResult<Session> {
        self.delay().await;
        self.inner.register(request).await
    }

    async fn logout(&self) -> ClientResult<()> {
        self.delay().await;
        self.inner.logout().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_ms() {
        assert_eq!(delay_ms(350, 250, 0.0), 350);
        assert_eq!(delay_ms(350, 250, 0.5), 475);
        assert_eq!(delay_ms(u32::MAX, 250, 0.99), u32::MAX);
    }
}
