//! Catalog, Review and Discussion Commands

use novilist_core::{ClientResult, Comment, Novel, Review, ReviewDraft, Thread};
use super::{client, logged};

// ========================
// Catalog
// ========================

pub async fn list_novels() -> ClientResult<Vec<Novel>> {
    let c = client()?;
    logged("list_novels", c.list_novels().await)
}

pub async fn get_novel(id: u32) -> ClientResult<Novel> {
    let c = client()?;
    logged("get_novel", c.get_novel(id).await)
}

pub async fn search_novels(query: &str) -> ClientResult<Vec<Novel>> {
    let c = client()?;
    logged("search_novels", c.search_novels(query).await)
}

// ========================
// Reviews
// ========================

pub async fn list_reviews(novel_id: u32) -> ClientResult<Vec<Review>> {
    let c = client()?;
    logged("list_reviews", c.list_reviews(novel_id).await)
}

pub async fn submit_review(draft: ReviewDraft) -> ClientResult<Review> {
    let c = client()?;
    logged("submit_review", c.submit_review(draft).await)
}

pub async fn vote_helpful(review_id: u32) -> ClientResult<Review> {
    let c = client()?;
    logged("vote_helpful", c.vote_helpful(review_id).await)
}

// ========================
// Discussion
// ========================

pub async fn list_comments(novel_id: u32) -> ClientResult<Vec<Comment>> {
    let c = client()?;
    logged("list_comments", c.list_comments(novel_id).await)
}

pub async fn post_comment(novel_id: u32, body: &str) -> ClientResult<Comment> {
    let c = client()?;
    logged("post_comment", c.post_comment(novel_id, body).await)
}

pub async fn list_threads() -> ClientResult<Vec<Thread>> {
    let c = client()?;
    logged("list_threads", c.list_threads().await)
}
