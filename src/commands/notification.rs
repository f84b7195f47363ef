//! Notification Feed Commands

use novilist_core::{ClientResult, Notification};
use super::{client, logged};

pub async fn list_notifications() -> ClientResult<Vec<Notification>> {
    let c = client()?;
    logged("list_notifications", c.list_notifications().await)
}

pub async fn mark_notification_read(id: u32) -> ClientResult<()> {
    let c = client()?;
    logged("mark_notification_read", c.mark_notification_read(id).await)
}

pub async fn mark_all_read() -> ClientResult<()> {
    let c = client()?;
    logged("mark_all_read", c.mark_all_read().await)
}
