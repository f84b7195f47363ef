//! Backend Command Wrappers
//!
//! Free functions over the installed `NovelClient`, organized by domain.
//! Components call these and never see the client directly.

mod delayed;
mod novel;
mod notification;
mod account;

use std::cell::RefCell;
use std::rc::Rc;

use novilist_core::{ClientError, ClientResult, NovelClient};

pub use delayed::DelayedClient;

// Re-export all public items
pub use novel::*;
pub use notification::*;
pub use account::*;

thread_local! {
    static CLIENT: RefCell<Option<Rc<dyn NovelClient>>> = RefCell::new(None);
}

/// Install the backend used by every command
pub fn install(client: Rc<dyn NovelClient>) {
    CLIENT.with(|slot| *slot.borrow_mut() = Some(client));
}

fn client() -> ClientResult<Rc<dyn NovelClient>> {
    CLIENT
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| ClientError::Transport("no backend client installed".to_string()))
}

/// Log failures at the call boundary; callers still decide what to show
fn logged<T>(op: &'static str, result: ClientResult<T>) -> ClientResult<T> {
    match &result {
        Ok(_) => tracing::debug!(target: "novilist::commands", op, "ok"),
        Err(e) if e.is_transport() => tracing::error!(target: "novilist::commands", op, error = %e, "request failed"),
        Err(e) => tracing::warn!(target: "novilist::commands", op, error = %e, "request rejected"),
    }
    result
}
