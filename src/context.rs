//! Application Context
//!
//! Shared UI state provided via Leptos Context API: current page, which
//! header panel is open, and the toast queue.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::ClientError;
use rolling_logger::LogBuffer;

use crate::route::{self, Page};

/// Header panels; at most one is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenPanel {
    #[default]
    None,
    Notifications,
    Profile,
}

impl OpenPanel {
    /// Opening a panel closes the other; toggling the open one closes it
    pub fn toggle(self, panel: OpenPanel) -> OpenPanel {
        if self == panel {
            OpenPanel::None
        } else {
            panel
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Open header panel - read
    pub open_panel: ReadSignal<OpenPanel>,
    /// Open header panel - write
    set_open_panel: WriteSignal<OpenPanel>,
    /// Visible toasts, oldest first
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
    toast_ms: u32,
    /// Recent log records for the diagnostics view
    pub logs: StoredValue<LogBuffer>,
}

impl AppContext {
    pub fn new(initial_page: Page, toast_ms: u32, logs: LogBuffer) -> Self {
        let (page, set_page) = signal(initial_page);
        let (open_panel, set_open_panel) = signal(OpenPanel::None);
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            page,
            set_page,
            open_panel,
            set_open_panel,
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(1),
            toast_ms,
            logs: StoredValue::new(logs),
        }
    }

    /// Go to a page and record it in the address bar
    pub fn navigate(&self, page: Page) {
        tracing::debug!(target: "novilist::route", hash = %page.to_hash(), "navigate");
        route::push_page(&page);
        self.set_page.set(page);
        self.close_panels();
    }

    /// Adopt a page that the address bar already shows (hashchange)
    pub fn sync_from_location(&self) {
        let page = route::current_page();
        if self.page.get_untracked() != page {
            self.set_page.set(page);
        }
    }

    pub fn toggle_panel(&self, panel: OpenPanel) {
        self.set_open_panel.update(|open| *open = open.toggle(panel));
    }

    pub fn close_panels(&self) {
        self.set_open_panel.set(OpenPanel::None);
    }

    /// Show a transient message
    pub fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        let toast = Toast {
            id,
            kind,
            message: message.into(),
        };
        self.set_toasts.update(|toasts| toasts.push(toast));

        let set_toasts = self.set_toasts;
        let duration = self.toast_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.toast(ToastKind::Info, message);
    }

    /// Surface a failed request; prior state stays as it was
    pub fn report(&self, error: &ClientError) {
        self.toast(ToastKind::Error, error.user_message());
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}
