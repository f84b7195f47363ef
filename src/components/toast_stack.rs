//! Toast Stack Component
//!
//! Transient messages in the bottom corner; each removes itself after the
//! configured duration or when clicked.

use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Info => "toast",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
