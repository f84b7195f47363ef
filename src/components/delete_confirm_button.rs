//! Delete Confirm Button Component
//!
//! Two-step button for destructive actions such as clearing history.

use leptos::prelude::*;

/// Shows `label`; a click swaps it for "Sure?" with ✓/✗. Only ✓ runs
/// `on_confirm`, and either choice returns to the initial state.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    let choose = move |confirmed: bool| {
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            armed.set(false);
            if confirmed {
                on_confirm.run(());
            }
        }
    };

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    "Sure?"
                    <button class="confirm-btn" title="Confirm" on:click=choose(true)>"✓"</button>
                    <button class="cancel-btn" title="Cancel" on:click=choose(false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            let label = label.clone();
            view! {
                <button
                    class="link-btn danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    {label}
                </button>
            }
            .into_any()
        }
    }
}
