//! Review Form Component
//!
//! Star rating, markdown body and spoiler flag. Drafts are checked locally
//! before they are sent; rejections land next to the offending field.

use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::{ClientError, Review, ReviewDraft};

use crate::commands;
use crate::components::StarInput;
use crate::context::AppContext;

#[component]
pub fn ReviewForm(novel_id: u32, #[prop(into)] on_submitted: Callback<Review>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let rating = RwSignal::new(0u8);
    let (body, set_body) = signal(String::new());
    let (spoiler, set_spoiler) = signal(false);
    let (error, set_error) = signal(None::<ClientError>);
    let (submitting, set_submitting) = signal(false);

    let field_error = move |name: &'static str| {
        move || {
            error.with(|e| {
                e.as_ref()
                    .filter(|e| e.field() == Some(name))
                    .map(|e| e.user_message())
            })
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = ReviewDraft {
            novel_id,
            rating: rating.get_untracked(),
            body: body.get_untracked(),
            spoiler: spoiler.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            set_error.set(Some(e));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match commands::submit_review(draft).await {
                Ok(review) => {
                    rating.set(0);
                    set_body.set(String::new());
                    set_spoiler.set(false);
                    ctx.info("Review posted");
                    on_submitted.run(review);
                }
                Err(e) if e.field().is_some() => set_error.set(Some(e)),
                Err(e) => ctx.report(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            <h3>"Write a review"</h3>
            <div class="form-row">
                <StarInput value=rating />
                <span class="field-error">{field_error("rating")}</span>
            </div>
            <div class="form-row">
                <textarea
                    placeholder="What did you think? Markdown works, wrap spoilers in ||double bars||."
                    prop:value=move || body.get()
                    on:input=move |ev| set_body.set(event_target_value(&ev))
                ></textarea>
                <span class="field-error">{field_error("body")}</span>
            </div>
            // rejections that name no field on this form
            <span class="field-error">
                {move || error.with(|e| {
                    e.as_ref()
                        .filter(|e| !matches!(e.field(), Some("rating") | Some("body")))
                        .map(|e| e.user_message())
                })}
            </span>
            <div class="form-row">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || spoiler.get()
                        on:change=move |ev| set_spoiler.set(event_target_checked(&ev))
                    />
                    "Contains spoilers"
                </label>
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Posting..." } else { "Post review" }}
                </button>
            </div>
        </form>
    }
}
