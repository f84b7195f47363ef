//! Review Section Component
//!
//! Reviews for one novel with sort and minimum-rating controls, helpful
//! votes and spoiler reveal. The review form sits on top for signed-in
//! readers.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use novilist_core::{ListFilter, ListQuery, Review, SortKey};

use crate::commands;
use crate::components::{ReviewForm, StarRating};
use crate::context::AppContext;
use crate::markdown;
use crate::route::Page;
use crate::store::{store_update_novel, use_app_store, AppStateStoreFields};

fn review_query(sort: SortKey, min_rating: Option<f32>) -> ListQuery {
    let filter = match min_rating {
        Some(threshold) => ListFilter::new().with_min_rating(threshold),
        None => ListFilter::new(),
    };
    ListQuery::new(filter, Some(sort))
}

fn adjust_helpful(reviews: &mut [Review], review_id: u32, delta: i32) {
    if let Some(r) = reviews.iter_mut().find(|r| r.id == review_id) {
        r.helpful = r.helpful.saturating_add_signed(delta);
    }
}

#[component]
pub fn ReviewSection(novel_id: u32) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let (reviews, set_reviews) = signal(None::<Vec<Review>>);
    let sort = RwSignal::new(SortKey::MostHelpful);
    let min_rating = RwSignal::new(None::<f32>);
    let voted = RwSignal::new(HashSet::<u32>::new());

    spawn_local(async move {
        match commands::list_reviews(novel_id).await {
            Ok(loaded) => set_reviews.set(Some(loaded)),
            Err(e) => {
                set_reviews.set(Some(Vec::new()));
                ctx.report(&e);
            }
        }
    });

    let visible = Memo::new(move |_| {
        let query = review_query(sort.get(), min_rating.get());
        reviews.with(|r| r.as_deref().map(|list| query.apply(list)).unwrap_or_default())
    });

    let vote = move |review_id: u32| {
        if store.session().with_untracked(|s| s.is_none()) {
            ctx.info("Sign in to vote on reviews");
            ctx.navigate(Page::SignIn);
            return;
        }
        if voted.with_untracked(|v| v.contains(&review_id)) {
            return;
        }
        voted.update(|v| {
            v.insert(review_id);
        });
        set_reviews.update(|r| {
            if let Some(list) = r.as_mut() {
                adjust_helpful(list, review_id, 1);
            }
        });
        spawn_local(async move {
            match commands::vote_helpful(review_id).await {
                Ok(updated) => set_reviews.update(|r| {
                    if let Some(existing) = r.as_mut().and_then(|l| l.iter_mut().find(|x| x.id == updated.id)) {
                        *existing = updated;
                    }
                }),
                Err(e) => {
                    voted.update(|v| {
                        v.remove(&review_id);
                    });
                    set_reviews.update(|r| {
                        if let Some(list) = r.as_mut() {
                            adjust_helpful(list, review_id, -1);
                        }
                    });
                    ctx.report(&e);
                }
            }
        });
    };

    let on_submitted = Callback::new(move |review: Review| {
        set_reviews.update(|r| r.get_or_insert_with(Vec::new).insert(0, review));
        // the average rating moved
        spawn_local(async move {
            match commands::get_novel(novel_id).await {
                Ok(novel) => store_update_novel(&store, novel),
                Err(e) => tracing::warn!(target: "novilist::reviews", error = %e, "could not refresh novel"),
            }
        });
    });

    view! {
        <div class="review-section">
            <Show
                when=move || store.session().with(|s| s.is_some())
                fallback=move || view! {
                    <p class="signin-hint">
                        <button class="link-btn" on:click=move |_| ctx.navigate(Page::SignIn)>"Sign in"</button>
                        " to write a review."
                    </p>
                }
            >
                <ReviewForm novel_id=novel_id on_submitted=on_submitted />
            </Show>

            <div class="list-controls">
                <select
                    on:change=move |ev| {
                        if let Ok(key) = event_target_value(&ev).parse::<SortKey>() {
                            sort.set(key);
                        }
                    }
                    prop:value=move || sort.get().as_str()
                >
                    {SortKey::ALL.iter().map(|key| view! {
                        <option value=key.as_str()>{key.label()}</option>
                    }).collect_view()}
                </select>
                <select
                    on:change=move |ev| min_rating.set(event_target_value(&ev).parse::<f32>().ok())
                    prop:value=move || min_rating.get().map(|r| r.to_string()).unwrap_or_default()
                >
                    <option value="">"All ratings"</option>
                    {(1..=5).rev().map(|n| view! {
                        <option value=n.to_string()>{format!("{}★ and up", n)}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || {
                if reviews.with(|r| r.is_none()) {
                    return view! { <p class="loading">"Loading reviews..."</p> }.into_any();
                }
                if visible.with(|v| v.is_empty()) {
                    return view! { <p class="empty">"No reviews yet."</p> }.into_any();
                }
                view! {
                    <ul class="review-list">
                        <For
                            each=move || visible.get()
                            key=|r| r.id
                            children=move |r| {
                                let id = r.id;
                                let helpful = Signal::derive(move || {
                                    reviews.with(|list| {
                                        list.iter()
                                            .flatten()
                                            .find(|x| x.id == id)
                                            .map_or(0, |x| x.helpful)
                                    })
                                });
                                view! {
                                    <ReviewCard
                                        review=r
                                        helpful=helpful
                                        voted=Signal::derive(move || voted.with(|v| v.contains(&id)))
                                        on_vote=Callback::new(move |_| vote(id))
                                    />
                                }
                            }
                        />
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn ReviewCard(
    review: Review,
    helpful: Signal<u32>,
    voted: Signal<bool>,
    on_vote: Callback<()>,
) -> impl IntoView {
    let (revealed, set_revealed) = signal(!review.spoiler);
    let body_html = markdown::parse_markdown(&review.body);

    view! {
        <li class="review-card">
            <header class="review-head">
                <span class="review-author">{review.author.clone()}</span>
                <StarRating rating=Some(review.rating) />
                <time>{review.created_at.get(..10).unwrap_or(&review.created_at).to_string()}</time>
            </header>
            <Show
                when=move || revealed.get()
                fallback=move || view! {
                    <button class="spoiler-reveal" on:click=move |_| set_revealed.set(true)>
                        "This review contains spoilers. Show anyway"
                    </button>
                }
            >
                <div class="markdown-content" inner_html=body_html.clone()></div>
            </Show>
            <footer class="review-foot">
                <button
                    class="helpful-btn"
                    class:voted=move || voted.get()
                    disabled=move || voted.get()
                    on:click=move |_| on_vote.run(())
                >
                    {move || format!("👍 Helpful ({})", helpful.get())}
                </button>
            </footer>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: u32, rating: f32, helpful: u32) -> Review {
        Review {
            id,
            novel_id: 1,
            author: "reader".to_string(),
            rating,
            body: "Solid worldbuilding.".to_string(),
            created_at: format!("2024-05-0{}T00:00:00Z", id),
            helpful,
            spoiler: false,
        }
    }

    #[test]
    fn test_review_query_filters_then_sorts() {
        let reviews = vec![review(1, 5.0, 2), review(2, 3.0, 9), review(3, 4.0, 7)];
        let ids: Vec<u32> = review_query(SortKey::MostHelpful, Some(4.0))
            .apply(&reviews)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_adjust_helpful_saturates() {
        let mut reviews = vec![review(1, 5.0, 0)];
        adjust_helpful(&mut reviews, 1, -1);
        assert_eq!(reviews[0].helpful, 0);
        adjust_helpful(&mut reviews, 1, 1);
        assert_eq!(reviews[0].helpful, 1);
        adjust_helpful(&mut reviews, 99, 1);
        assert_eq!(reviews[0].helpful, 1);
    }
}
