//! Star Rating Components
//!
//! Read-only star display and a clickable 1-5 star input.

use leptos::prelude::*;

/// "★★★★☆" for a 0-5 rating, rounded to the nearest star
pub fn stars(rating: f32) -> String {
    let filled = rating.clamp(0.0, 5.0).round() as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Read-only rating, or a placeholder when unrated
#[component]
pub fn StarRating(rating: Option<f32>) -> impl IntoView {
    match rating.filter(|r| r.is_finite()) {
        Some(r) => view! {
            <span class="stars" title=format!("{:.1} / 5", r)>
                {stars(r)}
                <span class="stars-value">{format!("{:.1}", r)}</span>
            </span>
        }
        .into_any(),
        None => view! { <span class="stars unrated">"Not yet rated"</span> }.into_any(),
    }
}

/// Clickable star picker; 0 means nothing chosen yet
#[component]
pub fn StarInput(value: RwSignal<u8>) -> impl IntoView {
    let (hover, set_hover) = signal(0u8);

    view! {
        <span class="star-input" on:mouseleave=move |_| set_hover.set(0)>
            {(1..=5u8).map(|n| {
                let lit = move || {
                    let shown = if hover.get() > 0 { hover.get() } else { value.get() };
                    n <= shown
                };
                view! {
                    <button
                        type="button"
                        class="star-btn"
                        class:lit=lit
                        aria-label=format!("{} stars", n)
                        on:mouseenter=move |_| set_hover.set(n)
                        on:click=move |_| value.set(n)
                    >
                        {move || if lit() { "★" } else { "☆" }}
                    </button>
                }
            }).collect_view()}
        </span>
    }
}
