//! Summary Component
//!
//! End-of-session view: counts for both partitions, a gallery of the
//! accepted cats and a restart action.

use leptos::prelude::*;

use crate::context::use_session;
use crate::models::CatImage;

#[component]
pub fn SummaryView() -> impl IntoView {
    let ctx = use_session();

    let accepted_count = move || ctx.session.with(|s| s.accepted.len());
    let rejected_count = move || ctx.session.with(|s| s.rejected.len());
    let accepted_cards = move || ctx.session.with(|s| s.accepted.clone());

    view! {
        <div class="summary">
            <h2>"All cats judged"</h2>
            <p class="summary-counts">
                {move || format!("{} accepted, {} rejected", accepted_count(), rejected_count())}
            </p>
            <div class="accepted-gallery">
                <For
                    each=accepted_cards
                    key=|card: &CatImage| card.id.clone()
                    children=move |card: CatImage| {
                        let url = card.url();
                        view! { <img class="gallery-photo" src=url/> }
                    }
                />
            </div>
            <button class="restart-btn" on:click=move |_| ctx.restart()>
                "Swipe again"
            </button>
        </div>
    }
}
