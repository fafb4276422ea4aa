//! Action Bar Component
//!
//! Accept/reject buttons. Each feeds a synthetic offset through the same
//! release path as a drag, safely beyond the commit threshold, acting on
//! the current front card.

use leptos::prelude::*;

use leptos_swipe::SWIPE_COMMIT_PX;

use crate::context::use_session;

/// Synthetic offset magnitude supplied by the buttons
const BUTTON_SWIPE_PX: f64 = 2.0 * SWIPE_COMMIT_PX;

#[component]
pub fn ActionBar(on_decide: Callback<f64>) -> impl IntoView {
    let ctx = use_session();
    // No front card means nothing to decide on
    let disabled = move || ctx.session.with(|s| s.front().is_none());

    view! {
        <div class="action-bar">
            <button
                class="reject-btn"
                disabled=disabled
                on:click=move |_| on_decide.run(-BUTTON_SWIPE_PX)
            >
                "✗"
            </button>
            <button
                class="accept-btn"
                disabled=disabled
                on:click=move |_| on_decide.run(BUTTON_SWIPE_PX)
            >
                "♥"
            </button>
        </div>
    }
}
