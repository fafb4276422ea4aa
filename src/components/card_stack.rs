//! Card Stack Component
//!
//! Renders only the front card of the deck and maps the live drag offset
//! to rotation and opacity. Everything deeper in the deck renders nothing,
//! so no stack layout is needed.

use leptos::prelude::*;

use leptos_swipe::{make_on_mousedown, make_on_touchstart, SwipeSignals};

use crate::context::use_session;

/// Drag offset at which rotation and fade bottom out, in pixels
const MAX_DRAG_PX: f64 = 150.0;
/// Rotation at the edge of the drag domain, in degrees
const MAX_ROTATION_DEG: f64 = 18.0;

/// Rotation angle for a drag offset, linear and clamped at the domain edge
pub fn rotation_deg(offset_x: f64) -> f64 {
    offset_x.clamp(-MAX_DRAG_PX, MAX_DRAG_PX) / MAX_DRAG_PX * MAX_ROTATION_DEG
}

/// Card opacity for a drag offset: 1.0 at rest, 0.0 at the domain edge
pub fn drag_opacity(offset_x: f64) -> f64 {
    1.0 - offset_x.abs().min(MAX_DRAG_PX) / MAX_DRAG_PX
}

/// Front-of-deck card with drag handling
#[component]
pub fn CardStack(
    swipe: SwipeSignals,
    /// Signed offset of a card mid-exit, None when idle
    exiting: ReadSignal<Option<f64>>,
) -> impl IntoView {
    let ctx = use_session();

    let front_card = move || ctx.session.with(|s| s.front().cloned());

    let card_style = move || {
        let x = swipe.offset_x_read.get();
        format!(
            "transform: translateX({:.1}px) rotate({:.2}deg); opacity: {:.3};",
            x,
            rotation_deg(x),
            drag_opacity(x),
        )
    };

    let card_class = move || {
        let mut c = "cat-card".to_string();
        // Disable the snap-back transition while the pointer is down
        if swipe.active_read.get() {
            c.push_str(" dragging");
        }
        match exiting.get() {
            Some(dx) if dx > 0.0 => c.push_str(" exit-right"),
            Some(_) => c.push_str(" exit-left"),
            None => {}
        }
        c
    };

    view! {
        <div class="card-stack">
            {move || front_card().map(|card| {
                let url = card.url();
                let caption = card.tags.join(", ");
                view! {
                    <div
                        class=card_class
                        style=card_style
                        on:mousedown=make_on_mousedown(swipe)
                        on:touchstart=make_on_touchstart(swipe)
                    >
                        <img class="cat-photo" src=url draggable="false"/>
                        <p class="cat-tags">{caption}</p>
                    </div>
                }
            })}
        </div>
    }
}
