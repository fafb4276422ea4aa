//! Swipurr Frontend App
//!
//! Top-level component: batch loading, view switching and the release
//! decision shared by drag gestures and buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;
use leptos_swipe::{bind_global_swipe, create_swipe_signals, exceeds_commit_threshold};

use crate::api;
use crate::components::{ActionBar, CardStack, SummaryView};
use crate::context::SessionContext;
use crate::session::{Session, ViewMode};

/// How long the exit animation runs before the card leaves the deck
const EXIT_ANIM_MS: u32 = 200;

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = SessionContext::new(session, (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load a batch on mount and on every reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            // Guard against duplicate concurrent loads
            let entered = session.try_update(|s| s.begin_load()).unwrap_or(false);
            if !entered {
                return;
            }
            match api::load_batch().await {
                Ok(cards) => session.update(|s| s.finish_load(cards)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[LOAD] batch load failed: {}", err).into());
                    session.update(|s| s.fail_load(err));
                }
            }
        });
    });

    // Swipe gesture state, shared by the front card and the global listeners
    let swipe = create_swipe_signals();
    // Signed offset of a card mid-exit-animation, None when idle
    let exiting = RwSignal::new(None::<f64>);

    // Release decision for the front card: commit beyond the threshold,
    // snap back otherwise. Buttons feed synthetic offsets through the
    // same path.
    let resolve_release = Callback::new(move |offset_x: f64| {
        if exiting.get_untracked().is_some() {
            return;
        }
        let front_id = session.with_untracked(|s| s.front().map(|card| card.id.clone()));
        let Some(id) = front_id else {
            swipe.offset_x_write.set(0.0);
            return;
        };
        if exceeds_commit_threshold(offset_x) {
            exiting.set(Some(offset_x));
            spawn_local(async move {
                TimeoutFuture::new(EXIT_ANIM_MS).await;
                session.update(|s| s.remove_card(&id, offset_x));
                exiting.set(None);
                swipe.offset_x_write.set(0.0);
            });
        } else {
            swipe.offset_x_write.set(0.0);
        }
    });

    bind_global_swipe(swipe, move |offset_x| resolve_release.run(offset_x));

    let is_swiping = move || session.with(|s| s.mode == ViewMode::Swiping);
    let is_loading = move || session.with(|s| s.loading);
    let load_error = move || session.with(|s| s.load_error.clone());
    let retry = move |_| ctx.reload();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Swipurr"</h1>
            </header>

            <Show when=is_swiping>
                <Show when=is_loading>
                    <p class="loading-hint">"Fetching cats..."</p>
                </Show>
                {move || load_error().map(|err| view! {
                    <div class="load-error">
                        <p>{format!("Could not load cats: {}", err)}</p>
                        <button class="retry-btn" on:click=retry>"Retry"</button>
                    </div>
                })}
                <CardStack swipe=swipe exiting=exiting.read_only()/>
                <ActionBar on_decide=resolve_release/>
            </Show>

            <Show when=move || !is_swiping()>
                <SummaryView/>
            </Show>
        </div>
    }
}
