//! Leptos Swipe Utilities
//!
//! One-dimensional swipe gesture for Leptos using mouse and touch events.
//! Tracks a horizontal offset during a drag and decides on release whether
//! the distance is enough to commit a swipe decision.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Swipe state signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Whether a drag is currently active - read
    pub active_read: ReadSignal<bool>,
    pub active_write: WriteSignal<bool>,
    /// Pointer x at drag start
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    /// Current horizontal offset from drag start in pixels
    pub offset_x_read: ReadSignal<f64>,
    pub offset_x_write: WriteSignal<f64>,
}

/// Minimum drag distance in pixels to commit a swipe decision.
/// Sign is direction, magnitude is distance; the check is strictly greater.
pub const SWIPE_COMMIT_PX: f64 = 50.0;

pub fn create_swipe_signals() -> SwipeSignals {
    let (active_read, active_write) = signal(false);
    let (start_x_read, start_x_write) = signal(0i32);
    let (offset_x_read, offset_x_write) = signal(0.0f64);
    SwipeSignals {
        active_read,
        active_write,
        start_x_read,
        start_x_write,
        offset_x_read,
        offset_x_write,
    }
}

/// Whether a release offset is far enough to commit a decision
pub fn exceeds_commit_threshold(offset_x: f64) -> bool {
    offset_x.abs() > SWIPE_COMMIT_PX
}

/// Create mousedown handler for the swipeable element
pub fn make_on_mousedown(sw: SwipeSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            sw.start_x_write.set(ev.client_x());
            sw.offset_x_write.set(0.0);
            sw.active_write.set(true);
        }
    }
}

/// Create touchstart handler for the swipeable element
pub fn make_on_touchstart(sw: SwipeSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            sw.start_x_write.set(touch.client_x());
            sw.offset_x_write.set(0.0);
            sw.active_write.set(true);
        }
    }
}

fn update_offset(sw: &SwipeSignals, client_x: i32) {
    if sw.active_read.get_untracked() {
        let start_x = sw.start_x_read.get_untracked();
        sw.offset_x_write.set((client_x - start_x) as f64);
    }
}

fn finish_drag<F: Fn(f64)>(sw: &SwipeSignals, on_release: &F) {
    if sw.active_read.get_untracked() {
        sw.active_write.set(false);
        // Final offset is the release decision input; the caller resets it
        on_release(sw.offset_x_read.get_untracked());
    }
}

/// Bind global mouse/touch handlers for offset tracking and release detection.
/// `on_release` receives the final signed offset in pixels.
pub fn bind_global_swipe<F>(sw: SwipeSignals, on_release: F)
where
    F: Fn(f64) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        update_offset(&sw, ev.client_x());
    });
    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            update_offset(&sw, touch.client_x());
        }
    });
    let on_mouseup = {
        let on_release = on_release.clone();
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            finish_drag(&sw, &on_release);
        })
    };
    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        finish_drag(&sw, &on_release);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("touchmove", on_touchmove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("touchend", on_touchend.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_touchmove.forget();
    on_mouseup.forget();
    on_touchend.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!exceeds_commit_threshold(50.0));
        assert!(!exceeds_commit_threshold(-50.0));
        assert!(exceeds_commit_threshold(50.0001));
        assert!(exceeds_commit_threshold(-50.0001));
    }

    #[test]
    fn test_small_drag_does_not_commit() {
        assert!(!exceeds_commit_threshold(0.0));
        assert!(!exceeds_commit_threshold(30.0));
        assert!(!exceeds_commit_threshold(-49.9));
    }

    #[test]
    fn test_large_drag_commits_in_both_directions() {
        assert!(exceeds_commit_threshold(80.0));
        assert!(exceeds_commit_threshold(-60.0));
        assert!(exceeds_commit_threshold(100.0));
    }
}
