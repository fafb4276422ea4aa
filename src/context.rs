//! Session Context
//!
//! Session state shared via the Leptos Context API. Components mutate the
//! session only through the methods here.

use leptos::prelude::*;

use crate::session::Session;

/// App-wide session handle provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Whole-session state; mutate only through the methods below
    pub session: RwSignal<Session>,
    /// Bump to re-run the batch load effect - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl SessionContext {
    pub fn new(
        session: RwSignal<Session>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            session,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Re-run the batch load effect
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Classify and drop a card by id; the sign of `offset_x` decides
    pub fn remove_card(&self, id: &str, offset_x: f64) {
        self.session.update(|s| s.remove_card(id, offset_x));
    }

    /// Fresh session: clear everything and fetch a new batch
    pub fn restart(&self) {
        self.session.update(|s| s.restart());
        self.reload();
    }
}

/// Get the session context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
