//! Session State Machine
//!
//! Owns the working set of cards, the accepted/rejected partitions and the
//! view mode. All mutations go through the methods here, so the whole flow
//! is unit-testable without a DOM.

use crate::models::CatImage;

/// Which presenter is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Swiping,
    Summary,
}

/// Full per-session state
#[derive(Clone, Debug)]
pub struct Session {
    /// Cards not yet classified; the last element is the front card
    pub deck: Vec<CatImage>,
    /// Cards the user accepted, in decision order
    pub accepted: Vec<CatImage>,
    /// Cards the user rejected, in decision order
    pub rejected: Vec<CatImage>,
    pub mode: ViewMode,
    /// A batch load is in flight
    pub loading: bool,
    /// Last batch-load failure, shown as a retryable error
    pub load_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            deck: Vec::new(),
            accepted: Vec::new(),
            rejected: Vec::new(),
            mode: ViewMode::Swiping,
            loading: false,
            load_error: None,
        }
    }

    /// The only card eligible for interaction
    pub fn front(&self) -> Option<&CatImage> {
        self.deck.last()
    }

    /// Guarded entry to a batch load. Returns false (and changes nothing)
    /// while a load is in flight or the deck is still populated.
    pub fn begin_load(&mut self) -> bool {
        if self.loading || !self.deck.is_empty() {
            return false;
        }
        self.loading = true;
        self.load_error = None;
        true
    }

    pub fn finish_load(&mut self, cards: Vec<CatImage>) {
        self.loading = false;
        self.mode = if cards.is_empty() {
            ViewMode::Summary
        } else {
            ViewMode::Swiping
        };
        self.deck = cards;
    }

    pub fn fail_load(&mut self, error: String) {
        self.loading = false;
        self.load_error = Some(error);
    }

    /// Classify and drop a card. Sign of `offset_x` is the decision:
    /// positive accepts, zero or negative rejects. Unknown ids are a no-op,
    /// which also makes repeated removal of the same id idempotent.
    pub fn remove_card(&mut self, id: &str, offset_x: f64) {
        let Some(pos) = self.deck.iter().position(|card| card.id == id) else {
            return;
        };
        let card = self.deck.remove(pos);
        if offset_x > 0.0 {
            self.accepted.push(card);
        } else {
            self.rejected.push(card);
        }
        if self.deck.is_empty() {
            self.mode = ViewMode::Summary;
        }
    }

    /// Back to a pristine pre-load state; the caller re-triggers the load
    pub fn restart(&mut self) {
        *self = Session::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatImage;

    fn make_card(id: &str) -> CatImage {
        CatImage {
            id: id.to_string(),
            tags: Vec::new(),
        }
    }

    fn loaded_session(ids: &[&str]) -> Session {
        let mut session = Session::new();
        assert!(session.begin_load());
        session.finish_load(ids.iter().map(|id| make_card(id)).collect());
        session
    }

    #[test]
    fn test_front_is_last_deck_element() {
        let session = loaded_session(&["a", "b", "c"]);
        assert_eq!(session.front().unwrap().id, "c");
        assert_eq!(session.mode, ViewMode::Swiping);
    }

    #[test]
    fn test_positive_offset_accepts_negative_rejects() {
        let mut session = loaded_session(&["a", "b"]);

        session.remove_card("a", 80.0);
        session.remove_card("b", -80.0);

        assert_eq!(session.accepted.len(), 1);
        assert_eq!(session.accepted[0].id, "a");
        assert_eq!(session.rejected.len(), 1);
        assert_eq!(session.rejected[0].id, "b");
    }

    #[test]
    fn test_zero_offset_rejects() {
        let mut session = loaded_session(&["a"]);
        session.remove_card("a", 0.0);
        assert!(session.accepted.is_empty());
        assert_eq!(session.rejected[0].id, "a");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut session = loaded_session(&["a", "b"]);
        session.remove_card("nope", 80.0);
        assert_eq!(session.deck.len(), 2);
        assert!(session.accepted.is_empty());
        assert!(session.rejected.is_empty());
    }

    #[test]
    fn test_repeated_removal_is_idempotent() {
        let mut session = loaded_session(&["a", "b"]);

        session.remove_card("a", 80.0);
        session.remove_card("a", 80.0);
        session.remove_card("a", -80.0);

        assert_eq!(session.deck.len(), 1);
        assert_eq!(session.accepted.len(), 1);
        assert!(session.rejected.is_empty());
    }

    #[test]
    fn test_draining_deck_reaches_summary() {
        let mut session = loaded_session(&["a", "b", "c"]);
        let batch_size = session.deck.len();

        session.remove_card("c", 80.0);
        assert_eq!(session.mode, ViewMode::Swiping);
        session.remove_card("b", -80.0);
        session.remove_card("a", 80.0);

        assert!(session.deck.is_empty());
        assert_eq!(session.mode, ViewMode::Summary);
        assert_eq!(session.accepted.len() + session.rejected.len(), batch_size);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // Reject A by drag, accept B by button, reject C by drag
        let mut session = loaded_session(&["A", "B", "C"]);

        session.remove_card("A", -80.0);
        session.remove_card("B", 100.0);
        session.remove_card("C", -60.0);

        assert_eq!(session.mode, ViewMode::Summary);
        assert_eq!(session.accepted.len(), 1);
        assert_eq!(session.accepted[0].id, "B");
        let rejected_ids: Vec<&str> = session.rejected.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(rejected_ids, vec!["A", "C"]);
    }

    #[test]
    fn test_begin_load_guard_blocks_reentry() {
        let mut session = Session::new();

        assert!(session.begin_load());
        // Still in flight
        assert!(!session.begin_load());

        session.finish_load(vec![make_card("a")]);
        // Populated
        assert!(!session.begin_load());
    }

    #[test]
    fn test_failed_load_is_retryable() {
        let mut session = Session::new();

        assert!(session.begin_load());
        session.fail_load("network down".to_string());

        assert!(!session.loading);
        assert_eq!(session.load_error.as_deref(), Some("network down"));

        // Retry clears the error
        assert!(session.begin_load());
        assert!(session.load_error.is_none());
    }

    #[test]
    fn test_empty_batch_goes_straight_to_summary() {
        let mut session = Session::new();
        assert!(session.begin_load());
        session.finish_load(Vec::new());
        assert_eq!(session.mode, ViewMode::Summary);
    }

    #[test]
    fn test_restart_is_a_fresh_session() {
        let mut session = loaded_session(&["a", "b"]);
        session.remove_card("b", 80.0);
        session.remove_card("a", -80.0);
        assert_eq!(session.mode, ViewMode::Summary);

        session.restart();

        assert!(session.deck.is_empty());
        assert!(session.accepted.is_empty());
        assert!(session.rejected.is_empty());
        assert_eq!(session.mode, ViewMode::Swiping);
        assert!(session.load_error.is_none());
        // A fresh load is allowed again
        assert!(session.begin_load());
    }
}
