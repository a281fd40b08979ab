//! One-shot scroll reveal bookkeeping.

use std::collections::HashSet;

pub const REVEAL_ATTR: &str = "data-reveal";
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";
pub const VISIBLE_CLASS: &str = "is-visible";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark visible and stop observing.
    Reveal,
    Ignore,
}

/// Hands out element keys and tracks the ones still waiting to be revealed.
///
/// A key leaves the set when its element is revealed or released, so the
/// set only ever holds elements that are observed right now.
#[derive(Debug, Default)]
pub struct RevealTracker {
    next_key: u32,
    pending: HashSet<u32>,
}

impl RevealTracker {
    pub fn register(&mut self) -> u32 {
        let key = self.next_key;
        self.next_key = self.next_key.wrapping_add(1);
        self.pending.insert(key);
        key
    }

    pub fn on_intersection(&mut self, key: u32, intersecting: bool) -> RevealAction {
        if intersecting && self.pending.remove(&key) {
            RevealAction::Reveal
        } else {
            RevealAction::Ignore
        }
    }

    /// The element left the page before it was revealed.
    pub fn release(&mut self, key: u32) {
        self.pending.remove(&key);
    }

    pub fn is_pending(&self, key: u32) -> bool {
        self.pending.contains(&key)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_at_most_once() {
        let mut tracker = RevealTracker::default();
        let key = tracker.register();
        assert_eq!(tracker.on_intersection(key, false), RevealAction::Ignore);
        assert_eq!(tracker.on_intersection(key, true), RevealAction::Reveal);
        assert_eq!(tracker.on_intersection(key, false), RevealAction::Ignore);
        assert_eq!(tracker.on_intersection(key, true), RevealAction::Ignore);
        assert!(!tracker.is_pending(key));
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn rerenders_do_not_accumulate_keys() {
        let mut tracker = RevealTracker::default();
        for _ in 0..50 {
            let shown = tracker.register();
            let replaced = tracker.register();
            assert_eq!(tracker.on_intersection(shown, true), RevealAction::Reveal);
            tracker.release(replaced);
            assert_eq!(tracker.on_intersection(replaced, true), RevealAction::Ignore);
        }
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn keys_are_independent() {
        let mut tracker = RevealTracker::default();
        let a = tracker.register();
        let b = tracker.register();
        assert_ne!(a, b);
        assert_eq!(tracker.on_intersection(a, true), RevealAction::Reveal);
        assert_eq!(tracker.on_intersection(b, true), RevealAction::Reveal);
    }
}
