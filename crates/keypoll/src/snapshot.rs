//! The snapshot cache and its query layer.
//!
//! [`InputStateCache`] owns the platform probe and with it the two
//! sub-caches — key state and button-mask state — each fully overwritten by
//! its refresh operation and read-only in between. Queries always reflect
//! the most recent refresh of the corresponding sub-cache; nothing refreshes
//! implicitly, so the host decides how stale a snapshot may get.
//!
//! # Threading
//!
//! The cache is not internally synchronized. Refreshes take `&mut self` and
//! queries `&self`, so within one thread the borrow checker already enforces
//! the refresh/query serialization the contract requires; to share a cache
//! across threads, wrap it in a lock. The translation tables consulted by
//! queries are immutable statics and need no protection.

use tracing::trace;

use keypoll_core::{ButtonMask, Key};

use crate::handle::NativeHandleSource;
use crate::platform::{PlatformProbe, StateProbe};

/// A polling snapshot cache of global keyboard and mouse-button state.
///
/// One instance per consumer; instances share nothing. See the crate docs
/// for the refresh-then-query cycle.
#[derive(Debug, Default)]
pub struct InputStateCache<P: StateProbe = PlatformProbe> {
    probe: P,
}

impl InputStateCache {
    /// Creates a cache backed by this build's platform probe, with both
    /// sub-caches empty: until the first refresh every query reports
    /// nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: StateProbe> InputStateCache<P> {
    /// Creates a cache backed by an explicit probe. This is how tests
    /// substitute [`MockProbe`][crate::platform::mock::MockProbe] or the
    /// inert stub.
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Takes a fresh snapshot of keyboard state from `target`'s display,
    /// wholesale-replacing the key sub-cache.
    ///
    /// Never fails: if the native query cannot be made, the sub-cache is
    /// left zeroed/unchanged and a `tracing` debug event is the only trace.
    pub fn refresh_keys(&mut self, target: &dyn NativeHandleSource) {
        self.probe.refresh_keys(target);
    }

    /// Takes a fresh snapshot of mouse-button state from `target`'s
    /// display, wholesale-replacing the button sub-cache. Same non-failure
    /// contract as [`refresh_keys`][Self::refresh_keys].
    pub fn refresh_buttons(&mut self, target: &dyn NativeHandleSource) {
        self.probe.refresh_buttons(target);
    }

    /// Refreshes keys, then buttons. The two captures are sequential native
    /// calls with no atomicity between them — input arriving in the gap can
    /// appear in one sub-cache and not the other.
    pub fn refresh_all(&mut self, target: &dyn NativeHandleSource) {
        self.refresh_keys(target);
        self.refresh_buttons(target);
        trace!("input snapshot refreshed");
    }

    /// Returns `true` if `key` was held when the key sub-cache was last
    /// refreshed. Keys reachable through several physical codes are ORed:
    /// any one pressed code suffices.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.probe.is_key_pressed(key)
    }

    /// Returns every key held in the last key snapshot, without duplicates
    /// and in no guaranteed order.
    pub fn pressed_keys(&self) -> Vec<Key> {
        self.probe.pressed_keys()
    }

    /// Returns `true` if `button`'s native bit was set when the button
    /// sub-cache was last refreshed.
    ///
    /// `button` must be a single-bit mask ([`ButtonMask::LEFT`],
    /// [`ButtonMask::RIGHT`], …). Passing a composite mask is a caller
    /// error: the result is unspecified and platform-dependent, and is
    /// deliberately not corrected here.
    pub fn is_mouse_button_pressed(&self, button: ButtonMask) -> bool {
        self.probe.is_button_pressed(button)
    }

    /// Returns the union of every logical button whose native bit was set
    /// in the last button snapshot.
    pub fn mouse_button_mask(&self) -> ButtonMask {
        self.probe.button_mask()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::RawHandles;
    use crate::platform::mock::MockProbe;

    fn cache_holding(keys: &[Key], buttons: ButtonMask) -> InputStateCache<MockProbe> {
        let probe = MockProbe {
            held_keys: keys.to_vec(),
            held_buttons: buttons,
            ..MockProbe::default()
        };
        InputStateCache::with_probe(probe)
    }

    #[test]
    fn test_queries_report_nothing_before_first_refresh() {
        // Arrange: hardware holds a key, but no refresh has run.
        let cache = cache_holding(&[Key::KeyA], ButtonMask::LEFT);

        // Assert: the empty caches answer, not the live state.
        assert!(!cache.is_key_pressed(Key::KeyA));
        assert!(cache.pressed_keys().is_empty());
        assert!(!cache.is_mouse_button_pressed(ButtonMask::LEFT));
        assert_eq!(cache.mouse_button_mask(), ButtonMask::NONE);
    }

    #[test]
    fn test_refresh_keys_populates_only_the_key_cache() {
        let mut cache = cache_holding(&[Key::KeyA], ButtonMask::LEFT);

        cache.refresh_keys(&RawHandles::default());

        assert!(cache.is_key_pressed(Key::KeyA));
        // The button sub-cache is independent and still empty.
        assert!(!cache.is_mouse_button_pressed(ButtonMask::LEFT));
    }

    #[test]
    fn test_refresh_all_runs_both_refreshes() {
        let mut cache = cache_holding(&[Key::Space], ButtonMask::MIDDLE);

        cache.refresh_all(&RawHandles::default());

        assert!(cache.is_key_pressed(Key::Space));
        assert!(cache.is_mouse_button_pressed(ButtonMask::MIDDLE));
        assert_eq!(cache.probe.key_refreshes, 1);
        assert_eq!(cache.probe.button_refreshes, 1);
    }

    #[test]
    fn test_repeated_refresh_with_unchanged_input_is_idempotent() {
        let mut cache = cache_holding(&[Key::Shift, Key::KeyW], ButtonMask::NONE);

        cache.refresh_keys(&RawHandles::default());
        let first = cache.pressed_keys();
        cache.refresh_keys(&RawHandles::default());
        let second = cache.pressed_keys();

        assert_eq!(first, second);
    }

    #[test]
    fn test_refresh_overwrites_rather_than_accumulates() {
        let mut cache = cache_holding(&[Key::KeyA], ButtonMask::NONE);
        cache.refresh_keys(&RawHandles::default());

        // Hardware state changes between refreshes.
        cache.probe.held_keys = vec![Key::KeyB];
        cache.refresh_keys(&RawHandles::default());

        assert!(!cache.is_key_pressed(Key::KeyA));
        assert!(cache.is_key_pressed(Key::KeyB));
        assert_eq!(cache.pressed_keys(), vec![Key::KeyB]);
    }

    #[test]
    fn test_button_mask_isolation() {
        let mut cache = cache_holding(&[], ButtonMask::RIGHT);

        cache.refresh_buttons(&RawHandles::default());

        assert!(cache.is_mouse_button_pressed(ButtonMask::RIGHT));
        assert!(!cache.is_mouse_button_pressed(ButtonMask::LEFT));
        assert_eq!(cache.mouse_button_mask(), ButtonMask::RIGHT);
    }

    #[test]
    fn test_platform_cache_constructs_and_starts_empty() {
        // Smoke test for the build's real probe: construction and
        // empty-cache queries must work on every target.
        let cache = InputStateCache::new();

        assert!(cache.pressed_keys().is_empty());
        assert_eq!(cache.mouse_button_mask(), ButtonMask::NONE);
    }
}
