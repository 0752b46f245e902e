//! Mock probe for unit testing.
//!
//! The real probes query live OS state, which a test cannot control: whether
//! `GetAsyncKeyState` reports the A key down depends on what the operator is
//! physically holding while the test runs. `MockProbe` replaces the native
//! call with scripted state.
//!
//! The scripted fields (`held_keys`, `held_buttons`) describe what the
//! "hardware" holds *right now*; a refresh copies them into the snapshot the
//! queries answer from, exactly mirroring the capture-then-query lifecycle
//! of the real probes. Until the first refresh the snapshot is empty, so
//! tests can also assert the empty-cache behavior.
//!
//! ```
//! use keypoll::platform::mock::MockProbe;
//! use keypoll::{InputStateCache, Key, RawHandles};
//!
//! let mut probe = MockProbe::default();
//! probe.held_keys = vec![Key::Escape];
//!
//! let mut cache = InputStateCache::with_probe(probe);
//! assert!(!cache.is_key_pressed(Key::Escape)); // not refreshed yet
//!
//! cache.refresh_keys(&RawHandles::default());
//! assert!(cache.is_key_pressed(Key::Escape));
//! ```

use keypoll_core::{ButtonMask, Key};

use super::StateProbe;
use crate::handle::NativeHandleSource;

/// A probe whose "hardware" state is scripted by the test.
#[derive(Debug, Default)]
pub struct MockProbe {
    /// Keys the scripted hardware currently holds.
    pub held_keys: Vec<Key>,
    /// Buttons the scripted hardware currently holds.
    pub held_buttons: ButtonMask,
    /// Key snapshot captured by the last `refresh_keys`.
    pub snapshot_keys: Vec<Key>,
    /// Button snapshot captured by the last `refresh_buttons`.
    pub snapshot_buttons: ButtonMask,
    /// Number of `refresh_keys` calls observed.
    pub key_refreshes: usize,
    /// Number of `refresh_buttons` calls observed.
    pub button_refreshes: usize,
}

impl StateProbe for MockProbe {
    fn refresh_keys(&mut self, _target: &dyn NativeHandleSource) {
        self.snapshot_keys = self.held_keys.clone();
        self.key_refreshes += 1;
    }

    fn refresh_buttons(&mut self, _target: &dyn NativeHandleSource) {
        self.snapshot_buttons = self.held_buttons;
        self.button_refreshes += 1;
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.snapshot_keys.contains(&key)
    }

    fn pressed_keys(&self) -> Vec<Key> {
        let mut keys = Vec::new();
        for &key in &self.snapshot_keys {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    fn is_button_pressed(&self, button: ButtonMask) -> bool {
        self.snapshot_buttons.intersects(button)
    }

    fn button_mask(&self) -> ButtonMask {
        self.snapshot_buttons
    }
}
