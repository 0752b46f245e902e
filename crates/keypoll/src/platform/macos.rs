//! macOS state probe: CoreGraphics event-source state queries.
//!
//! `CGEventSourceKeyState` and `CGEventSourceButtonState` answer one
//! key/button at a time with a boolean, scoped by an event source state ID:
//! `Private` sees only input delivered while this application is focused,
//! `CombinedSessionState` sees all input in the current login session, and
//! `HIDSystemState` sees the whole machine across sessions. This probe pins
//! `CombinedSessionState` — session-wide is the visibility a global snapshot
//! promises, without the extra privileges the HID-system scope can demand.
//!
//! A refresh polls the table-known codes in `MAPPED_CODES`, exactly like the
//! Windows probe. The host's window handles are never read on this platform.
//!
//! The `core-graphics` crate supplies the state-ID and key-code types but
//! does not wrap these two query functions, so they are declared against the
//! framework directly.
//!
//! # Safety
//!
//! This module uses `unsafe` exclusively for the two CoreGraphics FFI calls,
//! which take their arguments by value and touch no caller memory.

#![cfg(target_os = "macos")]

use std::collections::HashSet;

use core_graphics::event::CGKeyCode;
use core_graphics::event_source::CGEventSourceStateID;
use tracing::trace;

use keypoll_core::keymap::macos_cg;
use keypoll_core::{ButtonMask, Key};

use super::StateProbe;
use crate::handle::NativeHandleSource;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGEventSourceKeyState(state_id: CGEventSourceStateID, key: CGKeyCode) -> bool;
    fn CGEventSourceButtonState(state_id: CGEventSourceStateID, button: u32) -> bool;
}

/// Fixed scope for all state queries (see module docs).
const SCOPE: CGEventSourceStateID = CGEventSourceStateID::CombinedSessionState;

/// macOS per-key boolean polling probe. Both sub-caches hold decoded
/// logical state.
#[derive(Debug, Default)]
pub struct EventSourceProbe {
    keys: HashSet<Key>,
    buttons: ButtonMask,
}

impl StateProbe for EventSourceProbe {
    fn refresh_keys(&mut self, _target: &dyn NativeHandleSource) {
        self.keys.clear();
        for &code in macos_cg::MAPPED_CODES {
            // SAFETY: by-value arguments, no preconditions.
            if unsafe { CGEventSourceKeyState(SCOPE, code) } {
                self.keys.extend(macos_cg::keys_for_code(code).iter().copied());
            }
        }
        trace!(count = self.keys.len(), "key snapshot refreshed");
    }

    fn refresh_buttons(&mut self, _target: &dyn NativeHandleSource) {
        self.buttons = ButtonMask::NONE;
        for &(bit, button) in macos_cg::BUTTON_CODES {
            // SAFETY: by-value arguments, no preconditions.
            if unsafe { CGEventSourceButtonState(SCOPE, button) } {
                self.buttons |= bit;
            }
        }
        trace!(mask = self.buttons.0, "button mask snapshot refreshed");
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn pressed_keys(&self) -> Vec<Key> {
        self.keys.iter().copied().collect()
    }

    fn is_button_pressed(&self, button: ButtonMask) -> bool {
        self.buttons.intersects(button)
    }

    fn button_mask(&self) -> ButtonMask {
        self.buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_reports_nothing() {
        let probe = EventSourceProbe::default();

        assert!(!probe.is_key_pressed(Key::KeyA));
        assert!(probe.pressed_keys().is_empty());
        assert_eq!(probe.button_mask(), ButtonMask::NONE);
    }
}
