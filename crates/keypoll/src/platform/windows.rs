//! Windows state probe: per-key `GetAsyncKeyState` polling.
//!
//! Windows has no bulk query; each virtual key is asked about individually.
//! `GetAsyncKeyState` returns a status word whose most significant bit flags
//! "currently down" (the least significant bit — pressed since the last call
//! from *any* process — is deliberately ignored; this is a snapshot, not an
//! edge detector). A refresh polls exactly the table-known codes in
//! `MAPPED_VKS`, so its cost is one native call per table entry rather than
//! per possible code.
//!
//! The async key state is system-global, so the host's window handles are
//! never read on this platform.
//!
//! # Safety
//!
//! This module uses `unsafe` exclusively for the `GetAsyncKeyState` FFI
//! call, which has no memory-safety preconditions.

#![cfg(target_os = "windows")]

use std::collections::HashSet;

use tracing::trace;
use windows::Win32::UI::Input::KeyboardAndMouse::GetAsyncKeyState;

use keypoll_core::keymap::windows_vk;
use keypoll_core::{ButtonMask, Key};

use super::StateProbe;
use crate::handle::NativeHandleSource;

/// Windows per-key polling probe. Both sub-caches hold decoded logical
/// state; decoding happens once per refresh, not per query.
#[derive(Debug, Default)]
pub struct AsyncKeyStateProbe {
    keys: HashSet<Key>,
    buttons: ButtonMask,
}

/// Returns `true` if the key for `vk` is down right now.
fn vk_is_down(vk: u8) -> bool {
    // SAFETY: GetAsyncKeyState accepts any virtual-key value and touches no
    // caller memory.
    let status = unsafe { GetAsyncKeyState(i32::from(vk)) };
    (status as u16) & 0x8000 != 0
}

impl StateProbe for AsyncKeyStateProbe {
    fn refresh_keys(&mut self, _target: &dyn NativeHandleSource) {
        self.keys.clear();
        for &vk in windows_vk::MAPPED_VKS {
            if vk_is_down(vk) {
                self.keys.extend(windows_vk::keys_for_vk(vk).iter().copied());
            }
        }
        trace!(count = self.keys.len(), "key snapshot refreshed");
    }

    fn refresh_buttons(&mut self, _target: &dyn NativeHandleSource) {
        self.buttons = ButtonMask::NONE;
        for &(bit, vk) in windows_vk::BUTTON_VKS {
            if vk_is_down(vk) {
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

    // Live GetAsyncKeyState results depend on what the operator is holding,
    // so only the decoded-cache behavior is asserted here.

    #[test]
    fn test_empty_snapshot_reports_nothing() {
        let probe = AsyncKeyStateProbe::default();

        assert!(!probe.is_key_pressed(Key::KeyA));
        assert!(probe.pressed_keys().is_empty());
        assert_eq!(probe.button_mask(), ButtonMask::NONE);
    }

    #[test]
    fn test_cached_buttons_answer_single_bit_queries() {
        let probe = AsyncKeyStateProbe {
            keys: HashSet::new(),
            buttons: ButtonMask::RIGHT,
        };

        assert!(probe.is_button_pressed(ButtonMask::RIGHT));
        assert!(!probe.is_button_pressed(ButtonMask::LEFT));
    }
}
