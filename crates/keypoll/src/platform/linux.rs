//! Linux X11 state probe: `XQueryKeymap` and `XQueryPointer`.
//!
//! `XQueryKeymap` returns the whole keyboard at once as a 32-byte bitfield —
//! bit *n* set means the physical key with X keycode *n* is down. The probe
//! stores that buffer verbatim and decodes it at query time through
//! `keypoll_core::bitfield` and the X11 table, so a refresh is a single
//! round-trip regardless of how many keys are later queried.
//!
//! The pointer-button mask comes from `XQueryPointer`, which is really a
//! compound pointer-position query: it insists on writing the overlapped
//! root/child windows and two coordinate pairs as well. Only its
//! `mask_return` output is part of this probe's contract; the rest goes to
//! stack storage and is dropped.
//!
//! X11 is the one platform where the host's handles matter: windows may live
//! on different display server connections and see different input, so the
//! probe queries whichever `Display*` the [`NativeHandleSource`] resolves.
//! An unresolvable handle zeroes the affected snapshot instead of failing.
//!
//! # Safety
//!
//! This module uses `unsafe` exclusively for Xlib FFI calls. All `unsafe`
//! blocks carry `// SAFETY:` comments.

#![cfg(target_os = "linux")]

use std::os::raw::{c_char, c_int, c_uint, c_ulong};

use tracing::{debug, trace};
use x11::xlib;

use keypoll_core::keymap::linux_x11;
use keypoll_core::{bitfield, ButtonMask, Key};

use super::StateProbe;
use crate::handle::{HandleKind, NativeHandleSource};

/// X11 bulk-bitfield state probe.
///
/// Owns the keymap buffer and reuses it across refreshes; no allocation
/// happens after construction.
#[derive(Debug)]
pub struct XKeymapProbe {
    /// Raw keymap snapshot from the last `refresh_keys`.
    keymap: [u8; bitfield::KEYMAP_LEN],
    /// Raw X button mask from the last `refresh_buttons`.
    buttons: c_uint,
}

impl Default for XKeymapProbe {
    fn default() -> Self {
        Self {
            keymap: [0; bitfield::KEYMAP_LEN],
            buttons: 0,
        }
    }
}

impl XKeymapProbe {
    fn display_of(target: &dyn NativeHandleSource) -> *mut xlib::Display {
        target.native_handle(HandleKind::Display) as *mut xlib::Display
    }
}

impl StateProbe for XKeymapProbe {
    fn refresh_keys(&mut self, target: &dyn NativeHandleSource) {
        let display = Self::display_of(target);
        if display.is_null() {
            self.keymap = [0; bitfield::KEYMAP_LEN];
            debug!("X display handle unavailable, key snapshot zeroed");
            return;
        }

        // SAFETY: `display` is a live Display* lent by the host for the
        // duration of this call, and XQueryKeymap writes exactly 32 bytes
        // into the buffer.
        unsafe {
            xlib::XQueryKeymap(display, self.keymap.as_mut_ptr() as *mut c_char);
        }
        trace!("keymap snapshot refreshed");
    }

    fn refresh_buttons(&mut self, target: &dyn NativeHandleSource) {
        let display = Self::display_of(target);
        let window = target.native_handle(HandleKind::Window) as c_ulong;
        if display.is_null() || window == 0 {
            self.buttons = 0;
            debug!("X display or window handle unavailable, button snapshot zeroed");
            return;
        }

        // Storage for the outputs XQueryPointer requires but this probe
        // discards (overlapped windows and both coordinate pairs).
        let mut root: c_ulong = 0;
        let mut child: c_ulong = 0;
        let mut root_x: c_int = 0;
        let mut root_y: c_int = 0;
        let mut win_x: c_int = 0;
        let mut win_y: c_int = 0;
        let mut mask: c_uint = 0;

        // SAFETY: every out-pointer references live stack storage above and
        // `display`/`window` are host-lent handles valid for this call.
        unsafe {
            xlib::XQueryPointer(
                display,
                window,
                &mut root,
                &mut child,
                &mut root_x,
                &mut root_y,
                &mut win_x,
                &mut win_y,
                &mut mask,
            );
        }
        self.buttons = mask;
        trace!(mask, "button mask snapshot refreshed");
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        // OR over every keycode the key can occupy; one pressed physical
        // key is sufficient.
        linux_x11::keycodes_for_key(key)
            .iter()
            .any(|&code| bitfield::is_code_active(&self.keymap, code))
    }

    fn pressed_keys(&self) -> Vec<Key> {
        // Decoded on demand from the raw buffer; with per-frame call rates
        // the 32-byte walk is cheaper than keeping a decode cache coherent.
        let mut keys = Vec::new();
        for code in bitfield::active_codes(&self.keymap) {
            for &key in linux_x11::keys_for_keycode(code) {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }

    fn is_button_pressed(&self, button: ButtonMask) -> bool {
        linux_x11::BUTTON_MASKS
            .iter()
            .find(|(bit, _)| *bit == button)
            .is_some_and(|(_, xmask)| self.buttons & xmask != 0)
    }

    fn button_mask(&self) -> ButtonMask {
        let mut mask = ButtonMask::NONE;
        for &(bit, xmask) in linux_x11::BUTTON_MASKS {
            if self.buttons & xmask != 0 {
                mask |= bit;
            }
        }
        mask
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// These drive the decode paths on hand-built snapshots; no X server is
// involved. Refresh against a live display is exercised by the example.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::RawHandles;

    fn probe_with_codes(codes: &[u8]) -> XKeymapProbe {
        let mut probe = XKeymapProbe::default();
        for &code in codes {
            probe.keymap[usize::from(code >> 3)] |= 1 << (code & 7);
        }
        probe
    }

    #[test]
    fn test_empty_snapshot_reports_nothing() {
        let probe = XKeymapProbe::default();

        assert!(!probe.is_key_pressed(Key::KeyA));
        assert!(probe.pressed_keys().is_empty());
        assert!(!probe.is_button_pressed(ButtonMask::LEFT));
        assert_eq!(probe.button_mask(), ButtonMask::NONE);
    }

    #[test]
    fn test_single_code_decodes_to_its_key() {
        // Keycode 0x18 is bit 0 of byte 3 — global bit index 24 — and maps
        // to Q.
        let probe = probe_with_codes(&[0x18]);

        assert!(probe.is_key_pressed(Key::KeyQ));
        assert_eq!(probe.pressed_keys(), vec![Key::KeyQ]);
    }

    #[test]
    fn test_either_shift_code_reports_shift() {
        // Right Shift only (0x3E); left Shift (0x32) stays up.
        let probe = probe_with_codes(&[0x3E]);

        assert!(probe.is_key_pressed(Key::Shift));

        let probe = probe_with_codes(&[0x32]);

        assert!(probe.is_key_pressed(Key::Shift));
    }

    #[test]
    fn test_pressed_keys_deduplicates_multi_code_keys() {
        // Both Shift keycodes held must yield Shift once.
        let probe = probe_with_codes(&[0x32, 0x3E]);

        let keys = probe.pressed_keys();

        assert_eq!(keys.iter().filter(|&&k| k == Key::Shift).count(), 1);
    }

    #[test]
    fn test_unmapped_codes_are_skipped() {
        // 0x00 and 0xFF have no table entry.
        let probe = probe_with_codes(&[0x00, 0xFF, 0x26]);

        assert_eq!(probe.pressed_keys(), vec![Key::KeyA]);
    }

    #[test]
    fn test_button_mask_isolation() {
        let mut probe = XKeymapProbe::default();
        probe.buttons = 0x0400; // Button3Mask = right button

        assert!(probe.is_button_pressed(ButtonMask::RIGHT));
        assert!(!probe.is_button_pressed(ButtonMask::LEFT));
        assert_eq!(probe.button_mask(), ButtonMask::RIGHT);
    }

    #[test]
    fn test_button_mask_unions_all_active_bits() {
        let mut probe = XKeymapProbe::default();
        probe.buttons = 0x0100 | 0x0200; // Button1Mask | Button2Mask

        assert_eq!(probe.button_mask(), ButtonMask::LEFT | ButtonMask::MIDDLE);
    }

    #[test]
    fn test_null_display_zeroes_the_snapshot() {
        let mut probe = probe_with_codes(&[0x26]);
        probe.buttons = 0x0100;

        // RawHandles::default() resolves nothing; both refreshes must
        // degrade to empty rather than fail.
        probe.refresh_keys(&RawHandles::default());
        probe.refresh_buttons(&RawHandles::default());

        assert!(probe.pressed_keys().is_empty());
        assert_eq!(probe.button_mask(), ButtonMask::NONE);
    }
}
