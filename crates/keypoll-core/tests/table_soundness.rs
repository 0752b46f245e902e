//! Integration tests for the translation tables.
//!
//! These sweep the entire logical key space against every platform table and
//! hold each entry to the soundness invariant: every code the reverse
//! direction claims for a key must forward-map back to a set containing that
//! key, and every reverse code must be one the polling probes actually
//! query.

use keypoll_core::keymap::{linux_x11, macos_cg, windows_vk};
use keypoll_core::{ButtonMask, Key};
use strum::IntoEnumIterator;

// ── Soundness: reverse(k) ⊆ forward⁻¹(k) ─────────────────────────────────────

#[test]
fn test_windows_reverse_codes_forward_map_back() {
    for key in Key::iter() {
        for &vk in windows_vk::vks_for_key(key) {
            assert!(
                windows_vk::keys_for_vk(vk).contains(&key),
                "VK {vk:#04X} listed for {key:?} but does not forward-map to it"
            );
        }
    }
}

#[test]
fn test_linux_reverse_codes_forward_map_back() {
    for key in Key::iter() {
        for &code in linux_x11::keycodes_for_key(key) {
            assert!(
                linux_x11::keys_for_keycode(code).contains(&key),
                "keycode {code:#04X} listed for {key:?} but does not forward-map to it"
            );
        }
    }
}

#[test]
fn test_macos_reverse_codes_forward_map_back() {
    for key in Key::iter() {
        for &code in macos_cg::codes_for_key(key) {
            assert!(
                macos_cg::keys_for_code(code).contains(&key),
                "code {code:#06X} listed for {key:?} but does not forward-map to it"
            );
        }
    }
}

// ── MAPPED_* consistency with the forward tables ─────────────────────────────

#[test]
fn test_windows_mapped_vks_match_forward_table() {
    for vk in 0..=255u8 {
        let mapped = windows_vk::MAPPED_VKS.contains(&vk);
        let has_keys = !windows_vk::keys_for_vk(vk).is_empty();
        assert_eq!(
            mapped, has_keys,
            "VK {vk:#04X}: MAPPED_VKS={mapped}, forward-mapped={has_keys}"
        );
    }
}

#[test]
fn test_macos_mapped_codes_match_forward_table() {
    // Every listed code must be forward-mapped…
    for &code in macos_cg::MAPPED_CODES {
        assert!(
            !macos_cg::keys_for_code(code).is_empty(),
            "code {code:#06X} listed in MAPPED_CODES but unmapped"
        );
    }
    // …and every reverse code must be one the probe polls.
    for key in Key::iter() {
        for &code in macos_cg::codes_for_key(key) {
            assert!(
                macos_cg::MAPPED_CODES.contains(&code),
                "code {code:#06X} for {key:?} missing from MAPPED_CODES"
            );
        }
    }
}

#[test]
fn test_mapped_lists_are_ascending_and_unique() {
    assert!(windows_vk::MAPPED_VKS.windows(2).all(|w| w[0] < w[1]));
    assert!(macos_cg::MAPPED_CODES.windows(2).all(|w| w[0] < w[1]));
}

// ── Button tables ─────────────────────────────────────────────────────────────

#[test]
fn test_button_tables_pair_single_bits_with_distinct_natives() {
    fn check<N: PartialEq + std::fmt::Debug>(table: &[(ButtonMask, N)]) {
        for (i, (bit, native)) in table.iter().enumerate() {
            assert!(bit.is_single_button(), "{bit:?} is not a single button");
            for (other_bit, other_native) in &table[i + 1..] {
                assert_ne!(bit, other_bit);
                assert_ne!(native, other_native);
            }
        }
    }
    check(windows_vk::BUTTON_VKS);
    check(linux_x11::BUTTON_MASKS);
    check(macos_cg::BUTTON_CODES);
}

// ── Documented ambiguities ────────────────────────────────────────────────────

#[test]
fn test_modifier_keys_carry_every_physical_code() {
    assert_eq!(windows_vk::vks_for_key(Key::Shift), &[0x10, 0xA0, 0xA1]);
    assert_eq!(windows_vk::vks_for_key(Key::Ctrl), &[0x11, 0xA2, 0xA3]);
    assert_eq!(linux_x11::keycodes_for_key(Key::Shift), &[0x32, 0x3E]);
    assert_eq!(linux_x11::keycodes_for_key(Key::Enter), &[0x24, 0x6D]);
}

#[test]
fn test_macos_shared_codes_report_both_keys() {
    assert_eq!(
        macos_cg::keys_for_code(0x007F),
        &[Key::Backtab, Key::Delete]
    );
    assert_eq!(macos_cg::keys_for_code(0xF739), &[Key::Clear, Key::NumLock]);
}

#[test]
fn test_unmapped_lookups_are_empty_not_errors() {
    assert!(windows_vk::keys_for_vk(0x07).is_empty());
    assert!(linux_x11::keys_for_keycode(0x00).is_empty());
    assert!(macos_cg::keys_for_code(0xFFFF).is_empty());
    // Keys a platform cannot represent report no codes there.
    assert!(windows_vk::vks_for_key(Key::Yen).is_empty());
    assert!(linux_x11::keycodes_for_key(Key::Exclam).is_empty());
    assert!(macos_cg::codes_for_key(Key::VolumeUp).is_empty());
}

#[test]
fn test_letter_a_scenario() {
    assert_eq!(windows_vk::keys_for_vk(0x41), &[Key::KeyA]);
    assert_eq!(windows_vk::vks_for_key(Key::KeyA), &[0x41]);
    assert_eq!(linux_x11::keys_for_keycode(0x26), &[Key::KeyA]);
    assert_eq!(macos_cg::keys_for_code(0x0061), &[Key::KeyA]);
}
