//! Integration tests for the public snapshot API.
//!
//! Everything here goes through the crate's public surface only: the cache,
//! the mock and stub probes, and the handle types.

use keypoll::platform::{mock::MockProbe, stub::InertProbe};
use keypoll::{ButtonMask, InputStateCache, Key, RawHandles};

fn scripted(keys: &[Key], buttons: ButtonMask) -> MockProbe {
    MockProbe {
        held_keys: keys.to_vec(),
        held_buttons: buttons,
        ..MockProbe::default()
    }
}

#[test]
fn test_refresh_then_query_round_trip() {
    let mut cache = InputStateCache::with_probe(scripted(
        &[Key::KeyA, Key::Shift],
        ButtonMask::LEFT | ButtonMask::EXTRA2,
    ));

    cache.refresh_all(&RawHandles::default());

    assert!(cache.is_key_pressed(Key::KeyA));
    assert!(cache.is_key_pressed(Key::Shift));
    assert!(!cache.is_key_pressed(Key::KeyB));

    let keys = cache.pressed_keys();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&Key::KeyA));
    assert!(keys.contains(&Key::Shift));

    assert!(cache.is_mouse_button_pressed(ButtonMask::LEFT));
    assert!(cache.is_mouse_button_pressed(ButtonMask::EXTRA2));
    assert!(!cache.is_mouse_button_pressed(ButtonMask::MIDDLE));
    assert_eq!(
        cache.mouse_button_mask(),
        ButtonMask::LEFT | ButtonMask::EXTRA2
    );
}

#[test]
fn test_snapshot_is_stale_until_refreshed_again() {
    let mut cache = InputStateCache::with_probe(scripted(&[Key::Escape], ButtonMask::NONE));
    cache.refresh_keys(&RawHandles::default());

    // No further refresh: the snapshot keeps answering from the capture,
    // however long ago it was taken.
    for _ in 0..3 {
        assert!(cache.is_key_pressed(Key::Escape));
        assert_eq!(cache.pressed_keys(), vec![Key::Escape]);
    }
}

#[test]
fn test_pressed_keys_has_set_semantics() {
    // The scripted hardware reports Shift twice (as two physical keys
    // would); the query must deduplicate.
    let mut cache =
        InputStateCache::with_probe(scripted(&[Key::Shift, Key::Shift], ButtonMask::NONE));

    cache.refresh_keys(&RawHandles::default());

    assert_eq!(cache.pressed_keys(), vec![Key::Shift]);
}

// ── Inert stub (unsupported-platform variant) ────────────────────────────────

#[test]
fn test_inert_probe_ignores_any_call_sequence() {
    let mut cache = InputStateCache::with_probe(InertProbe);
    let target = RawHandles {
        display: 0xDEAD,
        window: 0xBEEF,
    };

    // Arbitrary interleaving of refreshes and queries: everything must
    // report nothing pressed and nothing may panic.
    cache.refresh_all(&target);
    assert!(!cache.is_key_pressed(Key::Enter));
    cache.refresh_buttons(&target);
    assert_eq!(cache.mouse_button_mask(), ButtonMask::NONE);
    cache.refresh_keys(&target);
    assert!(cache.pressed_keys().is_empty());
    assert!(!cache.is_mouse_button_pressed(ButtonMask::LEFT));
    assert!(!cache.is_mouse_button_pressed(ButtonMask::EXTRA1));
}
