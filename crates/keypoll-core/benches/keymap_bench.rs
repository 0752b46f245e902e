//! Criterion benchmarks for the translation tables and keymap decoding.
//!
//! Measures the per-lookup latency of both table directions on every
//! platform and the full 32-byte keymap decode, the operations on the
//! per-frame refresh/query path.
//!
//! Run with:
//! ```bash
//! cargo bench --package keypoll-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keypoll_core::keymap::{linux_x11, macos_cg, windows_vk};
use keypoll_core::{bitfield, Key};

/// Well-known keys covering the common query set.
const BENCH_KEYS: &[Key] = &[
    Key::KeyA,
    Key::KeyZ,
    Key::Enter,
    Key::Escape,
    Key::Space,
    Key::Shift,
    Key::Ctrl,
    Key::F1,
    Key::F12,
    Key::ArrowLeft,
    Key::ArrowDown,
    Key::Digit0,
    Key::Numpad5,
    Key::VolumeUp,
];

fn bench_forward_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_lookup");

    group.bench_function("windows_vk", |b| {
        b.iter(|| {
            for &vk in windows_vk::MAPPED_VKS {
                black_box(windows_vk::keys_for_vk(black_box(vk)));
            }
        })
    });
    group.bench_function("linux_x11", |b| {
        b.iter(|| {
            for code in 0..=255u8 {
                black_box(linux_x11::keys_for_keycode(black_box(code)));
            }
        })
    });
    group.bench_function("macos_cg", |b| {
        b.iter(|| {
            for &code in macos_cg::MAPPED_CODES {
                black_box(macos_cg::keys_for_code(black_box(code)));
            }
        })
    });

    group.finish();
}

fn bench_reverse_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_lookup");

    group.bench_function("windows_vk", |b| {
        b.iter(|| {
            for &key in BENCH_KEYS {
                black_box(windows_vk::vks_for_key(black_box(key)));
            }
        })
    });
    group.bench_function("linux_x11", |b| {
        b.iter(|| {
            for &key in BENCH_KEYS {
                black_box(linux_x11::keycodes_for_key(black_box(key)));
            }
        })
    });
    group.bench_function("macos_cg", |b| {
        b.iter(|| {
            for &key in BENCH_KEYS {
                black_box(macos_cg::codes_for_key(black_box(key)));
            }
        })
    });

    group.finish();
}

fn bench_keymap_decode(c: &mut Criterion) {
    // A realistic snapshot: a chord of modifiers plus two letters.
    let mut keymap = [0u8; bitfield::KEYMAP_LEN];
    for &code in &[0x25u8, 0x32, 0x26, 0x27, 0x41] {
        keymap[usize::from(code >> 3)] |= 1 << (code & 7);
    }

    c.bench_function("keymap_decode_full", |b| {
        b.iter(|| {
            let keys: Vec<Key> = bitfield::active_codes(black_box(&keymap))
                .flat_map(|code| linux_x11::keys_for_keycode(code).iter().copied())
                .collect();
            black_box(keys)
        })
    });

    c.bench_function("keymap_single_bit_test", |b| {
        b.iter(|| {
            for &key in BENCH_KEYS {
                let down = linux_x11::keycodes_for_key(key)
                    .iter()
                    .any(|&code| bitfield::is_code_active(black_box(&keymap), code));
                black_box(down);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_forward_lookup,
    bench_reverse_lookup,
    bench_keymap_decode
);
criterion_main!(benches);
