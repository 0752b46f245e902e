//! # keypoll-core
//!
//! Shared foundation for the keypoll workspace: the platform-independent
//! logical key space, the per-platform scancode translation tables, and the
//! decoding helpers for the X11 keymap bitfield.
//!
//! This crate has zero dependencies on OS APIs, so every table and every
//! decoding routine is unit-testable on any build host. The OS-facing
//! `keypoll` crate layers the actual state probes on top of it.
//!
//! # Architecture overview
//!
//! keypoll answers one question: *which keys and mouse buttons are held down
//! right now, anywhere on the desktop?* Each operating system exposes that
//! state through a structurally different primitive:
//!
//! - Windows answers one key at a time (`GetAsyncKeyState` status words),
//! - X11 answers all 256 keycodes at once (a 32-byte keymap bitfield),
//! - macOS answers one key at a time with a boolean (`CGEventSourceKeyState`).
//!
//! This crate defines:
//!
//! - **`key`** – the [`Key`] enum, the shared logical vocabulary every
//!   platform's raw state is translated into.
//!
//! - **`buttons`** – the [`ButtonMask`] bit-flag type for mouse buttons.
//!
//! - **`keymap`** – static bidirectional translation tables between each
//!   platform's native code space and [`Key`]. Many-to-one and one-to-many
//!   entries are deliberate: two physical Shift keys collapse to one logical
//!   `Shift`, and one macOS code can stand for two logical keys.
//!
//! - **`bitfield`** – bit-level decoding of the 256-bit X11 keymap buffer.

// Declare the top-level modules. Rust looks for each in a file or
// subdirectory of the same name (e.g., src/keymap/mod.rs).
pub mod bitfield;
pub mod buttons;
pub mod key;
pub mod keymap;

// Re-export the two vocabulary types at the crate root so callers can write
// `keypoll_core::Key` instead of `keypoll_core::key::Key`.
pub use buttons::ButtonMask;
pub use key::Key;
