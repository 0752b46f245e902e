//! Scancode translation tables for cross-platform key state mapping.
//!
//! One module per platform, each holding a static, bidirectional mapping
//! between that platform's native code space and the logical [`Key`] space:
//!
//! - [`windows_vk`] — Windows Virtual Key codes (`u8`),
//! - [`linux_x11`] — X11 keycodes (`u8`, bit indices into the keymap),
//! - [`macos_cg`] — macOS key codes (`u16`).
//!
//! Every module exposes the same four surfaces:
//!
//! - **forward**: `keys_for_*(code) -> &'static [Key]` — the logical keys a
//!   native code may represent. Unmapped codes return the empty slice; that
//!   is normal (many native codes are deliberately unmapped) and callers
//!   must silently skip them.
//! - **reverse**: `*_for_key(key) -> &'static [code]` — every native code
//!   that can produce the logical key. The empty slice means the key is not
//!   queryable on that platform and membership queries always answer "not
//!   pressed". The reverse direction is the authoritative source for
//!   "is this logical key pressed" queries.
//! - a `MAPPED_*` constant listing every forward-mapped code, so the
//!   per-key polling platforms iterate exactly the table-known codes.
//! - a button table pairing each single-bit [`ButtonMask`][crate::ButtonMask]
//!   with the platform's mouse-button identifier.
//!
//! # Many-to-one and one-to-many, by design
//!
//! Two physical keys frequently collapse to one logical key (left and right
//! Shift, the two Enter keys), and one native code can stand for two logical
//! keys (macOS reuses 0x007F for both `Backtab` and `Delete`). The tables
//! reproduce those ambiguities instead of papering over them: querying
//! `Shift` ORs over every Shift code, and a snapshot holding 0x007F reports
//! both keys. Where the native layer provides only an undifferentiated code,
//! no table can recover the left/right distinction.
//!
//! # Invariant
//!
//! For every key `k` and every code `c` in `reverse(k)`, `forward(c)`
//! contains `k`, and `c` appears in the platform's `MAPPED_*` list. The
//! `table_soundness` integration tests sweep the whole key space to hold
//! every entry to this.

pub mod linux_x11;
pub mod macos_cg;
pub mod windows_vk;

pub use crate::key::Key;
