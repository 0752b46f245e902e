//! # keypoll
//!
//! Polling-based snapshots of global keyboard and mouse-button state.
//!
//! keypoll lets a host application ask, at any instant, which logical keys
//! and mouse buttons are currently held down — including input delivered to
//! *other* windows or processes on platforms whose native query covers the
//! whole session — without depending on the host's own event pipeline,
//! which misses input whenever the host window lacks focus.
//!
//! # How it works
//!
//! The host drives the cycle explicitly:
//!
//! 1. Call a refresh operation on [`InputStateCache`]. The platform probe
//!    performs the native state query and overwrites the cached snapshot.
//! 2. Call query operations. Answers come from the snapshot, translated
//!    through the static tables in `keypoll-core` — no further native calls.
//!
//! Queries always reflect the most recent refresh of the corresponding
//! sub-cache (keys vs. buttons); the host controls staleness by choosing
//! when to refresh, typically once per frame.
//!
//! ```no_run
//! use keypoll::{ButtonMask, InputStateCache, Key, RawHandles};
//!
//! let target = RawHandles::default(); // host supplies real handles on X11
//! let mut cache = InputStateCache::new();
//!
//! cache.refresh_all(&target);
//! if cache.is_key_pressed(Key::Escape) {
//!     // …
//! }
//! let held = cache.mouse_button_mask();
//! assert!(held.contains(ButtonMask::NONE));
//! ```
//!
//! # What this is not
//!
//! Not an event system: there are no callbacks, no queued transitions, no
//! press/release edges — only an instantaneous is-held snapshot. Layout
//! interpretation (dead keys, IME) is out of scope; keys are identified by
//! physical/virtual identity.
//!
//! # Platform coverage
//!
//! Exactly one probe is compiled per target: `GetAsyncKeyState` polling on
//! Windows, `XQueryKeymap`/`XQueryPointer` on Linux/X11, CoreGraphics
//! event-source state on macOS, and an inert stub elsewhere. The stub keeps
//! unsupported builds linkable: every refresh is a no-op and every query
//! reports nothing pressed. See [`platform`] for the per-variant details.

pub mod handle;
pub mod platform;
pub mod snapshot;

pub use handle::{HandleKind, NativeHandleSource, RawHandles};
pub use snapshot::InputStateCache;

// The vocabulary types live in keypoll-core; re-export them so hosts depend
// on one crate.
pub use keypoll_core::{ButtonMask, Key};
