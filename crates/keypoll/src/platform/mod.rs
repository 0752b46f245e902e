//! Platform-specific raw state probes.
//!
//! The correct implementation is selected at compile time via
//! `#[cfg(target_os = ...)]`; [`PlatformProbe`] names whichever one was
//! built. There is no runtime dispatch — the platform is fixed per build —
//! but everything is written against the [`StateProbe`] trait so tests can
//! substitute [`mock::MockProbe`] and unsupported targets fall back to
//! [`stub::InertProbe`].
//!
//! # The three native mechanisms
//!
//! | Probe                          | Native query                          | Cache holds            |
//! |--------------------------------|---------------------------------------|------------------------|
//! | `windows::AsyncKeyStateProbe`  | `GetAsyncKeyState` per table code     | decoded logical set    |
//! | `linux::XKeymapProbe`          | `XQueryKeymap` + `XQueryPointer`      | raw 32-byte keymap     |
//! | `macos::EventSourceProbe`      | `CGEventSourceKeyState` per code      | decoded logical set    |
//! | `stub::InertProbe`             | none                                  | nothing                |
//!
//! The per-key polling probes decode at refresh time (one bit test per
//! native call result); the bitfield probe stores the buffer verbatim and
//! decodes at query time. Either way a query never triggers a native call.

use keypoll_core::{ButtonMask, Key};

use crate::handle::NativeHandleSource;

pub mod mock;
pub mod stub;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

/// A platform's raw input state: acquisition plus snapshot queries.
///
/// Refreshes wholesale-overwrite the probe's owned snapshot; queries answer
/// from it without touching the OS. Native-call failure is not surfaced —
/// the affected snapshot comes back unchanged or zeroed — and no method
/// panics on any input.
pub trait StateProbe: Default {
    /// Captures the instantaneous keyboard state, replacing the key
    /// snapshot.
    fn refresh_keys(&mut self, target: &dyn NativeHandleSource);

    /// Captures the instantaneous pointer-button state, replacing the
    /// button snapshot.
    fn refresh_buttons(&mut self, target: &dyn NativeHandleSource);

    /// Returns `true` if the key was held in the last key snapshot.
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Returns every key held in the last key snapshot, without duplicates.
    fn pressed_keys(&self) -> Vec<Key>;

    /// Returns `true` if the single-bit `button` was held in the last
    /// button snapshot.
    fn is_button_pressed(&self, button: ButtonMask) -> bool;

    /// Returns the union of logical buttons held in the last button
    /// snapshot.
    fn button_mask(&self) -> ButtonMask;
}

/// The probe compiled for this target.
#[cfg(target_os = "windows")]
pub type PlatformProbe = windows::AsyncKeyStateProbe;

/// The probe compiled for this target.
#[cfg(target_os = "linux")]
pub type PlatformProbe = linux::XKeymapProbe;

/// The probe compiled for this target.
#[cfg(target_os = "macos")]
pub type PlatformProbe = macos::EventSourceProbe;

/// The probe compiled for this target: the inert fallback.
#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
pub type PlatformProbe = stub::InertProbe;
