//! The platform-independent logical key space.
//!
//! [`Key`] is the shared vocabulary every platform's raw key state is
//! translated into, and the currency of every snapshot query. It identifies
//! *physical/virtual key identity*, not produced characters: keyboard layout
//! interpretation (dead keys, IME, shift states) is out of scope.
//!
//! # Why this exact variant set?
//!
//! The set is the union of every logical key reachable from any of the three
//! platform translation tables in [`crate::keymap`]. A key that no table can
//! reach would be dead weight — it could never be reported pressed — so no
//! such variant exists. The reverse is *not* true: a given platform table may
//! omit many variants (macOS has no `VolumeUp` entry, Windows has no `Yen`),
//! in which case membership queries for that key simply report "not pressed"
//! on that platform. That asymmetry is deliberate degraded behavior, not an
//! error.
//!
//! # Left/right variants
//!
//! There are no `ShiftLeft`/`ShiftRight` variants. The Windows polling table
//! folds `VK_LSHIFT`/`VK_RSHIFT` into plain `Shift`, and the X11 keymap does
//! the same for its two Shift keycodes, so the logical space cannot offer a
//! distinction the native layers do not consistently provide.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A logical keyboard key shared across all platforms.
///
/// Values are stable identifiers treated as opaque set elements; they are
/// compared and hashed, never used as dense indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Key {
    // Letters
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,

    // Digit row
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Editing and whitespace
    Enter,
    Escape,
    Backspace,
    Tab,
    Backtab,
    Space,
    Clear,

    // Modifiers and locks. Left/right variants are collapsed (see module docs).
    Shift,
    Ctrl,
    Alt,
    Meta,
    Menu,
    CapsLock,
    NumLock,
    ScrollLock,

    // Navigation
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,

    // System
    Pause,
    Print,
    SysReq,
    Help,
    Standby,

    // Function keys. X11 and macOS reach to F35; Windows stops at F24.
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    F25,
    F26,
    F27,
    F28,
    F29,
    F30,
    F31,
    F32,
    F33,
    F34,
    F35,

    // Numpad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadMultiply,
    NumpadAdd,
    NumpadSubtract,
    NumpadPeriod,
    NumpadDivide,
    NumpadEnter,

    // Punctuation and symbols. The macOS table addresses keys through
    // character codes, which is why the shifted symbols appear here at all.
    Exclam,
    DoubleQuote,
    NumberSign,
    Dollar,
    Percent,
    Ampersand,
    Quote,
    ParenLeft,
    ParenRight,
    Asterisk,
    Plus,
    Comma,
    Minus,
    Period,
    Slash,
    Colon,
    Semicolon,
    Less,
    Equal,
    Greater,
    Question,
    At,
    BracketLeft,
    Backslash,
    BracketRight,
    Caret,
    Underscore,
    Backquote,
    BraceLeft,
    Pipe,
    BraceRight,
    Tilde,
    Section,
    Yen,

    // Browser, media, and launcher keys
    Back,
    Forward,
    Refresh,
    Stop,
    Search,
    Favorites,
    HomePage,
    VolumeMute,
    VolumeDown,
    VolumeUp,
    MediaNext,
    MediaPrevious,
    MediaStop,
    MediaPlay,
    LaunchMail,
    LaunchMedia,
    Launch0,
    Launch1,
}
