//! Windows Virtual Key (VK) code translation table.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h),
//! <https://learn.microsoft.com/windows/win32/inputdev/virtual-key-codes>.
//! VK codes occupy a single byte (0x00–0xFF).
//!
//! # What is a Virtual Key code? (for beginners)
//!
//! Windows assigns each keyboard key a number called a "Virtual Key code",
//! defined in `<winuser.h>` and named `VK_*` (e.g., `VK_RETURN = 0x0D`,
//! `VK_SPACE = 0x20`). They are "virtual" because they identify *logical*
//! keys rather than physical scan positions: pressing the key that types
//! the letter A produces `VK_A = 0x41` on every layout.
//!
//! The polling probe asks `GetAsyncKeyState` about each code in
//! [`MAPPED_VKS`] — the table-known codes — rather than all 256, so a
//! refresh costs one native call per table entry.
//!
//! Windows assigns *both* an undifferentiated and a sided code to each
//! modifier (`VK_SHIFT` plus `VK_LSHIFT`/`VK_RSHIFT`, and likewise for
//! Ctrl and the Alt/Menu pair), so the reverse entries for modifiers carry
//! all three codes and the forward entries fold them back onto one logical
//! key. Mouse buttons also live in the VK space (0x01–0x06); they are kept
//! in the separate [`BUTTON_VKS`] table because they translate to
//! [`ButtonMask`] bits, not [`Key`]s.

use crate::buttons::ButtonMask;
use crate::key::Key;

/// Logical keys a Windows VK code may represent; empty for unmapped codes.
pub fn keys_for_vk(vk: u8) -> &'static [Key] {
    match vk {
        0x08 => &[Key::Backspace], // VK_BACK
        0x09 => &[Key::Tab],       // VK_TAB
        0x0C => &[Key::Clear],     // VK_CLEAR
        0x0D => &[Key::Enter],     // VK_RETURN
        0x10 => &[Key::Shift],     // VK_SHIFT
        0x11 => &[Key::Ctrl],      // VK_CONTROL
        0x12 => &[Key::Alt],       // VK_MENU
        0x13 => &[Key::Pause],     // VK_PAUSE
        0x14 => &[Key::CapsLock],  // VK_CAPITAL
        0x1B => &[Key::Escape],    // VK_ESCAPE
        0x20 => &[Key::Space],     // VK_SPACE
        0x21 => &[Key::PageUp],    // VK_PRIOR
        0x22 => &[Key::PageDown],  // VK_NEXT
        0x23 => &[Key::End],       // VK_END
        0x24 => &[Key::Home],      // VK_HOME
        0x25 => &[Key::ArrowLeft], // VK_LEFT
        0x26 => &[Key::ArrowUp],   // VK_UP
        0x27 => &[Key::ArrowRight], // VK_RIGHT
        0x28 => &[Key::ArrowDown], // VK_DOWN
        0x2A => &[Key::Print],     // VK_PRINT
        0x2C => &[Key::Print],     // VK_SNAPSHOT
        0x2D => &[Key::Insert],    // VK_INSERT
        0x2E => &[Key::Delete],    // VK_DELETE
        0x2F => &[Key::Help],      // VK_HELP

        // Digit row (VK '0'..'9' share ASCII values)
        0x30 => &[Key::Digit0],
        0x31 => &[Key::Digit1],
        0x32 => &[Key::Digit2],
        0x33 => &[Key::Digit3],
        0x34 => &[Key::Digit4],
        0x35 => &[Key::Digit5],
        0x36 => &[Key::Digit6],
        0x37 => &[Key::Digit7],
        0x38 => &[Key::Digit8],
        0x39 => &[Key::Digit9],

        // Alphabet (VK 'A'..'Z' share ASCII values)
        0x41 => &[Key::KeyA],
        0x42 => &[Key::KeyB],
        0x43 => &[Key::KeyC],
        0x44 => &[Key::KeyD],
        0x45 => &[Key::KeyE],
        0x46 => &[Key::KeyF],
        0x47 => &[Key::KeyG],
        0x48 => &[Key::KeyH],
        0x49 => &[Key::KeyI],
        0x4A => &[Key::KeyJ],
        0x4B => &[Key::KeyK],
        0x4C => &[Key::KeyL],
        0x4D => &[Key::KeyM],
        0x4E => &[Key::KeyN],
        0x4F => &[Key::KeyO],
        0x50 => &[Key::KeyP],
        0x51 => &[Key::KeyQ],
        0x52 => &[Key::KeyR],
        0x53 => &[Key::KeyS],
        0x54 => &[Key::KeyT],
        0x55 => &[Key::KeyU],
        0x56 => &[Key::KeyV],
        0x57 => &[Key::KeyW],
        0x58 => &[Key::KeyX],
        0x59 => &[Key::KeyY],
        0x5A => &[Key::KeyZ],

        0x5B => &[Key::Meta],    // VK_LWIN
        0x5C => &[Key::Meta],    // VK_RWIN
        0x5D => &[Key::Menu],    // VK_APPS
        0x5F => &[Key::Standby], // VK_SLEEP

        // Numpad
        0x60 => &[Key::Numpad0],
        0x61 => &[Key::Numpad1],
        0x62 => &[Key::Numpad2],
        0x63 => &[Key::Numpad3],
        0x64 => &[Key::Numpad4],
        0x65 => &[Key::Numpad5],
        0x66 => &[Key::Numpad6],
        0x67 => &[Key::Numpad7],
        0x68 => &[Key::Numpad8],
        0x69 => &[Key::Numpad9],
        0x6A => &[Key::NumpadMultiply], // VK_MULTIPLY
        0x6B => &[Key::NumpadAdd],      // VK_ADD
        0x6C => &[Key::NumpadPeriod],   // VK_SEPARATOR
        0x6D => &[Key::NumpadSubtract], // VK_SUBTRACT
        0x6E => &[Key::NumpadPeriod],   // VK_DECIMAL
        0x6F => &[Key::NumpadDivide],   // VK_DIVIDE

        // Function keys (VK_F1..VK_F24)
        0x70 => &[Key::F1],
        0x71 => &[Key::F2],
        0x72 => &[Key::F3],
        0x73 => &[Key::F4],
        0x74 => &[Key::F5],
        0x75 => &[Key::F6],
        0x76 => &[Key::F7],
        0x77 => &[Key::F8],
        0x78 => &[Key::F9],
        0x79 => &[Key::F10],
        0x7A => &[Key::F11],
        0x7B => &[Key::F12],
        0x7C => &[Key::F13],
        0x7D => &[Key::F14],
        0x7E => &[Key::F15],
        0x7F => &[Key::F16],
        0x80 => &[Key::F17],
        0x81 => &[Key::F18],
        0x82 => &[Key::F19],
        0x83 => &[Key::F20],
        0x84 => &[Key::F21],
        0x85 => &[Key::F22],
        0x86 => &[Key::F23],
        0x87 => &[Key::F24],

        0x90 => &[Key::NumLock],    // VK_NUMLOCK
        0x91 => &[Key::ScrollLock], // VK_SCROLL
        0x92 => &[Key::Equal],      // VK_OEM_NEC_EQUAL

        // Sided modifiers, folded onto the undifferentiated logical keys
        0xA0 => &[Key::Shift], // VK_LSHIFT
        0xA1 => &[Key::Shift], // VK_RSHIFT
        0xA2 => &[Key::Ctrl],  // VK_LCONTROL
        0xA3 => &[Key::Ctrl],  // VK_RCONTROL
        0xA4 => &[Key::Menu],  // VK_LMENU
        0xA5 => &[Key::Menu],  // VK_RMENU

        // Browser and media keys
        0xA6 => &[Key::Back],          // VK_BROWSER_BACK
        0xA7 => &[Key::Forward],       // VK_BROWSER_FORWARD
        0xA8 => &[Key::Refresh],       // VK_BROWSER_REFRESH
        0xA9 => &[Key::Stop],          // VK_BROWSER_STOP
        0xAA => &[Key::Search],        // VK_BROWSER_SEARCH
        0xAB => &[Key::Favorites],     // VK_BROWSER_FAVORITES
        0xAC => &[Key::HomePage],      // VK_BROWSER_HOME
        0xAD => &[Key::VolumeMute],    // VK_VOLUME_MUTE
        0xAE => &[Key::VolumeDown],    // VK_VOLUME_DOWN
        0xAF => &[Key::VolumeUp],      // VK_VOLUME_UP
        0xB0 => &[Key::MediaNext],     // VK_MEDIA_NEXT_TRACK
        0xB1 => &[Key::MediaPrevious], // VK_MEDIA_PREV_TRACK
        0xB2 => &[Key::MediaStop],     // VK_MEDIA_STOP
        0xB3 => &[Key::MediaPlay],     // VK_MEDIA_PLAY_PAUSE
        0xB4 => &[Key::LaunchMail],    // VK_LAUNCH_MAIL
        0xB5 => &[Key::LaunchMedia],   // VK_LAUNCH_MEDIA_SELECT
        0xB6 => &[Key::Launch0],       // VK_LAUNCH_APP1
        0xB7 => &[Key::Launch1],       // VK_LAUNCH_APP2

        // OEM punctuation (US layout positions)
        0xBA => &[Key::Semicolon],    // VK_OEM_1
        0xBB => &[Key::Equal],        // VK_OEM_PLUS
        0xBC => &[Key::Comma],        // VK_OEM_COMMA
        0xBD => &[Key::Minus],        // VK_OEM_MINUS
        0xBE => &[Key::Period],       // VK_OEM_PERIOD
        0xBF => &[Key::Slash],        // VK_OEM_2
        0xC0 => &[Key::Backquote],    // VK_OEM_3
        0xDB => &[Key::BracketLeft],  // VK_OEM_4
        0xDC => &[Key::Backslash],    // VK_OEM_5
        0xDD => &[Key::BracketRight], // VK_OEM_6
        0xDE => &[Key::Quote],        // VK_OEM_7
        0xE2 => &[Key::Pipe],         // VK_OEM_102
        0xE3 => &[Key::Help],         // VK_ICO_HELP
        0xE6 => &[Key::Clear],        // VK_ICO_CLEAR
        0xF6 => &[Key::Escape],       // VK_ATTN
        0xF7 => &[Key::Tab],          // VK_CRSEL
        0xFA => &[Key::MediaPlay],    // VK_PLAY
        0xFE => &[Key::Clear],        // VK_OEM_CLEAR

        _ => &[],
    }
}

/// Every Windows VK code that can produce the logical key; empty for keys
/// with no Windows representation.
pub fn vks_for_key(key: Key) -> &'static [u8] {
    match key {
        Key::Backspace => &[0x08],
        Key::Tab => &[0x09, 0xF7],
        Key::Clear => &[0x0C, 0xE6, 0xFE],
        Key::Enter => &[0x0D],
        Key::Shift => &[0x10, 0xA0, 0xA1],
        Key::Ctrl => &[0x11, 0xA2, 0xA3],
        Key::Alt => &[0x12],
        Key::Pause => &[0x13],
        Key::CapsLock => &[0x14],
        Key::Escape => &[0x1B, 0xF6],
        Key::Space => &[0x20],
        Key::PageUp => &[0x21],
        Key::PageDown => &[0x22],
        Key::End => &[0x23],
        Key::Home => &[0x24],
        Key::ArrowLeft => &[0x25],
        Key::ArrowUp => &[0x26],
        Key::ArrowRight => &[0x27],
        Key::ArrowDown => &[0x28],
        Key::Print => &[0x2A, 0x2C],
        Key::Insert => &[0x2D],
        Key::Delete => &[0x2E],
        Key::Help => &[0x2F, 0xE3],
        Key::Digit0 => &[0x30],
        Key::Digit1 => &[0x31],
        Key::Digit2 => &[0x32],
        Key::Digit3 => &[0x33],
        Key::Digit4 => &[0x34],
        Key::Digit5 => &[0x35],
        Key::Digit6 => &[0x36],
        Key::Digit7 => &[0x37],
        Key::Digit8 => &[0x38],
        Key::Digit9 => &[0x39],
        Key::KeyA => &[0x41],
        Key::KeyB => &[0x42],
        Key::KeyC => &[0x43],
        Key::KeyD => &[0x44],
        Key::KeyE => &[0x45],
        Key::KeyF => &[0x46],
        Key::KeyG => &[0x47],
        Key::KeyH => &[0x48],
        Key::KeyI => &[0x49],
        Key::KeyJ => &[0x4A],
        Key::KeyK => &[0x4B],
        Key::KeyL => &[0x4C],
        Key::KeyM => &[0x4D],
        Key::KeyN => &[0x4E],
        Key::KeyO => &[0x4F],
        Key::KeyP => &[0x50],
        Key::KeyQ => &[0x51],
        Key::KeyR => &[0x52],
        Key::KeyS => &[0x53],
        Key::KeyT => &[0x54],
        Key::KeyU => &[0x55],
        Key::KeyV => &[0x56],
        Key::KeyW => &[0x57],
        Key::KeyX => &[0x58],
        Key::KeyY => &[0x59],
        Key::KeyZ => &[0x5A],
        Key::Meta => &[0x5B, 0x5C],
        Key::Menu => &[0x5D, 0xA4, 0xA5],
        Key::Standby => &[0x5F],
        Key::Numpad0 => &[0x60],
        Key::Numpad1 => &[0x61],
        Key::Numpad2 => &[0x62],
        Key::Numpad3 => &[0x63],
        Key::Numpad4 => &[0x64],
        Key::Numpad5 => &[0x65],
        Key::Numpad6 => &[0x66],
        Key::Numpad7 => &[0x67],
        Key::Numpad8 => &[0x68],
        Key::Numpad9 => &[0x69],
        Key::NumpadMultiply => &[0x6A],
        Key::NumpadAdd => &[0x6B],
        Key::NumpadPeriod => &[0x6C, 0x6E],
        Key::NumpadSubtract => &[0x6D],
        Key::NumpadDivide => &[0x6F],
        Key::F1 => &[0x70],
        Key::F2 => &[0x71],
        Key::F3 => &[0x72],
        Key::F4 => &[0x73],
        Key::F5 => &[0x74],
        Key::F6 => &[0x75],
        Key::F7 => &[0x76],
        Key::F8 => &[0x77],
        Key::F9 => &[0x78],
        Key::F10 => &[0x79],
        Key::F11 => &[0x7A],
        Key::F12 => &[0x7B],
        Key::F13 => &[0x7C],
        Key::F14 => &[0x7D],
        Key::F15 => &[0x7E],
        Key::F16 => &[0x7F],
        Key::F17 => &[0x80],
        Key::F18 => &[0x81],
        Key::F19 => &[0x82],
        Key::F20 => &[0x83],
        Key::F21 => &[0x84],
        Key::F22 => &[0x85],
        Key::F23 => &[0x86],
        Key::F24 => &[0x87],
        Key::NumLock => &[0x90],
        Key::ScrollLock => &[0x91],
        Key::Equal => &[0x92, 0xBB],
        Key::Back => &[0xA6],
        Key::Forward => &[0xA7],
        Key::Refresh => &[0xA8],
        Key::Stop => &[0xA9],
        Key::Search => &[0xAA],
        Key::Favorites => &[0xAB],
        Key::HomePage => &[0xAC],
        Key::VolumeMute => &[0xAD],
        Key::VolumeDown => &[0xAE],
        Key::VolumeUp => &[0xAF],
        Key::MediaNext => &[0xB0],
        Key::MediaPrevious => &[0xB1],
        Key::MediaStop => &[0xB2],
        Key::MediaPlay => &[0xB3, 0xFA],
        Key::LaunchMail => &[0xB4],
        Key::LaunchMedia => &[0xB5],
        Key::Launch0 => &[0xB6],
        Key::Launch1 => &[0xB7],
        Key::Semicolon => &[0xBA],
        Key::Comma => &[0xBC],
        Key::Minus => &[0xBD],
        Key::Period => &[0xBE],
        Key::Slash => &[0xBF],
        Key::Backquote => &[0xC0],
        Key::BracketLeft => &[0xDB],
        Key::Backslash => &[0xDC],
        Key::BracketRight => &[0xDD],
        Key::Quote => &[0xDE],
        Key::Pipe => &[0xE2],

        _ => &[],
    }
}

/// Every VK code with a forward mapping, in ascending order. The polling
/// probe queries exactly this set once per refresh.
pub const MAPPED_VKS: &[u8] = &[
    0x08, 0x09, 0x0C, 0x0D, 0x10, 0x11, 0x12, 0x13, 0x14, 0x1B, 0x20, 0x21, 0x22, 0x23, 0x24,
    0x25, 0x26, 0x27, 0x28, 0x2A, 0x2C, 0x2D, 0x2E, 0x2F, // control and navigation
    0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, // digits
    0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x4B, 0x4C, 0x4D, 0x4E, 0x4F,
    0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5A, // letters
    0x5B, 0x5C, 0x5D, 0x5F, // win/apps/sleep
    0x60, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x6B, 0x6C, 0x6D, 0x6E,
    0x6F, // numpad
    0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7A, 0x7B, 0x7C, 0x7D, 0x7E,
    0x7F, 0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, // F1..F24
    0x90, 0x91, 0x92, // locks
    0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, // sided modifiers
    0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB, 0xAC, // browser
    0xAD, 0xAE, 0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, // media and launch
    0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF, 0xC0, 0xDB, 0xDC, 0xDD, 0xDE, 0xE2, // OEM punctuation
    0xE3, 0xE6, 0xF6, 0xF7, 0xFA, 0xFE, // ICO/OEM oddities
];

/// Mouse buttons in the VK code space, queried with the same status-word
/// call as keyboard keys.
pub const BUTTON_VKS: &[(ButtonMask, u8)] = &[
    (ButtonMask::LEFT, 0x01),   // VK_LBUTTON
    (ButtonMask::RIGHT, 0x02),  // VK_RBUTTON
    (ButtonMask::MIDDLE, 0x04), // VK_MBUTTON
    (ButtonMask::EXTRA1, 0x05), // VK_XBUTTON1
    (ButtonMask::EXTRA2, 0x06), // VK_XBUTTON2
];
