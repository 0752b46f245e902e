//! X11 keycode translation table.
//!
//! X keycodes are the hardware-derived byte values that index the 256-bit
//! keymap returned by `XQueryKeymap`; the values here follow the standard
//! evdev+8 mapping used by Xorg. They identify physical key positions, not
//! characters — no KeySym resolution is involved, which keeps the table
//! layout-independent.
//!
//! Unlike the Windows table, no `MAPPED_*` list is exported: the bitfield
//! probe walks the whole 32-byte buffer and feeds every set bit through
//! [`keys_for_keycode`], so unmapped codes fall out naturally as empty
//! slices.

use crate::buttons::ButtonMask;
use crate::key::Key;

/// Logical keys an X keycode may represent; empty for unmapped codes.
pub fn keys_for_keycode(code: u8) -> &'static [Key] {
    match code {
        0x09 => &[Key::Escape],
        0x0A => &[Key::Digit1],
        0x0B => &[Key::Digit2],
        0x0C => &[Key::Digit3],
        0x0D => &[Key::Digit4],
        0x0E => &[Key::Digit5],
        0x0F => &[Key::Digit6],
        0x10 => &[Key::Digit7],
        0x11 => &[Key::Digit8],
        0x12 => &[Key::Digit9],
        0x13 => &[Key::Digit0],
        0x14 => &[Key::Minus],
        0x15 => &[Key::Equal],
        0x16 => &[Key::Backspace],
        0x17 => &[Key::Tab],
        0x18 => &[Key::KeyQ],
        0x19 => &[Key::KeyW],
        0x1A => &[Key::KeyE],
        0x1B => &[Key::KeyR],
        0x1C => &[Key::KeyT],
        0x1D => &[Key::KeyY],
        0x1E => &[Key::KeyU],
        0x1F => &[Key::KeyI],
        0x20 => &[Key::KeyO],
        0x21 => &[Key::KeyP],
        0x22 => &[Key::BracketLeft],
        0x23 => &[Key::BracketRight],
        0x24 => &[Key::Enter],
        0x25 => &[Key::Ctrl], // left Ctrl
        0x26 => &[Key::KeyA],
        0x27 => &[Key::KeyS],
        0x28 => &[Key::KeyD],
        0x29 => &[Key::KeyF],
        0x2A => &[Key::KeyG],
        0x2B => &[Key::KeyH],
        0x2C => &[Key::KeyJ],
        0x2D => &[Key::KeyK],
        0x2E => &[Key::KeyL],
        0x2F => &[Key::Semicolon],
        0x30 => &[Key::Quote],
        0x31 => &[Key::Backquote],
        0x32 => &[Key::Shift], // left Shift
        0x33 => &[Key::Backslash],
        0x34 => &[Key::KeyZ],
        0x35 => &[Key::KeyX],
        0x36 => &[Key::KeyC],
        0x37 => &[Key::KeyV],
        0x38 => &[Key::KeyB],
        0x39 => &[Key::KeyN],
        0x3A => &[Key::KeyM],
        0x3B => &[Key::Comma],
        0x3C => &[Key::Period],
        0x3D => &[Key::Slash],
        0x3E => &[Key::Shift], // right Shift
        0x3F => &[Key::NumpadMultiply],
        0x40 => &[Key::Alt], // left Alt
        0x41 => &[Key::Space],
        0x42 => &[Key::CapsLock],
        0x43 => &[Key::F1],
        0x44 => &[Key::F2],
        0x45 => &[Key::F3],
        0x46 => &[Key::F4],
        0x47 => &[Key::F5],
        0x48 => &[Key::F6],
        0x49 => &[Key::F7],
        0x4A => &[Key::F8],
        0x4B => &[Key::F9],
        0x4C => &[Key::F10],
        0x4D => &[Key::NumLock],
        0x4E => &[Key::ScrollLock],
        0x4F => &[Key::Numpad7],
        0x50 => &[Key::Numpad8],
        0x51 => &[Key::Numpad9],
        0x52 => &[Key::NumpadSubtract],
        0x53 => &[Key::Numpad4],
        0x54 => &[Key::Numpad5],
        0x55 => &[Key::Numpad6],
        0x56 => &[Key::NumpadAdd],
        0x57 => &[Key::Numpad1],
        0x58 => &[Key::Numpad2],
        0x59 => &[Key::Numpad3],
        0x5A => &[Key::Numpad0],
        0x5B => &[Key::NumpadPeriod],
        0x5E => &[Key::Section],
        0x5F => &[Key::F11],
        0x60 => &[Key::F12],
        0x67 => &[Key::Comma], // JIS/Brazilian extra comma position
        0x68 => &[Key::NumpadEnter],
        0x69 => &[Key::Ctrl], // right Ctrl
        0x6A => &[Key::NumpadDivide],
        0x6B => &[Key::Print],
        0x6C => &[Key::Alt], // right Alt / AltGr
        0x6D => &[Key::Enter], // secondary Enter position
        0x6E => &[Key::Home],
        0x6F => &[Key::ArrowUp],
        0x70 => &[Key::PageUp],
        0x71 => &[Key::ArrowLeft],
        0x72 => &[Key::ArrowRight],
        0x73 => &[Key::End],
        0x74 => &[Key::ArrowDown],
        0x75 => &[Key::PageDown],
        0x76 => &[Key::Insert],
        0x77 => &[Key::Delete],
        0x79 => &[Key::VolumeMute],
        0x7A => &[Key::VolumeDown],
        0x7B => &[Key::VolumeUp],
        0x7D => &[Key::Equal], // numpad equal position
        0x7F => &[Key::Pause],
        0x80 => &[Key::Launch0],
        0x81 => &[Key::Comma], // numpad comma position
        0x84 => &[Key::Yen],
        0x85 => &[Key::Meta], // left Super
        0x86 => &[Key::Meta], // right Super
        0x87 => &[Key::Menu],
        0xA6 => &[Key::Back],
        0xA7 => &[Key::Forward],
        0xB5 => &[Key::Refresh],
        0xBF => &[Key::F13],
        0xC0 => &[Key::F14],
        0xC1 => &[Key::F15],
        0xC2 => &[Key::F16],
        0xC3 => &[Key::F17],
        0xC4 => &[Key::F18],
        0xC5 => &[Key::F19],
        0xC6 => &[Key::F20],
        0xC7 => &[Key::F21],
        0xC8 => &[Key::F22],
        0xC9 => &[Key::F23],
        0xCA => &[Key::F24],
        0xCB => &[Key::F25],
        0xCC => &[Key::F26],
        0xCD => &[Key::F27],
        0xCE => &[Key::F28],
        0xCF => &[Key::F29],
        0xD0 => &[Key::F30],
        0xD1 => &[Key::F31],
        0xD2 => &[Key::F32],
        0xD3 => &[Key::F33],
        0xD4 => &[Key::F34],
        0xD5 => &[Key::F35],

        _ => &[],
    }
}

/// Every X keycode that can produce the logical key; empty for keys with no
/// X11 representation. Membership queries OR over all listed codes, so one
/// pressed physical key is enough.
pub fn keycodes_for_key(key: Key) -> &'static [u8] {
    match key {
        Key::Escape => &[0x09],
        Key::Digit1 => &[0x0A],
        Key::Digit2 => &[0x0B],
        Key::Digit3 => &[0x0C],
        Key::Digit4 => &[0x0D],
        Key::Digit5 => &[0x0E],
        Key::Digit6 => &[0x0F],
        Key::Digit7 => &[0x10],
        Key::Digit8 => &[0x11],
        Key::Digit9 => &[0x12],
        Key::Digit0 => &[0x13],
        Key::Minus => &[0x14],
        Key::Equal => &[0x15, 0x7D],
        Key::Backspace => &[0x16],
        Key::Tab => &[0x17],
        Key::KeyQ => &[0x18],
        Key::KeyW => &[0x19],
        Key::KeyE => &[0x1A],
        Key::KeyR => &[0x1B],
        Key::KeyT => &[0x1C],
        Key::KeyY => &[0x1D],
        Key::KeyU => &[0x1E],
        Key::KeyI => &[0x1F],
        Key::KeyO => &[0x20],
        Key::KeyP => &[0x21],
        Key::BracketLeft => &[0x22],
        Key::BracketRight => &[0x23],
        Key::Enter => &[0x24, 0x6D],
        Key::Ctrl => &[0x25, 0x69],
        Key::KeyA => &[0x26],
        Key::KeyS => &[0x27],
        Key::KeyD => &[0x28],
        Key::KeyF => &[0x29],
        Key::KeyG => &[0x2A],
        Key::KeyH => &[0x2B],
        Key::KeyJ => &[0x2C],
        Key::KeyK => &[0x2D],
        Key::KeyL => &[0x2E],
        Key::Semicolon => &[0x2F],
        Key::Quote => &[0x30],
        Key::Backquote => &[0x31],
        Key::Shift => &[0x32, 0x3E],
        Key::Backslash => &[0x33],
        Key::KeyZ => &[0x34],
        Key::KeyX => &[0x35],
        Key::KeyC => &[0x36],
        Key::KeyV => &[0x37],
        Key::KeyB => &[0x38],
        Key::KeyN => &[0x39],
        Key::KeyM => &[0x3A],
        Key::Comma => &[0x3B, 0x67, 0x81],
        Key::Period => &[0x3C],
        Key::Slash => &[0x3D],
        Key::NumpadMultiply => &[0x3F],
        Key::Alt => &[0x40, 0x6C],
        Key::Space => &[0x41],
        Key::CapsLock => &[0x42],
        Key::F1 => &[0x43],
        Key::F2 => &[0x44],
        Key::F3 => &[0x45],
        Key::F4 => &[0x46],
        Key::F5 => &[0x47],
        Key::F6 => &[0x48],
        Key::F7 => &[0x49],
        Key::F8 => &[0x4A],
        Key::F9 => &[0x4B],
        Key::F10 => &[0x4C],
        Key::NumLock => &[0x4D],
        Key::ScrollLock => &[0x4E],
        Key::Numpad7 => &[0x4F],
        Key::Numpad8 => &[0x50],
        Key::Numpad9 => &[0x51],
        Key::NumpadSubtract => &[0x52],
        Key::Numpad4 => &[0x53],
        Key::Numpad5 => &[0x54],
        Key::Numpad6 => &[0x55],
        Key::NumpadAdd => &[0x56],
        Key::Numpad1 => &[0x57],
        Key::Numpad2 => &[0x58],
        Key::Numpad3 => &[0x59],
        Key::Numpad0 => &[0x5A],
        Key::NumpadPeriod => &[0x5B],
        Key::Section => &[0x5E],
        Key::F11 => &[0x5F],
        Key::F12 => &[0x60],
        Key::NumpadEnter => &[0x68],
        Key::NumpadDivide => &[0x6A],
        Key::Print => &[0x6B],
        Key::Home => &[0x6E],
        Key::ArrowUp => &[0x6F],
        Key::PageUp => &[0x70],
        Key::ArrowLeft => &[0x71],
        Key::ArrowRight => &[0x72],
        Key::End => &[0x73],
        Key::ArrowDown => &[0x74],
        Key::PageDown => &[0x75],
        Key::Insert => &[0x76],
        Key::Delete => &[0x77],
        Key::VolumeMute => &[0x79],
        Key::VolumeDown => &[0x7A],
        Key::VolumeUp => &[0x7B],
        Key::Pause => &[0x7F],
        Key::Launch0 => &[0x80],
        Key::Yen => &[0x84],
        Key::Meta => &[0x85, 0x86],
        Key::Menu => &[0x87],
        Key::Back => &[0xA6],
        Key::Forward => &[0xA7],
        Key::Refresh => &[0xB5],
        Key::F13 => &[0xBF],
        Key::F14 => &[0xC0],
        Key::F15 => &[0xC1],
        Key::F16 => &[0xC2],
        Key::F17 => &[0xC3],
        Key::F18 => &[0xC4],
        Key::F19 => &[0xC5],
        Key::F20 => &[0xC6],
        Key::F21 => &[0xC7],
        Key::F22 => &[0xC8],
        Key::F23 => &[0xC9],
        Key::F24 => &[0xCA],
        Key::F25 => &[0xCB],
        Key::F26 => &[0xCC],
        Key::F27 => &[0xCD],
        Key::F28 => &[0xCE],
        Key::F29 => &[0xCF],
        Key::F30 => &[0xD0],
        Key::F31 => &[0xD1],
        Key::F32 => &[0xD2],
        Key::F33 => &[0xD3],
        Key::F34 => &[0xD4],
        Key::F35 => &[0xD5],

        _ => &[],
    }
}

/// X pointer button masks as reported by `XQueryPointer`'s `mask_return`.
///
/// Button1Mask..Button5Mask occupy bits 8..12 of the state mask. The EXTRA1
/// and EXTRA2 rows are UNVERIFIED: they were matched against one physical
/// mouse, and many X servers report wheel scroll, not side buttons, as
/// buttons 4 and 5. Cross-check against the X11 protocol spec before relying
/// on them.
pub const BUTTON_MASKS: &[(ButtonMask, u32)] = &[
    (ButtonMask::LEFT, 0x0100),   // Button1Mask
    (ButtonMask::RIGHT, 0x0400),  // Button3Mask
    (ButtonMask::MIDDLE, 0x0200), // Button2Mask
    (ButtonMask::EXTRA1, 0x0800), // Button4Mask (unverified, see above)
    (ButtonMask::EXTRA2, 0x1000), // Button5Mask (unverified, see above)
];
