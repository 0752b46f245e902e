//! macOS key code translation table.
//!
//! The code space here is the one the Cocoa/Godot interop layer feeds to
//! `CGEventSourceKeyState`: printable keys are addressed by their character
//! code (lowercase `'a'` = 0x0061, `'='` = 0x003D) and special keys by the
//! NSEvent function-key values (`NSF1FunctionKey` = 0xF704, up through
//! 0xF726 for F35) plus a handful of control characters (0x000D Return,
//! 0x001B Escape, 0x007F Delete).
//!
//! Because the space is character-derived, it is the one platform where a
//! single native code legitimately denotes two logical keys: 0x007F serves
//! both `Backtab` and `Delete`, and 0xF739 serves both `Clear` and
//! `NumLock`. Forward lookups return both; a snapshot holding such a code
//! reports both keys pressed.

use crate::buttons::ButtonMask;
use crate::key::Key;

/// Logical keys a macOS key code may represent; empty for unmapped codes.
pub fn keys_for_code(code: u16) -> &'static [Key] {
    match code {
        // Control characters and navigation
        0x0008 => &[Key::Backspace],
        0x0009 => &[Key::Tab],
        0x000D => &[Key::Enter],
        0x001B => &[Key::Escape],
        0x001C => &[Key::ArrowLeft],
        0x001D => &[Key::ArrowRight],
        0x001E => &[Key::ArrowUp],
        0x001F => &[Key::ArrowDown],
        0x007F => &[Key::Backtab, Key::Delete], // DEL serves both
        0x2196 => &[Key::Home],
        0x2198 => &[Key::End],
        0x21DE => &[Key::PageUp],
        0x21DF => &[Key::PageDown],

        // NSEvent function-key space
        0xF704 => &[Key::F1],
        0xF705 => &[Key::F2],
        0xF706 => &[Key::F3],
        0xF707 => &[Key::F4],
        0xF708 => &[Key::F5],
        0xF709 => &[Key::F6],
        0xF70A => &[Key::F7],
        0xF70B => &[Key::F8],
        0xF70C => &[Key::F9],
        0xF70D => &[Key::F10],
        0xF70E => &[Key::F11],
        0xF70F => &[Key::F12],
        0xF710 => &[Key::F13],
        0xF711 => &[Key::F14],
        0xF712 => &[Key::F15],
        0xF713 => &[Key::F16],
        0xF714 => &[Key::F17],
        0xF715 => &[Key::F18],
        0xF716 => &[Key::F19],
        0xF717 => &[Key::F20],
        0xF718 => &[Key::F21],
        0xF719 => &[Key::F22],
        0xF71A => &[Key::F23],
        0xF71B => &[Key::F24],
        0xF71C => &[Key::F25],
        0xF71D => &[Key::F26],
        0xF71E => &[Key::F27],
        0xF71F => &[Key::F28],
        0xF720 => &[Key::F29],
        0xF721 => &[Key::F30],
        0xF722 => &[Key::F31],
        0xF723 => &[Key::F32],
        0xF724 => &[Key::F33],
        0xF725 => &[Key::F34],
        0xF726 => &[Key::F35],
        0xF727 => &[Key::Insert],
        0xF72E => &[Key::Print],
        0xF72F => &[Key::ScrollLock],
        0xF730 => &[Key::Pause],
        0xF731 => &[Key::SysReq],
        0xF734 => &[Key::Stop],
        0xF735 => &[Key::Menu],
        0xF736 => &[Key::Launch0],
        0xF739 => &[Key::Clear, Key::NumLock], // NSClearLineFunctionKey serves both
        0xF746 => &[Key::Help],

        // Printable characters
        0x0020 => &[Key::Space],
        0x0021 => &[Key::Exclam],      // '!'
        0x0022 => &[Key::DoubleQuote], // '"'
        0x0023 => &[Key::NumberSign],  // '#'
        0x0024 => &[Key::Dollar],      // '$'
        0x0025 => &[Key::Percent],     // '%'
        0x0026 => &[Key::Ampersand],   // '&'
        0x0027 => &[Key::Quote],       // '\''
        0x0028 => &[Key::ParenLeft],   // '('
        0x0029 => &[Key::ParenRight],  // ')'
        0x002A => &[Key::Asterisk],    // '*'
        0x002B => &[Key::Plus],        // '+'
        0x002C => &[Key::Comma],       // ','
        0x002D => &[Key::Minus],       // '-'
        0x002E => &[Key::Period],      // '.'
        0x002F => &[Key::Slash],       // '/'
        0x0030 => &[Key::Digit0],
        0x0031 => &[Key::Digit1],
        0x0032 => &[Key::Digit2],
        0x0033 => &[Key::Digit3],
        0x0034 => &[Key::Digit4],
        0x0035 => &[Key::Digit5],
        0x0036 => &[Key::Digit6],
        0x0037 => &[Key::Digit7],
        0x0038 => &[Key::Digit8],
        0x0039 => &[Key::Digit9],
        0x003A => &[Key::Colon],     // ':'
        0x003B => &[Key::Semicolon], // ';'
        0x003C => &[Key::Less],      // '<'
        0x003D => &[Key::Equal],     // '='
        0x003E => &[Key::Greater],   // '>'
        0x003F => &[Key::Question],  // '?'
        0x0040 => &[Key::At],        // '@'
        0x005B => &[Key::BracketLeft],  // '['
        0x005C => &[Key::Backslash],    // '\\'
        0x005D => &[Key::BracketRight], // ']'
        0x005E => &[Key::Caret],        // '^'
        0x005F => &[Key::Underscore],   // '_'
        0x0060 => &[Key::Backquote],    // '`'
        0x0061 => &[Key::KeyA],
        0x0062 => &[Key::KeyB],
        0x0063 => &[Key::KeyC],
        0x0064 => &[Key::KeyD],
        0x0065 => &[Key::KeyE],
        0x0066 => &[Key::KeyF],
        0x0067 => &[Key::KeyG],
        0x0068 => &[Key::KeyH],
        0x0069 => &[Key::KeyI],
        0x006A => &[Key::KeyJ],
        0x006B => &[Key::KeyK],
        0x006C => &[Key::KeyL],
        0x006D => &[Key::KeyM],
        0x006E => &[Key::KeyN],
        0x006F => &[Key::KeyO],
        0x0070 => &[Key::KeyP],
        0x0071 => &[Key::KeyQ],
        0x0072 => &[Key::KeyR],
        0x0073 => &[Key::KeyS],
        0x0074 => &[Key::KeyT],
        0x0075 => &[Key::KeyU],
        0x0076 => &[Key::KeyV],
        0x0077 => &[Key::KeyW],
        0x0078 => &[Key::KeyX],
        0x0079 => &[Key::KeyY],
        0x007A => &[Key::KeyZ],
        0x007B => &[Key::BraceLeft],  // '{'
        0x007C => &[Key::Pipe],       // '|'
        0x007D => &[Key::BraceRight], // '}'
        0x007E => &[Key::Tilde],      // '~'

        _ => &[],
    }
}

/// The macOS key code that produces the logical key; empty for keys with no
/// macOS representation. Unlike the other platforms the reverse direction is
/// single-code per key — the ambiguity here runs the other way (see module
/// docs).
pub fn codes_for_key(key: Key) -> &'static [u16] {
    match key {
        Key::Escape => &[0x001B],
        Key::Tab => &[0x0009],
        Key::Backtab => &[0x007F],
        Key::Backspace => &[0x0008],
        Key::Enter => &[0x000D],
        Key::Insert => &[0xF727],
        Key::Delete => &[0x007F],
        Key::Pause => &[0xF730],
        Key::Print => &[0xF72E],
        Key::SysReq => &[0xF731],
        Key::Clear => &[0xF739],
        Key::Home => &[0x2196],
        Key::End => &[0x2198],
        Key::ArrowLeft => &[0x001C],
        Key::ArrowUp => &[0x001E],
        Key::ArrowRight => &[0x001D],
        Key::ArrowDown => &[0x001F],
        Key::PageUp => &[0x21DE],
        Key::PageDown => &[0x21DF],
        Key::NumLock => &[0xF739],
        Key::ScrollLock => &[0xF72F],
        Key::F1 => &[0xF704],
        Key::F2 => &[0xF705],
        Key::F3 => &[0xF706],
        Key::F4 => &[0xF707],
        Key::F5 => &[0xF708],
        Key::F6 => &[0xF709],
        Key::F7 => &[0xF70A],
        Key::F8 => &[0xF70B],
        Key::F9 => &[0xF70C],
        Key::F10 => &[0xF70D],
        Key::F11 => &[0xF70E],
        Key::F12 => &[0xF70F],
        Key::F13 => &[0xF710],
        Key::F14 => &[0xF711],
        Key::F15 => &[0xF712],
        Key::F16 => &[0xF713],
        Key::F17 => &[0xF714],
        Key::F18 => &[0xF715],
        Key::F19 => &[0xF716],
        Key::F20 => &[0xF717],
        Key::F21 => &[0xF718],
        Key::F22 => &[0xF719],
        Key::F23 => &[0xF71A],
        Key::F24 => &[0xF71B],
        Key::F25 => &[0xF71C],
        Key::F26 => &[0xF71D],
        Key::F27 => &[0xF71E],
        Key::F28 => &[0xF71F],
        Key::F29 => &[0xF720],
        Key::F30 => &[0xF721],
        Key::F31 => &[0xF722],
        Key::F32 => &[0xF723],
        Key::F33 => &[0xF724],
        Key::F34 => &[0xF725],
        Key::F35 => &[0xF726],
        Key::Menu => &[0xF735],
        Key::Help => &[0xF746],
        Key::Stop => &[0xF734],
        Key::Launch0 => &[0xF736],
        Key::Space => &[0x0020],
        Key::Exclam => &[0x0021],
        Key::DoubleQuote => &[0x0022],
        Key::NumberSign => &[0x0023],
        Key::Dollar => &[0x0024],
        Key::Percent => &[0x0025],
        Key::Ampersand => &[0x0026],
        Key::Quote => &[0x0027],
        Key::ParenLeft => &[0x0028],
        Key::ParenRight => &[0x0029],
        Key::Asterisk => &[0x002A],
        Key::Plus => &[0x002B],
        Key::Comma => &[0x002C],
        Key::Minus => &[0x002D],
        Key::Period => &[0x002E],
        Key::Slash => &[0x002F],
        Key::Digit0 => &[0x0030],
        Key::Digit1 => &[0x0031],
        Key::Digit2 => &[0x0032],
        Key::Digit3 => &[0x0033],
        Key::Digit4 => &[0x0034],
        Key::Digit5 => &[0x0035],
        Key::Digit6 => &[0x0036],
        Key::Digit7 => &[0x0037],
        Key::Digit8 => &[0x0038],
        Key::Digit9 => &[0x0039],
        Key::Colon => &[0x003A],
        Key::Semicolon => &[0x003B],
        Key::Less => &[0x003C],
        Key::Equal => &[0x003D],
        Key::Greater => &[0x003E],
        Key::Question => &[0x003F],
        Key::At => &[0x0040],
        Key::KeyA => &[0x0061],
        Key::KeyB => &[0x0062],
        Key::KeyC => &[0x0063],
        Key::KeyD => &[0x0064],
        Key::KeyE => &[0x0065],
        Key::KeyF => &[0x0066],
        Key::KeyG => &[0x0067],
        Key::KeyH => &[0x0068],
        Key::KeyI => &[0x0069],
        Key::KeyJ => &[0x006A],
        Key::KeyK => &[0x006B],
        Key::KeyL => &[0x006C],
        Key::KeyM => &[0x006D],
        Key::KeyN => &[0x006E],
        Key::KeyO => &[0x006F],
        Key::KeyP => &[0x0070],
        Key::KeyQ => &[0x0071],
        Key::KeyR => &[0x0072],
        Key::KeyS => &[0x0073],
        Key::KeyT => &[0x0074],
        Key::KeyU => &[0x0075],
        Key::KeyV => &[0x0076],
        Key::KeyW => &[0x0077],
        Key::KeyX => &[0x0078],
        Key::KeyY => &[0x0079],
        Key::KeyZ => &[0x007A],
        Key::BracketLeft => &[0x005B],
        Key::Backslash => &[0x005C],
        Key::BracketRight => &[0x005D],
        Key::Caret => &[0x005E],
        Key::Underscore => &[0x005F],
        Key::Backquote => &[0x0060],
        Key::BraceLeft => &[0x007B],
        Key::Pipe => &[0x007C],
        Key::BraceRight => &[0x007D],
        Key::Tilde => &[0x007E],

        _ => &[],
    }
}

/// Every macOS key code with a forward mapping, in ascending order. The
/// polling probe queries exactly this set once per refresh.
pub const MAPPED_CODES: &[u16] = &[
    0x0008, 0x0009, 0x000D, 0x001B, 0x001C, 0x001D, 0x001E, 0x001F, // control keys
    // Printable range: space through '@' is fully mapped…
    0x0020, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0026, 0x0027, 0x0028, 0x0029, 0x002A,
    0x002B, 0x002C, 0x002D, 0x002E, 0x002F, 0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035,
    0x0036, 0x0037, 0x0038, 0x0039, 0x003A, 0x003B, 0x003C, 0x003D, 0x003E, 0x003F, 0x0040,
    // …uppercase letters are not (keys are addressed by their lowercase form)…
    0x005B, 0x005C, 0x005D, 0x005E, 0x005F, 0x0060, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065,
    0x0066, 0x0067, 0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F, 0x0070,
    0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077, 0x0078, 0x0079, 0x007A, 0x007B,
    0x007C, 0x007D, 0x007E, 0x007F,
    0x2196, 0x2198, 0x21DE, 0x21DF, // home/end/page
    // NSEvent function-key space
    0xF704, 0xF705, 0xF706, 0xF707, 0xF708, 0xF709, 0xF70A, 0xF70B, 0xF70C, 0xF70D, 0xF70E,
    0xF70F, 0xF710, 0xF711, 0xF712, 0xF713, 0xF714, 0xF715, 0xF716, 0xF717, 0xF718, 0xF719,
    0xF71A, 0xF71B, 0xF71C, 0xF71D, 0xF71E, 0xF71F, 0xF720, 0xF721, 0xF722, 0xF723, 0xF724,
    0xF725, 0xF726, 0xF727, 0xF72E, 0xF72F, 0xF730, 0xF731, 0xF734, 0xF735, 0xF736, 0xF739,
    0xF746,
];

/// CGEventSource mouse button numbers. Only three buttons are addressable
/// through `CGEventSourceButtonState`; EXTRA1/EXTRA2 have no entry and
/// always report unpressed on macOS.
pub const BUTTON_CODES: &[(ButtonMask, u32)] = &[
    (ButtonMask::LEFT, 0),   // kCGMouseButtonLeft
    (ButtonMask::RIGHT, 1),  // kCGMouseButtonRight
    (ButtonMask::MIDDLE, 2), // kCGMouseButtonCenter
];
