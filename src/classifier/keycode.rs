//! Numeric key codes
//!
//! crossterm describes keys with an enum; the visualizer logs a number per
//! event and derives a fallback label from it, so every `KeyCode` is folded
//! into a stable integer here. Control characters keep their ASCII values,
//! printable characters share a single code, and special keys live above 256.
//!
//! Ctrl+letter is folded into the ASCII control range (Ctrl+A = 1 ... Ctrl+Z = 26)
//! regardless of whether the terminal sent a raw control byte or a letter with
//! the CONTROL modifier bit. Ctrl+H, Ctrl+I and Ctrl+M therefore share codes
//! with Backspace, Tab and Enter. When the letter is known it travels in `ch`
//! so the classifier can still tell the chord from the named key; a bare
//! control byte carries no letter and reads as the named key.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const NUL: u16 = 0;
pub const CTRL_A: u16 = 1;
pub const CTRL_Z: u16 = 26;
pub const BACKSPACE_BS: u16 = 8;
pub const TAB: u16 = 9;
pub const ENTER: u16 = 13;
pub const ESCAPE: u16 = 27;
pub const BACKSPACE: u16 = 127;

/// Any printable character; the character itself travels alongside
pub const RUNE: u16 = 256;

pub const UP: u16 = 257;
pub const DOWN: u16 = 258;
pub const RIGHT: u16 = 259;
pub const LEFT: u16 = 260;
pub const KEYPAD_BEGIN: u16 = 265;
pub const PAGE_UP: u16 = 266;
pub const PAGE_DOWN: u16 = 267;
pub const HOME: u16 = 268;
pub const END: u16 = 269;
pub const INSERT: u16 = 270;
pub const DELETE: u16 = 271;
pub const PRINT_SCREEN: u16 = 276;
pub const PAUSE: u16 = 277;
pub const BACK_TAB: u16 = 278;

/// F1; F(n) is `F1 + n - 1`
pub const F1: u16 = 279;

pub const CAPS_LOCK: u16 = 512;
pub const SCROLL_LOCK: u16 = 513;
pub const NUM_LOCK: u16 = 514;
pub const MENU: u16 = 515;

/// Base for media keys (play, volume, ...)
pub const MEDIA_BASE: u16 = 600;

/// Base for standalone modifier key presses (keyboard enhancement only)
pub const MODIFIER_BASE: u16 = 700;

/// A key event reduced to what the classifier looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKey {
    /// Numeric code, see module docs
    pub code: u16,
    /// The character for [`RUNE`] events
    pub ch: Option<char>,
    /// Modifier bits exactly as the terminal reported them
    pub modifiers: KeyModifiers,
}

impl RawKey {
    pub fn new(code: u16, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            ch: None,
            modifiers,
        }
    }

    pub fn rune(ch: char, modifiers: KeyModifiers) -> Self {
        Self {
            code: RUNE,
            ch: Some(ch),
            modifiers,
        }
    }

    /// Ctrl+letter reported with the CONTROL bit; `ch` holds the letter
    pub fn ctrl_chord(letter: char, modifiers: KeyModifiers) -> Self {
        let letter = letter.to_ascii_uppercase();
        Self {
            code: CTRL_A + u16::from(letter as u8 - b'A'),
            ch: Some(letter),
            modifiers,
        }
    }

    /// True for the ASCII control codes that stand for Ctrl+A..Ctrl+Z
    pub fn is_control_letter(&self) -> bool {
        (CTRL_A..=CTRL_Z).contains(&self.code)
    }

    /// A control code whose letter is known
    pub fn is_ctrl_chord(&self) -> bool {
        self.is_control_letter() && self.ch.is_some()
    }
}

impl From<&KeyEvent> for RawKey {
    fn from(event: &KeyEvent) -> Self {
        let modifiers = event.modifiers;
        match event.code {
            KeyCode::Char(c) => char_key(c, modifiers),
            code => RawKey::new(code_number(code), modifiers),
        }
    }
}

fn char_key(c: char, modifiers: KeyModifiers) -> RawKey {
    // Raw control byte delivered as a character
    let value = c as u32;
    if (u32::from(CTRL_A)..=u32::from(CTRL_Z)).contains(&value) {
        return RawKey::new(value as u16, modifiers);
    }

    if modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() {
        return RawKey::ctrl_chord(c, modifiers);
    }

    RawKey::rune(c, modifiers)
}

/// Numeric code for every non-character key
fn code_number(code: KeyCode) -> u16 {
    match code {
        KeyCode::Null => NUL,
        KeyCode::Backspace => BACKSPACE,
        KeyCode::Tab => TAB,
        KeyCode::Enter => ENTER,
        KeyCode::Esc => ESCAPE,
        KeyCode::Up => UP,
        KeyCode::Down => DOWN,
        KeyCode::Right => RIGHT,
        KeyCode::Left => LEFT,
        KeyCode::KeypadBegin => KEYPAD_BEGIN,
        KeyCode::PageUp => PAGE_UP,
        KeyCode::PageDown => PAGE_DOWN,
        KeyCode::Home => HOME,
        KeyCode::End => END,
        KeyCode::Insert => INSERT,
        KeyCode::Delete => DELETE,
        KeyCode::PrintScreen => PRINT_SCREEN,
        KeyCode::Pause => PAUSE,
        KeyCode::BackTab => BACK_TAB,
        KeyCode::F(n) => F1 + u16::from(n.max(1)) - 1,
        KeyCode::CapsLock => CAPS_LOCK,
        KeyCode::ScrollLock => SCROLL_LOCK,
        KeyCode::NumLock => NUM_LOCK,
        KeyCode::Menu => MENU,
        KeyCode::Media(media) => MEDIA_BASE + media as u16,
        KeyCode::Modifier(modifier) => MODIFIER_BASE + modifier as u16,
        // Handled by char_key
        KeyCode::Char(_) => RUNE,
    }
}
