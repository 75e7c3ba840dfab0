//! Event classification
//!
//! Turns a raw key into the identity the keyboard highlights, the set of
//! modifiers held with it, and its effect on the exit counters.
//!
//! Classification is total: anything that cannot be named gets a synthetic
//! `Key[<code>]` label so no event is silently dropped.

pub mod keycode;

use crossterm::event::KeyModifiers;
use keycode::RawKey;

/// Keys whose repeated presses end the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitKey {
    Escape,
    Enter,
    Space,
}

impl ExitKey {
    pub fn name(&self) -> &'static str {
        match self {
            ExitKey::Escape => "Esc",
            ExitKey::Enter => "Enter",
            ExitKey::Space => "Space",
        }
    }
}

/// Modifiers considered held for an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    /// Labels of the keyboard keys to light up for the held modifiers
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
        ]
        .into_iter()
        .filter_map(|(held, label)| held.then_some(label))
    }
}

/// Result of classifying one key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedKey {
    /// Semantic label; matches a keyboard key when one exists
    pub label: String,
    /// Numeric code, logged as-is
    pub code: u16,
    /// Deterministic modifier decoding (bitmask plus control-code signal)
    pub modifiers: ModifierSet,
    /// Modifier bits as reported, for the log line
    pub reported: KeyModifiers,
    /// Best-effort CapsLock guess. An uppercase letter without the SHIFT bit
    /// is taken to mean CapsLock is on; a terminal that pre-translates shifted
    /// letters without reporting SHIFT looks exactly the same, so this can be
    /// wrong in both directions.
    pub caps_lock_guess: bool,
    /// Exit counter this event feeds, if any
    pub exit: Option<ExitKey>,
}

/// Classify a raw key
pub fn classify(key: &RawKey) -> ClassifiedKey {
    // A Ctrl chord keeps its letter even where the code collides with a
    // named key (Ctrl+M is 13, like Enter)
    let named = if key.is_ctrl_chord() {
        None
    } else {
        named_label(key.code)
    };
    let label = match named {
        Some(name) => name.to_string(),
        None => fallback_label(key),
    };

    let modifiers = ModifierSet {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL) || key.is_control_letter(),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    };

    ClassifiedKey {
        label,
        code: key.code,
        modifiers,
        reported: key.modifiers,
        caps_lock_guess: caps_lock_guess(key),
        exit: exit_key(key),
    }
}

/// Labels for control and navigation keys
fn named_label(code: u16) -> Option<&'static str> {
    let label = match code {
        keycode::ESCAPE => "Esc",
        keycode::ENTER => "Enter",
        keycode::TAB | keycode::BACK_TAB => "Tab",
        keycode::BACKSPACE | keycode::BACKSPACE_BS => "Backspace",
        keycode::HOME => "Home",
        keycode::END => "End",
        keycode::INSERT => "Insert",
        keycode::DELETE => "Delete",
        keycode::PAGE_UP => "PgUp",
        keycode::PAGE_DOWN => "PgDn",
        keycode::UP => "Up",
        keycode::DOWN => "Down",
        keycode::LEFT => "Left",
        keycode::RIGHT => "Right",
        code if (keycode::F1..keycode::F1 + 12).contains(&code) => {
            const FUNCTION_KEYS: [&str; 12] = [
                "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
            ];
            FUNCTION_KEYS[usize::from(code - keycode::F1)]
        }
        _ => return None,
    };
    Some(label)
}

fn fallback_label(key: &RawKey) -> String {
    match key.ch {
        Some(' ') => "Space".to_string(),
        Some(c) if key.code == keycode::RUNE => c.to_uppercase().collect(),
        _ if key.is_control_letter() => {
            char::from(b'A' + (key.code - keycode::CTRL_A) as u8).to_string()
        }
        _ => format!("Key[{}]", key.code),
    }
}

fn caps_lock_guess(key: &RawKey) -> bool {
    match key.ch {
        Some(c) if key.code == keycode::RUNE => {
            c.is_alphabetic() && c.is_uppercase() && !key.modifiers.contains(KeyModifiers::SHIFT)
        }
        _ => false,
    }
}

fn exit_key(key: &RawKey) -> Option<ExitKey> {
    match (key.code, key.ch) {
        (keycode::ESCAPE, _) => Some(ExitKey::Escape),
        (keycode::ENTER, None) => Some(ExitKey::Enter),
        (keycode::RUNE, Some(' ')) => Some(ExitKey::Space),
        _ => None,
    }
}

/// Summary of the reported modifier bits, e.g. `Ctrl|Shift` or `None`
pub fn modifier_summary(modifiers: KeyModifiers) -> String {
    let parts: Vec<&str> = [
        (KeyModifiers::CONTROL, "Ctrl"),
        (KeyModifiers::ALT, "Alt"),
        (KeyModifiers::SHIFT, "Shift"),
    ]
    .into_iter()
    .filter(|(bit, _)| modifiers.contains(*bit))
    .map(|(_, name)| name)
    .collect();

    if parts.is_empty() {
        "None".to_string()
    } else {
        parts.join("|")
    }
}
