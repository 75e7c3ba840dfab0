//! Fixed keyboard geometry
//!
//! The visualizer draws one hardcoded physical layout. Every key is a
//! rectangle sized from its label; rows are stacked top to bottom with a
//! one-row gap. The layout is built once at startup and never changes.
//!
//! Left/right duplicates (Shift, Ctrl, Alt, Win) share a label, so pressing
//! either one lights up both.

/// Columns of padding added to a label to get the key width
const KEY_PADDING: u16 = 2;

/// Columns between neighbouring keys in a row
const KEY_GAP: u16 = 1;

/// Height of every key in rows
pub const KEY_HEIGHT: u16 = 3;

/// Vertical distance between the tops of consecutive rows
const ROW_PITCH: u16 = KEY_HEIGHT + 1;

/// Rows of the physical layout, top to bottom
const ROWS: &[&[&str]] = &[
    &[
        "Esc", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    ],
    &[
        "`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "Backspace",
    ],
    &[
        "Tab", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "[", "]", "\\",
    ],
    &[
        "CapsLock", "A", "S", "D", "F", "G", "H", "J", "K", "L", ";", "'", "Enter",
    ],
    &[
        "Shift", "Z", "X", "C", "V", "B", "N", "M", ",", ".", "/", "Shift",
    ],
    &[
        "Fn", "Ctrl", "Win", "Alt", "Space", "Alt", "Win", "Menu", "Ctrl",
    ],
    // Navigation cluster
    &["Insert", "Home", "PgUp"],
    &["Delete", "End", "PgDn"],
    &["Left", "Down", "Right", "Up"],
];

/// A single key on the virtual keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRegion {
    /// Semantic label, shared by physical duplicates
    pub label: &'static str,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl KeyRegion {
    fn new(label: &'static str, x: u16, y: u16) -> Self {
        Self {
            label,
            x,
            y,
            width: label.chars().count() as u16 + KEY_PADDING,
            height: KEY_HEIGHT,
        }
    }

    /// First row below this key
    pub fn bottom(&self) -> u16 {
        self.y + self.height
    }

    /// First column right of this key
    pub fn right(&self) -> u16 {
        self.x + self.width
    }

    /// Column where the label starts so that it sits centred on the top row
    pub fn label_x(&self) -> u16 {
        let label_width = self.label.chars().count() as u16;
        self.x + self.width.saturating_sub(label_width) / 2
    }
}

/// The complete keyboard: key regions in row-then-left-to-right order
#[derive(Debug, Clone)]
pub struct Keyboard {
    keys: Vec<KeyRegion>,
}

impl Keyboard {
    /// Build the standard layout
    pub fn standard() -> Self {
        let mut keys = Vec::new();

        for (row, labels) in ROWS.iter().enumerate() {
            let y = row as u16 * ROW_PITCH;
            let mut x = 0;
            for &label in labels.iter() {
                let key = KeyRegion::new(label, x, y);
                x = key.right() + KEY_GAP;
                keys.push(key);
            }
        }

        Self { keys }
    }

    pub fn keys(&self) -> &[KeyRegion] {
        &self.keys
    }

    /// Row of the horizontal separator, directly below the last keyboard row
    pub fn separator_row(&self) -> u16 {
        self.keys.last().map(KeyRegion::bottom).unwrap_or(0)
    }

    /// Number of log rows that fit below the separator on a terminal of the
    /// given height. May be zero or negative on short terminals.
    pub fn log_capacity(&self, terminal_height: u16) -> i32 {
        i32::from(terminal_height) - i32::from(self.separator_row()) - 1
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::standard()
    }
}
