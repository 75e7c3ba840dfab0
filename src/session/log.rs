// Rolling key log
//
// One line per applied key event. The buffer holds only as many lines as
// fit below the keyboard; older lines fall off the top.

use crate::classifier::{modifier_summary, ClassifiedKey};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;
use unicode_width::UnicodeWidthChar;

/// Display columns reserved for the label; fits "Backspace" and "Key[NNNN]"
const LABEL_WIDTH: usize = 9;

/// A single logged key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub label: String,
    pub code: u16,
    /// Reported modifier bits, e.g. `Ctrl|Shift`
    pub modifiers: String,
}

impl LogEntry {
    pub fn new(timestamp: DateTime<Local>, key: &ClassifiedKey) -> Self {
        Self {
            timestamp,
            label: key.label.clone(),
            code: key.code,
            modifiers: modifier_summary(key.reported),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | Code={:3} | Mods={}",
            self.timestamp.format("%H:%M:%S"),
            fit_to_width(&self.label, LABEL_WIDTH),
            self.code,
            self.modifiers
        )
    }
}

/// Truncate or right-pad `text` to exactly `width` display columns
fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Chronological log, bounded by the visible log area
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
}

impl LogBuffer {
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
    }

    /// Keep only the newest `capacity` entries. Zero or negative capacity
    /// means there is no room at all and the buffer is emptied.
    pub fn trim_to(&mut self, capacity: i32) {
        if capacity <= 0 {
            self.entries.clear();
            return;
        }
        let capacity = capacity as usize;
        while self.entries.len() > capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::classifier::keycode::RawKey;
    use chrono::TimeZone;
    use crossterm::event::KeyModifiers;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, h, m, s).unwrap()
    }

    fn entry(code: u16) -> LogEntry {
        LogEntry::new(at(9, 0, 0), &classify(&RawKey::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn formats_aligned_line() {
        let key = classify(&RawKey::rune('q', KeyModifiers::ALT));
        let line = LogEntry::new(at(14, 5, 9), &key).to_string();
        assert_eq!(line, "14:05:09 | Q         | Code=256 | Mods=Alt");
    }

    #[test]
    fn small_codes_are_right_aligned() {
        let line = entry(27).to_string();
        assert_eq!(line, "09:00:00 | Esc       | Code= 27 | Mods=None");
    }

    #[test]
    fn long_labels_are_truncated() {
        assert_eq!(fit_to_width("Backspace", 9), "Backspace");
        assert_eq!(fit_to_width("Key[123456]", 9), "Key[12345");
        // Wide characters never overflow the column
        assert_eq!(fit_to_width("日本語日本", 9), "日本語日 ");
    }

    #[test]
    fn trim_drops_oldest_first() {
        let mut log = LogBuffer::default();
        for code in 1000..1005 {
            log.push(entry(code));
        }
        log.trim_to(3);

        let codes: Vec<u16> = log.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![1002, 1003, 1004]);
    }

    #[test]
    fn trim_within_capacity_is_noop() {
        let mut log = LogBuffer::default();
        log.push(entry(1000));
        log.trim_to(5);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn trim_to_zero_or_less_clears() {
        let mut log = LogBuffer::default();
        log.push(entry(1000));
        log.trim_to(0);
        assert!(log.is_empty());

        log.push(entry(1001));
        log.trim_to(-10);
        assert!(log.is_empty());
    }
}
