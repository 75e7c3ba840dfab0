//! Session state
//!
//! Everything the visualizer remembers between events: which keys have ever
//! been pressed, the rolling key log, and the exit counters. The state only
//! changes through [`Session::apply`], one classified event at a time.

mod log;

pub use log::{LogBuffer, LogEntry};

use crate::classifier::{ClassifiedKey, ExitKey};
use chrono::{DateTime, Local};
use std::collections::HashSet;

/// Presses of a single exit key that end the session
pub const EXIT_THRESHOLD: u32 = 5;

/// What the event loop should do after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// An exit counter reached the threshold; stop without redrawing
    Exit(ExitKey),
}

/// Per-key press counts for the exit keys. Never decremented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitCounters {
    pub escape: u32,
    pub enter: u32,
    pub space: u32,
}

impl ExitCounters {
    /// Count a press; true once that key's counter reaches the threshold
    pub fn record(&mut self, key: ExitKey) -> bool {
        let counter = match key {
            ExitKey::Escape => &mut self.escape,
            ExitKey::Enter => &mut self.enter,
            ExitKey::Space => &mut self.space,
        };
        *counter += 1;
        *counter >= EXIT_THRESHOLD
    }

    pub fn get(&self, key: ExitKey) -> u32 {
        match key {
            ExitKey::Escape => self.escape,
            ExitKey::Enter => self.enter,
            ExitKey::Space => self.space,
        }
    }
}

/// Labels that have been pressed at least once. Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct PressedSet {
    labels: HashSet<String>,
}

impl PressedSet {
    pub fn insert(&mut self, label: impl Into<String>) {
        self.labels.insert(label.into());
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

/// All mutable state of a running visualizer
#[derive(Debug, Default)]
pub struct Session {
    pressed: PressedSet,
    log: LogBuffer,
    counters: ExitCounters,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a classified key.
    ///
    /// `capacity` is the number of log rows currently visible; the log is
    /// trimmed to it after appending. The exit check runs first, so the event
    /// that trips a threshold is neither highlighted nor logged.
    pub fn apply(&mut self, key: &ClassifiedKey, capacity: i32, now: DateTime<Local>) -> Outcome {
        if let Some(exit) = key.exit {
            if self.counters.record(exit) {
                tracing::info!(
                    key = exit.name(),
                    presses = self.counters.get(exit),
                    "Exit threshold reached"
                );
                return Outcome::Exit(exit);
            }
        }

        self.pressed.insert(key.label.as_str());
        for modifier in key.modifiers.labels() {
            self.pressed.insert(modifier);
        }
        if key.caps_lock_guess {
            self.pressed.insert("CapsLock");
        }

        self.log.push(LogEntry::new(now, key));
        self.log.trim_to(capacity);

        tracing::debug!(
            label = %key.label,
            code = key.code,
            pressed = self.pressed.len(),
            logged = self.log.len(),
            "Key applied"
        );

        Outcome::Continue
    }

    /// Drop the oldest log entries until the log fits `capacity` rows
    pub fn trim_log(&mut self, capacity: i32) {
        self.log.trim_to(capacity);
    }

    pub fn pressed(&self) -> &PressedSet {
        &self.pressed
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    pub fn counters(&self) -> &ExitCounters {
        &self.counters
    }
}
