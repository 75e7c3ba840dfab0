// Terminal input
//
// The event loop pulls one event at a time through `EventSource`, so the
// loop can be driven by crossterm in production and by a scripted list in
// tests.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
#[cfg(test)]
use std::collections::VecDeque;
use std::io;

/// Blocking source of terminal events
pub trait EventSource {
    /// Wait for the next event. `Ok(None)` means the source is exhausted.
    fn next_event(&mut self) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        event::read().map(Some)
    }
}

/// Replays a fixed list of events, then reports exhaustion
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

#[cfg(test)]
impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}

/// Whether a key event should be classified. Release events (sent by some
/// platforms and by the kitty protocol) would double-count every press.
pub fn is_keypress(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn scripted_events_drain_in_order() {
        let a = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        let b = Event::Resize(100, 50);
        let mut source = ScriptedEvents::new([a.clone(), b.clone()]);

        assert_eq!(source.next_event().unwrap(), Some(a));
        assert_eq!(source.next_event().unwrap(), Some(b));
        assert_eq!(source.next_event().unwrap(), None);
    }

    #[test]
    fn release_events_are_skipped() {
        let press = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let repeat = KeyEvent::new_with_kind(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Repeat);
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Esc,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );

        assert!(is_keypress(&press));
        assert!(is_keypress(&repeat));
        assert!(!is_keypress(&release));
    }
}
