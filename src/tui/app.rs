// TUI application state
//
// Bundles the fixed keyboard, the session and the active theme. The event
// loop feeds it events; the renderer reads it.

use super::theme::Theme;
use crate::classifier::{classify, keycode::RawKey, ExitKey};
use crate::keyboard::Keyboard;
use crate::session::{Outcome, Session};
use chrono::Local;
use crossterm::event::KeyEvent;

/// Main application state for the TUI
pub struct App {
    /// Fixed layout, built once
    pub keyboard: Keyboard,

    /// Highlights, key log and exit counters
    pub session: Session,

    /// Current styles
    pub theme: Theme,

    /// Set once an exit counter reached its threshold
    pub exit: Option<ExitKey>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            keyboard: Keyboard::standard(),
            session: Session::new(),
            theme,
            exit: None,
        }
    }

    /// Classify and apply a key press for a terminal of the given height
    pub fn handle_key(&mut self, event: &KeyEvent, terminal_height: u16) -> Outcome {
        let key = classify(&RawKey::from(event));
        let capacity = self.keyboard.log_capacity(terminal_height);
        let outcome = self.session.apply(&key, capacity, Local::now());
        if let Outcome::Exit(exit) = outcome {
            self.exit = Some(exit);
        }
        outcome
    }

    /// Fit the log to the rows left below the separator at the new height
    pub fn handle_resize(&mut self, terminal_height: u16) {
        let capacity = self.keyboard.log_capacity(terminal_height);
        self.session.trim_log(capacity);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn capacity_follows_terminal_height() {
        let mut app = App::default();
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);

        for _ in 0..10 {
            app.handle_key(&key, 40);
        }
        // 40 rows - separator at 35 - 1
        assert_eq!(app.session.log().len(), 4);

        app.handle_key(&key, 38);
        assert_eq!(app.session.log().len(), 2);

        app.handle_key(&key, 30);
        assert!(app.session.log().is_empty());
    }

    #[test]
    fn resize_trims_log_without_a_key_press() {
        let mut app = App::default();
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        for _ in 0..8 {
            app.handle_key(&key, 45);
        }
        assert_eq!(app.session.log().len(), 8);

        app.handle_resize(40);
        assert_eq!(app.session.log().len(), 4);

        // Growing never brings entries back
        app.handle_resize(60);
        assert_eq!(app.session.log().len(), 4);
    }

    #[test]
    fn records_exit_key() {
        let mut app = App::default();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        for _ in 0..4 {
            assert_eq!(app.handle_key(&enter, 50), Outcome::Continue);
            assert!(app.exit.is_none());
        }
        assert_eq!(app.handle_key(&enter, 50), Outcome::Exit(ExitKey::Enter));
        assert_eq!(app.exit, Some(ExitKey::Enter));
    }
}
