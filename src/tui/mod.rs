// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - The blocking event loop (one event, one state update, one redraw)
// - Resize handling

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::session::Outcome;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::{CrosstermEvents, EventSource};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop until an exit counter trips,
/// and restores the terminal even if the loop failed.
pub fn run_tui(config: &Config) -> Result<App> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = restore_on_error(open_terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let mut app = App::new(config.theme.theme());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut CrosstermEvents);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result.map(|()| app)
}

fn open_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Run `setup`; if it fails, run `restore` before handing back the error so
/// a half-initialised terminal is not left in raw mode
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| restore())
}

/// Main event loop
///
/// Draws once up front, then for every event: classify and apply key
/// presses, fit the log and refresh the surface on resize, and redraw.
/// Returns when an exit counter reaches its threshold (without a final
/// redraw) or when the event source runs dry.
pub fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut impl EventSource,
) -> Result<()> {
    terminal
        .draw(|f| ui::draw(f, app))
        .context("Failed to draw terminal")?;

    while let Some(event) = events
        .next_event()
        .context("Failed to read terminal event")?
    {
        match event {
            Event::Key(key) if input::is_keypress(&key) => {
                let height = terminal.size().context("Failed to query terminal size")?.height;
                if let Outcome::Exit(exit) = app.handle_key(&key, height) {
                    tracing::info!(key = exit.name(), "Session ended");
                    return Ok(());
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                app.handle_resize(height);
                // Force a full repaint at the new geometry
                terminal.clear().context("Failed to refresh terminal")?;
            }
            _ => continue,
        }

        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;
    }

    tracing::debug!("Event source closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ExitKey;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use input::ScriptedEvents;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).expect("terminal")
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn five_escapes_end_the_loop() {
        let mut terminal = terminal(80, 45);
        let mut app = App::default();
        let mut events = ScriptedEvents::new(
            std::iter::repeat(key(KeyCode::Esc))
                .take(5)
                .chain([key(KeyCode::Char('a'))]),
        );

        run_event_loop(&mut terminal, &mut app, &mut events).unwrap();

        assert_eq!(app.exit, Some(ExitKey::Escape));
        assert!(!app.session.pressed().contains("A"));
        // The trailing event is never read
        assert_eq!(events.next_event().unwrap(), Some(key(KeyCode::Char('a'))));
    }

    #[test]
    fn initial_frame_is_drawn_before_any_event() {
        let mut terminal = terminal(80, 40);
        let mut app = App::default();
        let mut events = ScriptedEvents::default();

        run_event_loop(&mut terminal, &mut app, &mut events).unwrap();

        assert!(row_text(&terminal, 0).starts_with(" Esc "));
        assert_eq!(row_text(&terminal, 35), "-".repeat(80));
        assert!(app.exit.is_none());
    }

    #[test]
    fn each_key_is_logged_below_separator() {
        let mut terminal = terminal(60, 40);
        let mut app = App::default();
        let mut events = ScriptedEvents::new([key(KeyCode::Char('q')), key(KeyCode::F(2))]);

        run_event_loop(&mut terminal, &mut app, &mut events).unwrap();

        assert!(row_text(&terminal, 36).contains("| Q         | Code=256 | Mods=None"));
        assert!(row_text(&terminal, 37).contains("| F2        | Code=280 | Mods=None"));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut terminal = terminal(80, 40);
        let mut app = App::default();
        let release = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        let mut events = ScriptedEvents::new(std::iter::repeat(release).take(6));

        run_event_loop(&mut terminal, &mut app, &mut events).unwrap();

        assert_eq!(app.session.counters().enter, 0);
        assert!(app.session.log().is_empty());
    }

    #[test]
    fn resize_changes_capacity_for_following_keys() {
        let mut terminal = terminal(80, 45);
        let mut app = App::default();
        let mut events = ScriptedEvents::new(
            std::iter::repeat(key(KeyCode::Char('x'))).take(8),
        );
        run_event_loop(&mut terminal, &mut app, &mut events).unwrap();
        assert_eq!(app.session.log().len(), 8);

        terminal.backend_mut().resize(80, 40);
        let mut events = ScriptedEvents::new([Event::Resize(80, 40)]);
        run_event_loop(&mut terminal, &mut app, &mut events).unwrap();

        // 40 - 35 - 1, trimmed before any further key
        assert_eq!(app.session.log().len(), 4);
        assert!(row_text(&terminal, 39).contains("| X "));

        let mut events = ScriptedEvents::new([key(KeyCode::Char('y'))]);
        run_event_loop(&mut terminal, &mut app, &mut events).unwrap();
        assert_eq!(app.session.log().len(), 4);
        assert!(row_text(&terminal, 39).contains("| Y "));
    }

    #[test]
    fn shrinking_terminal_keeps_newest_entries_visible() {
        let mut terminal = terminal(80, 45);
        let mut app = App::default();
        let mut events = ScriptedEvents::new(('a'..='h').map(|c| key(KeyCode::Char(c))));
        run_event_loop(&mut terminal, &mut app, &mut events).unwrap();

        terminal.backend_mut().resize(80, 40);
        let mut events = ScriptedEvents::new([Event::Resize(80, 40)]);
        run_event_loop(&mut terminal, &mut app, &mut events).unwrap();

        let labels: Vec<&str> = app.session.log().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["E", "F", "G", "H"]);
        assert!(row_text(&terminal, 36).contains("| E "));
        assert!(row_text(&terminal, 39).contains("| H "));
    }

    #[test]
    fn failed_setup_runs_restore() {
        let mut restored = false;
        let result: Result<()> =
            restore_on_error(|| Err(anyhow::anyhow!("no tty")), || restored = true);
        assert!(result.is_err());
        assert!(restored);

        let mut restored = false;
        let value = restore_on_error(|| Ok(7), || restored = true).unwrap();
        assert_eq!(value, 7);
        assert!(!restored);
    }
}
