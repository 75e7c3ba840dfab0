// Frame rendering
//
// Paints the whole screen from scratch on every call: the keyboard, one
// separator row below it, and the key log underneath. Output depends only on
// the layout, the session and the theme.

use super::app::App;
use super::theme::Theme;
use crate::keyboard::{KeyRegion, Keyboard};
use crate::session::Session;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use ratatui::Frame;

const SEPARATOR: char = '-';

/// Main render function - called after every event
pub fn draw(f: &mut Frame, app: &App) {
    let view = KeyboardView::new(&app.keyboard, &app.session, &app.theme);
    f.render_widget(view, f.area());
}

/// Widget drawing the keyboard, separator and log
pub struct KeyboardView<'a> {
    keyboard: &'a Keyboard,
    session: &'a Session,
    theme: &'a Theme,
}

impl<'a> KeyboardView<'a> {
    pub fn new(keyboard: &'a Keyboard, session: &'a Session, theme: &'a Theme) -> Self {
        Self {
            keyboard,
            session,
            theme,
        }
    }
}

impl Widget for KeyboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for key in self.keyboard.keys() {
            let style = if self.session.pressed().contains(key.label) {
                self.theme.pressed
            } else {
                self.theme.key
            };
            render_key(key, style, area, buf);
        }

        let separator_y = area.y + self.keyboard.separator_row();
        if separator_y >= area.bottom() {
            return;
        }
        for x in area.left()..area.right() {
            buf[(x, separator_y)]
                .set_char(SEPARATOR)
                .set_style(self.theme.separator);
        }

        for (row, entry) in self.session.log().iter().enumerate() {
            let y = separator_y as usize + 1 + row;
            if y >= area.bottom() as usize {
                break;
            }
            buf.set_stringn(
                area.x,
                y as u16,
                entry.to_string(),
                area.width as usize,
                self.theme.log,
            );
        }
    }
}

/// Fill a key's rectangle and centre its label on the top row, clipped to `area`
fn render_key(key: &KeyRegion, style: Style, area: Rect, buf: &mut Buffer) {
    let rect = Rect::new(area.x + key.x, area.y + key.y, key.width, key.height);
    let visible = rect.intersection(area);
    if visible.is_empty() {
        return;
    }

    buf.set_style(visible, style);
    for y in visible.top()..visible.bottom() {
        for x in visible.left()..visible.right() {
            buf[(x, y)].set_char(' ');
        }
    }

    if rect.y < area.bottom() {
        let label_x = area.x + key.label_x();
        if label_x < area.right() {
            let room = (area.right() - label_x) as usize;
            buf.set_stringn(label_x, rect.y, key.label, room, style);
        }
    }
}
