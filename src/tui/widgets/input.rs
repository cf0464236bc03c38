//! Text input widget
//!
//! A single-line text field with a cursor. The cursor is a character index,
//! so multi-byte input is edited safely.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set content and move the cursor to its end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    /// First visible character when `width` columns are available
    ///
    /// A focused input scrolls so the cursor cell stays on screen.
    pub fn scroll_offset(&self, width: usize) -> usize {
        if !self.focused || width == 0 {
            return 0;
        }
        self.cursor.saturating_sub(width - 1)
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width);
        if width == 0 {
            return;
        }

        if self.content.is_empty() {
            buf.set_stringn(
                area.x,
                area.y,
                &self.placeholder,
                width,
                Style::default().fg(Color::DarkGray),
            );
        } else {
            let style = if self.focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Yellow)
            };
            let offset = self.scroll_offset(width);
            let visible: String = self.content.chars().skip(offset).take(width).collect();
            buf.set_stringn(area.x, area.y, visible, width, style);
        }

        if self.focused {
            let column = self.cursor - self.scroll_offset(width);
            if let Ok(column) = u16::try_from(column) {
                if column < area.width {
                    let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                    buf.set_string(
                        area.x + column,
                        area.y,
                        cursor_char.to_string(),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_at_cursor() {
        let mut input = TextInput::new().content("Ravi");
        input.move_start();
        input.insert('S');
        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "SRav");
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().content("José");
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "Jos");
        input.insert('é');
        input.insert('!');
        assert_eq!(input.value(), "José!");
    }

    fn rendered(input: &TextInput, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_long_text_scrolls_to_keep_cursor_visible() {
        let input = TextInput::new()
            .content("Guest house, Whitefield")
            .focused(true);
        let buf = rendered(&input, 10);

        // Cursor sits after the last character, in the final column
        assert_eq!(input.scroll_offset(10), 14);
        assert_eq!(row_text(&buf), "hitefield ");
        assert_eq!(buf.content()[9].bg, Color::Cyan);
    }

    #[test]
    fn test_scroll_follows_cursor_back_to_start() {
        let mut input = TextInput::new()
            .content("Guest house, Whitefield")
            .focused(true);
        input.move_start();
        let buf = rendered(&input, 10);

        assert_eq!(input.scroll_offset(10), 0);
        assert_eq!(row_text(&buf), "Guest hous");
        assert_eq!(buf.content()[0].bg, Color::Cyan);
    }

    #[test]
    fn test_unfocused_input_shows_the_start() {
        let input = TextInput::new().content("Guest house, Whitefield");
        assert_eq!(input.scroll_offset(10), 0);
        assert_eq!(row_text(&rendered(&input, 10)), "Guest hous");
    }
}
