//! Pink pill button with its key hint underneath

use birthday_card_theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Rows a button occupies
pub const BUTTON_HEIGHT: u16 = 2;

pub struct Button<'a> {
    label: &'a str,
    hint: Option<String>,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            hint: None,
            theme,
        }
    }

    /// Key(s) that press the button
    pub fn hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            format!("  {}  ", self.label),
            self.theme.button(),
        ))];
        if let Some(hint) = self.hint {
            lines.push(Line::from(Span::styled(
                format!("[{}]", hint),
                self.theme.key_hint(),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_hint() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, BUTTON_HEIGHT);
        let mut buf = Buffer::empty(area);
        Button::new("Replay", &theme)
            .hint(Some("Enter".to_string()))
            .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Replay"));
        assert!(text.contains("[Enter]"));
    }
}
