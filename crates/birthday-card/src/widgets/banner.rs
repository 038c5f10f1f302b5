//! Large FIGlet text with a plain fallback

use figlet_rs::FIGfont;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Text rendered in the standard FIGlet font when it fits, as plain text otherwise
pub struct Banner<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> Banner<'a> {
    pub fn new(text: &'a str, style: Style) -> Self {
        Self { text, style }
    }

    /// Rows needed to render the large version
    pub fn height(&self) -> u16 {
        self.figure().map_or(1, |lines| lines.len() as u16)
    }

    fn figure(&self) -> Option<Vec<String>> {
        let font = FIGfont::standard().ok()?;
        let figure = font.convert(self.text)?;
        let lines: Vec<String> = figure
            .to_string()
            .lines()
            .map(String::from)
            .filter(|line| !line.trim().is_empty())
            .collect();
        (!lines.is_empty()).then_some(lines)
    }

    fn fitting_lines(&self, area: Rect) -> Vec<String> {
        self.figure()
            .filter(|lines| {
                lines.len() <= area.height as usize
                    && lines
                        .iter()
                        .all(|line| line.chars().count() <= area.width as usize)
            })
            .unwrap_or_else(|| vec![self.text.to_string()])
    }
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Pad to a common width so centering keeps the glyphs aligned
        let lines = self.fitting_lines(area);
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines: Vec<Line> = lines
            .into_iter()
            .map(|line| Line::styled(format!("{:<width$}", line, width = width), self.style))
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(banner: Banner, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        banner.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_large_text_when_it_fits() {
        let banner = Banner::new("3", Style::default());
        assert!(banner.height() > 1);
        let text = rendered(banner, Rect::new(0, 0, 30, 8));
        assert!(!text.contains('3'));
        assert!(text.trim().len() > 1);
    }

    #[test]
    fn test_plain_text_when_too_narrow() {
        let banner = Banner::new("Make a Wish", Style::default());
        let text = rendered(banner, Rect::new(0, 0, 20, 8));
        assert!(text.contains("Make a Wish"));
    }
}
