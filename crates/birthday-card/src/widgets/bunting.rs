//! Bunting - a garland of little flags across the top

use birthday_card_theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::plot;

/// Number of flags on the garland
pub const FLAG_COUNT: u16 = 18;

/// Rows the garland sags in its middle
const SAG: f64 = 2.0;

/// A sagging string of colored flags
pub struct Bunting<'a> {
    theme: &'a Theme,
}

impl<'a> Bunting<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Bunting<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let string_style = self.theme.muted();
        let last = (area.width - 1) as f64;
        let sag_at = |x: u16| {
            let t = x as f64 / last * 2.0 - 1.0;
            ((1.0 - t * t) * SAG).round() as u16
        };

        for x in 0..area.width {
            plot(buf, area, x, sag_at(x), "─", string_style);
        }

        let spacing = area.width as f64 / FLAG_COUNT as f64;
        for i in 0..FLAG_COUNT {
            let x = ((i as f64 + 0.5) * spacing) as u16;
            let style = Style::default().fg(self.theme.festive(i as usize, 20));
            plot(buf, area, x, sag_at(x) + 1, "▼", style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_flags_are_drawn() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 72, 5);
        let mut buf = Buffer::empty(area);
        Bunting::new(&theme).render(area, &mut buf);

        let flags = buf.content().iter().filter(|c| c.symbol() == "▼").count();
        assert_eq!(flags, FLAG_COUNT as usize);
    }

    #[test]
    fn test_garland_sags_in_the_middle() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        Bunting::new(&theme).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "─");
        assert_eq!(buf[(20, 2)].symbol(), "─");
    }
}
