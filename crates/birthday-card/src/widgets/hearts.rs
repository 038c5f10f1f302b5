//! Floating hearts

use birthday_card_theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::{cycle, plot, scale, unit};

/// Number of hearts floating at once
pub const HEART_COUNT: u64 = 14;

/// Hearts rising slowly from the bottom to the top of the area
pub struct Hearts<'a> {
    time_ms: u64,
    theme: &'a Theme,
}

impl<'a> Hearts<'a> {
    pub fn new(time_ms: u64, theme: &'a Theme) -> Self {
        Self { time_ms, theme }
    }
}

impl Widget for Hearts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for i in 0..HEART_COUNT {
            let seed = i * 7 + 1;
            let period = 6_000 + (unit(seed) * 4_000.0) as u64;
            let progress = cycle(self.time_ms, period, unit(seed + 1));

            let x = scale(unit(seed + 2), area.width);
            let y = area.height - 1 - scale(progress, area.height);
            // Hearts fade as they rise
            let style: Style = if progress < 0.6 {
                self.theme.heart()
            } else {
                self.theme.muted()
            };
            plot(buf, area, x, y, "♥", style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hearts_in(buf: &Buffer) -> usize {
        buf.content().iter().filter(|cell| cell.symbol() == "♥").count()
    }

    #[test]
    fn test_hearts_stay_inside_area() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 12);
        for time_ms in [0, 1_234, 99_999] {
            let mut buf = Buffer::empty(area);
            Hearts::new(time_ms, &theme).render(area, &mut buf);
            let count = hearts_in(&buf);
            assert!(count > 0 && count <= HEART_COUNT as usize);
        }
    }

    #[test]
    fn test_hearts_move_over_time() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 12);
        let mut before = Buffer::empty(area);
        let mut after = Buffer::empty(area);
        Hearts::new(0, &theme).render(area, &mut before);
        Hearts::new(3_000, &theme).render(area, &mut after);
        assert_ne!(before, after);
    }

    #[test]
    fn test_empty_area_is_fine() {
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        Hearts::new(0, &theme).render(Rect::new(0, 0, 0, 0), &mut buf);
    }
}
