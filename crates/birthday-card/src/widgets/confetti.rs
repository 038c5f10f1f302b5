//! Falling confetti

use birthday_card_theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::{cycle, plot, scale, unit};

/// Number of confetti pieces
pub const CONFETTI_COUNT: u64 = 90;

const SHAPES: [&str; 4] = ["▪", "•", "◆", "▴"];

/// Confetti raining down through the area
pub struct Confetti<'a> {
    time_ms: u64,
    theme: &'a Theme,
}

impl<'a> Confetti<'a> {
    pub fn new(time_ms: u64, theme: &'a Theme) -> Self {
        Self { time_ms, theme }
    }
}

impl Widget for Confetti<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for i in 0..CONFETTI_COUNT {
            let seed = i * 13 + 5;
            let period = 2_500 + (unit(seed) * 2_500.0) as u64;
            let progress = cycle(self.time_ms, period, unit(seed + 1));

            // Sideways sway of up to two cells
            let sway = (progress * std::f64::consts::TAU * 2.0 + unit(seed + 2) * 6.0).sin() * 2.0;
            let column = unit(seed + 3) * area.width as f64 + sway;
            let x = scale((column / area.width as f64).clamp(0.0, 1.0), area.width);
            let y = scale(progress, area.height);

            let shape = SHAPES[(i as usize) % SHAPES.len()];
            let style = Style::default().fg(self.theme.festive(i as usize, 47));
            plot(buf, area, x, y, shape, style);
        }
    }
}
