//! The cake drawing: plate, three layers, icing, candle and sprinkles

use birthday_card_theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::{plot, scale, unit};

/// Outer width of the drawing (the plate)
pub const CAKE_WIDTH: u16 = 24;
/// Height of the drawing including the candle
pub const CAKE_HEIGHT: u16 = 8;

/// Width of the cake layers
const LAYER_WIDTH: u16 = 20;
const LAYER_X: u16 = (CAKE_WIDTH - LAYER_WIDTH) / 2;
const FIRST_LAYER_ROW: u16 = 4;
/// Half a period of the flame pulse
const FLAME_PULSE_MS: u64 = 600;

/// The candle on top of the cake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candle {
    None,
    Unlit,
    Lit,
}

/// A layered cake centered in its area
pub struct Cake<'a> {
    candle: Candle,
    sprinkles: u8,
    time_ms: u64,
    theme: &'a Theme,
}

impl<'a> Cake<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            candle: Candle::None,
            sprinkles: 0,
            time_ms: 0,
            theme,
        }
    }

    pub fn candle(mut self, candle: Candle) -> Self {
        self.candle = candle;
        self
    }

    pub fn sprinkles(mut self, sprinkles: u8) -> Self {
        self.sprinkles = sprinkles;
        self
    }

    pub fn time_ms(mut self, time_ms: u64) -> Self {
        self.time_ms = time_ms;
        self
    }

    fn layer_color(&self, row: u16) -> Color {
        match row {
            4 => self.theme.cake_layer_light,
            5 => self.theme.cake_layer_mid,
            _ => self.theme.cake_layer_dark,
        }
    }
}

impl Widget for Cake<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = CAKE_WIDTH.min(area.width);
        let height = CAKE_HEIGHT.min(area.height);
        let cake = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        let center = CAKE_WIDTH / 2;

        match self.candle {
            Candle::None => {}
            Candle::Unlit => {
                plot(buf, cake, center, 0, "╷", self.theme.muted());
                plot(buf, cake, center, 1, "┃", Style::default().fg(self.theme.candle));
            }
            Candle::Lit => {
                let bright = (self.time_ms / FLAME_PULSE_MS) % 2 == 0;
                plot(buf, cake, center, 0, "▲", self.theme.flame(bright));
                plot(buf, cake, center, 1, "┃", Style::default().fg(self.theme.candle));
            }
        }

        let icing = Style::default().fg(self.theme.cake_icing);
        for x in LAYER_X..LAYER_X + LAYER_WIDTH {
            plot(buf, cake, x, 2, "▄", icing);
            let drip = if x % 2 == 0 { "▀" } else { "▄" };
            plot(buf, cake, x, 3, drip, icing.bg(self.theme.cake_layer_light));
            for row in FIRST_LAYER_ROW..FIRST_LAYER_ROW + 3 {
                plot(buf, cake, x, row, " ", Style::default().bg(self.layer_color(row)));
            }
        }

        for i in 0..self.sprinkles as u64 {
            let x = LAYER_X + scale(unit(i * 31 + 7), LAYER_WIDTH);
            let row = FIRST_LAYER_ROW + scale(unit(i * 31 + 8), 3);
            let style = Style::default()
                .fg(self.theme.festive(i as usize, 47))
                .bg(self.layer_color(row));
            plot(buf, cake, x, row, "▬", style);
        }

        let plate = Style::default().fg(self.theme.cake_plate);
        for x in 0..CAKE_WIDTH {
            plot(buf, cake, x, 7, "▀", plate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(cake: Cake) -> Buffer {
        let area = Rect::new(0, 0, CAKE_WIDTH, CAKE_HEIGHT);
        let mut buf = Buffer::empty(area);
        cake.render(area, &mut buf);
        buf
    }

    fn count(buf: &Buffer, symbol: &str) -> usize {
        buf.content().iter().filter(|c| c.symbol() == symbol).count()
    }

    #[test]
    fn test_candle_states() {
        let theme = Theme::default();
        assert_eq!(count(&draw(Cake::new(&theme)), "┃"), 0);

        let unlit = draw(Cake::new(&theme).candle(Candle::Unlit));
        assert_eq!(count(&unlit, "┃"), 1);
        assert_eq!(count(&unlit, "▲"), 0);

        let lit = draw(Cake::new(&theme).candle(Candle::Lit));
        assert_eq!(count(&lit, "▲"), 1);
    }

    #[test]
    fn test_flame_pulses() {
        let theme = Theme::default();
        let flame_style = |time_ms| {
            let buf = draw(Cake::new(&theme).candle(Candle::Lit).time_ms(time_ms));
            buf[(CAKE_WIDTH / 2, 0)].fg
        };
        assert_ne!(flame_style(0), flame_style(FLAME_PULSE_MS));
        assert_eq!(flame_style(0), flame_style(FLAME_PULSE_MS * 2));
    }

    #[test]
    fn test_sprinkles_land_on_the_layers() {
        let theme = Theme::default();
        let buf = draw(Cake::new(&theme).sprinkles(40));
        let sprinkles = count(&buf, "▬");
        assert!(sprinkles > 0 && sprinkles <= 40);
        for (i, cell) in buf.content().iter().enumerate() {
            if cell.symbol() == "▬" {
                let row = i as u16 / CAKE_WIDTH;
                assert!((FIRST_LAYER_ROW..FIRST_LAYER_ROW + 3).contains(&row));
            }
        }
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        Cake::new(&theme)
            .candle(Candle::Lit)
            .sprinkles(80)
            .render(area, &mut buf);
    }
}
