use ratatui::{prelude::*, style::palette::tailwind};

/// Card theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_glow: Color,

    // Text colors
    pub text_primary: Color,
    pub text_soft: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_pink: Color,
    pub accent_hot_pink: Color,
    pub accent_cyan: Color,

    // Cake colors
    pub cake_plate: Color,
    pub cake_layer_dark: Color,
    pub cake_layer_mid: Color,
    pub cake_layer_light: Color,
    pub cake_icing: Color,
    pub candle: Color,
    pub flame_core: Color,
    pub flame_outer: Color,

    // Button colors
    pub button_bg: Color,
    pub button_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}

impl Theme {
    /// Dark night-sky theme with a pink glow (default)
    pub fn night() -> Self {
        Self {
            bg_primary: Color::Rgb(10, 10, 26),
            bg_glow: Color::Rgb(36, 14, 40),

            text_primary: Color::White,
            text_soft: Color::Rgb(255, 224, 243),
            text_muted: tailwind::PINK.c200,

            accent_pink: Color::Rgb(255, 155, 214),
            accent_hot_pink: Color::Rgb(255, 93, 182),
            accent_cyan: tailwind::CYAN.c300,

            cake_plate: Color::Rgb(231, 231, 241),
            cake_layer_dark: Color::Rgb(123, 75, 42),
            cake_layer_mid: Color::Rgb(138, 83, 46),
            cake_layer_light: Color::Rgb(156, 92, 50),
            cake_icing: Color::Rgb(255, 245, 234),
            candle: Color::Rgb(255, 63, 101),
            flame_core: Color::Rgb(255, 210, 106),
            flame_outer: Color::Rgb(255, 109, 0),

            button_bg: Color::Rgb(255, 63, 169),
            button_fg: Color::White,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the full-screen background
    pub fn background(&self) -> Style {
        Style::default().bg(self.bg_primary)
    }

    /// Style for big glowing titles
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent_pink)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the countdown digits
    pub fn countdown_digit(&self) -> Style {
        Style::default()
            .fg(self.accent_hot_pink)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the ring drawn around the countdown digits
    pub fn countdown_ring(&self) -> Style {
        Style::default().fg(self.accent_cyan)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for soft subtitle text
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_soft)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for button labels
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.button_fg)
            .bg(self.button_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Enter" in "Enter Start")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_hot_pink)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_soft)
    }

    /// Style for floating hearts
    pub fn heart(&self) -> Style {
        Style::default().fg(self.accent_hot_pink)
    }

    /// Style for the candle flame, pulsing between two colors
    pub fn flame(&self, bright: bool) -> Style {
        let color = if bright {
            self.flame_core
        } else {
            self.flame_outer
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Festive color for the n-th item of a rainbow sequence (balloons, flags, sprinkles)
    ///
    /// `step` is the hue distance between two consecutive items in degrees.
    pub fn festive(&self, index: usize, step: u16) -> Color {
        let hue = (index as u32 * step as u32) % 360;
        hsl(hue as f32, 0.9, 0.6)
    }
}

/// Convert an HSL color (hue in degrees, saturation and lightness in 0..=1) to RGB
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
        assert_eq!(hsl(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_hsl_wraps_hue() {
        assert_eq!(hsl(360.0, 1.0, 0.5), hsl(0.0, 1.0, 0.5));
        assert_eq!(hsl(-120.0, 1.0, 0.5), hsl(240.0, 1.0, 0.5));
    }

    #[test]
    fn test_festive_colors_cycle() {
        let theme = Theme::default();
        // 10 balloons, 36 degrees apart, wrap after a full circle
        assert_eq!(theme.festive(0, 36), theme.festive(10, 36));
        assert_ne!(theme.festive(0, 36), theme.festive(1, 36));
    }
}
