//! Decorative widgets
//!
//! Everything in here is cosmetic. Positions are derived from the animation
//! time and a per-piece seed, so a frame renders the same way no matter how
//! often it is drawn.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

pub mod balloons;
pub mod banner;
pub mod bunting;
pub mod button;
pub mod cake;
pub mod confetti;
pub mod hearts;

pub use balloons::BalloonField;
pub use banner::Banner;
pub use bunting::Bunting;
pub use confetti::Confetti;
pub use hearts::Hearts;

/// Deterministic pseudo-random value in `0.0..1.0` for a seed (splitmix64)
pub fn unit(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

/// Progress in `0.0..1.0` through a repeating cycle, shifted by `phase`
pub fn cycle(time_ms: u64, period_ms: u64, phase: f64) -> f64 {
    if period_ms == 0 {
        return 0.0;
    }
    let t = (time_ms % period_ms) as f64 / period_ms as f64;
    (t + phase).fract()
}

/// Scale a unit value onto `0..len`
fn scale(value: f64, len: u16) -> u16 {
    if len == 0 {
        return 0;
    }
    ((value * len as f64) as u16).min(len - 1)
}

/// Draw a single symbol at a position relative to `area`, clipped to it
fn plot(buf: &mut Buffer, area: Rect, x: u16, y: u16, symbol: &str, style: Style) {
    if x >= area.width || y >= area.height {
        return;
    }
    if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
        cell.set_symbol(symbol).set_style(style);
    }
}
