//! The balloon field: one bobbing balloon per id, labelled with its key

use birthday_card_theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::{cycle, plot, unit};
use crate::domain_models::{BalloonId, BALLOON_COUNT};
use crate::state::BalloonsState;

/// Rows of a single balloon including its string
pub const BALLOON_HEIGHT: u16 = 4;
const BALLOON_WIDTH: u16 = 3;
/// Rows a balloon bobs up and down at most
const MAX_BOB: u16 = 3;
const BOB_PERIOD_MS: u64 = 3_000;

/// Balloons that have not been popped yet, spread across the area
pub struct BalloonField<'a> {
    balloons: &'a BalloonsState,
    time_ms: u64,
    theme: &'a Theme,
}

impl<'a> BalloonField<'a> {
    pub fn new(balloons: &'a BalloonsState, time_ms: u64, theme: &'a Theme) -> Self {
        Self {
            balloons,
            time_ms,
            theme,
        }
    }

    /// Column of a balloon's left edge, relative to the area
    fn column(id: BalloonId, width: u16) -> u16 {
        let slot = width / BALLOON_COUNT as u16;
        id.index() as u16 * slot + slot.saturating_sub(BALLOON_WIDTH) / 2
    }

    /// Row of a balloon's top edge, relative to the area
    fn row(&self, id: BalloonId, height: u16) -> u16 {
        let room = height.saturating_sub(BALLOON_HEIGHT).min(MAX_BOB);
        let phase = cycle(self.time_ms, BOB_PERIOD_MS, unit(id.index() as u64 + 101));
        let bob = ((phase * std::f64::consts::TAU).sin() + 1.0) / 2.0;
        height.saturating_sub(BALLOON_HEIGHT) - (bob * room as f64).round() as u16
    }
}

impl Widget for BalloonField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < BALLOON_COUNT as u16 || area.height == 0 {
            return;
        }
        for id in BalloonId::all().filter(|id| !self.balloons.is_popped(*id)) {
            let x = Self::column(id, area.width);
            let y = self.row(id, area.height);
            let style = Style::default().fg(self.theme.festive(id.index(), 36));
            let label = id.to_string();

            let rows: [[&str; 3]; BALLOON_HEIGHT as usize] = [
                ["╭", "─", "╮"],
                ["│", &label, "│"],
                ["╰", "┬", "╯"],
                [" ", "╎", " "],
            ];
            for (dy, row) in rows.iter().enumerate() {
                for (dx, symbol) in row.iter().enumerate() {
                    let string = dy == BALLOON_HEIGHT as usize - 1;
                    let style = if string { self.theme.muted() } else { style };
                    plot(buf, area, x + dx as u16, y + dy as u16, symbol, style);
                }
            }
        }
    }
}
