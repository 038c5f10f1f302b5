use crate::domain_models::ScreenId;
use crate::state::{AppState, Screen};
use crate::views::{centered_column, centered_rows, time_ms, View};
use crate::widgets::{Banner, Hearts};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

/// Width of the ring around the countdown number
const RING_WIDTH: u16 = 16;

/// Countdown view - a big number counting down to the surprise
#[derive(Debug, Clone)]
pub struct CountdownView;

impl View for CountdownView {
    fn view_id(&self) -> ScreenId {
        ScreenId::Countdown
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let Screen::Countdown(countdown) = state.sequencer.screen() else {
            return;
        };
        let theme = &state.theme;
        f.render_widget(Hearts::new(time_ms(state), theme), area);

        let number = countdown.remaining.to_string();
        let banner = Banner::new(&number, theme.countdown_digit());
        let [ring, _, subtitle] = centered_rows(area, [banner.height() + 2, 1, 1]);

        let ring = centered_column(ring, RING_WIDTH);
        f.render_widget(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme.countdown_ring()),
            ring,
        );
        f.render_widget(banner, ring.inner(Margin::new(1, 1)));

        f.render_widget(
            Paragraph::new("Crafting your special moment…")
                .style(theme.subtitle())
                .alignment(Alignment::Center),
            subtitle,
        );
    }
}
