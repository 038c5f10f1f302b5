use crate::actions::SequencerInput;
use crate::command_id::CommandId;
use crate::domain_models::ScreenId;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    widgets::Block,
    Frame,
};

pub mod balloons_view;
pub mod cake_view;
pub mod countdown_view;
pub mod decorate_view;
pub mod finale_view;
pub mod footer;
pub mod intro_view;

pub use balloons_view::BalloonsView;
pub use cake_view::CakeView;
pub use countdown_view::CountdownView;
pub use decorate_view::DecorateView;
pub use finale_view::FinaleView;
pub use intro_view::IntroView;

/// Rows reserved for the footer
const FOOTER_HEIGHT: u16 = 2;

/// View trait - one implementation per screen of the card
///
/// Views are stateless: everything they show comes from `AppState`, and they
/// never mutate it. They are used as trait objects (`Box<dyn View>`), so the
/// trait stays object-safe.
pub trait View: std::fmt::Debug + Send {
    /// The screen this view renders
    fn view_id(&self) -> ScreenId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Translate a semantic command into this screen's sequencer input.
    ///
    /// The default implementation returns None, meaning the command does
    /// nothing on this screen.
    fn translate_command(
        &self,
        _command: CommandId,
        _state: &AppState,
    ) -> Option<SequencerInput> {
        None
    }
}

/// The view for a screen
pub fn view_for(id: ScreenId) -> Box<dyn View> {
    match id {
        ScreenId::Countdown => Box::new(CountdownView),
        ScreenId::Intro => Box::new(IntroView),
        ScreenId::Cake => Box::new(CakeView),
        ScreenId::Balloons => Box::new(BalloonsView),
        ScreenId::Decorate => Box::new(DecorateView),
        ScreenId::Finale => Box::new(FinaleView),
    }
}

/// Render the whole card: background, the active screen and the footer
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(state.theme.background()), area);

    let [content, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);

    state.active_view().render(state, content, f);
    footer::render(state, footer_area, f);
}

/// Stack rows of the given heights in the vertical center of `area`
pub(crate) fn centered_rows<const N: usize>(area: Rect, heights: [u16; N]) -> [Rect; N] {
    Layout::vertical(heights.map(Constraint::Length))
        .flex(Flex::Center)
        .areas(area)
}

/// A column of the given width in the horizontal center of `area`
pub(crate) fn centered_column(area: Rect, width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    column
}

/// Current animation time in milliseconds
pub(crate) fn time_ms(state: &AppState) -> u64 {
    state.animation_time().as_millis() as u64
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::state::Sequencer;
    use ratatui::{backend::TestBackend, Terminal};

    /// State that has just entered `id`
    pub fn state_on(id: ScreenId) -> AppState {
        AppState {
            sequencer: Sequencer::entered(id),
            ..AppState::default()
        }
    }

    /// Render the card and return its text row by row
    pub fn rendered(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 34)).unwrap();
        terminal
            .draw(|f| render(state, f.area(), f))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
