use crate::actions::SequencerInput;
use crate::command_id::CommandId;
use crate::domain_models::ScreenId;
use crate::state::AppState;
use crate::views::{centered_rows, time_ms, View};
use crate::widgets::button::{Button, BUTTON_HEIGHT};
use crate::widgets::{Banner, Confetti, Hearts};
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Finale view - the wish, with confetti
#[derive(Debug, Clone)]
pub struct FinaleView;

impl View for FinaleView {
    fn view_id(&self) -> ScreenId {
        ScreenId::Finale
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let time_ms = time_ms(state);
        f.render_widget(Confetti::new(time_ms, theme), area);
        f.render_widget(Hearts::new(time_ms, theme), area);

        let banner = Banner::new("Make a Wish", theme.title());
        let [title, sparkle, _, wish, _, button] =
            centered_rows(area, [banner.height(), 1, 1, 2, 1, BUTTON_HEIGHT]);

        f.render_widget(banner, title);
        f.render_widget(
            Paragraph::new("✨").alignment(Alignment::Center),
            sparkle,
        );
        f.render_widget(
            Paragraph::new(state.config.wish.as_str())
                .style(theme.subtitle())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            wish,
        );
        f.render_widget(
            Button::new("🔁 Replay", theme)
                .hint(state.keymap.compact_hint_for_command(CommandId::Confirm)),
            button,
        );
    }

    fn translate_command(&self, command: CommandId, _state: &AppState) -> Option<SequencerInput> {
        match command {
            CommandId::Confirm => Some(SequencerInput::Restart),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain_models::ScreenId;
    use crate::views::test_support::{rendered, state_on};

    #[test]
    fn test_wish_and_replay() {
        let text = rendered(&state_on(ScreenId::Finale));
        assert!(text.contains("May your year be filled with love, laughter and endless surprises!"));
        assert!(text.contains("Replay"));
    }
}
