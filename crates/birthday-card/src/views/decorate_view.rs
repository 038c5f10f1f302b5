use crate::actions::SequencerInput;
use crate::command_id::CommandId;
use crate::domain_models::ScreenId;
use crate::state::{AppState, Screen, MAX_SPRINKLES};
use crate::views::{centered_rows, time_ms, View};
use crate::widgets::button::{Button, BUTTON_HEIGHT};
use crate::widgets::cake::{Cake, Candle, CAKE_HEIGHT};
use crate::widgets::Hearts;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

/// Decorate view - sprinkle the cake as much as you like
#[derive(Debug, Clone)]
pub struct DecorateView;

impl View for DecorateView {
    fn view_id(&self) -> ScreenId {
        ScreenId::Decorate
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let Screen::Decorate(decorate) = state.sequencer.screen() else {
            return;
        };
        let theme = &state.theme;
        f.render_widget(Hearts::new(time_ms(state), theme), area);

        let [cake, _, counter, _, buttons] =
            centered_rows(area, [CAKE_HEIGHT, 1, 1, 1, BUTTON_HEIGHT]);

        f.render_widget(
            Cake::new(theme)
                .candle(Candle::Unlit)
                .sprinkles(decorate.sprinkles),
            cake,
        );
        f.render_widget(
            Paragraph::new(format!("Sprinkles: {}/{}", decorate.sprinkles, MAX_SPRINKLES))
                .style(theme.subtitle())
                .alignment(Alignment::Center),
            counter,
        );

        let [sprinkle, proceed] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(buttons);
        f.render_widget(
            Button::new("✨ Add Sprinkles", theme)
                .hint(state.keymap.compact_hint_for_command(CommandId::AddSprinkles)),
            sprinkle,
        );
        f.render_widget(
            Button::new("💖 Continue", theme)
                .hint(state.keymap.compact_hint_for_command(CommandId::Confirm)),
            proceed,
        );
    }

    fn translate_command(&self, command: CommandId, _state: &AppState) -> Option<SequencerInput> {
        match command {
            CommandId::Confirm => Some(SequencerInput::Continue),
            CommandId::AddSprinkles => Some(SequencerInput::AddSprinkles),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::SequencerInput;
    use crate::domain_models::ScreenId;
    use crate::views::test_support::{rendered, state_on};

    #[test]
    fn test_sprinkle_counter() {
        let mut state = state_on(ScreenId::Decorate);
        assert!(rendered(&state).contains("Sprinkles: 0/80"));

        for _ in 0..3 {
            state.sequencer.apply(SequencerInput::AddSprinkles);
        }
        let text = rendered(&state);
        assert!(text.contains("Sprinkles: 30/80"));
        assert!(text.contains('▬'));
    }

    #[test]
    fn test_both_buttons_are_shown() {
        let text = rendered(&state_on(ScreenId::Decorate));
        assert!(text.contains("Add Sprinkles"));
        assert!(text.contains("Continue"));
    }
}
