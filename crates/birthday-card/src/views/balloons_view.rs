use crate::actions::SequencerInput;
use crate::command_id::CommandId;
use crate::domain_models::ScreenId;
use crate::state::{AppState, Screen};
use crate::views::{time_ms, View};
use crate::widgets::balloons::BALLOON_HEIGHT;
use crate::widgets::button::{Button, BUTTON_HEIGHT};
use crate::widgets::{BalloonField, Bunting, Confetti};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

const BUNTING_HEIGHT: u16 = 4;

/// Balloons view - pop every balloon, then decorate the cake
#[derive(Debug, Clone)]
pub struct BalloonsView;

impl View for BalloonsView {
    fn view_id(&self) -> ScreenId {
        ScreenId::Balloons
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let Screen::Balloons(balloons) = state.sequencer.screen() else {
            return;
        };
        let theme = &state.theme;
        let time_ms = time_ms(state);

        let [bunting, field, greeting, _, footer] = Layout::vertical([
            Constraint::Length(BUNTING_HEIGHT),
            Constraint::Min(BALLOON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(area);

        f.render_widget(Bunting::new(theme), bunting);
        f.render_widget(BalloonField::new(balloons, time_ms, theme), field);

        f.render_widget(
            Paragraph::new(state.config.greeting_text())
                .style(theme.title())
                .alignment(Alignment::Center),
            greeting,
        );

        if balloons.all_popped() {
            f.render_widget(Confetti::new(time_ms, theme), field);
            f.render_widget(
                Button::new("✨ Decorate", theme)
                    .hint(state.keymap.compact_hint_for_command(CommandId::Confirm)),
                footer,
            );
        } else {
            f.render_widget(
                Paragraph::new("Tap the balloons to pop them 🎈")
                    .style(theme.subtitle())
                    .alignment(Alignment::Center),
                footer,
            );
        }
    }

    fn translate_command(&self, command: CommandId, state: &AppState) -> Option<SequencerInput> {
        let Screen::Balloons(balloons) = state.sequencer.screen() else {
            return None;
        };
        match command {
            CommandId::Confirm => Some(SequencerInput::Decorate),
            CommandId::PopNextBalloon => balloons.next_unpopped().map(SequencerInput::PopBalloon),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::BalloonId;
    use crate::views::test_support::{rendered, state_on};

    fn pop_all(state: &mut AppState) {
        for id in BalloonId::all() {
            state.sequencer.apply(SequencerInput::PopBalloon(id));
        }
    }

    #[test]
    fn test_greeting_and_hint_while_popping() {
        let text = rendered(&state_on(ScreenId::Balloons));
        assert!(text.contains("Happy Birthday, Cutiepiee!"));
        assert!(text.contains("Tap the balloons to pop them"));
        assert!(!text.contains("Decorate"));
    }

    #[test]
    fn test_decorate_button_once_all_popped() {
        let mut state = state_on(ScreenId::Balloons);
        pop_all(&mut state);
        let text = rendered(&state);
        assert!(text.contains("Decorate"));
        assert!(!text.contains("Tap the balloons"));
    }

    #[test]
    fn test_pop_next_when_nothing_left() {
        let mut state = state_on(ScreenId::Balloons);
        pop_all(&mut state);
        assert_eq!(
            BalloonsView.translate_command(CommandId::PopNextBalloon, &state),
            None
        );
    }
}
