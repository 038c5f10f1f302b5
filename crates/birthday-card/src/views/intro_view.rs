use crate::actions::SequencerInput;
use crate::command_id::CommandId;
use crate::domain_models::ScreenId;
use crate::state::AppState;
use crate::views::{centered_rows, time_ms, View};
use crate::widgets::button::{Button, BUTTON_HEIGHT};
use crate::widgets::Hearts;
use ratatui::{
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const BEAR: &str = "ʕ•ᴥ•ʔ";

/// Intro view - reveals who the card is for
#[derive(Debug, Clone)]
pub struct IntroView;

impl View for IntroView {
    fn view_id(&self) -> ScreenId {
        ScreenId::Intro
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        f.render_widget(Hearts::new(time_ms(state), theme), area);

        let [bear, _, headline, _, subtitle, _, button] =
            centered_rows(area, [1, 1, 2, 1, 1, 1, BUTTON_HEIGHT]);

        f.render_widget(
            Paragraph::new(BEAR)
                .style(theme.title())
                .alignment(Alignment::Center),
            bear,
        );
        f.render_widget(
            Paragraph::new(state.config.headline_text())
                .style(theme.title())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            headline,
        );
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Yes, it's ", theme.subtitle()),
                Span::styled("YOU!", theme.subtitle()).bold(),
                Span::styled(" A little surprise awaits…", theme.subtitle()),
            ]))
            .alignment(Alignment::Center),
            subtitle,
        );
        f.render_widget(
            Button::new("⭐ Start the surprise", theme)
                .hint(state.keymap.compact_hint_for_command(CommandId::Confirm)),
            button,
        );
    }

    fn translate_command(&self, command: CommandId, _state: &AppState) -> Option<SequencerInput> {
        match command {
            CommandId::Confirm => Some(SequencerInput::Start),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain_models::ScreenId;
    use crate::views::test_support::{rendered, state_on};

    #[test]
    fn test_intro_texts() {
        let text = rendered(&state_on(ScreenId::Intro));
        assert!(text.contains("A Cutiepie was born today, 21 years ago!"));
        assert!(text.contains("Yes, it's YOU! A little surprise awaits"));
        assert!(text.contains("Start the surprise"));
        assert!(text.contains("[Enter/Space]"));
    }

    #[test]
    fn test_headline_uses_configured_age() {
        let mut state = state_on(ScreenId::Intro);
        state.config.age = 30;
        assert!(rendered(&state).contains("30 years ago!"));
    }
}
