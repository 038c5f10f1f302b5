//! Footer: progress through the card and the keys that do something right now

use crate::command_id::CommandId;
use crate::controls::Controls;
use crate::domain_models::ScreenId;
use crate::keybindings::Keymap;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use strum::IntoEnumIterator;

/// Key hints for the presented controls, as (keys, description) pairs
pub fn control_hints(controls: Controls, keymap: &Keymap) -> Vec<(String, &'static str)> {
    let confirm = || keymap.compact_hint_for_command(CommandId::Confirm);
    let mut hints: Vec<(String, &'static str)> = Vec::new();

    let mut push = |hint: Option<String>, description: &'static str| {
        if let Some(hint) = hint {
            hints.push((hint, description));
        }
    };

    if controls.contains(Controls::START) {
        push(confirm(), "start");
    }
    if controls.contains(Controls::LIGHT) {
        push(confirm(), "next");
    }
    if controls.contains(Controls::POP) {
        push(Some("0-9".to_string()), "pop balloon");
        push(
            keymap.compact_hint_for_command(CommandId::PopNextBalloon),
            "pop next",
        );
    }
    if controls.contains(Controls::DECORATE) {
        push(confirm(), "decorate");
    }
    if controls.contains(Controls::SPRINKLE) {
        push(
            keymap.compact_hint_for_command(CommandId::AddSprinkles),
            "add sprinkles",
        );
    }
    if controls.contains(Controls::CONTINUE) {
        push(confirm(), "continue");
    }
    if controls.contains(Controls::REPLAY) {
        push(confirm(), "replay");
    }
    push(keymap.compact_hint_for_command(CommandId::Quit), "quit");

    hints
}

/// Render the footer
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let current = state.sequencer.screen_id();

    let dots: Vec<Span> = ScreenId::iter()
        .map(|id| {
            if id == current {
                Span::styled("● ", theme.key_hint())
            } else if id < current {
                Span::styled("● ", theme.muted())
            } else {
                Span::styled("○ ", theme.muted())
            }
        })
        .collect();

    let mut keys = Vec::new();
    for (i, (hint, description)) in control_hints(state.sequencer.controls(), &state.keymap)
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            keys.push(Span::styled("  ·  ", theme.muted()));
        }
        keys.push(Span::styled(hint, theme.key_hint()));
        keys.push(Span::styled(format!(" {}", description), theme.key_description()));
    }

    let footer = Paragraph::new(vec![Line::from(dots), Line::from(keys)])
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
