use crate::actions::SequencerInput;
use crate::command_id::CommandId;
use crate::domain_models::ScreenId;
use crate::state::{AppState, Screen};
use crate::views::{centered_rows, time_ms, View};
use crate::widgets::button::{Button, BUTTON_HEIGHT};
use crate::widgets::cake::{Cake, Candle, CAKE_HEIGHT};
use crate::widgets::{Bunting, Hearts};
use ratatui::{layout::Rect, Frame};

/// Rows of the garland at the top
const BUNTING_HEIGHT: u16 = 4;

/// Cake view - light the candle, then head to the balloons
#[derive(Debug, Clone)]
pub struct CakeView;

impl View for CakeView {
    fn view_id(&self) -> ScreenId {
        ScreenId::Cake
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let Screen::Cake(cake) = state.sequencer.screen() else {
            return;
        };
        let theme = &state.theme;
        let time_ms = time_ms(state);

        f.render_widget(Hearts::new(time_ms, theme), area);
        f.render_widget(
            Bunting::new(theme),
            Rect {
                height: BUNTING_HEIGHT.min(area.height),
                ..area
            },
        );

        let [cake_area, _, button] = centered_rows(area, [CAKE_HEIGHT, 1, BUTTON_HEIGHT]);

        let (candle, label) = if cake.candle_lit {
            (Candle::Lit, "🎈 Pop the Balloons")
        } else {
            (Candle::Unlit, "🔥 Light the Candle")
        };
        f.render_widget(Cake::new(theme).candle(candle).time_ms(time_ms), cake_area);
        f.render_widget(
            Button::new(label, theme)
                .hint(state.keymap.compact_hint_for_command(CommandId::Confirm)),
            button,
        );
    }

    fn translate_command(&self, command: CommandId, _state: &AppState) -> Option<SequencerInput> {
        match command {
            CommandId::Confirm => Some(SequencerInput::LightCandle),
            _ => None,
        }
    }
}
