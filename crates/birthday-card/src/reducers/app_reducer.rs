use crate::actions::{Action, GlobalAction};
use crate::reducers::sequencer_reducer;
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::Tick) => {
            // Advance the decorative animation clock
            state.animation_frame = state.animation_frame.wrapping_add(1);
        }
        Action::Sequencer(input) => {
            state.sequencer = sequencer_reducer::reduce(state.sequencer, *input);
        }
        _ => {
            // Unhandled actions - no state change
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SequencerInput;
    use crate::domain_models::{BalloonId, ScreenId};
    use crate::state::{BalloonsState, CakeState, DecorateState, Screen};

    fn apply_all(state: AppState, inputs: &[SequencerInput]) -> AppState {
        inputs.iter().fold(state, |state, input| {
            reduce(state, &Action::Sequencer(*input))
        })
    }

    fn countdown_done(state: AppState) -> AppState {
        (0..3).fold(state, |state, _| {
            let visit = state.sequencer.visit();
            reduce(state, &Action::Sequencer(SequencerInput::Tick { visit }))
        })
    }

    #[test]
    fn test_tick_advances_animation_only() {
        let state = AppState::default();
        let sequencer = state.sequencer.clone();
        let state = reduce(state, &Action::Global(GlobalAction::Tick));
        assert_eq!(state.animation_frame, 1);
        assert_eq!(state.sequencer, sequencer);
    }

    #[test]
    fn test_walk_through_every_screen() {
        use SequencerInput::*;

        let state = countdown_done(AppState::default());
        assert_eq!(state.sequencer.screen_id(), ScreenId::Intro);

        let state = apply_all(state, &[Start, LightCandle]);
        assert_eq!(
            state.sequencer.screen(),
            &Screen::Cake(CakeState { candle_lit: true })
        );

        let state = apply_all(state, &[LightCandle]);
        let pops: Vec<_> = BalloonId::all().map(PopBalloon).collect();
        let state = apply_all(state, &pops);
        match state.sequencer.screen() {
            Screen::Balloons(BalloonsState { popped }) => assert_eq!(popped.len(), 10),
            other => panic!("expected balloons, got {:?}", other),
        }

        let state = apply_all(state, &[Decorate, AddSprinkles, AddSprinkles]);
        assert_eq!(
            state.sequencer.screen(),
            &Screen::Decorate(DecorateState { sprinkles: 20 })
        );

        let state = apply_all(state, &[Continue]);
        assert_eq!(state.sequencer.screen_id(), ScreenId::Finale);

        let state = apply_all(state, &[Restart]);
        assert_eq!(state.sequencer.screen_id(), ScreenId::Countdown);
        assert!(state.running);
    }

    #[test]
    fn test_quit_keeps_screen() {
        let state = countdown_done(AppState::default());
        let state = reduce(state, &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
        assert_eq!(state.sequencer.screen_id(), ScreenId::Intro);
    }
}
