use crate::actions::SequencerInput;
use crate::state::{Sequencer, Transition};

/// Reducer for the screen sequencer
pub fn reduce(mut state: Sequencer, input: SequencerInput) -> Sequencer {
    if let Transition::Entered { from, to, visit } = state.apply(input) {
        log::debug!("{:?} moved the card from {} to {} (visit {})", input, from, to, visit);
    }

    state
}
