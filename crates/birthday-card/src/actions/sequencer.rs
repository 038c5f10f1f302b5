//! Sequencer inputs
//!
//! Triggers that may move the card to another screen. Each input is only
//! meaningful on one screen; everywhere else the sequencer ignores it.

use crate::controls::Controls;
use crate::domain_models::BalloonId;

/// A user- or timer-originated trigger for the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerInput {
    /// One second of the countdown elapsed; `visit` is the countdown visit
    /// the timer was started for
    Tick { visit: u64 },
    /// Start the surprise (intro)
    Start,
    /// Light the candle, or move on once it is lit (cake)
    LightCandle,
    /// Pop one balloon (balloons)
    PopBalloon(BalloonId),
    /// Move on to decorating once every balloon is popped (balloons)
    Decorate,
    /// Add a handful of sprinkles (decorate)
    AddSprinkles,
    /// Move on to the finale (decorate)
    Continue,
    /// Replay from the countdown (finale)
    Restart,
}

impl SequencerInput {
    /// The control that must be presented for a user to trigger this input.
    ///
    /// `None` for timer-originated inputs, which no key can produce.
    pub fn required_control(self) -> Option<Controls> {
        match self {
            Self::Tick { .. } => None,
            Self::Start => Some(Controls::START),
            Self::LightCandle => Some(Controls::LIGHT),
            Self::PopBalloon(_) => Some(Controls::POP),
            Self::Decorate => Some(Controls::DECORATE),
            Self::AddSprinkles => Some(Controls::SPRINKLE),
            Self::Continue => Some(Controls::CONTINUE),
            Self::Restart => Some(Controls::REPLAY),
        }
    }
}
