//! Screen sequencer
//!
//! The finite-state machine behind the card:
//!
//! ```text
//! Countdown ──3 ticks──► Intro ──start──► Cake ──light──► Cake(lit) ──light──► Balloons
//!     ▲                                                                           │
//!     │                                                          all popped + decorate
//!     │                                                                           ▼
//!   Finale ◄──────────────────────────continue────────────────────────────── Decorate
//!     └──restart──► Countdown
//! ```
//!
//! Every transition is a total function of (screen, input): an input that
//! means nothing on the active screen leaves the state untouched. Entering a
//! screen always builds its scoped state from scratch and bumps the visit
//! counter, so progress never leaks from one visit into the next.

use crate::actions::SequencerInput;
use crate::controls::Controls;
use crate::domain_models::ScreenId;

use super::screen::Screen;

/// Outcome of applying one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Still on the same screen (scoped state may have changed)
    Stayed,
    /// A screen was entered
    Entered {
        from: ScreenId,
        to: ScreenId,
        visit: u64,
    },
}

/// Owns the active screen and its scoped state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer {
    screen: Screen,
    visit: u64,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    /// Start at the countdown
    pub fn new() -> Self {
        Self {
            screen: Screen::entering(ScreenId::Countdown),
            visit: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen.id()
    }

    /// Identifier of the current stay on the active screen
    pub fn visit(&self) -> u64 {
        self.visit
    }

    /// Apply one trigger
    pub fn apply(&mut self, input: SequencerInput) -> Transition {
        let next = match (&mut self.screen, input) {
            (Screen::Countdown(countdown), SequencerInput::Tick { visit }) => {
                if visit != self.visit {
                    log::debug!(
                        "Ignoring stale countdown tick (visit {}, current {})",
                        visit,
                        self.visit
                    );
                    None
                } else {
                    countdown.remaining = countdown.remaining.saturating_sub(1);
                    (countdown.remaining == 0).then_some(ScreenId::Intro)
                }
            }
            (Screen::Intro, SequencerInput::Start) => Some(ScreenId::Cake),
            (Screen::Cake(cake), SequencerInput::LightCandle) => {
                if cake.candle_lit {
                    Some(ScreenId::Balloons)
                } else {
                    cake.candle_lit = true;
                    None
                }
            }
            (Screen::Balloons(balloons), SequencerInput::PopBalloon(id)) => {
                balloons.pop(id);
                None
            }
            (Screen::Balloons(balloons), SequencerInput::Decorate) => {
                balloons.all_popped().then_some(ScreenId::Decorate)
            }
            (Screen::Decorate(decorate), SequencerInput::AddSprinkles) => {
                decorate.add_sprinkles();
                None
            }
            (Screen::Decorate(_), SequencerInput::Continue) => Some(ScreenId::Finale),
            (Screen::Finale, SequencerInput::Restart) => Some(ScreenId::Countdown),
            (screen, input) => {
                log::trace!("{:?} ignored on {}", input, screen.id());
                None
            }
        };

        match next {
            Some(to) => self.enter(to),
            None => Transition::Stayed,
        }
    }

    /// Controls presented by the active screen in its current state
    pub fn controls(&self) -> Controls {
        match &self.screen {
            Screen::Countdown(_) => Controls::empty(),
            Screen::Intro => Controls::START,
            Screen::Cake(_) => Controls::LIGHT,
            Screen::Balloons(balloons) if balloons.all_popped() => Controls::DECORATE,
            Screen::Balloons(_) => Controls::POP,
            Screen::Decorate(_) => Controls::SPRINKLE | Controls::CONTINUE,
            Screen::Finale => Controls::REPLAY,
        }
    }

    /// A sequencer that has just entered `id`
    #[cfg(test)]
    pub(crate) fn entered(id: ScreenId) -> Self {
        let mut sequencer = Self::new();
        sequencer.enter(id);
        sequencer
    }

    fn enter(&mut self, to: ScreenId) -> Transition {
        let from = self.screen.id();
        self.visit += 1;
        self.screen = Screen::entering(to);
        log::info!("Screen {} -> {} (visit {})", from, to, self.visit);
        Transition::Entered {
            from,
            to,
            visit: self.visit,
        }
    }
}
