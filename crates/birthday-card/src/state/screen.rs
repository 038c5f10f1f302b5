//! Screen-scoped state
//!
//! Each screen that keeps local progress owns a small state struct. The
//! struct lives inside the `Screen` variant, so it is created fresh when the
//! screen is entered and dropped when the screen is left.

use std::collections::BTreeSet;

use crate::domain_models::{BalloonId, ScreenId, BALLOON_COUNT};

/// Countdown starts at this value and counts down once per second
pub const COUNTDOWN_START: u8 = 3;

/// Sprinkles added per "add sprinkles"
pub const SPRINKLE_STEP: u8 = 10;

/// Upper bound of the sprinkle count
pub const MAX_SPRINKLES: u8 = 80;

/// Countdown screen state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    /// Number currently displayed
    pub remaining: u8,
}

impl Default for CountdownState {
    fn default() -> Self {
        Self {
            remaining: COUNTDOWN_START,
        }
    }
}

/// Cake screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CakeState {
    pub candle_lit: bool,
}

/// Balloon screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalloonsState {
    /// Balloons popped so far; only ever grows during a visit
    pub popped: BTreeSet<BalloonId>,
}

impl BalloonsState {
    /// Pop a balloon. Popping the same balloon again changes nothing.
    pub fn pop(&mut self, id: BalloonId) {
        if self.popped.insert(id) {
            log::debug!("Balloon {} popped ({}/{})", id, self.popped.len(), BALLOON_COUNT);
        }
    }

    pub fn is_popped(&self, id: BalloonId) -> bool {
        self.popped.contains(&id)
    }

    pub fn all_popped(&self) -> bool {
        self.popped.len() == BALLOON_COUNT
    }

    /// Lowest balloon id that is still floating
    pub fn next_unpopped(&self) -> Option<BalloonId> {
        BalloonId::all().find(|id| !self.popped.contains(id))
    }
}

/// Decorate screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorateState {
    pub sprinkles: u8,
}

impl DecorateState {
    /// Add one step of sprinkles, clamped at `MAX_SPRINKLES`
    pub fn add_sprinkles(&mut self) {
        self.sprinkles = self.sprinkles.saturating_add(SPRINKLE_STEP).min(MAX_SPRINKLES);
    }
}

/// The active screen together with its scoped state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Countdown(CountdownState),
    Intro,
    Cake(CakeState),
    Balloons(BalloonsState),
    Decorate(DecorateState),
    Finale,
}

impl Screen {
    /// Fresh state for entering the given screen
    pub fn entering(id: ScreenId) -> Self {
        match id {
            ScreenId::Countdown => Screen::Countdown(CountdownState::default()),
            ScreenId::Intro => Screen::Intro,
            ScreenId::Cake => Screen::Cake(CakeState::default()),
            ScreenId::Balloons => Screen::Balloons(BalloonsState::default()),
            ScreenId::Decorate => Screen::Decorate(DecorateState::default()),
            ScreenId::Finale => Screen::Finale,
        }
    }

    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Countdown(_) => ScreenId::Countdown,
            Screen::Intro => ScreenId::Intro,
            Screen::Cake(_) => ScreenId::Cake,
            Screen::Balloons(_) => ScreenId::Balloons,
            Screen::Decorate(_) => ScreenId::Decorate,
            Screen::Finale => ScreenId::Finale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprinkles_clamp_at_max() {
        let mut state = DecorateState::default();
        for _ in 0..9 {
            state.add_sprinkles();
        }
        assert_eq!(state.sprinkles, 80);
    }

    #[test]
    fn test_pop_is_idempotent() {
        let mut state = BalloonsState::default();
        let id = BalloonId::new(4).unwrap();
        state.pop(id);
        state.pop(id);
        assert_eq!(state.popped.len(), 1);
        assert!(state.is_popped(id));
        assert_eq!(state.next_unpopped(), BalloonId::new(0));
    }

    #[test]
    fn test_all_popped() {
        let mut state = BalloonsState::default();
        for id in BalloonId::all() {
            assert!(!state.all_popped());
            state.pop(id);
        }
        assert!(state.all_popped());
        assert_eq!(state.next_unpopped(), None);
    }

    #[test]
    fn test_entering_builds_fresh_state() {
        assert_eq!(
            Screen::entering(ScreenId::Countdown),
            Screen::Countdown(CountdownState { remaining: 3 })
        );
        for id in [ScreenId::Intro, ScreenId::Cake, ScreenId::Finale] {
            assert_eq!(Screen::entering(id).id(), id);
        }
    }
}
