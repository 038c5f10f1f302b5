//! Screen identifiers
//!
//! The card is a linear sequence of screens. Their order is fixed and the
//! discriminant doubles as the screen index.

use strum::{Display, EnumIter, FromRepr};

/// Identifier of one stage of the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum ScreenId {
    Countdown = 0,
    Intro = 1,
    Cake = 2,
    Balloons = 3,
    Decorate = 4,
    Finale = 5,
}

impl ScreenId {
    /// Position of this screen in the sequence
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Background music starts from the cake screen onwards
    pub fn plays_music(self) -> bool {
        self.index() >= ScreenId::Cake.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_indices_follow_sequence() {
        let indices: Vec<u8> = ScreenId::iter().map(ScreenId::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(ScreenId::from_repr(3), Some(ScreenId::Balloons));
        assert_eq!(ScreenId::from_repr(6), None);
    }

    #[test]
    fn test_music_starts_at_cake() {
        assert!(!ScreenId::Countdown.plays_music());
        assert!(!ScreenId::Intro.plays_music());
        assert!(ScreenId::Cake.plays_music());
        assert!(ScreenId::Finale.plays_music());
    }
}
