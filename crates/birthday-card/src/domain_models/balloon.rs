//! Balloon identifiers
//!
//! The balloon screen always shows the same fixed number of balloons.

use std::fmt;

/// Number of balloons that must be popped before decorating
pub const BALLOON_COUNT: usize = 10;

/// Newtype wrapper for a balloon id in `0..BALLOON_COUNT`.
/// Can only be constructed for ids that exist on the balloon screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BalloonId(u8);

impl BalloonId {
    /// Create a balloon id, `None` if no balloon has this id
    pub fn new(id: u8) -> Option<Self> {
        ((id as usize) < BALLOON_COUNT).then_some(BalloonId(id))
    }

    /// Balloon id for a digit key ('0'..='9')
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// All balloon ids in ascending order
    pub fn all() -> impl Iterator<Item = BalloonId> {
        (0..BALLOON_COUNT as u8).map(BalloonId)
    }

    /// Raw index (for layout and colors)
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BalloonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_bounded() {
        assert!(BalloonId::new(0).is_some());
        assert!(BalloonId::new(9).is_some());
        assert!(BalloonId::new(10).is_none());
        assert_eq!(BalloonId::all().count(), BALLOON_COUNT);
    }

    #[test]
    fn test_from_digit() {
        assert_eq!(BalloonId::from_digit('7'), BalloonId::new(7));
        assert_eq!(BalloonId::from_digit('x'), None);
    }
}
