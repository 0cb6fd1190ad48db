//! Rating states for the smiley face.
//!
//! Five expressions, ordered from worst to best:
//!
//! - [`RatingState::Sad`]: frown
//! - [`RatingState::Neutral`]: flat mouth
//! - [`RatingState::Okay`]: small smile
//! - [`RatingState::Happy`]: open smile
//! - [`RatingState::Amazing`]: wide open smile with tongue

/// Expression shown by the widget for a given rating.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(u8)]
pub enum RatingState {
    /// Rating 0.
    Sad = 0,
    /// Rating 1.
    Neutral = 1,
    /// Rating 2. Selected when no default rating is configured.
    #[default]
    Okay = 2,
    /// Rating 3.
    Happy = 3,
    /// Rating 4.
    Amazing = 4,
}

impl RatingState {
    /// All states in rating order.
    pub const ALL: [Self; 5] = [Self::Sad, Self::Neutral, Self::Okay, Self::Happy, Self::Amazing];

    /// Highest valid rating value.
    pub const MAX_RATING: i32 = 4;

    /// Map an integer rating to a state, clamping into `0..=4`.
    #[inline]
    pub const fn from_rating(rating: i32) -> Self {
        match rating {
            i32::MIN..=0 => Self::Sad,
            1 => Self::Neutral,
            2 => Self::Okay,
            3 => Self::Happy,
            _ => Self::Amazing,
        }
    }

    /// Position of this state in [`RatingState::ALL`] (also its rating value).
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Next better state, saturating at `Amazing`.
    #[inline]
    pub const fn next(self) -> Self { Self::from_rating(self as i32 + 1) }

    /// Next worse state, saturating at `Sad`.
    #[inline]
    pub const fn previous(self) -> Self { Self::from_rating(self as i32 - 1) }

    /// Upper-case display name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sad => "SAD",
            Self::Neutral => "NEUTRAL",
            Self::Okay => "OKAY",
            Self::Happy => "HAPPY",
            Self::Amazing => "AMAZING",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_default() {
        assert_eq!(RatingState::default(), RatingState::Okay);
    }

    #[test]
    fn test_from_rating_in_range() {
        for (i, state) in RatingState::ALL.iter().enumerate() {
            assert_eq!(RatingState::from_rating(i as i32), *state);
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn test_from_rating_clamps() {
        assert_eq!(RatingState::from_rating(-1), RatingState::Sad);
        assert_eq!(RatingState::from_rating(i32::MIN), RatingState::Sad);
        assert_eq!(RatingState::from_rating(5), RatingState::Amazing);
        assert_eq!(RatingState::from_rating(i32::MAX), RatingState::Amazing);
    }

    #[test]
    fn test_step_saturates() {
        assert_eq!(RatingState::Sad.previous(), RatingState::Sad);
        assert_eq!(RatingState::Sad.next(), RatingState::Neutral);
        assert_eq!(RatingState::Happy.next(), RatingState::Amazing);
        assert_eq!(RatingState::Amazing.next(), RatingState::Amazing);
    }

    #[test]
    fn test_state_ordering() {
        assert!(RatingState::Sad < RatingState::Neutral);
        assert!(RatingState::Happy < RatingState::Amazing);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RatingState::Neutral.label(), "NEUTRAL");
        assert_eq!(RatingState::Amazing.label(), "AMAZING");
    }
}
