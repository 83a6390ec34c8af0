//! Dice hands and the counting helpers shared by every rule.
//!
//! A [`Hand`] is always five dice in `1..=6`; construction is the only place
//! shape is checked. Order is preserved as given but no rule depends on it.

use serde::Serialize;
use thiserror::Error;

/// Number of dice in a hand.
pub const NUM_DICE: usize = 5;
/// Number of faces on a die.
pub const NUM_FACES: usize = 6;

/// Reasons a dice slice is not a valid hand.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandError {
    #[error("hand is empty")]
    Empty,
    #[error("hand has {0} dice, expected 5")]
    WrongLength(usize),
    #[error("die {index} has face {face}, expected 1..=6")]
    FaceOutOfRange { index: usize, face: u8 },
}

/// Five validated dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hand([u8; NUM_DICE]);

impl Hand {
    /// Validate `dice` and build a hand.
    ///
    /// Rejects empty input first, then wrong length, then the first die
    /// outside `1..=6`.
    pub fn new(dice: &[u8]) -> Result<Self, HandError> {
        if dice.is_empty() {
            return Err(HandError::Empty);
        }
        let arr: [u8; NUM_DICE] = dice
            .try_into()
            .map_err(|_| HandError::WrongLength(dice.len()))?;
        if let Some((index, &face)) = arr
            .iter()
            .enumerate()
            .find(|(_, &f)| !(1..=NUM_FACES as u8).contains(&f))
        {
            return Err(HandError::FaceOutOfRange { index, face });
        }
        Ok(Self(arr))
    }

    pub fn dice(&self) -> [u8; NUM_DICE] {
        self.0
    }

    /// Total of all dice.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| u32::from(d)).sum()
    }

    /// Number of dice showing `face`.
    pub fn count_of(&self, face: u8) -> u8 {
        self.0.iter().filter(|&&d| d == face).count() as u8
    }

    pub fn frequency_profile(&self) -> FrequencyProfile {
        FrequencyProfile::of(self)
    }

    /// Bitset of faces present: bit `face - 1` is set if any die shows `face`.
    pub fn face_mask(&self) -> u8 {
        self.0.iter().fold(0u8, |m, &d| m | (1 << (d - 1)))
    }

    /// Number of distinct faces in the hand.
    pub fn distinct_faces(&self) -> u32 {
        self.face_mask().count_ones()
    }
}

impl TryFrom<&[u8]> for Hand {
    type Error = HandError;

    fn try_from(dice: &[u8]) -> Result<Self, Self::Error> {
        Hand::new(dice)
    }
}

impl TryFrom<[u8; NUM_DICE]> for Hand {
    type Error = HandError;

    fn try_from(dice: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        Hand::new(&dice)
    }
}

/// Face -> occurrence count for one hand.
///
/// Only faces that are present contribute an entry to [`counts`](Self::counts),
/// so a single-face hand yields exactly one count (`5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyProfile {
    by_face: [u8; NUM_FACES],
}

impl FrequencyProfile {
    fn of(hand: &Hand) -> Self {
        let mut by_face = [0u8; NUM_FACES];
        for &d in &hand.0 {
            by_face[(d - 1) as usize] += 1;
        }
        Self { by_face }
    }

    /// Counts of the faces present, face identity discarded (ascending face order).
    pub fn counts(&self) -> impl Iterator<Item = u8> + '_ {
        self.by_face.iter().copied().filter(|&c| c > 0)
    }

    /// Highest count of any face.
    pub fn max_count(&self) -> u8 {
        self.counts().max().unwrap_or(0)
    }

    pub fn contains_count(&self, n: u8) -> bool {
        self.counts().any(|c| c == n)
    }

    pub fn count_of(&self, face: u8) -> u8 {
        match face {
            1..=6 => self.by_face[(face - 1) as usize],
            _ => 0,
        }
    }
}
