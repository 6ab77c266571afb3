use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    CardCount(usize),
    #[error("card position {0} is outside 0..5")]
    Position(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five cards dealt to the player.
///
/// Order is kept for display and hold selection only; classification ignores it.
///
/// ```
/// use tdb_poker::hand::Hand;
///
/// let hand: Hand = "Th Jh Qh Kh Ah".parse().unwrap();
/// assert_eq!(hand.to_string(), "Th Jh Qh Kh Ah");
/// assert!("Th Jh".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::CardCount(slice.len()))?;
        Ok(Self(cards))
    }

    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Option<Card> {
        self.0.get(position).copied()
    }

    /// Put `card` in `position`, returning the card it displaced.
    pub fn replace(&mut self, position: usize, card: Card) -> Result<Card, HandError> {
        let slot = self.0.get_mut(position).ok_or(HandError::Position(position))?;
        Ok(std::mem::replace(slot, card))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;
    fn try_from(slice: &[Card]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_slice(&cards)
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
