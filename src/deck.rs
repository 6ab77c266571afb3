use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("can only draw between 1 and 52 cards, requested {0}")]
    InvalidCount(usize),
}

/// A standard 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use tdb_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.as_slice().len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

/// Sample `n` distinct cards from a fresh 52-card deck.
///
/// Every call starts over from a full deck, so cards returned by an earlier call
/// can show up again.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use tdb_poker::deck::draw;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let hand = draw(5, &mut rng).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert!(draw(0, &mut rng).is_err());
/// ```
pub fn draw<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<Card>, DeckError> {
    if n == 0 || n > DECK_SIZE {
        return Err(DeckError::InvalidCount(n));
    }
    let mut deck = Deck::standard();
    deck.shuffle_with(rng);
    let cards = deck.draw_n(n);
    tracing::debug!(count = n, "drew cards from a fresh deck");
    Ok(cards)
}
