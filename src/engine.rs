// Engine API boundary. A caller (CLI, UI, simulator) drives a round through these three
// operations without touching the deck or classifier directly. `Machine` implements it
// over an injected RNG so tests can run with seeded draws.

use crate::cards::Card;
use crate::deck::{self, DeckError};
use crate::evaluator::{classify_hand, Category};
use crate::hand::Hand;
use crate::paytable::Paytable;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait VideoPokerEngine {
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError>;
    fn classify(&self, hand: &Hand) -> Category;
    fn payout(&self, category: Category, held_count: usize) -> u32;
}

#[derive(Debug, Clone)]
pub struct Machine<R> {
    rng: R,
    paytable: Paytable,
}

impl<R: Rng> Machine<R> {
    pub fn new(rng: R, paytable: Paytable) -> Self {
        Self { rng, paytable }
    }

    pub fn paytable(&self) -> &Paytable {
        &self.paytable
    }
}

impl Machine<ChaCha8Rng> {
    /// Machine with the default paytable and a reproducible draw sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), Paytable::default())
    }
}

impl<R: Rng> VideoPokerEngine for Machine<R> {
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        deck::draw(n, &mut self.rng)
    }

    fn classify(&self, hand: &Hand) -> Category {
        classify_hand(hand)
    }

    fn payout(&self, category: Category, held_count: usize) -> u32 {
        self.paytable.payout(category, held_count)
    }
}
