use crate::deck::DeckError;
use crate::engine::VideoPokerEngine;
use crate::evaluator::Category;
use crate::hand::{Hand, HandError, HAND_SIZE};
use crate::paytable::Paytable;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error("invalid bet '{0}', please enter a number")]
    InvalidBet(String),
    #[error("please enter a positive bet")]
    NonPositiveBet,
    #[error("card number {0} is outside 1-5")]
    HoldOutOfRange(u32),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("engine returned no replacement card")]
    EmptyDraw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetInput {
    Quit,
    Bet(u32),
}

/// Parse a wager line: `q` quits, otherwise a positive whole number.
///
/// ```
/// use tdb_poker::game::{parse_bet, BetInput, InputError};
///
/// assert_eq!(parse_bet(" 25 "), Ok(BetInput::Bet(25)));
/// assert_eq!(parse_bet("Q"), Ok(BetInput::Quit));
/// assert_eq!(parse_bet("-3"), Err(InputError::NonPositiveBet));
/// ```
pub fn parse_bet(input: &str) -> Result<BetInput, InputError> {
    let t = input.trim();
    if t.eq_ignore_ascii_case("q") {
        return Ok(BetInput::Quit);
    }
    let n: i64 = t.parse().map_err(|_| InputError::InvalidBet(t.to_string()))?;
    if n <= 0 {
        return Err(InputError::NonPositiveBet);
    }
    u32::try_from(n).map(BetInput::Bet).map_err(|_| InputError::InvalidBet(t.to_string()))
}

/// Set of held positions (bit `i` = position `i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct HoldMask(u8);

impl HoldMask {
    pub const NONE: HoldMask = HoldMask(0);
    pub const ALL: HoldMask = HoldMask(0b1_1111);

    /// Build from zero-based positions.
    pub fn from_indices<I>(indices: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut mask = Self::NONE;
        for i in indices {
            if i >= HAND_SIZE {
                return Err(HandError::Position(i));
            }
            mask.0 |= 1 << i;
        }
        Ok(mask)
    }

    pub fn is_held(self, position: usize) -> bool {
        position < HAND_SIZE && self.0 & (1 << position) != 0
    }

    pub fn toggle(&mut self, position: usize) -> Result<(), HandError> {
        if position >= HAND_SIZE {
            return Err(HandError::Position(position));
        }
        self.0 ^= 1 << position;
        Ok(())
    }

    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..HAND_SIZE).filter(move |&i| self.is_held(i))
    }
}

/// Parse a hold selection such as `"134"` (one-based card numbers).
///
/// Blank input (a bare line terminator included) keeps the whole hand. Non-digit characters are ignored, so `"1, 3"` holds
/// the first and third cards and a line with no digits at all holds nothing.
///
/// ```
/// use tdb_poker::game::{parse_holds, HoldMask};
///
/// let mask = parse_holds("25").unwrap();
/// assert_eq!(mask.indices().collect::<Vec<_>>(), vec![1, 4]);
/// assert_eq!(parse_holds("").unwrap(), HoldMask::ALL);
/// assert_eq!(parse_holds("\n").unwrap(), HoldMask::ALL);
/// assert!(parse_holds("16").is_err());
/// ```
pub fn parse_holds(input: &str) -> Result<HoldMask, InputError> {
    let input = input.trim_end_matches(['\r', '\n']);
    if input.is_empty() {
        return Ok(HoldMask::ALL);
    }
    let mut mask = HoldMask::NONE;
    for d in input.chars().filter_map(|c| c.to_digit(10)) {
        if !(1..=HAND_SIZE as u32).contains(&d) {
            return Err(InputError::HoldOutOfRange(d));
        }
        mask.0 |= 1 << (d - 1);
    }
    Ok(mask)
}

/// Outcome of one settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Settlement {
    pub category: Category,
    pub multiplier: u32,
    pub bet: u32,
    /// `bet * multiplier`, or `-bet` when the hand pays nothing.
    pub winnings: i64,
}

impl Settlement {
    fn new(bet: u32, category: Category, multiplier: u32) -> Self {
        let winnings = if multiplier == 0 {
            -i64::from(bet)
        } else {
            i64::from(bet).saturating_mul(i64::from(multiplier))
        };
        tracing::debug!(%category, multiplier, bet, winnings, "settled round");
        Self { category, multiplier, bet, winnings }
    }

    pub fn is_win(&self) -> bool {
        self.winnings > 0
    }
}

/// Settle a wager against `paytable`.
///
/// ```
/// use tdb_poker::evaluator::Category;
/// use tdb_poker::game::settle;
/// use tdb_poker::paytable::Paytable;
///
/// let table = Paytable::default();
/// assert_eq!(settle(5, Category::FullHouse, 2, &table).winnings, 45);
/// assert_eq!(settle(5, Category::NoWin, 2, &table).winnings, -5);
/// ```
pub fn settle(bet: u32, category: Category, held_count: usize, paytable: &Paytable) -> Settlement {
    Settlement::new(bet, category, paytable.payout(category, held_count))
}

/// Hand in play plus the player's hold selection. Owned by the caller between deal and draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    hand: Hand,
    held: HoldMask,
    /// Cards kept through the last redraw; a hand that never redraws keeps all five.
    held_at_draw: usize,
}

impl GameState {
    pub fn new(hand: Hand) -> Self {
        Self { hand, held: HoldMask::NONE, held_at_draw: HAND_SIZE }
    }

    /// Deal a fresh five-card hand with nothing held.
    pub fn deal<E: VideoPokerEngine + ?Sized>(engine: &mut E) -> Result<Self, RoundError> {
        let hand = Hand::try_from(engine.draw(HAND_SIZE)?)?;
        tracing::debug!(%hand, "dealt hand");
        Ok(Self::new(hand))
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn held(&self) -> HoldMask {
        self.held
    }

    /// Number of cards the Royal Flush payout is keyed on.
    pub fn held_at_draw(&self) -> usize {
        self.held_at_draw
    }

    pub fn set_held(&mut self, held: HoldMask) {
        self.held = held;
    }

    pub fn toggle_hold(&mut self, position: usize) -> Result<(), HandError> {
        self.held.toggle(position)
    }

    /// Replace every unheld card, one single-card draw per slot. Returns how many were
    /// replaced. On error the hand is left as it was.
    pub fn redraw<E: VideoPokerEngine + ?Sized>(
        &mut self,
        engine: &mut E,
    ) -> Result<usize, RoundError> {
        let mut replacements = Vec::with_capacity(HAND_SIZE);
        for position in (0..HAND_SIZE).filter(|&i| !self.held.is_held(i)) {
            let card = engine.draw(1)?.into_iter().next().ok_or(RoundError::EmptyDraw)?;
            replacements.push((position, card));
        }
        let mut hand = self.hand;
        for &(position, card) in &replacements {
            hand.replace(position, card)?;
        }
        self.hand = hand;
        self.held_at_draw = self.held.count();
        tracing::debug!(
            hand = %self.hand,
            held = self.held_at_draw,
            replaced = replacements.len(),
            "redrew hand"
        );
        Ok(replacements.len())
    }

    /// Classify the current hand and settle `bet`, paying Royal Flush by the number of cards
    /// held at the last redraw.
    pub fn finish<E: VideoPokerEngine + ?Sized>(&self, engine: &E, bet: u32) -> Settlement {
        let category = engine.classify(&self.hand);
        let multiplier = engine.payout(category, self.held_at_draw);
        Settlement::new(bet, category, multiplier)
    }

    /// One display line per card, e.g. `"1. Ace of Hearts (Value: 1) [Selected]"`.
    pub fn lines(&self) -> Vec<String> {
        self.hand
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let mark = if self.held.is_held(i) { " [Selected]" } else { "" };
                format!("{}. {} (Value: {}){}", i + 1, card.name(), card.value(), mark)
            })
            .collect()
    }
}
