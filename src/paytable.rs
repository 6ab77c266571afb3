//! Payout multipliers per hand category.
//!
//! Every entry is a plain multiplier except the Royal Flush, which pays by how many of the
//! final five cards were held from the deal: a natural five-card hold pays more than a
//! royal completed on the draw.

use crate::evaluator::Category;
use std::collections::BTreeMap;

/// Multiplier for one paytable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payout {
    Fixed(u32),
    /// Keyed by number of held cards; unlisted counts pay nothing.
    ByHeld(BTreeMap<usize, u32>),
}

impl Payout {
    pub fn multiplier(&self, held_count: usize) -> u32 {
        match self {
            Payout::Fixed(m) => *m,
            Payout::ByHeld(table) => table.get(&held_count).copied().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paytable {
    rows: BTreeMap<Category, Payout>,
}

impl Default for Paytable {
    fn default() -> Self {
        Self::triple_double_bonus()
    }
}

impl Paytable {
    /// An empty table: every category pays 0 until configured with [`Paytable::with`].
    pub fn new() -> Self {
        Self { rows: BTreeMap::new() }
    }

    /// The 9/7 Triple Double Bonus schedule.
    ///
    /// ```
    /// use tdb_poker::evaluator::Category;
    /// use tdb_poker::paytable::Paytable;
    ///
    /// let table = Paytable::triple_double_bonus();
    /// assert_eq!(table.payout(Category::RoyalFlush, 5), 800);
    /// assert_eq!(table.payout(Category::RoyalFlush, 4), 250);
    /// assert_eq!(table.payout(Category::FullHouse, 2), 9);
    /// assert_eq!(table.payout(Category::NoWin, 0), 0);
    /// ```
    pub fn triple_double_bonus() -> Self {
        Self::new()
            .with(Category::RoyalFlush, Payout::ByHeld(BTreeMap::from([(5, 800), (4, 250)])))
            .with(Category::FourAcesWithTwoToFour, Payout::Fixed(800))
            .with(Category::FourTwosToFoursWithAceToFour, Payout::Fixed(400))
            .with(Category::FourAces, Payout::Fixed(160))
            .with(Category::StraightFlush, Payout::Fixed(50))
            .with(Category::FourTwosToFours, Payout::Fixed(80))
            .with(Category::FourFivesToKings, Payout::Fixed(50))
            .with(Category::FullHouse, Payout::Fixed(9))
            .with(Category::Flush, Payout::Fixed(7))
            .with(Category::Straight, Payout::Fixed(4))
            .with(Category::ThreeOfAKind, Payout::Fixed(2))
            .with(Category::TwoPair, Payout::Fixed(1))
            .with(Category::JacksOrBetter, Payout::Fixed(1))
    }

    pub fn with(mut self, category: Category, payout: Payout) -> Self {
        self.rows.insert(category, payout);
        self
    }

    pub fn get(&self, category: Category) -> Option<&Payout> {
        self.rows.get(&category)
    }

    /// Multiplier for `category`; categories missing from the table pay 0.
    pub fn payout(&self, category: Category, held_count: usize) -> u32 {
        self.rows.get(&category).map_or(0, |p| p.multiplier(held_count))
    }

    /// Rows from best to worst category.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Payout)> {
        self.rows.iter().map(|(c, p)| (*c, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn royal_pays_only_for_four_or_five_held() {
        let t = Paytable::triple_double_bonus();
        for held in [0, 1, 2, 3, 6] {
            assert_eq!(t.payout(Category::RoyalFlush, held), 0, "held {held}");
        }
        assert_eq!(t.payout(Category::RoyalFlush, 4), 250);
        assert_eq!(t.payout(Category::RoyalFlush, 5), 800);
    }

    #[test]
    fn fixed_rows_ignore_held_count() {
        let t = Paytable::triple_double_bonus();
        for held in 0..=5 {
            assert_eq!(t.payout(Category::FourAcesWithTwoToFour, held), 800);
            assert_eq!(t.payout(Category::JacksOrBetter, held), 1);
        }
    }

    #[test]
    fn no_win_is_absent() {
        let t = Paytable::default();
        assert!(t.get(Category::NoWin).is_none());
        assert_eq!(t.iter().count(), 13);
        assert_eq!(t.iter().next().map(|(c, _)| c), Some(Category::RoyalFlush));
    }

    #[test]
    fn custom_rows_override() {
        let t = Paytable::triple_double_bonus().with(Category::FullHouse, Payout::Fixed(8));
        assert_eq!(t.payout(Category::FullHouse, 0), 8);
        assert_eq!(Paytable::new().payout(Category::Flush, 5), 0);
    }
}
