pub(crate) mod detector;
pub(crate) mod hand_analysis;

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use std::fmt;

/// Triple Double Bonus hand categories, from best to worst.
///
/// The declaration order is the order in which the classifier tries them, so a hand that
/// fits several definitions always lands on the earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Category {
    RoyalFlush,
    FourAcesWithTwoToFour,
    FourTwosToFoursWithAceToFour,
    FourAces,
    StraightFlush,
    FourTwosToFours,
    FourFivesToKings,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    JacksOrBetter,
    NoWin,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::RoyalFlush,
        Category::FourAcesWithTwoToFour,
        Category::FourTwosToFoursWithAceToFour,
        Category::FourAces,
        Category::StraightFlush,
        Category::FourTwosToFours,
        Category::FourFivesToKings,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::JacksOrBetter,
        Category::NoWin,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::FourAcesWithTwoToFour => "Four Aces + 2-4",
            Category::FourTwosToFoursWithAceToFour => "Four 2s-4s + A-4",
            Category::FourAces => "Four Aces + 5-K",
            Category::StraightFlush => "Straight Flush",
            Category::FourTwosToFours => "Four 2s-4s + 5-K",
            Category::FourFivesToKings => "Four 5s-Ks",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::JacksOrBetter => "Jacks or Better",
            Category::NoWin => "No Win",
        }
    }

    pub const fn is_win(self) -> bool {
        !matches!(self, Category::NoWin)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a five-card hand. Total: every hand maps to exactly one category.
///
/// ```
/// use tdb_poker::evaluator::{classify_hand, Category};
/// use tdb_poker::hand::Hand;
///
/// let hand: Hand = "Ac Ad Ah As 3c".parse().unwrap();
/// assert_eq!(classify_hand(&hand), Category::FourAcesWithTwoToFour);
/// ```
pub fn classify_hand(hand: &Hand) -> Category {
    use detector::RULES;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(hand.cards());
    let category =
        RULES.iter().find(|rule| (rule.matches)(&analysis)).map_or(Category::NoWin, |r| r.category);
    tracing::trace!(%hand, %category, "classified hand");
    category
}

/// Classify a slice of cards; anything other than exactly five cards is rejected.
///
/// ```
/// use tdb_poker::cards::parse_cards;
/// use tdb_poker::evaluator::{classify, Category};
///
/// let cards = parse_cards("2c 3d 4h 5s 6c").unwrap();
/// assert_eq!(classify(&cards).unwrap(), Category::Straight);
/// assert!(classify(&cards[..4]).is_err());
/// ```
pub fn classify(cards: &[Card]) -> Result<Category, HandError> {
    let hand = Hand::from_slice(cards)?;
    Ok(classify_hand(&hand))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(s: &str) -> Category {
        classify_hand(&s.parse().unwrap())
    }

    #[test]
    fn four_aces_split_by_kicker() {
        assert_eq!(cat("Ac Ad Ah As 2c"), Category::FourAcesWithTwoToFour);
        assert_eq!(cat("Ac Ad Ah As 4c"), Category::FourAcesWithTwoToFour);
        assert_eq!(cat("Ac Ad Ah As 5c"), Category::FourAces);
        assert_eq!(cat("Ac Ad Ah As Kc"), Category::FourAces);
    }

    #[test]
    fn four_low_ranks() {
        assert_eq!(cat("2c 2d 2h 2s Ah"), Category::FourTwosToFoursWithAceToFour);
        assert_eq!(cat("2c 2d 2h 2s 4h"), Category::FourTwosToFoursWithAceToFour);
        assert_eq!(cat("3c 3d 3h 3s 9h"), Category::FourTwosToFours);
        assert_eq!(cat("4c 4d 4h 4s Kh"), Category::FourTwosToFours);
        // only four Twos qualify for the A-4 kicker bonus
        assert_eq!(cat("3c 3d 3h 3s Ah"), Category::NoWin);
    }

    #[test]
    fn straights_are_ace_low_only() {
        assert_eq!(cat("Ah 2h 3h 4h 5h"), Category::StraightFlush);
        assert_eq!(cat("Ac 2d 3h 4s 5c"), Category::Straight);
        assert_eq!(cat("Tc Jd Qh Ks Ac"), Category::NoWin);
        assert_eq!(cat("9h Th Jh Qh Kh"), Category::StraightFlush);
    }

    #[test]
    fn three_of_a_kind_in_any_position() {
        assert_eq!(cat("2c 2d 2h 9s Kc"), Category::ThreeOfAKind);
        assert_eq!(cat("2c 9d 9h 9s Kc"), Category::ThreeOfAKind);
        assert_eq!(cat("2c 5d Kh Ks Kc"), Category::ThreeOfAKind);
    }

    #[test]
    fn low_pairs_do_not_pay() {
        assert_eq!(cat("Tc Td 2h 5s 9c"), Category::NoWin);
        assert_eq!(cat("Jc Jd 2h 5s 9c"), Category::JacksOrBetter);
        assert_eq!(cat("Ac Ad 2h 5s 9c"), Category::JacksOrBetter);
    }

    #[test]
    fn classify_checks_card_count() {
        let cards = crate::cards::parse_cards("2c 3d 4h 5s 6c 7d").unwrap();
        assert_eq!(classify(&cards), Err(HandError::CardCount(6)));
        assert_eq!(classify(&[]), Err(HandError::CardCount(0)));
    }

    #[test]
    fn labels() {
        assert_eq!(Category::RoyalFlush.to_string(), "Royal Flush");
        assert!(!Category::NoWin.is_win());
        assert!(Category::TwoPair.is_win());
    }
}
