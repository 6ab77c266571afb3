use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::Category;

/// One step of the classification cascade.
pub(crate) struct Rule {
    pub category: Category,
    pub matches: fn(&HandAnalysis) -> bool,
}

const ROYAL_RANKS: [Rank; 5] = [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];

fn is_low(rank: Rank) -> bool {
    matches!(rank, Rank::Two | Rank::Three | Rank::Four)
}

fn is_five_to_king(rank: Rank) -> bool {
    rank >= Rank::Five
}

fn royal_flush(a: &HandAnalysis) -> bool {
    a.is_flush && a.ranks == ROYAL_RANKS
}

fn four_aces_low_kicker(a: &HandAnalysis) -> bool {
    a.kicker_of_quad(Rank::Ace).is_some_and(is_low)
}

// Only four Twos are tested here; four Threes or Fours with a low kicker fall through.
fn four_low_ace_to_four_kicker(a: &HandAnalysis) -> bool {
    a.kicker_of_quad(Rank::Two).is_some_and(|k| k == Rank::Ace || is_low(k))
}

fn four_aces(a: &HandAnalysis) -> bool {
    a.kicker_of_quad(Rank::Ace).is_some_and(is_five_to_king)
}

fn straight_flush(a: &HandAnalysis) -> bool {
    a.is_flush && a.is_straight
}

fn four_low(a: &HandAnalysis) -> bool {
    a.quad_with_kicker().is_some_and(|(quad, kicker)| is_low(quad) && is_five_to_king(kicker))
}

fn four_five_to_king(a: &HandAnalysis) -> bool {
    a.quad_with_kicker().is_some_and(|(quad, _)| is_five_to_king(quad))
}

fn full_house(a: &HandAnalysis) -> bool {
    a.is_full_house()
}

fn flush(a: &HandAnalysis) -> bool {
    a.is_flush
}

fn straight(a: &HandAnalysis) -> bool {
    a.is_straight
}

fn three_of_a_kind(a: &HandAnalysis) -> bool {
    [a.ranks[0], a.ranks[2], a.ranks[4]].into_iter().any(|r| a.count(r) == 3)
}

// Pair, middle card, pair: both ends of the sorted ranks must be paired.
fn two_pair(a: &HandAnalysis) -> bool {
    a.count(a.ranks[0]) == 2 && a.count(a.ranks[4]) == 2
}

fn jacks_or_better(a: &HandAnalysis) -> bool {
    [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace].into_iter().any(|r| a.count(r) == 2)
}

/// Cascade in priority order; the first matching rule decides the category.
pub(crate) const RULES: [Rule; 13] = [
    Rule { category: Category::RoyalFlush, matches: royal_flush },
    Rule { category: Category::FourAcesWithTwoToFour, matches: four_aces_low_kicker },
    Rule { category: Category::FourTwosToFoursWithAceToFour, matches: four_low_ace_to_four_kicker },
    Rule { category: Category::FourAces, matches: four_aces },
    Rule { category: Category::StraightFlush, matches: straight_flush },
    Rule { category: Category::FourTwosToFours, matches: four_low },
    Rule { category: Category::FourFivesToKings, matches: four_five_to_king },
    Rule { category: Category::FullHouse, matches: full_house },
    Rule { category: Category::Flush, matches: flush },
    Rule { category: Category::Straight, matches: straight },
    Rule { category: Category::ThreeOfAKind, matches: three_of_a_kind },
    Rule { category: Category::TwoPair, matches: two_pair },
    Rule { category: Category::JacksOrBetter, matches: jacks_or_better },
];
