use crate::cards::{Card, Rank};
use crate::hand::HAND_SIZE;

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all rule predicates.
#[derive(Debug, Clone)]
pub(crate) struct HandAnalysis {
    /// Ranks sorted ascending, Ace low.
    pub ranks: [Rank; HAND_SIZE],
    /// Indexed by `Rank::ordinal()` (1..=13); slot 0 unused.
    pub rank_counts: [u8; 14],
    pub is_flush: bool,
    pub is_straight: bool,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut sorted = *cards;
        sorted.sort_by(|a, b| a.rank().cmp(&b.rank()).then(a.suit().cmp(&b.suit())));

        let ranks = sorted.map(Card::rank);
        let suits = sorted.map(Card::suit);

        let mut rank_counts = [0u8; 14];
        for rank in ranks {
            rank_counts[rank.ordinal() as usize] += 1;
        }

        let is_flush = suits.iter().all(|&s| s == suits[0]);
        // Ace low only: A-2-3-4-5 is a straight, 10-J-Q-K-A is not
        let is_straight = ranks.windows(2).all(|w| w[1].ordinal() == w[0].ordinal() + 1);

        Self { ranks, rank_counts, is_flush, is_straight }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.rank_counts[rank.ordinal() as usize]
    }

    /// The rank held four times together with the odd card, if any.
    pub fn quad_with_kicker(&self) -> Option<(Rank, Rank)> {
        let quad = self.ranks.iter().copied().find(|&r| self.count(r) == 4)?;
        let kicker = self.ranks.iter().copied().find(|&r| r != quad)?;
        Some((quad, kicker))
    }

    /// Kicker of four cards of `rank`, or `None` when `rank` is not quadrupled.
    pub fn kicker_of_quad(&self, rank: Rank) -> Option<Rank> {
        match self.quad_with_kicker() {
            Some((quad, kicker)) if quad == rank => Some(kicker),
            _ => None,
        }
    }

    /// Three of one rank and two of another. Sorted, the groups sit at opposite ends.
    pub fn is_full_house(&self) -> bool {
        matches!((self.count(self.ranks[0]), self.count(self.ranks[4])), (3, 2) | (2, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(s: &str) -> HandAnalysis {
        let cards = crate::cards::parse_cards(s).unwrap();
        let five: [Card; 5] = cards.as_slice().try_into().unwrap();
        HandAnalysis::new(&five)
    }

    #[test]
    fn royal_analysis_sorts_ace_first() {
        let a = analyze("Th Jh Qh Kh Ah");
        assert!(a.is_flush);
        assert!(!a.is_straight);
        assert_eq!(a.ranks, [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]);
    }

    #[test]
    fn wheel_is_a_straight() {
        let a = analyze("3c Ad 5h 2s 4c");
        assert!(a.is_straight);
        assert!(!a.is_flush);
    }

    #[test]
    fn quads_report_kicker() {
        let a = analyze("Ac Ad 3c Ah As");
        assert_eq!(a.quad_with_kicker(), Some((Rank::Ace, Rank::Three)));
        assert_eq!(a.kicker_of_quad(Rank::Ace), Some(Rank::Three));
        assert_eq!(a.kicker_of_quad(Rank::Two), None);
        assert!(!a.is_full_house());
    }

    #[test]
    fn full_house_shape() {
        let a = analyze("3c 3d 7h 7s 7c");
        assert!(a.is_full_house());
        assert!(analyze("7c 7d 7h 3s 3c").is_full_house());
        assert!(!analyze("3c 3d 7h 7s 9c").is_full_house());
        assert!(!analyze("3c 9d 7h 7s 7c").is_full_house());
        assert_eq!(a.quad_with_kicker(), None);
    }
}
