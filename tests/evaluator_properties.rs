use proptest::prelude::*;
use tdb_poker::cards::{Card, Rank, Suit};
use tdb_poker::deck::Deck;
use tdb_poker::evaluator::{classify_hand, Category};
use tdb_poker::hand::Hand;
use tdb_poker::paytable::Paytable;

fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(Deck::standard().as_slice().to_vec(), 5).prop_shuffle()
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Hearts), Just(Suit::Diamonds), Just(Suit::Clubs), Just(Suit::Spades),]
}

fn permutation() -> impl Strategy<Value = Vec<usize>> {
    Just(vec![0usize, 1, 2, 3, 4]).prop_shuffle()
}

fn non_straight_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::sample::subsequence(Rank::ALL.to_vec(), 5).prop_filter("non-straight ranks", |xs| {
        let consecutive = xs.windows(2).all(|w| w[1].ordinal() == w[0].ordinal() + 1);
        let royal = xs == &[Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];
        !(consecutive || royal)
    })
}

proptest! {
    #[test]
    fn classification_is_total(cards in any_hand()) {
        let hand = Hand::from_slice(&cards).unwrap();
        prop_assert!(Category::ALL.contains(&classify_hand(&hand)));
    }

    #[test]
    fn classification_ignores_card_order(cards in any_hand(), perm in permutation()) {
        let hand = Hand::from_slice(&cards).unwrap();
        let shuffled: Vec<Card> = perm.iter().map(|&i| cards[i]).collect();
        let other = Hand::from_slice(&shuffled).unwrap();
        prop_assert_eq!(classify_hand(&hand), classify_hand(&other));
    }

    #[test]
    fn royal_flush_wins_over_flush_and_straight(suit in any_suit(), perm in permutation()) {
        let royal = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
        let cards: Vec<Card> = perm.iter().map(|&i| Card::new(royal[i], suit)).collect();
        let hand = Hand::from_slice(&cards).unwrap();
        prop_assert_eq!(classify_hand(&hand), Category::RoyalFlush);
    }

    #[test]
    fn four_aces_split_on_kicker(kicker_idx in 1usize..13, suit in any_suit(), perm in permutation()) {
        let kicker = Rank::ALL[kicker_idx];
        let base = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(kicker, suit),
        ];
        let cards: Vec<Card> = perm.iter().map(|&i| base[i]).collect();
        let expected = if kicker <= Rank::Four {
            Category::FourAcesWithTwoToFour
        } else {
            Category::FourAces
        };
        prop_assert_eq!(classify_hand(&Hand::from_slice(&cards).unwrap()), expected);
    }

    #[test]
    fn five_suited_non_straight_ranks_are_a_flush(ranks in non_straight_rank_set(), suit in any_suit()) {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, suit)).collect();
        prop_assert_eq!(classify_hand(&Hand::from_slice(&cards).unwrap()), Category::Flush);
    }

    #[test]
    fn no_win_never_pays(held in 0usize..=5) {
        prop_assert_eq!(Paytable::default().payout(Category::NoWin, held), 0);
    }

    #[test]
    fn royal_pays_only_on_four_or_five_held(held in 0usize..=64) {
        let paid = Paytable::default().payout(Category::RoyalFlush, held);
        match held {
            5 => prop_assert_eq!(paid, 800),
            4 => prop_assert_eq!(paid, 250),
            _ => prop_assert_eq!(paid, 0),
        }
    }
}
