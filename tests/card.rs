//! Card integration tests.

use core::cmp::Ordering;

use cardstock::{Card, CardError, Color, Rank, Suit};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn from_indices_round_trips_every_valid_pair() {
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let built = Card::from_indices(rank.index(), suit.index()).unwrap();
            assert_eq!(built.rank(), rank);
            assert_eq!(built.suit(), suit);
            assert_eq!(built, card(rank, suit));
        }
    }
}

#[test]
fn invalid_rank_indices_are_rejected() {
    for index in [0, 1, 15, 255] {
        assert_eq!(Rank::from_index(index), Err(CardError::InvalidRank(index)));
        assert_eq!(Rank::try_from(index), Err(CardError::InvalidRank(index)));
        assert_eq!(
            Card::from_indices(index, 0),
            Err(CardError::InvalidRank(index))
        );
    }
}

#[test]
fn invalid_suit_indices_are_rejected() {
    for index in [4, 5, 255] {
        assert_eq!(Suit::from_index(index), Err(CardError::InvalidSuit(index)));
        assert_eq!(Suit::try_from(index), Err(CardError::InvalidSuit(index)));
        assert_eq!(
            Card::from_indices(2, index),
            Err(CardError::InvalidSuit(index))
        );
    }
}

#[test]
fn rank_is_validated_before_suit() {
    // Both indices invalid: the rank error wins.
    assert_eq!(Card::from_indices(0, 9), Err(CardError::InvalidRank(0)));
}

#[test]
fn rank_decides_before_suit() {
    assert!(card(Rank::Two, Suit::Spades) < card(Rank::Three, Suit::Spades));
    assert!(card(Rank::Ace, Suit::Hearts) > card(Rank::King, Suit::Spades));

    // Equal ranks fall back to the fixed suit order.
    assert!(card(Rank::Ten, Suit::Spades) < card(Rank::Ten, Suit::Hearts));
    assert!(card(Rank::Ten, Suit::Hearts) < card(Rank::Ten, Suit::Diamonds));
    assert!(card(Rank::Ten, Suit::Diamonds) < card(Rank::Ten, Suit::Clubs));
}

#[test]
fn ordering_is_total_and_transitive() {
    let deck: Vec<Card> = Rank::ALL
        .into_iter()
        .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| card(rank, suit)))
        .collect();

    for &a in &deck {
        for &b in &deck {
            // Exactly one of <, ==, > holds, and cmp agrees with eq.
            match a.cmp(&b) {
                Ordering::Less => {
                    assert!(a < b);
                    assert!(b > a);
                    assert_ne!(a, b);
                }
                Ordering::Equal => {
                    assert_eq!(a, b);
                }
                Ordering::Greater => {
                    assert!(a > b);
                    assert!(b < a);
                    assert_ne!(a, b);
                }
            }
        }
    }

    let mut sorted = deck.clone();
    sorted.sort_unstable();
    for window in sorted.windows(3) {
        assert!(window[0] <= window[1]);
        assert!(window[1] <= window[2]);
        assert!(window[0] <= window[2]);
    }
}

#[test]
fn display_joins_label_and_suit_name() {
    let queen = Card::from_indices(12, Suit::Diamonds.index()).unwrap();
    assert_eq!(queen.to_display_string(), "Queen of diamonds");
    assert_eq!(format!("{queen}"), "Queen of diamonds");

    assert_eq!(
        card(Rank::Ten, Suit::Spades).to_display_string(),
        "10 of spades"
    );
    assert_eq!(
        card(Rank::Ace, Suit::Clubs).to_display_string(),
        "Ace of clubs"
    );
}

#[test]
fn suit_colors() {
    assert_eq!(Suit::Hearts.color(), Color::Red);
    assert_eq!(Suit::Diamonds.color(), Color::Red);
    assert_eq!(Suit::Spades.color(), Color::Black);
    assert_eq!(Suit::Clubs.color(), Color::Black);

    assert_eq!(Color::Red.name(), "red");
    assert_eq!(Color::Black.name(), "black");
    assert_eq!(format!("{}", Suit::Hearts.color()), "red");
}

#[test]
fn error_messages_name_the_offending_index() {
    assert_eq!(
        CardError::InvalidRank(15).to_string(),
        "invalid rank index 15 (valid range is 2..=14)"
    );
    assert_eq!(
        CardError::InvalidSuit(4).to_string(),
        "invalid suit index 4 (valid range is 0..=3)"
    );
}
