//! Scoring, layout, and state-derivation tests.

use blackjack::{arrange, Card, Deck, Hand, Phase, PlayerState, Suit, CARD_SPACING, DECK_SIZE};
use blackjack::ButtonState;
use cardboard::glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &c in cards {
        hand.add_card(c);
    }
    hand
}

#[test]
fn ace_and_king_is_blackjack() {
    let hand = hand_of(&[card(Suit::Hearts, 1), card(Suit::Spades, 13)]);
    assert_eq!(hand.value(), 21);
    assert!(hand.is_blackjack());
    assert!(!hand.is_bust());
}

#[test]
fn two_faces_and_a_five_bust() {
    let hand = hand_of(&[
        card(Suit::Spades, 13),
        card(Suit::Hearts, 12),
        card(Suit::Clubs, 5),
    ]);
    assert_eq!(hand.value(), 25);
    assert!(hand.is_bust());
    assert!(!hand.is_blackjack());
}

#[test]
fn small_numbers_sum_plainly() {
    let hand = hand_of(&[
        card(Suit::Clubs, 2),
        card(Suit::Diamonds, 3),
        card(Suit::Hearts, 4),
    ]);
    assert_eq!(hand.value(), 9);
    assert!(!hand.is_bust());
    assert!(!hand.is_blackjack());
}

#[test]
fn face_down_cards_score_zero_anywhere() {
    let hand = hand_of(&[Card::face_down(), card(Suit::Hearts, 7)]);
    assert_eq!(hand.value(), 7);

    let hand = hand_of(&[card(Suit::Hearts, 7), Card::face_down()]);
    assert_eq!(hand.value(), 7);

    // rank is irrelevant while the card is face down
    let hand = hand_of(&[card(Suit::Back, 13)]);
    assert_eq!(hand.value(), 0);
}

#[test]
fn adding_a_card_never_lowers_the_total() {
    let mut hand = Hand::new();
    let mut last = 0;
    for rank in 1..=13 {
        hand.add_card(card(Suit::Clubs, rank));
        let value = hand.value();
        assert!(value >= last, "value dropped after adding rank {rank}");
        last = value;
    }
}

#[test]
fn aces_always_count_eleven() {
    // Two aces are 22 and bust: the evaluator does no soft-ace demotion.
    let hand = hand_of(&[card(Suit::Hearts, 1), card(Suit::Spades, 1)]);
    assert_eq!(hand.value(), 22);
    assert!(hand.is_bust());
}

#[test]
fn out_of_range_ranks_score_zero() {
    let hand = hand_of(&[card(Suit::Hearts, 0), card(Suit::Hearts, 14)]);
    assert_eq!(hand.value(), 0);
}

#[test]
fn revealing_a_hole_card_raises_the_total() {
    let mut hand = hand_of(&[card(Suit::Hearts, 9), Card::face_down()]);
    assert_eq!(hand.value(), 9);
    hand.replace_card(1, card(Suit::Clubs, 8));
    assert_eq!(hand.value(), 17);
}

#[test]
fn texture_names_follow_rank_and_suit() {
    assert_eq!(card(Suit::Hearts, 1).texture_name(), "1h.png");
    assert_eq!(card(Suit::Spades, 13).texture_name(), "13s.png");
    assert_eq!(card(Suit::Diamonds, 10).texture_name(), "10d.png");
    assert_eq!(Card::face_down().texture_name(), "1b.png");
}

#[test]
fn arrangement_is_deterministic_under_a_seed() {
    let pivot = Vec3::new(100.0, 200.0, 0.0);
    let a = arrange(pivot, 5, &mut StdRng::seed_from_u64(7));
    let b = arrange(pivot, 5, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn arrangement_fans_left_to_right_within_jitter_bounds() {
    let pivot = Vec3::new(100.0, 200.0, 0.0);
    let layout = arrange(pivot, 6, &mut StdRng::seed_from_u64(42));
    assert_eq!(layout.len(), 6);
    for (i, t) in layout.iter().enumerate() {
        let base_x = pivot.x + CARD_SPACING * i as f32;
        assert!(t.pos.x >= base_x && t.pos.x <= base_x + 10.0);
        assert!(t.pos.y >= pivot.y && t.pos.y <= pivot.y + 5.0);
        // up to half a degree counter-clockwise
        assert!(t.rot.z <= 0.0 && t.rot.z > -0.5_f32.to_radians());
        assert_eq!(t.scale, Vec3::ONE);
    }
}

#[test]
fn deck_holds_fifty_two_distinct_cards() {
    let mut deck = Deck::shuffled(&mut StdRng::seed_from_u64(1));
    assert_eq!(deck.remaining(), DECK_SIZE);
    let mut seen = std::collections::HashSet::new();
    while let Some(card) = deck.draw() {
        assert!(!card.is_face_down());
        assert!((1..=13).contains(&card.rank));
        assert!(seen.insert(card), "duplicate {card:?}");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn button_state_follows_the_sample() {
    assert_eq!(ButtonState::from_sample(false, false), ButtonState::Idle);
    assert_eq!(ButtonState::from_sample(false, true), ButtonState::Idle);
    assert_eq!(ButtonState::from_sample(true, false), ButtonState::Hover);
    assert_eq!(ButtonState::from_sample(true, true), ButtonState::Pressed);
}

#[test]
fn player_state_during_the_round() {
    let empty = Hand::new();
    assert_eq!(
        PlayerState::derive(&empty, Phase::PlayerTurn, None),
        PlayerState::Idle
    );

    let playing = hand_of(&[card(Suit::Clubs, 5), card(Suit::Hearts, 9)]);
    assert_eq!(
        PlayerState::derive(&playing, Phase::PlayerTurn, None),
        PlayerState::Playing
    );

    let bust = hand_of(&[
        card(Suit::Clubs, 10),
        card(Suit::Hearts, 9),
        card(Suit::Spades, 8),
    ]);
    assert_eq!(
        PlayerState::derive(&bust, Phase::PlayerTurn, None),
        PlayerState::Bust
    );

    let natural = hand_of(&[card(Suit::Clubs, 1), card(Suit::Hearts, 11)]);
    assert_eq!(
        PlayerState::derive(&natural, Phase::DealerTurn, None),
        PlayerState::Blackjack
    );
}

#[test]
fn player_state_at_settle() {
    let eighteen = hand_of(&[card(Suit::Clubs, 8), card(Suit::Hearts, 10)]);

    assert_eq!(
        PlayerState::derive(&eighteen, Phase::Settled, Some(17)),
        PlayerState::Won
    );
    assert_eq!(
        PlayerState::derive(&eighteen, Phase::Settled, Some(18)),
        PlayerState::Tied
    );
    assert_eq!(
        PlayerState::derive(&eighteen, Phase::Settled, Some(20)),
        PlayerState::Lost
    );
    // dealer bust pays everyone still standing
    assert_eq!(
        PlayerState::derive(&eighteen, Phase::Settled, Some(26)),
        PlayerState::Won
    );
}
