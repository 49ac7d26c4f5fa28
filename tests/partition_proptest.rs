//! Property-based tests for the Deck/Hand/Field partition.
//!
//! Random move sequences, including references to cards outside their
//! source pool and to unknown ids, must never break the partition. Draws
//! are also checked for an even spread over the remaining deck.

use proptest::prelude::*;
use skill_duel::cards::{compendium, CardId};
use skill_duel::core::{GameRng, ScriptedDraws};
use skill_duel::zones::{Move, OutcomeKind, Partition, Pool};

const CARDS: u32 = 14;

// Ids 1..=14 are in the compendium; 15 and 16 are not.
fn card_strategy() -> impl Strategy<Value = CardId> {
    (1u32..=CARDS + 2).prop_map(CardId::new)
}

fn move_strategy() -> impl Strategy<Value = Move> {
    prop_oneof![
        4 => Just(Move::Draw),
        3 => card_strategy().prop_map(Move::Play),
        2 => card_strategy().prop_map(Move::Return),
        1 => Just(Move::Reset),
    ]
}

fn moves_strategy() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(move_strategy(), 0..80)
}

fn picks_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..32, 0..80)
}

proptest! {
    #[test]
    fn test_invariants_hold_after_every_move(moves in moves_strategy(), picks in picks_strategy()) {
        let catalog = compendium();
        let mut partition = Partition::new(&catalog, 4);
        let mut draws = ScriptedDraws::new(picks);

        for mv in moves {
            partition.apply(mv, &mut draws);

            prop_assert!(partition.check_invariants().is_ok());
            prop_assert!(partition.field_len() <= 4);
            prop_assert_eq!(
                partition.deck_len() + partition.hand_len() + partition.field_len(),
                CARDS as usize
            );
        }
    }

    #[test]
    fn test_rejected_moves_change_nothing(moves in moves_strategy(), picks in picks_strategy()) {
        let catalog = compendium();
        let mut partition = Partition::new(&catalog, 4);
        let mut draws = ScriptedDraws::new(picks);

        for mv in moves {
            let before = partition.clone();
            let outcome = partition.apply(mv, &mut draws);

            if !outcome.is_success() {
                prop_assert_eq!(&partition, &before);
            }
        }
    }

    #[test]
    fn test_outcome_kind_matches_preconditions(moves in moves_strategy(), picks in picks_strategy()) {
        let catalog = compendium();
        let mut partition = Partition::new(&catalog, 4);
        let mut draws = ScriptedDraws::new(picks);

        for mv in moves {
            let deck_empty = partition.deck_len() == 0;
            let field_full = partition.is_field_full();
            let source = match mv {
                Move::Play(card) | Move::Return(card) => partition.location(card),
                _ => None,
            };

            let kind = partition.apply(mv, &mut draws).kind();
            let expected = match mv {
                Move::Draw if deck_empty => OutcomeKind::DeckEmpty,
                Move::Play(_) if source != Some(Pool::Hand) => OutcomeKind::InvalidReference,
                Move::Play(_) if field_full => OutcomeKind::FieldFull,
                Move::Return(_) if source != Some(Pool::Field) => OutcomeKind::InvalidReference,
                _ => OutcomeKind::Success,
            };
            prop_assert_eq!(kind, expected);
        }
    }

    #[test]
    fn test_reset_restores_initial(moves in moves_strategy(), picks in picks_strategy()) {
        let catalog = compendium();
        let mut partition = Partition::new(&catalog, 4);
        let mut draws = ScriptedDraws::new(picks);

        for mv in moves {
            partition.apply(mv, &mut draws);
        }
        partition.reset();

        prop_assert!(partition.is_initial());
        prop_assert_eq!(partition, Partition::new(&catalog, 4));
    }

    #[test]
    fn test_play_then_return_appends(picks in picks_strategy(), draws_taken in 1usize..=14) {
        let catalog = compendium();
        let mut partition = Partition::new(&catalog, 4);
        let mut draws = ScriptedDraws::new(picks);

        for _ in 0..draws_taken {
            partition.draw(&mut draws);
        }
        let hand = partition.hand();
        let first = hand[0];

        partition.play(first);
        partition.return_to_hand(first);

        let mut expected = hand[1..].to_vec();
        expected.push(first);
        prop_assert_eq!(partition.hand(), expected);
    }
}

// =============================================================================
// Draw Distribution Tests
// =============================================================================

const SEEDS: u64 = 14_000;

/// Count which card each seed yields on its `nth` draw (1-based).
fn draw_counts(nth: usize) -> Vec<usize> {
    let catalog = compendium();
    let mut counts = vec![0usize; CARDS as usize];

    for seed in 0..SEEDS {
        let mut partition = Partition::new(&catalog, 4);
        let mut rng = GameRng::new(seed);
        let mut last = None;
        for _ in 0..nth {
            last = partition.draw(&mut rng).moved();
        }
        let card = last.expect("deck has enough cards");
        counts[card.raw() as usize - 1] += 1;
    }

    counts
}

/// The first draw is uniform over the full deck.
#[test]
fn test_first_draw_is_uniform() {
    // 1000 expected per card; sd is about 30.
    for (index, count) in draw_counts(1).into_iter().enumerate() {
        assert!(
            (850..=1150).contains(&count),
            "card {} drawn first {count} times",
            index + 1
        );
    }
}

/// Later draws stay uniform over what is left, with no bias toward
/// catalog order.
#[test]
fn test_later_draw_is_uniform() {
    let counts = draw_counts(3);
    assert_eq!(counts.iter().sum::<usize>(), SEEDS as usize);
    for (index, count) in counts.into_iter().enumerate() {
        assert!(
            (850..=1150).contains(&count),
            "card {} drawn third {count} times",
            index + 1
        );
    }
}
