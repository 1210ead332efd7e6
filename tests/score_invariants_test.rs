//! Property tests for the derived flags over arbitrary command sequences.

use duel_counter::core::{Phase, ScoreState};
use duel_counter::types::{CounterAction, Player};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Cmd {
    Start,
    Score(Player, i32),
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Red), Just(Player::Blue)]
}

fn cmd() -> impl Strategy<Value = Cmd> {
    prop_oneof![
        1 => Just(Cmd::Start),
        8 => (player(), -3i32..=3).prop_map(|(p, d)| Cmd::Score(p, d)),
    ]
}

fn action() -> impl Strategy<Value = CounterAction> {
    prop_oneof![
        1 => Just(CounterAction::StartGame),
        4 => player().prop_map(CounterAction::Plus),
        4 => player().prop_map(CounterAction::Minus),
    ]
}

proptest! {
    #[test]
    fn won_flags_are_mutually_exclusive(cmds in prop::collection::vec(cmd(), 0..200)) {
        let mut state = ScoreState::new();
        for c in cmds {
            match c {
                Cmd::Start => { state.start_game(); }
                Cmd::Score(p, d) => { state.apply_score(p, d); }
            }
            prop_assert!(!(state.red_won() && state.blue_won()));
        }
    }

    #[test]
    fn flags_are_a_pure_function_of_totals(cmds in prop::collection::vec(cmd(), 0..200)) {
        let mut state = ScoreState::new();
        for c in cmds {
            match c {
                Cmd::Start => { state.start_game(); }
                Cmd::Score(p, d) => { state.apply_score(p, d); }
            }
            let (red, blue) = (state.red_points(), state.blue_points());
            prop_assert_eq!(state.blue_won(), red <= 0 && blue > 0);
            prop_assert_eq!(state.red_won(), blue <= 0 && red > 0);
            prop_assert_eq!(state.no_game_started(), red == 0 && blue == 0);
        }
    }

    #[test]
    fn ignored_commands_change_nothing(actions in prop::collection::vec(action(), 0..200)) {
        let mut state = ScoreState::new();
        for a in actions {
            let before = state.snapshot();
            let changed = state.apply_action(a);
            let after = state.snapshot();

            if a != CounterAction::StartGame && before.phase() != Phase::Playing {
                prop_assert!(!changed);
            }
            prop_assert_eq!(changed, before != after);
            prop_assert_eq!(
                after.revision,
                before.revision + u64::from(changed)
            );
        }
    }
}
