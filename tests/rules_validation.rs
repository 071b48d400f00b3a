//! Test suite for the Hexapawn rules engine
//! Validates transitions, terminal detection and utilities

mod common;

use common::{start, state};
use hexapawn::{
    Error,
    hexapawn::{Action, ActionKind, Player, enumerate_states},
};

mod transitions {
    use super::*;

    #[test]
    fn test_white_advance_from_opening() {
        let next = state([0, -1, -1, -1, 0, 0, 0, 1, 1, 1])
            .apply_action(&Action::advance(2, 2))
            .unwrap();
        assert_eq!(next.to_values(), [1, -1, -1, -1, 0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn test_white_capture_left_reaches_goal() {
        let next = state([0, -1, 0, 0, 0, 1, 0, 0, 0, 0])
            .apply_action(&Action::capture_left(1, 1))
            .unwrap();
        assert_eq!(next.to_values(), [1, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(next.is_terminal());
        assert_eq!(next.utility(), 1);
    }

    #[test]
    fn test_white_capture_right() {
        let next = state([0, 0, 0, 0, 0, -1, 0, 1, 0, 0])
            .apply_action(&Action::capture_right(2, 0))
            .unwrap();
        assert_eq!(next.to_values(), [1, 0, 0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_black_advance_reaches_goal() {
        let next = state([1, 0, 0, 0, 0, -1, 0, 0, 0, 0])
            .apply_action(&Action::advance(1, 1))
            .unwrap();
        assert_eq!(next.to_values(), [0, 0, 0, 0, 0, 0, 0, 0, -1, 0]);
        assert!(next.is_terminal());
        assert_eq!(next.utility(), -1);
    }

    #[test]
    fn test_black_capture_left() {
        let next = state([1, -1, 0, -1, 0, -1, 1, 1, 1, 1])
            .apply_action(&Action::capture_left(1, 1))
            .unwrap();
        assert_eq!(next.to_values(), [0, -1, 0, -1, 0, 0, 1, -1, 1, 1]);
    }

    #[test]
    fn test_black_capture_right() {
        let next = state([1, -1, 0, -1, 0, 1, 0, 1, 0, 1])
            .apply_action(&Action::capture_right(0, 0))
            .unwrap();
        assert_eq!(next.to_values(), [0, 0, 0, -1, 0, -1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_parsed_actions_match_constructors() {
        let parsed: Action = "captureLeft 1 1".parse().unwrap();
        assert_eq!(parsed, Action::new(ActionKind::CaptureLeft, 1, 1));
    }
}

mod invalid_actions {
    use super::*;

    #[test]
    fn test_empty_origin_is_rejected() {
        let err = start().apply_action(&Action::advance(1, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidAction { row: 1, col: 1, .. }));
    }

    #[test]
    fn test_opponent_piece_is_rejected() {
        // White to move, (0, 0) holds a Black pawn.
        let err = start().apply_action(&Action::advance(0, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidAction { .. }));
    }

    #[test]
    fn test_capture_onto_empty_square_is_rejected() {
        assert!(start().apply_action(&Action::capture_right(2, 0)).is_err());
    }

    #[test]
    fn test_capture_off_the_board_is_rejected() {
        assert!(start().apply_action(&Action::capture_left(2, 0)).is_err());
    }

    #[test]
    fn test_blocked_advance_is_rejected() {
        let blocked = state([0, 0, 0, 0, 0, -1, 0, 0, 1, 0]);
        assert!(blocked.apply_action(&Action::advance(2, 1)).is_err());
    }
}

mod properties {
    use super::*;

    /// Every legal move from every reachable state: deterministic, leaves the
    /// receiver alone, flips the mover and preserves the piece multiset.
    #[test]
    fn test_transitions_preserve_piece_multiset() {
        let space = enumerate_states(&start()).unwrap();
        for s in &space {
            let mover = s.to_move;
            let opponent = mover.opponent();
            for action in s.legal_actions() {
                let before = *s;
                let next = s.apply_action(&action).unwrap();
                let again = s.apply_action(&action).unwrap();

                assert_eq!(next, again, "non-deterministic {action} from {}", s.encode());
                assert_eq!(*s, before);
                assert_eq!(next.to_move, opponent);
                assert_eq!(next.count(mover), s.count(mover));

                let captured = if action.kind.is_capture() { 1 } else { 0 };
                assert_eq!(
                    next.count(opponent),
                    s.count(opponent) - captured,
                    "{action} from {}",
                    s.encode()
                );
            }
        }
    }

    #[test]
    fn test_nonzero_utility_implies_terminal() {
        let space = enumerate_states(&start()).unwrap();
        for s in &space {
            if s.utility() != 0 {
                assert!(s.is_terminal(), "{} has utility but is live", s.encode());
            }
        }
    }

    #[test]
    fn test_stalemates_have_zero_utility() {
        let space = enumerate_states(&start()).unwrap();
        for s in space.terminal_states() {
            let goal_reached =
                s.has_reached_goal(Player::White) || s.has_reached_goal(Player::Black);
            if !goal_reached {
                assert!(s.legal_actions().is_empty());
                assert_eq!(s.utility(), 0);
            }
        }
    }

    #[test]
    fn test_terminal_states_have_no_actions_to_explore() {
        let space = enumerate_states(&start()).unwrap();
        for s in &space {
            if !s.is_terminal() {
                assert!(!s.legal_actions().is_empty());
            }
        }
    }

    #[test]
    fn test_opening_moves() {
        let actions = start().legal_actions();
        assert_eq!(
            actions,
            vec![
                Action::advance(2, 0),
                Action::advance(2, 1),
                Action::advance(2, 2)
            ]
        );
    }
}
