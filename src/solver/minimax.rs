use crate::{
    Result,
    hexapawn::{Action, Player, State},
};

/// Value of a position and the move that achieves it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i8,
    /// `None` for terminal states
    pub action: Option<Action>,
}

/// Minimax evaluation with an explicit role flag.
///
/// The maximiser keeps the first action whose child value is strictly
/// greater than the best so far, the minimiser the first strictly smaller
/// one; ties therefore resolve to the earliest action in
/// [`State::legal_actions`] order. Children are evaluated with the role
/// flipped.
pub fn evaluate(state: &State, maximizing: bool) -> Result<Evaluation> {
    if state.is_terminal() {
        return Ok(Evaluation {
            value: state.utility(),
            action: None,
        });
    }

    let mut best_value = if maximizing { i8::MIN } else { i8::MAX };
    let mut best_action = None;

    for action in state.legal_actions() {
        let child = evaluate(&state.apply_action(&action)?, !maximizing)?;
        let improves = if maximizing {
            child.value > best_value
        } else {
            child.value < best_value
        };
        if improves {
            best_value = child.value;
            best_action = Some(action);
        }
    }

    Ok(Evaluation {
        value: best_value,
        action: best_action,
    })
}

/// Evaluate `state` with White maximising and Black minimising.
pub fn solve(state: &State) -> Result<Evaluation> {
    evaluate(state, state.to_move == Player::White)
}

/// Optimal action for the side to move, `None` if the state is terminal.
pub fn minimax(state: &State) -> Result<Option<Action>> {
    Ok(solve(state)?.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(values: [i64; 10]) -> State {
        State::from_values(&values).unwrap()
    }

    #[test]
    fn terminal_state_has_no_action() {
        let won = state([1, 1, 0, 0, 0, 0, -1, 0, 0, 0]);
        let eval = solve(&won).unwrap();
        assert_eq!(eval.value, 1);
        assert_eq!(eval.action, None);
    }

    #[test]
    fn takes_immediate_win() {
        // . . .
        // W . B
        // . . .   White to move: advancing wins
        let s = state([0, 0, 0, 0, 1, 0, -1, 0, 0, 0]);
        let eval = solve(&s).unwrap();
        assert_eq!(eval.value, 1);
        assert_eq!(eval.action, Some(Action::advance(1, 0)));
    }

    #[test]
    fn black_minimises() {
        // . . .
        // B . W
        // . . .   Black to move: advancing wins
        let s = state([1, 0, 0, 0, -1, 0, 1, 0, 0, 0]);
        let eval = solve(&s).unwrap();
        assert_eq!(eval.value, -1);
        assert_eq!(eval.action, Some(Action::advance(1, 0)));
    }

    #[test]
    fn ties_keep_first_action() {
        let start = State::new();
        let eval = solve(&start).unwrap();
        assert_eq!(eval.value, 0);
        assert_eq!(eval.action, Some(Action::advance(2, 0)));
    }

    #[test]
    fn role_flag_matches_mover() {
        let start = State::new();
        assert_eq!(evaluate(&start, true).unwrap(), solve(&start).unwrap());
    }
}
