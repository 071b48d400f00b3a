//! Board state representation and the movement rules

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::action::{Action, ActionKind};

/// Width and height of the board
pub const BOARD_SIZE: usize = 3;
/// Number of squares on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
/// Length of the flat state encoding (mover bit + board)
pub const STATE_LEN: usize = CELL_COUNT + 1;

/// A square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    /// Player 0's pawn, encoded as `1`
    White,
    /// Player 1's pawn, encoded as `-1`
    Black,
}

impl Cell {
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::White => 1,
            Cell::Black => -1,
        }
    }

    pub fn from_value(value: i64) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::White),
            -1 => Some(Cell::Black),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'W',
            Cell::Black => 'B',
        }
    }

    fn owner(self) -> Option<Player> {
        match self {
            Cell::White => Some(Player::White),
            Cell::Black => Some(Player::Black),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 0, moves toward row 0 and maximises
    White,
    /// Player 1, moves toward row 2 and minimises
    Black,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }

    /// Mover bit used in the flat encoding
    pub fn index(self) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    pub fn from_index(value: i64) -> Option<Player> {
        match value {
            0 => Some(Player::White),
            1 => Some(Player::Black),
            _ => None,
        }
    }

    /// Row delta of a forward step
    pub fn direction(self) -> isize {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Row this player must reach to win
    pub fn goal_row(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

/// Complete game state: the board plus whose turn it is.
///
/// States are plain `Copy` values; transitions return a new state and never
/// touch the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub cells: [Cell; CELL_COUNT],
    pub to_move: Player,
}

impl State {
    /// Standard opening: Black on row 0, White on row 2, White to move.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for col in 0..BOARD_SIZE {
            cells[col] = Cell::Black;
            cells[(BOARD_SIZE - 1) * BOARD_SIZE + col] = Cell::White;
        }
        State {
            cells,
            to_move: Player::White,
        }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT], to_move: Player) -> Self {
        State { cells, to_move }
    }

    /// Build a state from its flat encoding `[mover, c0, .., c8]`.
    ///
    /// # Errors
    ///
    /// Returns an error unless there are exactly 10 values, the mover is 0
    /// or 1 and every cell is -1, 0 or 1.
    pub fn from_values(values: &[i64]) -> Result<Self, crate::Error> {
        if values.len() != STATE_LEN {
            return Err(crate::Error::InvalidStateLength {
                expected: STATE_LEN,
                got: values.len(),
                context: format!("{values:?}"),
            });
        }

        let to_move = Player::from_index(values[0])
            .ok_or(crate::Error::InvalidPlayer { value: values[0] })?;

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &value) in values[1..].iter().enumerate() {
            cells[i] = Cell::from_value(value)
                .ok_or(crate::Error::InvalidCellValue { value, position: i })?;
        }

        Ok(State { cells, to_move })
    }

    /// Flat encoding `[mover, c0, .., c8]`
    pub fn to_values(&self) -> [i8; STATE_LEN] {
        let mut values = [0i8; STATE_LEN];
        values[0] = self.to_move.index() as i8;
        for (slot, cell) in values[1..].iter_mut().zip(self.cells) {
            *slot = cell.value();
        }
        values
    }

    /// Board portion of the encoding as network input, mover bit dropped.
    pub fn board_vector(&self) -> Vec<f64> {
        self.cells.iter().map(|cell| f64::from(cell.value())).collect()
    }

    /// Comma-separated flat encoding, e.g. `0,-1,-1,-1,0,0,0,1,1,1`
    pub fn encode(&self) -> String {
        self.to_values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * BOARD_SIZE + col]
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub fn count(&self, player: Player) -> usize {
        let piece = player.to_cell();
        self.cells.iter().filter(|&&c| c == piece).count()
    }

    /// Legal actions for the side to move.
    ///
    /// Squares are scanned row-major; each pawn yields its moves in
    /// [`ActionKind::ALL`] order. Minimax tie-breaking depends on this order.
    pub fn legal_actions(&self) -> Vec<Action> {
        let mover = self.to_move;
        let mut actions = Vec::new();

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.get(row, col) != mover.to_cell() {
                    continue;
                }
                for kind in ActionKind::ALL {
                    let action = Action::new(kind, row, col);
                    if self.legal_destination(&action).is_some() {
                        actions.push(action);
                    }
                }
            }
        }

        actions
    }

    /// Apply an action, returning the successor state with the mover flipped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if the origin does not hold
    /// the mover's pawn or the move is not legal from this state.
    pub fn apply_action(&self, action: &Action) -> Result<State, crate::Error> {
        let mover = self.to_move;
        if action.row >= BOARD_SIZE || action.col >= BOARD_SIZE {
            return Err(invalid(action, "origin is off the board"));
        }
        if self.get(action.row, action.col) != mover.to_cell() {
            return Err(invalid(
                action,
                &format!("origin does not hold a {mover} pawn"),
            ));
        }
        let (row, col) = self.legal_destination(action).ok_or_else(|| {
            let reason = match action.destination(mover) {
                None => "destination is off the board",
                Some(_) if action.kind.is_capture() => "no opposing pawn to capture",
                Some(_) => "destination is occupied",
            };
            invalid(action, reason)
        })?;

        let mut next = *self;
        next.cells[row * BOARD_SIZE + col] = mover.to_cell();
        next.cells[action.row * BOARD_SIZE + action.col] = Cell::Empty;
        next.to_move = mover.opponent();
        Ok(next)
    }

    /// Destination of `action` if it is a legal move for the side to move.
    fn legal_destination(&self, action: &Action) -> Option<(usize, usize)> {
        let (row, col) = action.destination(self.to_move)?;
        let target = self.get(row, col);
        let allowed = match action.kind {
            ActionKind::Advance => target == Cell::Empty,
            ActionKind::CaptureLeft | ActionKind::CaptureRight => {
                target.owner() == Some(self.to_move.opponent())
            }
        };
        allowed.then_some((row, col))
    }

    /// Whether `player` has a pawn on its goal row
    pub fn has_reached_goal(&self, player: Player) -> bool {
        let row = player.goal_row();
        (0..BOARD_SIZE).any(|col| self.get(row, col) == player.to_cell())
    }

    /// True when a pawn has reached its goal row or the mover is stuck.
    pub fn is_terminal(&self) -> bool {
        self.has_reached_goal(Player::White)
            || self.has_reached_goal(Player::Black)
            || self.legal_actions().is_empty()
    }

    /// +1 when White has reached row 0, -1 when Black has reached row 2,
    /// otherwise 0. Only meaningful for terminal states.
    pub fn utility(&self) -> i8 {
        if self.has_reached_goal(Player::White) {
            1
        } else if self.has_reached_goal(Player::Black) {
            -1
        } else {
            0
        }
    }
}

fn invalid(action: &Action, reason: &str) -> crate::Error {
    crate::Error::InvalidAction {
        kind: action.kind.to_string(),
        row: action.row,
        col: action.col,
        reason: reason.to_string(),
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for State {
    type Err = crate::Error;

    /// Parses `0,-1,-1,-1,0,0,0,1,1,1`, with or without brackets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
        let mut values = Vec::with_capacity(STATE_LEN);
        for raw in trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
        {
            let value = raw.parse::<i64>().map_err(|_| crate::Error::ParseState {
                input: s.to_string(),
                reason: format!("'{raw}' is not an integer"),
            })?;
            values.push(value);
        }
        State::from_values(&values)
    }
}
