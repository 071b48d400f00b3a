//! Move kinds and actions

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::board::{BOARD_SIZE, Player};

/// The three ways a pawn can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Straight forward into an empty square
    Advance,
    /// Diagonal capture toward column - 1
    CaptureLeft,
    /// Diagonal capture toward column + 1
    CaptureRight,
}

impl ActionKind {
    /// Generation order used by [`State::legal_actions`](super::State::legal_actions).
    pub const ALL: [ActionKind; 3] = [
        ActionKind::Advance,
        ActionKind::CaptureLeft,
        ActionKind::CaptureRight,
    ];

    /// Column shift applied by this move kind
    pub fn column_offset(self) -> isize {
        match self {
            ActionKind::Advance => 0,
            ActionKind::CaptureLeft => -1,
            ActionKind::CaptureRight => 1,
        }
    }

    pub fn is_capture(self) -> bool {
        !matches!(self, ActionKind::Advance)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Advance => "advance",
            ActionKind::CaptureLeft => "captureLeft",
            ActionKind::CaptureRight => "captureRight",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "advance" => Ok(ActionKind::Advance),
            "captureleft" => Ok(ActionKind::CaptureLeft),
            "captureright" => Ok(ActionKind::CaptureRight),
            _ => Err(crate::Error::InvalidActionKind {
                input: s.to_string(),
                expected: "advance, captureLeft, captureRight".to_string(),
            }),
        }
    }
}

/// A move, identified by the origin square of the moving pawn.
///
/// The destination is not stored; it follows from the kind and the mover's
/// direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(kind: ActionKind, row: usize, col: usize) -> Self {
        Self { kind, row, col }
    }

    pub fn advance(row: usize, col: usize) -> Self {
        Self::new(ActionKind::Advance, row, col)
    }

    pub fn capture_left(row: usize, col: usize) -> Self {
        Self::new(ActionKind::CaptureLeft, row, col)
    }

    pub fn capture_right(row: usize, col: usize) -> Self {
        Self::new(ActionKind::CaptureRight, row, col)
    }

    /// Destination square when `player` makes this move, or `None` if it
    /// would leave the board.
    pub fn destination(&self, player: Player) -> Option<(usize, usize)> {
        let row = self.row.checked_add_signed(player.direction())?;
        let col = self.col.checked_add_signed(self.kind.column_offset())?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    /// Parses `"advance 2 2"` or `"captureLeft,1,1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [kind, row, col] = parts.as_slice() else {
            return Err(crate::Error::InvalidActionKind {
                input: s.to_string(),
                expected: "'<kind> <row> <col>'".to_string(),
            });
        };
        let parse_index = |raw: &str| {
            raw.parse::<usize>()
                .map_err(|_| crate::Error::InvalidActionKind {
                    input: s.to_string(),
                    expected: "row and column indices in 0..3".to_string(),
                })
        };
        Ok(Action::new(kind.parse()?, parse_index(row)?, parse_index(col)?))
    }
}
