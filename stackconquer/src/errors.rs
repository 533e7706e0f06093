use std::num::ParseIntError;

use crate::Pos;

/// The error type for [`Board::from_rows()`](crate::Board::from_rows).
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidBoard {
    Empty,
    TooLarge { size: usize },
    NotSquare { row: usize, len: usize, size: usize },
}

impl std::error::Error for InvalidBoard {}

impl std::fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoard::Empty => write!(f, "The board has no fields"),
            InvalidBoard::TooLarge { size } => write!(
                f,
                "The board has {} rows, but at most {} are supported",
                size,
                crate::MAX_BOARD_SIZE
            ),
            InvalidBoard::NotSquare { row, len, size } => write!(
                f,
                "Row {} of the board has {} fields, but the board has {} rows",
                row, len, size
            ),
        }
    }
}

/// A player id other than 1 or 2.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownPlayer(pub u8);

impl std::error::Error for UnknownPlayer {}

impl std::fmt::Display for UnknownPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown player id {}, expected 1 or 2", self.0)
    }
}

/// The error type for executing a single move.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds {
        pos: Pos,
    },
    NoStonesLeft,
    FieldOccupied {
        pos: Pos,
        height: usize,
    },
    EmptySource {
        pos: Pos,
    },
    EmptyDestination {
        pos: Pos,
    },
    Unreachable {
        from: Pos,
        to: Pos,
        required_distance: usize,
    },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { pos } => {
                write!(f, "Field ({}) is outside of the board", pos)
            }
            IllegalMove::NoStonesLeft => {
                write!(f, "Tried to place a stone, but the player has none left")
            }
            IllegalMove::FieldOccupied { pos, height } => write!(
                f,
                "Tried to place a stone on field ({}), which already holds a tower of height {}",
                pos, height
            ),
            IllegalMove::EmptySource { pos } => {
                write!(f, "Tried to move a tower from the empty field ({})", pos)
            }
            IllegalMove::EmptyDestination { pos } => {
                write!(f, "Tried to move a tower onto the empty field ({})", pos)
            }
            IllegalMove::Unreachable {
                from,
                to,
                required_distance,
            } => write!(
                f,
                "The tower at ({}) cannot reach ({}): it must travel exactly {} fields in a straight, unobstructed line",
                from, to, required_distance
            ),
        }
    }
}

/// The error type for parsing a [`Move`](crate::Move) from its wire format.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Neither `"x,y"` nor `"x1,y1|x2,y2|h"`.
    WrongShape { input: String },
    InvalidNumber { input: String, err: ParseIntError },
}

impl std::error::Error for ParseMoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseMoveError::InvalidNumber { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMoveError::WrongShape { input } => write!(
                f,
                "Expected a move of the form \"x,y\" or \"x1,y1|x2,y2|h\", got {:?}",
                input
            ),
            ParseMoveError::InvalidNumber { input, .. } => {
                write!(f, "Invalid number {:?} in move", input)
            }
        }
    }
}
