use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseMoveError, Pos};

/// A single move by one player.
///
/// On the wire, a move is a string: `"x,y"` for a placement and
/// `"x1,y1|x2,y2|h"` for a tower move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Move {
    /// Drop a new token of the moving player onto an empty field.
    Place(Pos),
    /// Move the whole tower at `from` on top of the tower at `to`.
    Tower {
        from: Pos,
        to: Pos,
        /// The height of the merged tower. Only informational, the receiver
        /// does not need it to apply the move.
        height: usize,
    },
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "{}", pos),
            Move::Tower { from, to, height } => write!(f, "{}|{}|{}", from, to, height),
        }
    }
}

fn parse_number<T: FromStr<Err = std::num::ParseIntError>>(s: &str) -> Result<T, ParseMoveError> {
    let s = s.trim();
    s.parse().map_err(|err| ParseMoveError::InvalidNumber {
        input: String::from(s),
        err,
    })
}

fn parse_pos(s: &str, whole: &str) -> Result<Pos, ParseMoveError> {
    match s.split(',').collect::<Vec<_>>()[..] {
        [x, y] => Ok(Pos {
            x: parse_number(x)?,
            y: parse_number(y)?,
        }),
        _ => Err(ParseMoveError::WrongShape {
            input: String::from(whole),
        }),
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('|').collect::<Vec<_>>()[..] {
            [pos] => Ok(Move::Place(parse_pos(pos, s)?)),
            [from, to, height] => Ok(Move::Tower {
                from: parse_pos(from, s)?,
                to: parse_pos(to, s)?,
                height: parse_number(height)?,
            }),
            _ => Err(ParseMoveError::WrongShape {
                input: String::from(s),
            }),
        }
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> String {
        mv.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = ParseMoveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format() {
        let place = Move::Place(Pos::new(1, 1));
        let tower = Move::Tower {
            from: Pos::new(0, 0),
            to: Pos::new(2, 2),
            height: 3,
        };
        assert_eq!(place.to_string(), "1,1");
        assert_eq!(tower.to_string(), "0,0|2,2|3");
        assert_eq!(serde_json::to_string(&tower).unwrap(), "\"0,0|2,2|3\"");
        assert_eq!(serde_json::from_str::<Move>("\"1,1\"").unwrap(), place);
    }

    #[test]
    fn parse_tolerates_whitespace() {
        assert_eq!(
            " 4, 0 | 3 ,1|2 ".parse::<Move>(),
            Ok(Move::Tower {
                from: Pos::new(4, 0),
                to: Pos::new(3, 1),
                height: 2
            })
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "1,1|2,2".parse::<Move>(),
            Err(ParseMoveError::WrongShape { .. })
        ));
        assert!(matches!(
            "1,1,1".parse::<Move>(),
            Err(ParseMoveError::WrongShape { .. })
        ));
        assert!(matches!(
            "a,1".parse::<Move>(),
            Err(ParseMoveError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "0,0|1,1|-1".parse::<Move>(),
            Err(ParseMoveError::InvalidNumber { .. })
        ));
        assert!("".parse::<Move>().is_err());
    }
}
