use serde::{Deserialize, Serialize};

use crate::{Board, Player, Rules};

/// Request for a bot to do something.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new game.
    ///
    /// The response should be an [`Okay`].
    NewGame {
        /// The player the bot plays as.
        player: Player,
        rules: Rules,
    },
    /// Request to make a move.
    ///
    /// The response should be a single [`Move`](crate::Move), which is
    /// serialized as a string.
    MakeMove {
        board: Board,
        /// Does the bot still have tokens to place?
        stones_left: bool,
    },
    /// The bot should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pos;

    #[test]
    fn make_move_json() {
        let json = r#"{"type":"MakeMove","board":[[[2],[]],[[],[1,2]]],"stones_left":true}"#;
        let req: Request = serde_json::from_str(json).unwrap();
        let Request::MakeMove { board, stones_left } = req else {
            panic!("Wrong request type");
        };
        assert!(stones_left);
        assert_eq!(board.get(Pos::new(1, 1)).unwrap().top(), Some(Player::Two));
    }

    #[test]
    fn new_game_json() {
        let req = Request::NewGame {
            player: Player::Two,
            rules: Rules::default(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.starts_with(r#"{"type":"NewGame","player":2,"#));
    }
}
