use rand::rngs::StdRng;
use rand::SeedableRng;
use stackconquer::{visualize_board, Board, Move, Player, Rules};
use stackconquer_bot_utils::Bot;
use tracing::{debug, trace};

use crate::{Advisor, AdvisorConfig, Situation};

/// Plays whatever the [`Advisor`] suggests.
pub struct DummyCpu {
    advisor: Advisor<StdRng>,
    player: Player,
    rules: Rules,
}

impl DummyCpu {
    pub fn new(seed: u64, config: AdvisorConfig) -> Self {
        Self {
            advisor: Advisor::new(StdRng::seed_from_u64(seed), config),
            player: Player::One,
            rules: Rules::default(),
        }
    }
}

impl Bot for DummyCpu {
    fn new_game(&mut self, player: Player, rules: Rules) {
        debug!(%player, ?rules, "New game");
        self.player = player;
        self.rules = rules;
    }

    fn make_move(&mut self, board: Board, stones_left: bool) -> Move {
        trace!("Board:\n{}", visualize_board(&board));
        let situation = Situation {
            board: &board,
            player: self.player,
            win_height: self.rules.win_height,
            stones_left,
        };
        let mv = self.advisor.choose_move(&situation);
        debug!(%mv, stones_left, "Chose move");
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_as_announced_player() {
        let mut bot = DummyCpu::new(3, AdvisorConfig::default());
        let input = concat!(
            r#"{"type":"NewGame","player":2,"rules":{"win_height":3}}"#,
            "\n",
            r#"{"type":"MakeMove","board":[[[2],[],[]],[[],[],[]],[[],[],[1,2]]],"stones_left":false}"#,
            "\n",
        );
        let mut output = Vec::new();
        bot.serve(input.as_bytes(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "[]\n\"0,0|2,2|3\"\n");
    }
}
