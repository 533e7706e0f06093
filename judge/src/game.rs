use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use stackconquer::{
    execute_turn, Board, IllegalMove, Move, Okay, Player, PlayerState, Request, Rules, TurnOutcome,
};
use tracing::debug;

use crate::player::{perform_request, Participant};

#[derive(Debug)]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Tie,
    IllegalMoveByPlayer { player_idx: usize, err: IllegalMove },
}

/// Returns an error only on communication failure, not when an
/// illegal move is played.
///
/// `player_idx` in the result refers to the position in `participants`.
pub fn play_game(
    rng: &mut StdRng,
    mut participants: [&mut dyn Participant; 2],
    rules: &Rules,
) -> anyhow::Result<GameResult> {
    // Randomly decide who plays as player 1 and thus starts
    let sides = {
        let mut arr = Player::BOTH;
        arr.shuffle(rng);
        arr
    };
    let participant_idx = |player: Player| if sides[0] == player { 0 } else { 1 };

    // Inform the players about the new game, so that they can reset their state
    for (participant, &player) in participants.iter_mut().zip(sides.iter()) {
        let _: Okay = perform_request(
            &mut **participant,
            &Request::NewGame {
                player,
                rules: *rules,
            },
        )?;
    }

    let mut board = Board::empty(rules.board_size)?;
    let mut states = [PlayerState::new(rules), PlayerState::new(rules)];
    let mut current = Player::One;
    let mut turn_skipped = false;

    for turn in 0..rules.max_turns {
        let idx = participant_idx(current);
        let stones_left = states[current.index()].has_stones();

        if !board.has_legal_move(stones_left) {
            debug!(turn, %current, "No legal move, skipping turn");
            if turn_skipped {
                // When both players can't move, the game ends
                return Ok(GameResult::Tie);
            }
            turn_skipped = true;
            current = current.opponent();
            continue;
        }
        turn_skipped = false;

        let req = Request::MakeMove {
            board: board.clone(),
            stones_left,
        };
        let mv: Move = perform_request(&mut *participants[idx], &req)?;
        match execute_turn(&mut board, &mut states, current, mv, rules) {
            Ok(TurnOutcome::Normal) => {}
            Ok(TurnOutcome::TowerWon { winner, tower }) => {
                debug!(turn, %winner, height = tower.height(), "Tower won");
            }
            Ok(TurnOutcome::GameEnded { winner }) => {
                debug!(turn, %winner, "Game won");
                return Ok(GameResult::WonByPlayer {
                    player_idx: participant_idx(winner),
                });
            }
            Err(err) => {
                debug!(turn, %current, %mv, "Illegal move");
                return Ok(GameResult::IllegalMoveByPlayer {
                    player_idx: idx,
                    err,
                });
            }
        }
        current = current.opponent();
    }

    debug!(max_turns = rules.max_turns, "Turn limit reached");
    Ok(GameResult::Tie)
}

#[cfg(test)]
mod tests {
    use dummy_cpu::{AdvisorConfig, DummyCpu};
    use rand::SeedableRng;
    use stackconquer_bot_utils::Bot;

    use super::*;

    /// Runs a bot in the same process, going through the JSON protocol.
    struct InProcess<B> {
        name: String,
        bot: B,
    }

    impl<B: Bot> Participant for InProcess<B> {
        fn name(&self) -> &str {
            &self.name
        }

        fn exchange(&mut self, request: &str) -> anyhow::Result<String> {
            let mut output = Vec::new();
            self.bot.serve(request.as_bytes(), &mut output)?;
            Ok(String::from_utf8(output)?.trim_end().to_owned())
        }
    }

    fn dummy(name: &str, seed: u64) -> InProcess<DummyCpu> {
        InProcess {
            name: String::from(name),
            bot: DummyCpu::new(seed, AdvisorConfig::default()),
        }
    }

    #[test]
    fn dummy_bots_only_play_legal_moves() {
        let rules = Rules {
            win_height: 3,
            stones_per_player: 6,
            max_turns: 200,
            ..Rules::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        for seed in 0..10 {
            let mut a = dummy("a", seed);
            let mut b = dummy("b", seed + 100);
            let result = play_game(&mut rng, [&mut a, &mut b], &rules).unwrap();
            assert!(
                !matches!(result, GameResult::IllegalMoveByPlayer { .. }),
                "{:?}",
                result
            );
        }
    }

    #[test]
    fn no_stones_is_a_tie() {
        let rules = Rules {
            stones_per_player: 0,
            ..Rules::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut a = dummy("a", 1);
        let mut b = dummy("b", 2);
        // Nobody can place and the board stays empty, so both players are skipped
        let result = play_game(&mut rng, [&mut a, &mut b], &rules).unwrap();
        assert!(matches!(result, GameResult::Tie), "{:?}", result);
    }

    #[test]
    fn turn_limit_is_a_tie() {
        // Four tokens can't make a tower of five
        let rules = Rules {
            max_turns: 4,
            ..Rules::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        for seed in 0..5 {
            let mut a = dummy("a", seed);
            let mut b = dummy("b", seed + 50);
            let result = play_game(&mut rng, [&mut a, &mut b], &rules).unwrap();
            assert!(matches!(result, GameResult::Tie), "{:?}", result);
        }
    }

    /// Always answers with the same move.
    struct Stubborn {
        mv: Move,
    }

    impl Bot for Stubborn {
        fn new_game(&mut self, _player: Player, _rules: Rules) {}

        fn make_move(&mut self, _board: Board, _stones_left: bool) -> Move {
            self.mv
        }
    }

    #[test]
    fn illegal_move_loses() {
        let rules = Rules::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut stubborn = InProcess {
            name: String::from("stubborn"),
            bot: Stubborn {
                mv: Move::Place(stackconquer::Pos::new(0, 0)),
            },
        };
        let mut other = dummy("other", 1);
        // Whoever starts, the stubborn bot places on an occupied field by its second turn at the latest
        let result = play_game(&mut rng, [&mut stubborn, &mut other], &rules).unwrap();
        match result {
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                assert_eq!(player_idx, 0);
                assert!(matches!(err, IllegalMove::FieldOccupied { .. }));
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }
}
