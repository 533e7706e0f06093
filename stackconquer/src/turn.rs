use crate::{Board, IllegalMove, Move, Player, PlayerState, Rules, Tower};

/// Summarizes the outcome of playing a move.
#[derive(Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Normal,
    /// A tower reached the winning height and was taken off the board.
    TowerWon { winner: Player, tower: Tower },
    GameEnded { winner: Player },
}

/// Validates `mv` by `player` and applies it to the board and player states.
///
/// The `height` of a tower move is not checked, since it is only informational.
/// On error, nothing is modified.
pub fn execute_turn(
    board: &mut Board,
    states: &mut [PlayerState; 2],
    player: Player,
    mv: Move,
    rules: &Rules,
) -> Result<TurnOutcome, IllegalMove> {
    let destination = match mv {
        Move::Place(pos) => {
            if !states[player.index()].has_stones() {
                return Err(IllegalMove::NoStonesLeft);
            }
            board.place(pos, player)?;
            states[player.index()].take_stone()?;
            pos
        }
        Move::Tower { from, to, .. } => {
            board.move_tower(from, to)?;
            to
        }
    };

    if board.height(destination) < rules.win_height {
        return Ok(TurnOutcome::Normal);
    }

    let tower = board.remove_tower(destination);
    for &token in tower.iter() {
        states[token.index()].return_stones(1);
    }
    let Some(winner) = tower.top() else {
        return Ok(TurnOutcome::Normal);
    };
    states[winner.index()].won_towers += 1;
    if states[winner.index()].won_towers >= rules.towers_to_win {
        Ok(TurnOutcome::GameEnded { winner })
    } else {
        Ok(TurnOutcome::TowerWon { winner, tower })
    }
}
