use rand::Rng;
use stackconquer::{Board, Move, Player, Pos, Tower};
use tracing::{debug, warn};

const FALLBACK_FROM: Pos = Pos::new(0, 0);
const FALLBACK_TO: Pos = Pos::new(1, 1);

/// The move played when there is nothing better to do and no stones are left.
///
/// It is not guaranteed to be legal, see [`AdvisorConfig::check_fallback`].
pub const FALLBACK_MOVE: Move = Move::Tower {
    from: FALLBACK_FROM,
    to: FALLBACK_TO,
    height: 1,
};

/// Everything that is known when deciding on a move.
#[derive(Clone, Copy, Debug)]
pub struct Situation<'a> {
    pub board: &'a Board,
    /// The player to move.
    pub player: Player,
    pub win_height: usize,
    /// Does the player to move have tokens left to place?
    pub stones_left: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct AdvisorConfig {
    /// If the fallback move is illegal on the current board, play the first
    /// legal tower move instead.
    pub check_fallback: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            check_fallback: true,
        }
    }
}

/// Picks moves greedily: win if possible, otherwise block the opponent's win,
/// otherwise place a token randomly.
///
/// There is no lookahead beyond the opponent's next move. The advisor keeps no
/// state between calls except for its random number generator.
pub struct Advisor<R> {
    rng: R,
    config: AdvisorConfig,
}

impl<R: Rng> Advisor<R> {
    pub fn new(rng: R, config: AdvisorConfig) -> Self {
        Self { rng, config }
    }

    pub fn choose_move(&mut self, situation: &Situation<'_>) -> Move {
        let Situation {
            board,
            player,
            win_height,
            stones_left,
        } = *situation;

        if let Some(mv) = winning_move(board, player, win_height) {
            debug!(%mv, "Found a winning move");
            return mv;
        }

        if let Some(threat) = winning_move(board, player.opponent(), win_height) {
            debug!(%threat, "Opponent can win with their next move");
            // TODO: Without stones, the threat could still be blocked by moving a tower into the path
            if let Some(pos) = blocking_placement(board, &threat, stones_left) {
                debug!(%pos, "Blocking the opponent");
                return Move::Place(pos);
            }
        }

        if stones_left {
            if let Some(pos) = random_free_cell(board, &mut self.rng) {
                return Move::Place(pos);
            }
        }
        self.fallback(board)
    }

    fn fallback(&self, board: &Board) -> Move {
        if !self.config.check_fallback || board.is_reachable(FALLBACK_FROM, FALLBACK_TO) {
            return FALLBACK_MOVE;
        }
        // Placing is not an option here: either no stones are left or the board is full.
        match board.tower_moves().next() {
            Some((from, to)) => {
                warn!(%from, %to, "Fallback move is illegal, using the first legal tower move");
                Move::Tower {
                    from,
                    to,
                    height: board.height(from) + board.height(to),
                }
            }
            None => {
                warn!("No legal tower move exists, playing the fallback move anyway");
                FALLBACK_MOVE
            }
        }
    }
}

/// Finds a tower move after which `player` owns a tower of at least
/// `win_height`.
///
/// Destinations are searched in row-major order, and for each destination the
/// possible sources in the order given by [`Board::neighbours()`]; the first hit
/// is returned.
pub fn winning_move(board: &Board, player: Player, win_height: usize) -> Option<Move> {
    board.tower_moves().find_map(|(from, to)| {
        let height = board.height(from) + board.height(to);
        // The moved tower ends up on top
        let top = board.get(from).and_then(Tower::top);
        (height >= win_height && top == Some(player)).then_some(Move::Tower { from, to, height })
    })
}

/// Finds an empty field on the path of `threat` where a new token would stop it.
///
/// Only placements are considered, so this gives up when no stones are left.
/// A move over a single field has nothing in between and can't be blocked.
pub fn blocking_placement(board: &Board, threat: &Move, stones_left: bool) -> Option<Pos> {
    let Move::Tower { from, to, .. } = *threat else {
        return None;
    };
    if !stones_left {
        return None;
    }
    let (dir, distance) = from.direction_to(to)?;
    (1..distance)
        .filter_map(|step| from.offset(dir, step))
        .find(|&pos| board.is_free(pos))
}

/// Samples fields uniformly until an empty one is found.
///
/// Returns `None` right away if the board is full.
pub fn random_free_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    if !board.has_free_cell() {
        return None;
    }
    loop {
        let pos = Pos::new(
            rng.gen_range(0..board.size()),
            rng.gen_range(0..board.size()),
        );
        if board.is_free(pos) {
            return Some(pos);
        }
    }
}
