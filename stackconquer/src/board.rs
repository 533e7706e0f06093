mod pos;
mod tower;

pub use pos::*;
pub use tower::*;

use serde::{Deserialize, Serialize};

use crate::{IllegalMove, InvalidBoard, Player};

/// The largest supported side length.
pub const MAX_BOARD_SIZE: i8 = 32;

/// A square grid of towers.
///
/// On the wire, a board is a list of rows, each row a list of towers, and each
/// tower a list of player ids from bottom to top. The row index is the `x`
/// coordinate of a [`Pos`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tower>>", into = "Vec<Vec<Tower>>")]
pub struct Board {
    size: i8,
    /// Row-major, `size * size` entries.
    towers: Vec<Tower>,
}

impl Board {
    pub fn empty(size: i8) -> Result<Self, InvalidBoard> {
        if size < 1 {
            return Err(InvalidBoard::Empty);
        }
        if size > MAX_BOARD_SIZE {
            return Err(InvalidBoard::TooLarge {
                size: size as usize,
            });
        }
        let num_fields = size as usize * size as usize;
        Ok(Self {
            size,
            towers: vec![Tower::new(); num_fields],
        })
    }

    /// Creates a board from its serialized form, checking that it is square.
    pub fn from_rows(rows: Vec<Vec<Tower>>) -> Result<Self, InvalidBoard> {
        if rows.is_empty() {
            return Err(InvalidBoard::Empty);
        }
        let size = i8::try_from(rows.len())
            .ok()
            .filter(|&size| size <= MAX_BOARD_SIZE)
            .ok_or(InvalidBoard::TooLarge { size: rows.len() })?;
        let mut towers = Vec::with_capacity(rows.len() * rows.len());
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size as usize {
                return Err(InvalidBoard::NotSquare {
                    row,
                    len: line.len(),
                    size: size as usize,
                });
            }
            towers.extend(line);
        }
        Ok(Self { size, towers })
    }

    pub fn to_rows(&self) -> Vec<Vec<Tower>> {
        self.towers
            .chunks(self.size as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Returns the board with the tower at `pos` replaced.
    ///
    /// Panics if `pos` is not on the board.
    pub fn with_tower(mut self, pos: Pos, tokens: &[Player]) -> Self {
        let idx = self
            .index(pos)
            .unwrap_or_else(|| panic!("{} is not on a board of size {}", pos, self.size));
        self.towers[idx] = tokens.iter().copied().collect();
        self
    }

    /// The side length of the board.
    pub fn size(&self) -> i8 {
        self.size
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.size).contains(&pos.x) && (0..self.size).contains(&pos.y)
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.x as usize * self.size as usize + pos.y as usize)
    }

    /// Returns the tower at `pos`, or `None` if it is off the board.
    pub fn get(&self, pos: Pos) -> Option<&Tower> {
        self.index(pos).map(|idx| &self.towers[idx])
    }

    /// Height of the tower at `pos`; zero for empty and off-board fields.
    pub fn height(&self, pos: Pos) -> usize {
        self.get(pos).map_or(0, Tower::height)
    }

    /// Is `pos` on the board and without any tokens?
    pub fn is_free(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(Tower::is_empty)
    }

    /// All coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Pos { x, y }))
    }

    /// All towers with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Tower)> {
        self.positions().zip(self.towers.iter())
    }

    pub fn first_free_cell(&self) -> Option<Pos> {
        self.iter()
            .find(|(_, tower)| tower.is_empty())
            .map(|(pos, _)| pos)
    }

    pub fn has_free_cell(&self) -> bool {
        self.first_free_cell().is_some()
    }

    /// The fields whose towers may be moved onto the tower at `anchor`.
    ///
    /// A tower travels in a straight line along a row, column or diagonal, for
    /// exactly as many fields as the tower it lands on is high. It cannot jump
    /// over other towers. So with `anchor` at height `h`, the candidates are the
    /// non-empty fields at distance `h` in each of the eight directions whose
    /// `h - 1` intermediate fields are all empty.
    ///
    /// Returns nothing if `anchor` is empty or off the board. The results are
    /// ordered as in [`DIRECTIONS`].
    pub fn neighbours(&self, anchor: Pos) -> Vec<Pos> {
        let distance = self.height(anchor);
        if distance == 0 {
            return Vec::new();
        }
        DIRECTIONS
            .iter()
            .filter_map(|&dir| anchor.offset(dir, distance).map(|source| (dir, source)))
            .filter(|&(dir, source)| {
                self.get(source).is_some_and(|tower| !tower.is_empty())
                    && self.path_is_clear(anchor, dir, distance)
            })
            .map(|(_, source)| source)
            .collect()
    }

    // Are the fields strictly between `start` and the field `distance` steps
    // away in direction `dir` all empty?
    fn path_is_clear(&self, start: Pos, dir: Direction, distance: usize) -> bool {
        (1..distance).all(|step| start.offset(dir, step).is_some_and(|pos| self.is_free(pos)))
    }

    /// Can the tower at `from` be moved onto the tower at `to`?
    pub fn is_reachable(&self, from: Pos, to: Pos) -> bool {
        self.neighbours(to).contains(&from)
    }

    /// Every legal tower move as a `(from, to)` pair.
    ///
    /// Destinations are visited in row-major order, the sources for each
    /// destination in the order of [`Self::neighbours()`].
    pub fn tower_moves(&self) -> impl Iterator<Item = (Pos, Pos)> + '_ {
        self.positions().flat_map(move |to| {
            self.neighbours(to)
                .into_iter()
                .map(move |from| (from, to))
        })
    }

    /// Does the player to move have anything to do at all?
    pub fn has_legal_move(&self, stones_left: bool) -> bool {
        (stones_left && self.has_free_cell()) || self.tower_moves().next().is_some()
    }

    /// Drops a new token of `player` onto the empty field `pos`.
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<(), IllegalMove> {
        let idx = self.index(pos).ok_or(IllegalMove::OutOfBounds { pos })?;
        if !self.towers[idx].is_empty() {
            return Err(IllegalMove::FieldOccupied {
                pos,
                height: self.towers[idx].height(),
            });
        }
        self.towers[idx].push(player);
        Ok(())
    }

    /// Moves the whole tower at `from` on top of the tower at `to`.
    ///
    /// Returns the height of the merged tower.
    pub fn move_tower(&mut self, from: Pos, to: Pos) -> Result<usize, IllegalMove> {
        let from_idx = self.index(from).ok_or(IllegalMove::OutOfBounds { pos: from })?;
        let to_idx = self.index(to).ok_or(IllegalMove::OutOfBounds { pos: to })?;
        if self.towers[from_idx].is_empty() {
            return Err(IllegalMove::EmptySource { pos: from });
        }
        if self.towers[to_idx].is_empty() {
            return Err(IllegalMove::EmptyDestination { pos: to });
        }
        if !self.is_reachable(from, to) {
            return Err(IllegalMove::Unreachable {
                from,
                to,
                required_distance: self.towers[to_idx].height(),
            });
        }
        let moved = self.towers[from_idx].take();
        self.towers[to_idx].stack(moved);
        Ok(self.towers[to_idx].height())
    }

    /// Clears the field at `pos` and returns what was on it.
    pub fn remove_tower(&mut self, pos: Pos) -> Tower {
        match self.index(pos) {
            Some(idx) => self.towers[idx].take(),
            None => Tower::new(),
        }
    }
}

impl TryFrom<Vec<Vec<Tower>>> for Board {
    type Error = InvalidBoard;

    fn try_from(rows: Vec<Vec<Tower>>) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Tower>> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}
