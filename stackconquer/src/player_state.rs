use crate::{IllegalMove, Rules};

/// The state for a single player during one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub stones_left: usize,
    pub won_towers: usize,
    max_stones: usize,
}

impl PlayerState {
    pub fn new(rules: &Rules) -> Self {
        Self {
            stones_left: rules.stones_per_player,
            won_towers: 0,
            max_stones: rules.stones_per_player,
        }
    }

    pub fn has_stones(&self) -> bool {
        self.stones_left > 0
    }

    pub fn take_stone(&mut self) -> Result<(), IllegalMove> {
        self.stones_left = self
            .stones_left
            .checked_sub(1)
            .ok_or(IllegalMove::NoStonesLeft)?;
        Ok(())
    }

    /// Gives back stones from a won tower. The supply never exceeds the
    /// starting amount.
    pub fn return_stones(&mut self, num: usize) {
        self.stones_left = (self.stones_left + num).min(self.max_stones);
    }
}
