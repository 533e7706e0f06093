use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::Player;

/// The tokens stacked on one field, bottom first.
///
/// Serialized as a plain list of player ids, e.g. `[1, 2, 2]` is a tower of
/// height 3 with player 2 on top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tower(Vec<Player>);

impl Tower {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The owner of the topmost token, which is the owner of the tower.
    pub fn top(&self) -> Option<Player> {
        self.0.last().copied()
    }

    pub fn push(&mut self, player: Player) {
        self.0.push(player);
    }

    /// Puts `other` on top of this tower.
    pub fn stack(&mut self, other: Tower) {
        self.0.extend(other.0);
    }

    /// Removes all tokens, leaving an empty tower behind.
    pub fn take(&mut self) -> Tower {
        std::mem::take(self)
    }
}

impl Deref for Tower {
    type Target = [Player];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Player> for Tower {
    fn from_iter<T: IntoIterator<Item = Player>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Tower {
    type Item = Player;
    type IntoIter = std::vec::IntoIter<Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
