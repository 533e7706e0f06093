use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::MAX_BOARD_SIZE;

/// The parameters of a game. Missing fields take their default value when
/// deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Side length of the square board.
    pub board_size: i8,
    /// A tower this high is won by the owner of its top token.
    pub win_height: usize,
    /// How many tokens each player has at the start.
    pub stones_per_player: usize,
    /// How many won towers end the game.
    pub towers_to_win: usize,
    /// The game is a tie after this many turns.
    pub max_turns: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            board_size: 5,
            win_height: 5,
            stones_per_player: 20,
            towers_to_win: 1,
            max_turns: 500,
        }
    }
}

impl Rules {
    /// Reads rules from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let rules: Rules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            anyhow::bail!(
                "Board size must be between 1 and {}, got {}",
                MAX_BOARD_SIZE,
                self.board_size
            );
        }
        if self.win_height < 2 {
            anyhow::bail!("Win height must be at least 2, got {}", self.win_height);
        }
        if self.towers_to_win == 0 {
            anyhow::bail!("At least one tower must be needed to win");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let rules: Rules = serde_json::from_str(r#"{"board_size": 7, "win_height": 3}"#).unwrap();
        assert_eq!(rules.board_size, 7);
        assert_eq!(rules.win_height, 3);
        assert_eq!(rules.stones_per_player, 20);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn validation() {
        let too_small = Rules {
            win_height: 1,
            ..Rules::default()
        };
        assert!(too_small.validate().is_err());
        let no_board = Rules {
            board_size: 0,
            ..Rules::default()
        };
        assert!(no_board.validate().is_err());
    }

    #[test]
    fn from_json_validates() {
        assert_eq!(Rules::from_json("{}").unwrap(), Rules::default());
        assert!(Rules::from_json(r#"{"board_size": 33}"#).is_err());
        assert!(Rules::from_json(r#"{"towers_to_win": 0}"#).is_err());
        assert!(Rules::from_json(r#"{"board_size": "big"}"#).is_err());
    }
}
