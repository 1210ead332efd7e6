use crate::types::Player;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a session currently sits in its lifecycle.
///
/// Derived from the won/idle flags; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// No game started yet (both totals 0).
    Idle,
    Playing,
    RedWon,
    BlueWon,
}

impl Phase {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::RedWon => Some(Player::Red),
            Phase::BlueWon => Some(Player::Blue),
            Phase::Idle | Phase::Playing => None,
        }
    }
}

/// Read-only copy of the score state handed to renderers and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreSnapshot {
    pub red_points: i32,
    pub blue_points: i32,
    pub red_won: bool,
    pub blue_won: bool,
    pub no_game_started: bool,
    pub revision: u64,
}

impl ScoreSnapshot {
    pub fn points(&self, player: Player) -> i32 {
        match player {
            Player::Red => self.red_points,
            Player::Blue => self.blue_points,
        }
    }

    pub fn won(&self, player: Player) -> bool {
        match player {
            Player::Red => self.red_won,
            Player::Blue => self.blue_won,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.no_game_started {
            Phase::Idle
        } else if self.red_won {
            Phase::RedWon
        } else if self.blue_won {
            Phase::BlueWon
        } else {
            Phase::Playing
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.phase().winner()
    }

    /// Whether `+`/`-` presses are currently accepted.
    pub fn scoring_enabled(&self) -> bool {
        self.phase() == Phase::Playing
    }
}

impl Default for ScoreSnapshot {
    fn default() -> Self {
        Self {
            red_points: 0,
            blue_points: 0,
            red_won: false,
            blue_won: false,
            no_game_started: true,
            revision: 0,
        }
    }
}
