//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no I/O, making them usable in any
//! context (score logic, terminal rendering, input mapping).
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `IDLE_POINTS` | 0 | Both totals before any game has started |
//! | `STARTING_POINTS` | 20 | Both totals right after "Start Game" |
//! | `SCORE_STEP` | 1 | Points added or removed by one `+`/`-` press |
//!
//! # Examples
//!
//! ```
//! use duel_counter_types::{CounterAction, Player, STARTING_POINTS};
//!
//! let player = Player::from_str("RED").unwrap();
//! assert_eq!(player, Player::Red);
//! assert_eq!(player.opponent(), Player::Blue);
//!
//! let action = CounterAction::from_str("blueMinus").unwrap();
//! assert_eq!(action, CounterAction::Minus(Player::Blue));
//! assert_eq!(action.score_delta(), Some((Player::Blue, -1)));
//!
//! assert_eq!(STARTING_POINTS, 20);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Totals held by both players before the first game starts.
pub const IDLE_POINTS: i32 = 0;

/// Totals both players are reset to by "Start Game".
pub const STARTING_POINTS: i32 = 20;

/// Points moved by a single `+` or `-` press.
pub const SCORE_STEP: i32 = 1;

/// The two seats at the table.
///
/// - **Red**: left panel
/// - **Blue**: right panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Both players in display order.
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// Parse player from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_counter_types::Player;
    ///
    /// assert_eq!(Player::from_str("red"), Some(Player::Red));
    /// assert_eq!(Player::from_str("Blue"), Some(Player::Blue));
    /// assert_eq!(Player::from_str("green"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Player::Red),
            "blue" => Some(Player::Blue),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Blue => "blue",
        }
    }

    /// Display name used in panels and the win banner.
    pub fn name(&self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }
}

/// Commands the view layer can send to the score state
///
/// Each command maps to one on-screen control: a `+`/`-` button pair per
/// player and the shared "Start Game" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterAction {
    /// Reset both totals to [`STARTING_POINTS`]
    StartGame,
    /// Add [`SCORE_STEP`] to the player's total
    Plus(Player),
    /// Remove [`SCORE_STEP`] from the player's total
    Minus(Player),
}

impl CounterAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_counter_types::{CounterAction, Player};
    ///
    /// assert_eq!(CounterAction::from_str("startGame"), Some(CounterAction::StartGame));
    /// assert_eq!(CounterAction::from_str("redPlus"), Some(CounterAction::Plus(Player::Red)));
    /// assert_eq!(CounterAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "startgame" | "start" => Some(CounterAction::StartGame),
            "redplus" => Some(CounterAction::Plus(Player::Red)),
            "redminus" => Some(CounterAction::Minus(Player::Red)),
            "blueplus" => Some(CounterAction::Plus(Player::Blue)),
            "blueminus" => Some(CounterAction::Minus(Player::Blue)),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterAction::StartGame => "startGame",
            CounterAction::Plus(Player::Red) => "redPlus",
            CounterAction::Minus(Player::Red) => "redMinus",
            CounterAction::Plus(Player::Blue) => "bluePlus",
            CounterAction::Minus(Player::Blue) => "blueMinus",
        }
    }

    /// The `(player, delta)` pair a scoring action applies.
    ///
    /// Returns `None` for [`CounterAction::StartGame`].
    pub fn score_delta(&self) -> Option<(Player, i32)> {
        match *self {
            CounterAction::StartGame => None,
            CounterAction::Plus(p) => Some((p, SCORE_STEP)),
            CounterAction::Minus(p) => Some((p, -SCORE_STEP)),
        }
    }
}
