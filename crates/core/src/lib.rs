//! Core score logic - pure, deterministic, and testable
//!
//! This crate owns the only real game logic: the two point totals and the
//! flags derived from them. It has **no dependencies** on terminal I/O, which
//! makes it:
//!
//! - **Deterministic**: Same command sequence always produces the same state
//! - **Testable**: Every rule is checked without a terminal
//! - **Portable**: Any front end can drive it through [`Session`]
//!
//! # Module Structure
//!
//! - [`score_state`]: Totals, guarded scoring commands, win/idle derivation
//! - [`snapshot`]: Copyable read-only view plus the derived [`Phase`]
//! - [`session`]: Wires a [`ScoreState`] to a [`ScoreObserver`]
//!
//! # Game Rules
//!
//! - Both totals start at 0 (idle); "Start Game" sets both to 20
//! - A player wins when the opponent's total is `<= 0` and their own is `> 0`
//! - `+`/`-` presses are ignored before the first game and after a win
//! - Totals have no floor
//!
//! # Example
//!
//! ```
//! use duel_counter_core::{Phase, ScoreState};
//! use duel_counter_types::Player;
//!
//! let mut state = ScoreState::new();
//! assert_eq!(state.phase(), Phase::Idle);
//!
//! state.start_game();
//! for _ in 0..20 {
//!     state.apply_score(Player::Blue, -1);
//! }
//!
//! assert!(state.red_won());
//! assert_eq!(state.phase(), Phase::RedWon);
//! ```

pub mod score_state;
pub mod session;
pub mod snapshot;

pub use duel_counter_types as types;

pub use score_state::ScoreState;
pub use session::{Detached, ScoreObserver, Session};
pub use snapshot::{Phase, ScoreSnapshot};
