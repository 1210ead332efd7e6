//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::CounterAction`]s. Mouse
//! clicks depend on screen layout and are resolved by the term crate's
//! `ScoreView::hit_test` instead.

pub mod map;

pub use duel_counter_types as types;

pub use map::{handle_key_event, should_quit};
