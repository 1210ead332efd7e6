//! Duel counter (workspace facade crate).
//!
//! Re-exports the workspace crates under one `duel_counter::{core,input,term,types}`
//! path so the binary, integration tests and benches share a single import root.

pub use duel_counter_core as core;
pub use duel_counter_input as input;
pub use duel_counter_term as term;
pub use duel_counter_types as types;
