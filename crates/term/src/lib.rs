//! Terminal view layer.
//!
//! Renders score snapshots into a small framebuffer and flushes it to the
//! terminal. Nothing here touches score rules; the view reads
//! [`core::ScoreSnapshot`]s and hands [`types::CounterAction`]s back.
//!
//! - [`fb`]: styled character grid
//! - [`score_view`]: pure layout, rendering and mouse hit testing
//! - [`renderer`]: crossterm terminal setup and diffed output

pub mod fb;
pub mod renderer;
pub mod score_view;

pub use duel_counter_core as core;
pub use duel_counter_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use score_view::{PanelLayout, Rect, ScoreLayout, ScoreView, Viewport, MIN_HEIGHT, MIN_WIDTH};
