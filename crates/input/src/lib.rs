//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game
//! is turn-based: one key press is one action, so there is no key-repeat
//! handling beyond what the terminal delivers.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
