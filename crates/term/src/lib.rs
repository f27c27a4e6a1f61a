//! Terminal rendering for the 2048 board.
//!
//! - [`fb`]: styled-character framebuffer primitives
//! - [`game_view`]: pure snapshot-to-framebuffer mapping
//! - [`renderer`]: crossterm-backed terminal lifecycle and flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
