//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Frames are
//! rendered into a plain framebuffer and flushed to the terminal as diffs.
//!
//! - `core` stays deterministic and testable; [`GameView`] only reads a `Game`
//! - Board cells are 2 columns wide to compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use wordtris_core as core;
pub use wordtris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
