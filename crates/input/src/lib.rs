//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]s. The game
//! core never sees raw keys; anything that is not one of the five commands
//! (or a quit request) is dropped here.

pub mod map;

pub use wordtris_types as types;

pub use map::{handle_key_event, is_actionable, should_quit};
