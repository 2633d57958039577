//! Wordtris (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `wordtris::{core,input,term,types}` so the binary, integration tests and
//! benches share one import path.

pub use wordtris_core as core;
pub use wordtris_input as input;
pub use wordtris_term as term;
pub use wordtris_types as types;
