//! TUI Invaders (workspace facade crate).
//!
//! The rasteriser and game rules live in dedicated crates under `crates/`; this
//! package re-exports them as `tui_invaders::{core,input,term,types}` and adds
//! the binary's runtime configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_invaders_core as core;
pub use tui_invaders_input as input;
pub use tui_invaders_term as term;
pub use tui_invaders_types as types;
