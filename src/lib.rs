//! TUI Donut (workspace facade crate).
//!
//! This package keeps the public `tui_donut::{core,term,types}` API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use tui_donut_core as core;
pub use tui_donut_term as term;
pub use tui_donut_types as types;
