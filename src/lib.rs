//! Terminal Game of 15 (workspace facade crate).
//!
//! This package keeps a single `tui_fifteen::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use fifteen_core as core;
pub use fifteen_input as input;
pub use fifteen_term as term;
pub use fifteen_types as types;
