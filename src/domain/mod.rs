//! Domain types: what a cell can hold and how the engine fails.

pub mod cells;
pub mod error;
