//! Helpers shared by several puzzles

pub mod dp_cache;
pub mod grid;
pub mod parse;
pub mod point;
pub mod search;
