//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organised by year under [`my_solutions`]. Each day derives
//! `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find every puzzle.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
