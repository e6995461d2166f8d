mod grid;
pub use grid::*;

#[cfg(test)]
mod grid_tests;
