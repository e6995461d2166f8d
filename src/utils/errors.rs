// src/utils/errors.rs

use std::fmt;
use std::error::Error;

/// Represents errors that can occur while configuring or driving the fluid solver.
#[derive(Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Indicates an interior resolution below the minimum of one cell.
    InvalidResolution,
    /// Indicates a negative or non-finite diffusion rate.
    InvalidDiffusion,
    /// Indicates a non-positive or non-finite time step.
    InvalidTimeStep,
    /// Indicates a relaxation iteration count of zero.
    InvalidIterationCount,
    /// Indicates a linear cell index outside the `(n + 2)²` grid range.
    IndexOutOfBounds { index: usize, size: usize },
}

impl fmt::Display for FluidError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FluidError::InvalidResolution => write!(f, "Grid resolution must be at least one interior cell"),
            FluidError::InvalidDiffusion => write!(f, "Diffusion rate must be finite and non-negative"),
            FluidError::InvalidTimeStep => write!(f, "Time step must be finite and positive"),
            FluidError::InvalidIterationCount => write!(f, "Relaxation iteration count must be at least one"),
            FluidError::IndexOutOfBounds { index, size } => write!(f, "Cell index {} is outside the grid of {} cells", index, size),
        }
    }
}

impl Error for FluidError {}
