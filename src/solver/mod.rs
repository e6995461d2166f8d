mod boundary;
pub use boundary::FieldKind;

mod diffusion;
mod advection;
mod projection;

mod simulation;
pub use simulation::*;

#[cfg(test)]
mod projection_tests;
