// src/solver/projection.rs

use crate::grid::Grid;
use super::boundary::{enforce_boundary, FieldKind};

/// Removes the divergent part of the velocity field (Helmholtz decomposition).
///
/// Computes per-cell divergence into the `divergence` scratch grid, relaxes
/// the discrete Poisson equation `∇²p = div` into `pressure` for the given
/// iteration count, then subtracts the pressure gradient from both velocity
/// components. Scalar boundary enforcement wraps the scratch fields and every
/// relaxation sweep; the velocity components get their own wall rules at the
/// end.
///
/// A velocity field that is already divergence-free is a fixed point: the
/// pressure relaxes to a constant and its gradient vanishes.
pub(crate) fn project(
    vel_x: &mut Grid,
    vel_y: &mut Grid,
    divergence: &mut Grid,
    pressure: &mut Grid,
    iterations: usize,
) {
    let n = vel_x.n();

    for j in 1..=n {
        for i in 1..=n {
            let div = 0.5
                * ((vel_x.get(i + 1, j) - vel_x.get(i - 1, j))
                    + (vel_y.get(i, j + 1) - vel_y.get(i, j - 1)));
            divergence.set(i, j, div);
            pressure.set(i, j, 0.0);
        }
    }
    enforce_boundary(FieldKind::Scalar, divergence);
    enforce_boundary(FieldKind::Scalar, pressure);

    for _ in 0..iterations {
        for j in 1..=n {
            for i in 1..=n {
                let neighbors = pressure.get(i - 1, j)
                    + pressure.get(i + 1, j)
                    + pressure.get(i, j - 1)
                    + pressure.get(i, j + 1);
                pressure.set(i, j, (neighbors - divergence.get(i, j)) / 4.0);
            }
        }
        enforce_boundary(FieldKind::Scalar, pressure);
    }

    for j in 1..=n {
        for i in 1..=n {
            let grad_x = 0.5 * (pressure.get(i + 1, j) - pressure.get(i - 1, j));
            let grad_y = 0.5 * (pressure.get(i, j + 1) - pressure.get(i, j - 1));
            vel_x.set(i, j, vel_x.get(i, j) - grad_x);
            vel_y.set(i, j, vel_y.get(i, j) - grad_y);
        }
    }
    enforce_boundary(FieldKind::VelocityX, vel_x);
    enforce_boundary(FieldKind::VelocityY, vel_y);
}
