// src/solver/diffusion.rs

use crate::grid::Grid;
use super::boundary::{enforce_boundary, FieldKind};

/// Implicit diffusion solved by Gauss-Seidel relaxation.
///
/// Relaxes `x = x0 + k·∇²x` with `k = dt · rate`. Each sweep updates interior
/// cells in place, deliberately reading the in-progress neighbor values from
/// the same pass rather than a separate Jacobi buffer; the neighbor sum is
/// averaged so the update stays a convex combination and cannot blow up for
/// any `k ≥ 0`. The ghost border is re-mirrored after every sweep.
pub(crate) fn diffuse(
    kind: FieldKind,
    field: &mut Grid,
    prev: &Grid,
    rate: f64,
    dt: f64,
    iterations: usize,
) {
    let n = field.n();
    let k = dt * rate;

    for _ in 0..iterations {
        for j in 1..=n {
            for i in 1..=n {
                let neighbors = field.get(i - 1, j)
                    + field.get(i + 1, j)
                    + field.get(i, j - 1)
                    + field.get(i, j + 1);
                let value = (prev.get(i, j) + k * neighbors / 4.0) / (1.0 + k);
                field.set(i, j, value);
            }
        }
        enforce_boundary(kind, field);
    }
}
