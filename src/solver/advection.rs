// src/solver/advection.rs

use crate::grid::Grid;
use crate::utils::lerp;
use super::boundary::{enforce_boundary, FieldKind};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Backtraces one cell through the velocity field and bilinearly samples `prev`.
///
/// The four lattice neighbors bracketing the source position come from
/// floor/ceil on each axis, with the fractional offsets as blend weights.
/// When the position lands exactly on a lattice point, floor and ceil
/// coincide and the weight is zero, so the sample reduces to the point's own
/// value. Lookups are clamped: with large velocities the source position can
/// legally fall in or beyond the ghost border.
#[inline]
fn backtrace_sample(i: usize, j: usize, prev: &Grid, vel_x: &Grid, vel_y: &Grid, dt: f64) -> f64 {
    let px = i as f64 - dt * vel_x.get(i, j);
    let py = j as f64 - dt * vel_y.get(i, j);

    let fx = px.floor();
    let fy = py.floor();
    let tx = px - fx;
    let ty = py - fy;

    let x0 = fx as isize;
    let x1 = px.ceil() as isize;
    let y0 = fy as isize;
    let y1 = py.ceil() as isize;

    let upper = lerp(prev.get_clamped(x0, y0), prev.get_clamped(x1, y0), tx);
    let lower = lerp(prev.get_clamped(x0, y1), prev.get_clamped(x1, y1), tx);
    lerp(upper, lower, ty)
}

/// Semi-Lagrangian advection of `prev` through `(vel_x, vel_y)` into `out`.
///
/// Velocity components self-advect by passing the same pre-swap grid as both
/// the advected field and the corresponding trace component; density is
/// advected through the already-projected velocity. Boundary enforcement for
/// `kind` runs after the sweep.
///
/// The sweep is a pure gather from immutable inputs into disjoint output
/// cells, so the `parallel` feature partitions it by rows without changing
/// the numeric result.
pub(crate) fn advect(
    kind: FieldKind,
    out: &mut Grid,
    prev: &Grid,
    vel_x: &Grid,
    vel_y: &Grid,
    dt: f64,
) {
    let n = out.n();

    #[cfg(feature = "parallel")]
    {
        let width = out.width();
        out.as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .skip(1)
            .take(n)
            .for_each(|(j, row)| {
                for (i, cell) in row.iter_mut().enumerate().skip(1).take(n) {
                    *cell = backtrace_sample(i, j, prev, vel_x, vel_y, dt);
                }
            });
    }

    #[cfg(not(feature = "parallel"))]
    for j in 1..=n {
        for i in 1..=n {
            let value = backtrace_sample(i, j, prev, vel_x, vel_y, dt);
            out.set(i, j, value);
        }
    }

    enforce_boundary(kind, out);
}
