// src/grid/grid.rs

use std::ops::{Index, IndexMut};

/// A dense scalar field over an `(n + 2) × (n + 2)` lattice.
///
/// The interior cells live at coordinates `1..=n` on each axis; the outermost
/// row and column on every side form a one-cell ghost border that holds
/// mirrored values for boundary enforcement. All fields of the simulation
/// (density, both velocity components, sources, and projection scratch) share
/// this storage layout.
///
/// # Examples
/// ```
/// use rs_fluids::grid::Grid;
///
/// let mut grid = Grid::new(4);
/// assert_eq!(grid.len(), 36); // (4 + 2)²
///
/// grid.set(2, 2, 1.0);
/// assert_eq!(grid.get(2, 2), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    n: usize,
    width: usize,
    cells: Vec<f64>,
}

impl Grid {
    /// Creates a zeroed grid with `n` interior cells per axis.
    pub fn new(n: usize) -> Self {
        let width = n + 2;
        Self {
            n,
            width,
            cells: vec![0.0; width * width],
        }
    }

    /// Interior resolution per axis.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Full lattice width including the ghost border (`n + 2`).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total cell count, `(n + 2)²`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Strict linearization of `(x, y)` to a cell offset.
    ///
    /// Accepts exactly `0 ≤ x, y ≤ n + 1`; anything outside that range is a
    /// programming error at the call site (ghost-cell writes and interior
    /// sweeps always stay in range by construction).
    #[inline]
    pub fn ix(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.width,
            "grid coordinate ({}, {}) outside 0..={}",
            x,
            y,
            self.n + 1
        );
        x + self.width * y
    }

    /// Clamped linearization for coordinates that may fall outside the grid.
    ///
    /// Each axis is clamped independently to `[0, n + 1]` before
    /// linearizing. Advection lookups must use this policy: a backtraced
    /// position can legally land in or beyond the ghost border when
    /// velocities are large.
    #[inline]
    pub fn ix_clamped(&self, x: isize, y: isize) -> usize {
        let max = (self.n + 1) as isize;
        let cx = x.clamp(0, max) as usize;
        let cy = y.clamp(0, max) as usize;
        cx + self.width * cy
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.cells[self.ix(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        let index = self.ix(x, y);
        self.cells[index] = value;
    }

    /// Reads the cell at `(x, y)` after clamping both axes into the lattice.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> f64 {
        self.cells[self.ix_clamped(x, y)]
    }

    /// Sets every cell, border included, to `value`.
    pub fn fill(&mut self, value: f64) {
        self.cells.fill(value);
    }

    /// Read-only view of the raw cell buffer in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.cells
    }
}

impl Index<usize> for Grid {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Grid {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.cells[index]
    }
}
