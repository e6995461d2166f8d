// src/solver/simulation.rs

use std::mem;

use log::debug;

use crate::grid::Grid;
use crate::utils::FluidError;
use super::advection::advect;
use super::boundary::FieldKind;
use super::diffusion::diffuse;
use super::projection::project;

/// Default Gauss-Seidel sweep count for the diffusion and Poisson solves.
///
/// More sweeps buy accuracy at linear cost; fewer risk visible relaxation
/// artifacts. 10 is the count the interactive demo this solver was tuned
/// against uses.
pub const DEFAULT_RELAXATION_ITERATIONS: usize = 10;

/// Immutable per-session solver parameters.
///
/// # Fields
/// * `n` - Interior grid resolution per axis; all fields hold `(n + 2)²` cells
/// * `diffusion` - Rate at which density and velocity spread between cells
/// * `time_step` - Simulated time advanced by one [`FluidSimulation::step`]
/// * `relaxation_iterations` - Gauss-Seidel sweeps per diffusion/Poisson solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub n: usize,
    pub diffusion: f64,
    pub time_step: f64,
    pub relaxation_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            n: 100,
            diffusion: 0.7,
            time_step: 0.3,
            relaxation_iterations: DEFAULT_RELAXATION_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a validated configuration with the default relaxation count.
    ///
    /// # Arguments
    /// * `n` - Interior resolution (must be at least 1)
    /// * `diffusion` - Diffusion rate (must be finite and non-negative)
    /// * `time_step` - Per-tick time step (must be finite and positive)
    ///
    /// # Examples
    /// ```
    /// use rs_fluids::solver::SolverConfig;
    ///
    /// let config = SolverConfig::new(64, 0.1, 1.0 / 60.0).unwrap();
    /// assert_eq!(config.n, 64);
    ///
    /// assert!(SolverConfig::new(0, 0.1, 1.0 / 60.0).is_err());
    /// assert!(SolverConfig::new(64, -0.1, 1.0 / 60.0).is_err());
    /// assert!(SolverConfig::new(64, 0.1, 0.0).is_err());
    /// ```
    pub fn new(n: usize, diffusion: f64, time_step: f64) -> Result<Self, FluidError> {
        let config = Self {
            n,
            diffusion,
            time_step,
            relaxation_iterations: DEFAULT_RELAXATION_ITERATIONS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Overrides the relaxation sweep count (must be at least 1).
    ///
    /// Test suites use low counts for fast deterministic runs; production
    /// callers can raise it for tighter convergence.
    pub fn with_iterations(mut self, iterations: usize) -> Result<Self, FluidError> {
        self.relaxation_iterations = iterations;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), FluidError> {
        if self.n < 1 {
            return Err(FluidError::InvalidResolution);
        }
        if !self.diffusion.is_finite() || self.diffusion < 0.0 {
            return Err(FluidError::InvalidDiffusion);
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(FluidError::InvalidTimeStep);
        }
        if self.relaxation_iterations < 1 {
            return Err(FluidError::InvalidIterationCount);
        }
        Ok(())
    }
}

/// A 2D incompressible-fluid solver on a fixed grid with ghost borders.
///
/// This implements the classic stable-fluids scheme: each tick alternates
/// implicit diffusion, one-shot source injection, semi-Lagrangian advection,
/// and a pressure projection that removes divergence. The instance owns all
/// field storage; every buffer is allocated once at construction and only
/// contents and current/previous roles change afterwards. Callers queue
/// impulses between ticks and read the fields back through read-only views.
///
/// # Examples
/// ```
/// use rs_fluids::solver::{FluidSimulation, SolverConfig};
///
/// let config = SolverConfig::new(32, 0.0002, 1.0 / 60.0).unwrap();
/// let mut sim = FluidSimulation::new(config).unwrap();
///
/// // Drop some dye in the middle and stir it upward.
/// let center = sim.ix(16, 16);
/// sim.add_density(center, 50.0).unwrap();
/// sim.add_velocity(center, 0.0, -5.0).unwrap();
/// sim.step();
///
/// assert!(sim.density_at(center).unwrap() > 0.0);
/// ```
pub struct FluidSimulation {
    config: SolverConfig,
    vel_x: Grid,
    vel_x_prev: Grid,
    vel_y: Grid,
    vel_y_prev: Grid,
    density: Grid,
    density_prev: Grid,
    density_src: Grid,
    vel_x_src: Grid,
    vel_y_src: Grid,
    divergence: Grid,
    pressure: Grid,
}

impl FluidSimulation {
    /// Creates a simulation with all fields zeroed.
    ///
    /// # Returns
    /// * `Ok(FluidSimulation)` - If the configuration is valid
    /// * `Err(FluidError)` - If the configuration fails validation
    pub fn new(config: SolverConfig) -> Result<Self, FluidError> {
        config.validate()?;
        debug!(
            "allocating fluid grids: n={}, diffusion={}, dt={}, iterations={}",
            config.n, config.diffusion, config.time_step, config.relaxation_iterations
        );
        let n = config.n;
        Ok(Self {
            config,
            vel_x: Grid::new(n),
            vel_x_prev: Grid::new(n),
            vel_y: Grid::new(n),
            vel_y_prev: Grid::new(n),
            density: Grid::new(n),
            density_prev: Grid::new(n),
            density_src: Grid::new(n),
            vel_x_src: Grid::new(n),
            vel_y_src: Grid::new(n),
            divergence: Grid::new(n),
            pressure: Grid::new(n),
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Maps grid coordinates to the linear cell index used by the injection
    /// and read-back calls.
    #[inline]
    pub fn ix(&self, x: usize, y: usize) -> usize {
        self.density.ix(x, y)
    }

    /// Queues a one-shot density impulse at a linear cell index.
    ///
    /// Impulses accumulate until the next [`step`](Self::step), which folds
    /// `time_step · value` into the field and clears the queue.
    ///
    /// # Returns
    /// * `Err(FluidError::IndexOutOfBounds)` - If `index` is outside the grid
    pub fn add_density(&mut self, index: usize, value: f64) -> Result<(), FluidError> {
        self.check_index(index)?;
        self.density_src[index] += value;
        Ok(())
    }

    /// Queues a one-shot velocity impulse at a linear cell index.
    ///
    /// # Returns
    /// * `Err(FluidError::IndexOutOfBounds)` - If `index` is outside the grid
    pub fn add_velocity(&mut self, index: usize, vx: f64, vy: f64) -> Result<(), FluidError> {
        self.check_index(index)?;
        self.vel_x_src[index] += vx;
        self.vel_y_src[index] += vy;
        Ok(())
    }

    /// Advances the simulation by exactly one tick of `time_step`.
    ///
    /// Runs the velocity step (inject, diffuse both components, project,
    /// self-advect, project) and then the density step (inject, diffuse,
    /// advect through the final divergence-free velocity). The order is
    /// fixed: density advection depends on the completed velocity step.
    pub fn step(&mut self) {
        debug!("advancing one tick: dt={}", self.config.time_step);
        self.velocity_step();
        self.density_step();
    }

    /// Read-only view of the density field, ghost border included.
    pub fn density(&self) -> &[f64] {
        self.density.as_slice()
    }

    /// Density at a single linear cell index.
    pub fn density_at(&self, index: usize) -> Result<f64, FluidError> {
        self.check_index(index)?;
        Ok(self.density[index])
    }

    /// Read-only view of the x velocity component.
    pub fn velocity_x(&self) -> &[f64] {
        self.vel_x.as_slice()
    }

    /// Read-only view of the y velocity component.
    pub fn velocity_y(&self) -> &[f64] {
        self.vel_y.as_slice()
    }

    /// Replaces the per-tick time step, for callers driving the solver from
    /// measured frame times.
    pub fn set_time_step(&mut self, time_step: f64) -> Result<(), FluidError> {
        let mut config = self.config;
        config.time_step = time_step;
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Zeroes every field, source queue, and scratch buffer.
    pub fn reset(&mut self) {
        self.vel_x.fill(0.0);
        self.vel_x_prev.fill(0.0);
        self.vel_y.fill(0.0);
        self.vel_y_prev.fill(0.0);
        self.density.fill(0.0);
        self.density_prev.fill(0.0);
        self.density_src.fill(0.0);
        self.vel_x_src.fill(0.0);
        self.vel_y_src.fill(0.0);
        self.divergence.fill(0.0);
        self.pressure.fill(0.0);
    }

    fn check_index(&self, index: usize) -> Result<(), FluidError> {
        let size = self.density.len();
        if index >= size {
            return Err(FluidError::IndexOutOfBounds { index, size });
        }
        Ok(())
    }

    /// Folds `dt · source` into `field` and clears the source queue.
    fn add_source(field: &mut Grid, source: &mut Grid, dt: f64) {
        for (cell, src) in field.as_mut_slice().iter_mut().zip(source.as_mut_slice()) {
            *cell += dt * *src;
            *src = 0.0;
        }
    }

    fn velocity_step(&mut self) {
        let dt = self.config.time_step;
        let diffusion = self.config.diffusion;
        let iterations = self.config.relaxation_iterations;

        Self::add_source(&mut self.vel_x, &mut self.vel_x_src, dt);
        Self::add_source(&mut self.vel_y, &mut self.vel_y_src, dt);

        mem::swap(&mut self.vel_x, &mut self.vel_x_prev);
        diffuse(FieldKind::VelocityX, &mut self.vel_x, &self.vel_x_prev, diffusion, dt, iterations);
        mem::swap(&mut self.vel_y, &mut self.vel_y_prev);
        diffuse(FieldKind::VelocityY, &mut self.vel_y, &self.vel_y_prev, diffusion, dt, iterations);

        project(&mut self.vel_x, &mut self.vel_y, &mut self.divergence, &mut self.pressure, iterations);

        // Both components backtrace through the same pre-advection velocity.
        mem::swap(&mut self.vel_x, &mut self.vel_x_prev);
        mem::swap(&mut self.vel_y, &mut self.vel_y_prev);
        advect(FieldKind::VelocityX, &mut self.vel_x, &self.vel_x_prev, &self.vel_x_prev, &self.vel_y_prev, dt);
        advect(FieldKind::VelocityY, &mut self.vel_y, &self.vel_y_prev, &self.vel_x_prev, &self.vel_y_prev, dt);

        project(&mut self.vel_x, &mut self.vel_y, &mut self.divergence, &mut self.pressure, iterations);
    }

    fn density_step(&mut self) {
        let dt = self.config.time_step;
        let diffusion = self.config.diffusion;
        let iterations = self.config.relaxation_iterations;

        Self::add_source(&mut self.density, &mut self.density_src, dt);

        mem::swap(&mut self.density, &mut self.density_prev);
        diffuse(FieldKind::Scalar, &mut self.density, &self.density_prev, diffusion, dt, iterations);

        mem::swap(&mut self.density, &mut self.density_prev);
        advect(FieldKind::Scalar, &mut self.density, &self.density_prev, &self.vel_x, &self.vel_y, dt);
    }
}
