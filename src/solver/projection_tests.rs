use std::f64::consts::PI;

use crate::grid::Grid;
use super::projection::project;

fn central_divergence(vel_x: &Grid, vel_y: &Grid, i: usize, j: usize) -> f64 {
    0.5 * ((vel_x.get(i + 1, j) - vel_x.get(i - 1, j))
        + (vel_y.get(i, j + 1) - vel_y.get(i, j - 1)))
}

fn max_interior_divergence(vel_x: &Grid, vel_y: &Grid) -> f64 {
    let n = vel_x.n();
    let mut max = 0.0_f64;
    for j in 1..=n {
        for i in 1..=n {
            max = max.max(central_divergence(vel_x, vel_y, i, j).abs());
        }
    }
    max
}

#[test]
fn test_divergence_free_field_is_a_fixed_point() {
    // A uniform field has zero central divergence everywhere, so the pressure
    // relaxes to a constant and the gradient subtraction is a no-op on the
    // interior.
    let mut vel_x = Grid::new(6);
    vel_x.fill(1.5);
    let mut vel_y = Grid::new(6);
    vel_y.fill(-0.75);

    let before_x = vel_x.clone();
    let before_y = vel_y.clone();

    let mut divergence = Grid::new(6);
    let mut pressure = Grid::new(6);
    project(&mut vel_x, &mut vel_y, &mut divergence, &mut pressure, 20);

    for j in 1..=6 {
        for i in 1..=6 {
            assert_eq!(vel_x.get(i, j), before_x.get(i, j));
            assert_eq!(vel_y.get(i, j), before_y.get(i, j));
        }
    }
}

#[test]
fn test_gradient_field_divergence_is_mostly_removed() {
    // Build a pure gradient field from a smooth potential; projection should
    // cancel nearly all of its divergence.
    // The central difference of cos(iθ) is -sin(iθ)·sin(θ), so the discrete
    // gradient of the potential cos(iθ)·cos(jθ) is known in closed form at
    // every lattice point, ghost border included.
    let n = 8;
    let theta = PI / (n + 1) as f64;
    let mut vel_x = Grid::new(n);
    let mut vel_y = Grid::new(n);
    for j in 0..=n + 1 {
        for i in 0..=n + 1 {
            let (fx, fy) = (i as f64 * theta, j as f64 * theta);
            vel_x.set(i, j, -fx.sin() * theta.sin() * fy.cos());
            vel_y.set(i, j, -fx.cos() * theta.sin() * fy.sin());
        }
    }

    let before = max_interior_divergence(&vel_x, &vel_y);
    assert!(before > 0.0);

    let mut divergence = Grid::new(n);
    let mut pressure = Grid::new(n);
    project(&mut vel_x, &mut vel_y, &mut divergence, &mut pressure, 80);

    let after = max_interior_divergence(&vel_x, &vel_y);
    assert!(
        after < 0.3 * before,
        "divergence not reduced: before = {}, after = {}",
        before,
        after
    );
}

#[test]
fn test_velocity_boundaries_enforced_after_projection() {
    let mut vel_x = Grid::new(4);
    vel_x.set(2, 2, 1.0);
    let mut vel_y = Grid::new(4);
    vel_y.set(3, 3, -2.0);

    let mut divergence = Grid::new(4);
    let mut pressure = Grid::new(4);
    project(&mut vel_x, &mut vel_y, &mut divergence, &mut pressure, 10);

    for i in 1..=4 {
        assert_eq!(vel_x.get(0, i), -vel_x.get(1, i));
        assert_eq!(vel_x.get(5, i), -vel_x.get(4, i));
        assert_eq!(vel_y.get(i, 0), -vel_y.get(i, 1));
        assert_eq!(vel_y.get(i, 5), -vel_y.get(i, 4));
    }
}

#[test]
fn test_scratch_fields_hold_divergence_and_pressure() {
    let mut vel_x = Grid::new(4);
    vel_x.set(2, 2, 1.0);
    let mut vel_y = Grid::new(4);

    let original_div = central_divergence(&vel_x, &vel_y, 1, 2);

    let mut divergence = Grid::new(4);
    let mut pressure = Grid::new(4);
    project(&mut vel_x, &mut vel_y, &mut divergence, &mut pressure, 10);

    assert_eq!(divergence.get(1, 2), original_div);
    assert!(pressure.as_slice().iter().any(|&p| p != 0.0));
}
