/// Linear interpolation between `a` and `b` by `t`.
///
/// With `t == 0.0` this returns exactly `a`, which is what makes the
/// degenerate advection case (a backtraced position landing on a lattice
/// point) collapse cleanly to the point's own value.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
