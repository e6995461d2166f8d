// src/solver/boundary.rs

use crate::grid::Grid;

/// Which reflection rule applies to a field at the walls.
///
/// Scalar fields copy the adjacent interior value into the ghost border.
/// Velocity components are negated at the walls whose normal matches the
/// component, which gives a no-penetration / free-slip condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    VelocityX,
    VelocityY,
}

/// Writes the ghost border of `field` from its adjacent interior cells.
///
/// Left/right ghost cells mirror column `1` and column `n`, negated for
/// [`FieldKind::VelocityX`]; top/bottom ghost cells mirror row `1` and row
/// `n`, negated for [`FieldKind::VelocityY`]. Each corner becomes the average
/// of its two adjacent edge cells. The routine only reads interior and edge
/// values it has already settled, so applying it twice in a row is a no-op.
pub(crate) fn enforce_boundary(kind: FieldKind, field: &mut Grid) {
    let n = field.n();

    for i in 1..=n {
        let left = field.get(1, i);
        let right = field.get(n, i);
        field.set(0, i, if kind == FieldKind::VelocityX { -left } else { left });
        field.set(n + 1, i, if kind == FieldKind::VelocityX { -right } else { right });

        let top = field.get(i, 1);
        let bottom = field.get(i, n);
        field.set(i, 0, if kind == FieldKind::VelocityY { -top } else { top });
        field.set(i, n + 1, if kind == FieldKind::VelocityY { -bottom } else { bottom });
    }

    let corner = 0.5 * (field.get(1, 0) + field.get(0, 1));
    field.set(0, 0, corner);
    let corner = 0.5 * (field.get(1, n + 1) + field.get(0, n));
    field.set(0, n + 1, corner);
    let corner = 0.5 * (field.get(n, 0) + field.get(n + 1, 1));
    field.set(n + 1, 0, corner);
    let corner = 0.5 * (field.get(n, n + 1) + field.get(n + 1, n));
    field.set(n + 1, n + 1, corner);
}
