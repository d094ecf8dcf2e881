use crate::math::{Point, Real, DIM};
use crate::query::PointQuery;
use crate::shape::Cuboid;

/// Tolerance, relative to the edge lengths, of the point-inclusion test on boxes.
///
/// A point whose local coordinate along an edge is within `CONTAINMENT_EPSILON * length` of
/// the boundary of the box is considered to be on that boundary.
pub const CONTAINMENT_EPSILON: Real = 1.0e-9;

impl PointQuery for Cuboid {
    fn is_inside(&self, pt: &Point<Real>, spacing: Real) -> bool {
        let Some(local) = self.local_coordinates(pt) else {
            return false;
        };
        let margin = spacing * 0.5;

        (0..DIM).all(|i| {
            let length = self.lengths()[i];
            let eps = CONTAINMENT_EPSILON * length;
            let coord = local[i];

            coord > eps
                && coord < length - eps
                && coord >= margin - eps
                && coord <= length - margin + eps
        })
    }
}
