use crate::math::{Point, Real};

/// Trait of objects that can be tested for point inclusion.
pub trait PointQuery {
    /// Tests if `pt` lies inside `self`, at least half a `spacing` away from its boundary.
    ///
    /// The half-spacing margin keeps particles sampled at `spacing` on the boundary of a shape
    /// (or right next to it) from being considered inside of it. Points lying on the boundary
    /// are never inside, even with a zero `spacing`.
    fn is_inside(&self, pt: &Point<Real>, spacing: Real) -> bool;

    /// Tests if `pt` lies strictly inside `self`.
    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.is_inside(pt, 0.0)
    }
}
