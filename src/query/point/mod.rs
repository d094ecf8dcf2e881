//! Point inclusion.

pub use self::point_cuboid::CONTAINMENT_EPSILON;
#[doc(inline)]
pub use self::point_query::PointQuery;

mod point_cuboid;
#[doc(hidden)]
pub mod point_query;
