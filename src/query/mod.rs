//! Non-persistent geometric queries.
//!
//! The only query needed to seed particles is point inclusion, used both to check samples and
//! to carve particles out of the regions occupied by obstacles.

pub use self::point::{PointQuery, CONTAINMENT_EPSILON};

pub mod point;
