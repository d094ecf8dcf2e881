//! Shapes that can be discretized into particles.

pub use self::cuboid::Cuboid;
pub use self::face::{Face, FaceMask};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType, TypedShape};

mod cuboid;
mod face;
mod shape;
