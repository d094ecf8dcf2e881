/*!
partfill
========

**partfill** discretizes geometric primitives into particles for particle-based
simulations (SPH and friends): volumetric fills, conformal boundary layers,
obstacle carving, and the per-particle mass and rigid-body inertia of each shape.

```
use partfill::math::{Point, Vector};
use partfill::object::Object;
use partfill::shape::Cuboid;

let tank = Cuboid::new(
    Point::origin(),
    Vector::x(),
    Vector::y(),
    Vector::z(),
);
let mut tank = Object::new(tank);
tank.set_part_mass(0.1, 1000.0).unwrap();

let mut walls = Vec::new();
let mut fluid = Vec::new();
assert_eq!(tank.fill_border(&mut walls, 0.1).unwrap(), 602);
assert_eq!(tank.fill(&mut fluid, 0.1, false).unwrap(), 1000);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod mass_properties;
pub mod object;
pub mod particle;
pub mod query;
pub mod sampling;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, Vector3};
    use na::UnitQuaternion;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;

    /// The angular inertia of a rigid body.
    pub type AngularInertia<N> = crate::utils::SdpMatrix3<N>;

    /// The principal angular inertia of a rigid body.
    pub type PrincipalAngularInertia<N> = Vector3<N>;
}
