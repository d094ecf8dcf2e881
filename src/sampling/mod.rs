//! Discretization of shapes into particle positions.
//!
//! The functions of this module only generate positions, through a callback. Attaching a mass
//! to them and storing them in particle containers is the job of
//! [`Object`](crate::object::Object).

pub use self::lattice::{validate_spacing, Lattice, MAX_LATTICE_CELLS, MAX_LATTICE_NODES};
pub use self::layer_spec::LayerSpec;
pub use self::sample_cuboid_border::{sample_cuboid_border, BorderOwnership};
pub use self::sample_cuboid_interior::{
    cuboid_interior_count, sample_cuboid_inner_shell, sample_cuboid_interior,
};
pub use self::sampling_error::SamplingError;

mod lattice;
mod layer_spec;
mod sample_cuboid_border;
mod sample_cuboid_interior;
mod sampling_error;
