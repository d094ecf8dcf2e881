use crate::math::Real;

/// Errors raised while seeding particles in a shape.
///
/// Every operation returning this error leaves its output containers exactly as they were
/// before the call.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SamplingError {
    /// The particle spacing is zero, negative, or not finite.
    #[error("the particle spacing must be positive and finite, got {0}")]
    InvalidSpacing(Real),
    /// The density is zero, negative, or not finite.
    #[error("the density must be positive and finite, got {0}")]
    InvalidDensity(Real),
    /// An explicitly given particle mass is zero, negative, or not finite.
    #[error("the particle mass must be positive and finite, got {0}")]
    InvalidMass(Real),
    /// A shape was filled before its particle mass was set.
    #[error("the particle mass of a shape must be set before filling it")]
    MassNotSet,
    /// The inertia of a shape was requested before its body mass was set.
    #[error("the body mass of a shape must be set before computing its inertia")]
    BodyMassNotSet,
    /// The spacing is so small compared to the shape that the lattice would be unreasonably
    /// large.
    #[error("sampling along axis {axis} would need {cells} lattice cells")]
    LatticeTooLarge {
        /// The local axis of the shape with too many cells.
        axis: usize,
        /// The number of cells that axis would need.
        cells: Real,
    },
    /// The spacing is so small compared to the shape that the lattice, all axes combined,
    /// would have more than [`MAX_LATTICE_NODES`](crate::sampling::MAX_LATTICE_NODES) nodes.
    #[error("sampling would need {0} lattice nodes")]
    TooManyLatticeNodes(Real),
}
