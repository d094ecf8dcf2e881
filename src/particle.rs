//! Particles and their classification.

use crate::math::{Point, Real};
use na::Vector4;

/// A particle: a position along with the mass it carries.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Particle {
    /// The absolute position of the particle.
    pub point: Point<Real>,
    /// The mass of the particle.
    pub mass: Real,
}

impl Particle {
    /// Creates a new particle.
    #[inline]
    pub fn new(point: Point<Real>, mass: Real) -> Self {
        Self { point, mass }
    }

    /// The particle packed as `[x, y, z, mass]`, the layout most simulation buffers expect.
    #[inline]
    pub fn as_homogeneous(&self) -> Vector4<Real> {
        self.point.coords.push(self.mass)
    }
}

impl From<Particle> for Vector4<Real> {
    fn from(particle: Particle) -> Self {
        particle.as_homogeneous()
    }
}

/// What a particle stands for in a simulation.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ParticleRole {
    /// A particle of fluid, moved by the simulation.
    Fluid,
    /// A particle of a fixed boundary (walls, floor).
    Boundary,
    /// A particle of a solid obstacle immersed in the fluid.
    Obstacle,
    /// A massless measurement point.
    Probe,
}

impl ParticleRole {
    /// Tags `count` consecutive particles of the `object`-th body with this role.
    ///
    /// The particles get the global indices `first_index..first_index + count`. Indices past
    /// `usize::MAX` don't exist, so the range stops there if `first_index + count` overflows.
    pub fn tag(
        self,
        object: usize,
        first_index: usize,
        count: usize,
    ) -> impl ExactSizeIterator<Item = ParticleInfo> {
        let end = first_index.saturating_add(count);
        (first_index..end).map(move |index| ParticleInfo::new(self, object, index))
    }
}

/// The identity of a particle: its role, the body it belongs to, and its global index.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ParticleInfo {
    /// The role of the particle.
    pub role: ParticleRole,
    /// The number of the body (among the bodies sharing the same role) the particle belongs to.
    pub object: usize,
    /// The global index of the particle.
    pub index: usize,
}

impl ParticleInfo {
    /// Creates a new particle identity.
    pub fn new(role: ParticleRole, object: usize, index: usize) -> Self {
        Self {
            role,
            object,
            index,
        }
    }
}
