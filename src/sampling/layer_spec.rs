use crate::math::Real;
use crate::sampling::{validate_spacing, SamplingError};
use crate::shape::FaceMask;

/// Describes the boundary layers to generate on a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerSpec {
    /// The particle spacing.
    pub spacing: Real,
    /// The number of particle layers, stacked inward from each face.
    pub layers: usize,
    /// The faces receiving particles. Points on the edges shared with an excluded face are
    /// still generated by the included face.
    pub faces: FaceMask,
}

impl LayerSpec {
    /// A single layer of particles at `spacing` on every face.
    pub fn new(spacing: Real) -> Self {
        Self {
            spacing,
            layers: 1,
            faces: FaceMask::ALL,
        }
    }

    /// Sets the number of layers.
    pub fn with_layers(mut self, layers: usize) -> Self {
        self.layers = layers;
        self
    }

    /// Sets the faces receiving particles.
    pub fn with_faces(mut self, faces: impl Into<FaceMask>) -> Self {
        self.faces = faces.into();
        self
    }

    /// Includes or excludes the top face (the `+z` face of the local frame).
    pub fn with_top(mut self, fill_top: bool) -> Self {
        self.faces.set(FaceMask::POS_Z, fill_top);
        self
    }

    /// Checks that the spacing of these layers is usable.
    pub fn validate(&self) -> Result<(), SamplingError> {
        validate_spacing(self.spacing).map(|_| ())
    }
}
