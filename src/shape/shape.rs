use crate::mass_properties::MassProperties;
use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::sampling::{self, LayerSpec, SamplingError};
use crate::shape::{Cuboid, Face};
use downcast_rs::{impl_downcast, DowncastSync};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A box given by a corner and three edges.
    Cuboid = 0,
}

#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A box given by a corner and three edges.
    Cuboid(&'a Cuboid),
}

/// Trait implemented by shapes that can be discretized into particles.
///
/// All the sampling methods report the generated positions through `emit` and return how many
/// were emitted. They check their arguments before emitting anything, so an error means nothing
/// was emitted.
pub trait Shape: PointQuery + DowncastSync {
    /// The volume of this shape.
    ///
    /// `spacing` is the particle spacing the shape is discretized with. Shapes whose effective
    /// volume depends on a boundary offset use it; the shapes with a sharp boundary ignore it.
    fn volume(&self, spacing: Real) -> Real;

    /// Is this shape unable to hold any particle?
    fn is_degenerate(&self) -> bool;

    /// The center of mass of this shape, assuming a uniform density.
    fn center_of_mass(&self) -> Point<Real>;

    /// Computes the mass-properties of this shape given its total mass.
    fn mass_properties(&self, mass: Real) -> MassProperties;

    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// Generates the boundary layers of this shape.
    ///
    /// Each position is emitted once, along with the face owning it.
    fn sample_border(
        &self,
        spec: &LayerSpec,
        emit: &mut dyn FnMut(Face, Point<Real>),
    ) -> Result<usize, SamplingError>;

    /// Generates particles filling the volume of this shape.
    ///
    /// If `fill_edges` is `false`, no particle is generated on the boundary of the shape.
    fn sample_interior(
        &self,
        spacing: Real,
        fill_edges: bool,
        emit: &mut dyn FnMut(Point<Real>),
    ) -> Result<usize, SamplingError>;

    /// The number of particles [`Shape::sample_interior`] would generate, without generating
    /// them.
    fn interior_count(&self, spacing: Real, fill_edges: bool) -> Result<usize, SamplingError>;

    /// Generates particles filling the part of this shape closer than `depth` to its boundary.
    fn sample_inner_shell(
        &self,
        spacing: Real,
        depth: Real,
        emit: &mut dyn FnMut(Point<Real>),
    ) -> Result<usize, SamplingError>;
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a box, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }
}

impl Shape for Cuboid {
    fn volume(&self, _spacing: Real) -> Real {
        Cuboid::volume(self)
    }

    fn is_degenerate(&self) -> bool {
        Cuboid::is_degenerate(self)
    }

    fn center_of_mass(&self) -> Point<Real> {
        self.center()
    }

    fn mass_properties(&self, mass: Real) -> MassProperties {
        MassProperties::from_cuboid(mass, self)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cuboid(self)
    }

    fn sample_border(
        &self,
        spec: &LayerSpec,
        emit: &mut dyn FnMut(Face, Point<Real>),
    ) -> Result<usize, SamplingError> {
        sampling::sample_cuboid_border(self, spec, emit)
    }

    fn sample_interior(
        &self,
        spacing: Real,
        fill_edges: bool,
        emit: &mut dyn FnMut(Point<Real>),
    ) -> Result<usize, SamplingError> {
        sampling::sample_cuboid_interior(self, spacing, fill_edges, emit)
    }

    fn interior_count(&self, spacing: Real, fill_edges: bool) -> Result<usize, SamplingError> {
        sampling::cuboid_interior_count(self, spacing, fill_edges)
    }

    fn sample_inner_shell(
        &self,
        spacing: Real,
        depth: Real,
        emit: &mut dyn FnMut(Point<Real>),
    ) -> Result<usize, SamplingError> {
        sampling::sample_cuboid_inner_shell(self, spacing, depth, emit)
    }
}
