use crate::mass_properties::MassProperties;
use crate::math::{PrincipalAngularInertia, Real, Vector};
use crate::shape::Cuboid;

impl MassProperties {
    /// The principal angular inertia of a box with unit mass and the given edge lengths.
    pub(crate) fn cuboid_unit_inertia(lengths: &Vector<Real>) -> PrincipalAngularInertia<Real> {
        let sq = lengths.component_mul(lengths) / 12.0;
        Vector::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y)
    }

    /// Computes the mass properties of a box with the given total mass.
    ///
    /// The inertia is expressed about the center of the box, along its edges.
    pub fn from_cuboid(mass: Real, cuboid: &Cuboid) -> Self {
        let unit_i = Self::cuboid_unit_inertia(cuboid.lengths());
        Self::with_principal_inertia_frame(
            cuboid.center(),
            mass,
            unit_i * mass,
            cuboid.local_frame(),
        )
    }
}
