use crate::math::{
    AngularInertia, Isometry, Matrix, Point, PrincipalAngularInertia, Real, Rotation, Vector,
};
use crate::utils;
use num::Zero;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The mass properties of a rigid body made of a shape with a uniform density.
///
/// Shapes are positioned in absolute coordinates, so the "local-space" of these mass properties
/// is the world frame the shape was built in.
pub struct MassProperties {
    /// The center of mass of the rigid-body.
    pub local_com: Point<Real>,
    /// The mass of the rigid-body.
    pub mass: Real,
    /// The principal angular inertia of the rigid-body, about its center of mass.
    pub principal_inertia: PrincipalAngularInertia<Real>,
    /// The principal vectors of the angular inertia tensor of the rigid-body.
    pub principal_inertia_local_frame: Rotation<Real>,
}

impl MassProperties {
    /// Initializes the mass properties from the given center-of-mass, mass, and principal angular inertia.
    ///
    /// The principal angular inertia are the angular inertia along the coordinate axes.
    pub fn new(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
    ) -> Self {
        Self::with_principal_inertia_frame(local_com, mass, principal_inertia, Rotation::identity())
    }

    /// Initializes the mass properties from the given center-of-mass, mass, and principal angular inertia.
    ///
    /// The principal angular inertia are the angular inertia along the coordinate axes defined by
    /// the `principal_inertia_local_frame`.
    pub fn with_principal_inertia_frame(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
        principal_inertia_local_frame: Rotation<Real>,
    ) -> Self {
        Self {
            local_com,
            mass,
            principal_inertia,
            principal_inertia_local_frame,
        }
    }

    /// The inverse of the mass, or zero if the mass is zero.
    pub fn inv_mass(&self) -> Real {
        utils::inv(self.mass)
    }

    /// The angular inertia tensor expressed in the principal inertia frame.
    ///
    /// Its off-diagonal components (the products of inertia) are exactly zero.
    pub fn principal_inertia_matrix(&self) -> AngularInertia<Real> {
        AngularInertia::from_diagonal(&self.principal_inertia)
    }

    /// The angular inertia tensor expressed in the axes the shape was built in.
    pub fn local_inertia(&self) -> AngularInertia<Real> {
        let frame = self
            .principal_inertia_local_frame
            .to_rotation_matrix()
            .into_inner();
        self.principal_inertia_matrix().quadform(&frame.transpose())
    }

    /// The angular inertia tensor of the rigid-body after it is rotated by `rot`.
    pub fn world_inertia(&self, rot: &Rotation<Real>) -> AngularInertia<Real> {
        let frame = (rot * self.principal_inertia_local_frame)
            .to_rotation_matrix()
            .into_inner();
        self.principal_inertia_matrix().quadform(&frame.transpose())
    }

    /// Reconstructs the angular inertia tensor of the rigid body from its principal inertia values and axes.
    pub fn reconstruct_inertia_matrix(&self) -> Matrix<Real> {
        self.local_inertia().into_matrix()
    }

    /// Transform each element of the mass properties.
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        // NOTE: the inertia is about the center of mass, which moves along.
        Self {
            local_com: m * self.local_com,
            mass: self.mass,
            principal_inertia: self.principal_inertia,
            principal_inertia_local_frame: m.rotation * self.principal_inertia_local_frame,
        }
    }

    /// Changes the mass on these mass-properties.
    ///
    /// Setting `adjust_angular_inertia` to `true` multiplies the angular inertia by
    /// `new_mass / prev_mass`, keeping the same mass distribution. Setting it to `false` leaves
    /// the angular inertia unchanged.
    pub fn set_mass(&mut self, new_mass: Real, adjust_angular_inertia: bool) {
        if adjust_angular_inertia {
            self.principal_inertia *= new_mass * self.inv_mass();
        }

        self.mass = new_mass;
    }
}

impl Zero for MassProperties {
    fn zero() -> Self {
        Self {
            local_com: Point::origin(),
            mass: 0.0,
            principal_inertia: na::zero(),
            principal_inertia_local_frame: Rotation::identity(),
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl core::ops::Add<MassProperties> for MassProperties {
    type Output = Self;

    /// Merges two rigid-bodies, using the parallel axis theorem.
    ///
    /// The principal axes of the result are recovered from the eigen-decomposition of the
    /// combined inertia tensor.
    fn add(self, other: MassProperties) -> Self {
        if self.is_zero() {
            return other;
        } else if other.is_zero() {
            return self;
        }

        let total_mass = self.mass + other.mass;
        let local_com =
            (self.local_com * self.mass + other.local_com.coords * other.mass) / total_mass;
        let inertia = self.construct_shifted_inertia_matrix(local_com - self.local_com)
            + other.construct_shifted_inertia_matrix(local_com - other.local_com);

        let eigen = inertia.symmetric_eigen();
        let mut axes = eigen.eigenvectors;
        if axes.determinant() < 0.0 {
            axes.column_mut(2).neg_mut();
        }
        let frame = Rotation::from_rotation_matrix(&na::Rotation3::from_matrix_unchecked(axes));
        // Drop the negative eigenvalues caused by rounding errors.
        let principal_inertia = eigen.eigenvalues.map(|e| e.max(0.0));

        Self::with_principal_inertia_frame(local_com, total_mass, principal_inertia, frame)
    }
}

impl MassProperties {
    fn construct_shifted_inertia_matrix(&self, shift: Vector<Real>) -> Matrix<Real> {
        let diagm = Matrix::from_diagonal_element(shift.norm_squared());
        self.reconstruct_inertia_matrix() + (diagm - shift * shift.transpose()) * self.mass
    }
}

impl approx::AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.reconstruct_inertia_matrix()
            .abs_diff_eq(&other.reconstruct_inertia_matrix(), epsilon)
            && self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.mass.abs_diff_eq(&other.mass, epsilon)
    }
}

impl approx::RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.reconstruct_inertia_matrix().relative_eq(
            &other.reconstruct_inertia_matrix(),
            epsilon,
            max_relative,
        ) && self
            .local_com
            .relative_eq(&other.local_com, epsilon, max_relative)
            && self.mass.relative_eq(&other.mass, epsilon, max_relative)
    }
}
