//! Box defined by an origin and three edge vectors.

use crate::math::{Isometry, Matrix, Point, Real, Rotation, Vector, DIM};

/// Threshold on the (unit-edge) frame determinant below which a box is considered flat.
const DEGENERACY_EPSILON: Real = 1.0e-9;

/// Shape of a box, given by one of its corners and the three edges starting from it.
///
/// The edges are expected to be mutually orthogonal, but need not be aligned with the world
/// axes. The local frame of the box has its origin at `origin` and its `i`-th axis along the
/// `i`-th edge.
///
/// A box with a zero-length edge, or with coplanar edges, is *degenerate*: it can still be built
/// but has no fillable volume, contains no point, and every sampling of it is empty.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    origin: Point<Real>,
    edges: [Vector<Real>; DIM],
    lengths: Vector<Real>,
    // Inverse of the matrix whose columns are the unit edge directions.
    // `None` if the box is degenerate.
    inv_frame: Option<Matrix<Real>>,
}

impl Cuboid {
    /// Creates a new box from one of its corners and the three edges starting from it.
    pub fn new(
        origin: Point<Real>,
        edge1: Vector<Real>,
        edge2: Vector<Real>,
        edge3: Vector<Real>,
    ) -> Cuboid {
        let edges = [edge1, edge2, edge3];
        let lengths = Vector::new(edge1.norm(), edge2.norm(), edge3.norm());

        let inv_frame = if lengths.min() > 0.0 && lengths.iter().all(|l| l.is_finite()) {
            let frame = Matrix::from_columns(&[
                edge1 / lengths.x,
                edge2 / lengths.y,
                edge3 / lengths.z,
            ]);

            if frame.determinant().abs() > DEGENERACY_EPSILON {
                frame.try_inverse()
            } else {
                None
            }
        } else {
            None
        };

        Cuboid {
            origin,
            edges,
            lengths,
            inv_frame,
        }
    }

    /// Creates a new box from one of its corners, its extents along its local axes, and the
    /// rotation bringing the world axes onto its local axes.
    pub fn from_extents(
        origin: Point<Real>,
        lx: Real,
        ly: Real,
        lz: Real,
        rotation: &Rotation<Real>,
    ) -> Cuboid {
        Self::new(
            origin,
            rotation * Vector::x() * lx,
            rotation * Vector::y() * ly,
            rotation * Vector::z() * lz,
        )
    }

    /// The corner of the box its edges start from.
    #[inline]
    pub fn origin(&self) -> &Point<Real> {
        &self.origin
    }

    /// The three edges of the box.
    #[inline]
    pub fn edges(&self) -> &[Vector<Real>; DIM] {
        &self.edges
    }

    /// The lengths of the three edges of the box.
    #[inline]
    pub fn lengths(&self) -> &Vector<Real> {
        &self.lengths
    }

    /// Is this box flat or otherwise unable to hold any volume?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.inv_frame.is_none()
    }

    /// The volume of this box, i.e., the magnitude of the scalar triple product of its edges.
    pub fn volume(&self) -> Real {
        self.edges[0].dot(&self.edges[1].cross(&self.edges[2])).abs()
    }

    /// The center of this box.
    pub fn center(&self) -> Point<Real> {
        self.origin + (self.edges[0] + self.edges[1] + self.edges[2]) * 0.5
    }

    /// The point at the fractional coordinates `t` of the box (`t = [0, 0, 0]` is the origin,
    /// `t = [1, 1, 1]` the opposite corner).
    #[inline]
    pub fn point_at(&self, t: [Real; DIM]) -> Point<Real> {
        self.origin + self.edges[0] * t[0] + self.edges[1] * t[1] + self.edges[2] * t[2]
    }

    /// The coordinates of `pt` in the local frame of this box, i.e., its distances along each
    /// (unit) edge direction measured from the origin.
    ///
    /// Returns `None` if the box is degenerate.
    pub fn local_coordinates(&self, pt: &Point<Real>) -> Option<Vector<Real>> {
        self.inv_frame.map(|inv| inv * (pt - self.origin))
    }

    /// The rotation bringing the world axes onto the local axes of this box.
    ///
    /// The second axis is orthogonalized against the first one, and the third axis is
    /// recomputed as their cross product, so the result is a proper rotation even if the edges
    /// are slightly skewed or form a left-handed frame.
    pub fn local_frame(&self) -> Rotation<Real> {
        if self.is_degenerate() {
            return Rotation::identity();
        }

        let x = self.edges[0] / self.lengths.x;
        let y = (self.edges[1] - x * x.dot(&self.edges[1])).normalize();
        let z = x.cross(&y);
        let basis = Matrix::from_columns(&[x, y, z]);
        Rotation::from_rotation_matrix(&na::Rotation3::from_matrix_unchecked(basis))
    }

    /// Applies a rigid transformation to this box.
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m * self.origin,
            m * self.edges[0],
            m * self.edges[1],
            m * self.edges[2],
        )
    }
}
