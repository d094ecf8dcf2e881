use crate::math::{Point, Real, DIM};
use crate::sampling::{Lattice, LayerSpec, SamplingError};
use crate::shape::{Cuboid, Face, FaceMask};

/// Assigns each node of a box lattice to at most one face of the box.
///
/// The depth of a node relative to a face is the number of lattice planes between that face and
/// the node. A node belongs to the boundary layers if its smallest depth relative to the
/// included faces is less than the number of layers, and it is owned by the first included face
/// (in canonical order) achieving that smallest depth. Nodes on edges and corners thus have a
/// single owner, whatever the layer count, face mask, or extents of the box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BorderOwnership {
    cells: [usize; DIM],
    faces: FaceMask,
    layers: usize,
}

impl BorderOwnership {
    /// The ownership rule for a lattice with `cells` cells along each axis.
    pub fn new(cells: [usize; DIM], faces: FaceMask, layers: usize) -> Self {
        Self {
            cells,
            faces,
            layers,
        }
    }

    /// The number of lattice planes between `face` and the node `id`.
    #[inline]
    pub fn depth(&self, face: Face, id: [usize; DIM]) -> usize {
        let axis = face.axis();

        if face.is_negative() {
            id[axis]
        } else {
            self.cells[axis] - id[axis]
        }
    }

    /// The face owning the node `id`, if that node is part of the boundary layers.
    pub fn owner(&self, id: [usize; DIM]) -> Option<Face> {
        let mut best: Option<(Face, usize)> = None;

        for face in self.faces.faces() {
            let depth = self.depth(face, id);

            if best.map_or(true, |(_, best_depth)| depth < best_depth) {
                best = Some((face, depth));
            }
        }

        best.filter(|(_, depth)| *depth < self.layers)
            .map(|(face, _)| face)
    }

    /// The number of lattice planes parallel to `face` that can hold its layers.
    ///
    /// This is the layer count, clamped to the number of planes along the face normal.
    pub fn num_planes(&self, face: Face) -> usize {
        self.layers.min(self.cells[face.axis()] + 1)
    }
}

/// Generates the boundary layers of a box.
///
/// Every included face is sampled on the lattice nodes of its plane and of the `spec.layers - 1`
/// planes below it. Faces are processed in canonical order, layers in increasing depth, then
/// nodes in increasing order of their first and second in-face coordinates. Each node is emitted
/// once, by the face owning it (see [`BorderOwnership`]), together with that face.
///
/// If the box is too thin along some axis to hold the requested layers, the layer count is
/// clamped along that axis. A degenerate box emits nothing.
///
/// Returns the number of emitted points.
pub fn sample_cuboid_border(
    cuboid: &Cuboid,
    spec: &LayerSpec,
    emit: &mut dyn FnMut(Face, Point<Real>),
) -> Result<usize, SamplingError> {
    spec.validate()?;

    if cuboid.is_degenerate() {
        log::warn!("Attempted to fill the border of a degenerate box: {:?}", cuboid);
        return Ok(0);
    }

    let lattice = Lattice::new(cuboid.lengths(), spec.spacing)?;
    let cells = lattice.cells();
    let ownership = BorderOwnership::new(cells, spec.faces, spec.layers);

    for axis in 0..DIM {
        if spec.layers > cells[axis] + 1 {
            log::warn!(
                "The box is too thin along axis {} for {} layers: clamping to {}.",
                axis,
                spec.layers,
                cells[axis] + 1
            );
        }
    }

    let mut count = 0;

    for face in spec.faces.faces() {
        let axis = face.axis();
        let [a1, a2] = face.tangent_axes();

        for depth in 0..ownership.num_planes(face) {
            let mut id = [0; DIM];
            id[axis] = if face.is_negative() {
                depth
            } else {
                cells[axis] - depth
            };

            for i in 0..=cells[a1] {
                id[a1] = i;

                for j in 0..=cells[a2] {
                    id[a2] = j;

                    if ownership.owner(id) == Some(face) {
                        emit(face, cuboid.point_at(lattice.node(id)));
                        count += 1;
                    }
                }
            }
        }
    }

    Ok(count)
}
