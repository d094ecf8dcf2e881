use crate::math::{Real, Vector, DIM};
use crate::query::CONTAINMENT_EPSILON;
use crate::sampling::SamplingError;

/// The maximum number of lattice cells along a single axis of a shape.
pub const MAX_LATTICE_CELLS: usize = 1 << 20;

/// The maximum number of lattice nodes of a shape, all axes combined.
pub const MAX_LATTICE_NODES: usize = 1 << 30;

// Extents that are a multiple of the spacing up to round-off get exactly that many cells.
// Kept within the containment tolerance so cell centers stay `is_inside` at that spacing.
const CELL_ROUNDING: Real = CONTAINMENT_EPSILON;

/// Checks that `spacing` can be used to sample a shape.
pub fn validate_spacing(spacing: Real) -> Result<Real, SamplingError> {
    if spacing > 0.0 && spacing.is_finite() {
        Ok(spacing)
    } else {
        Err(SamplingError::InvalidSpacing(spacing))
    }
}

/// A regular lattice spanning a box, in fractional coordinates.
///
/// Along each local axis `i` the box is split into `cells[i] = max(1, floor(length_i / spacing))`
/// cells of equal size, so the actual step is never smaller than the requested spacing (up to
/// round-off) and the lattice planes `k / cells[i]` (for `k` in `0..=cells[i]`) always include
/// both faces of the box. Nodes of the lattice thus lie exactly on the faces, edges, and corners of the box, while
/// cell centers are inset by half a step from every face.
///
/// An axis shorter than the spacing still gets one cell, so its nodes cover both faces, but
/// that cell is thinner than the spacing and its center is too close to the faces to be
/// inside the box. [`Lattice::has_full_cells`] tells whether this happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    cells: [usize; DIM],
    full_cells: bool,
}

impl Lattice {
    /// Builds the lattice of a box with the given edge lengths.
    pub fn new(lengths: &Vector<Real>, spacing: Real) -> Result<Self, SamplingError> {
        let spacing = validate_spacing(spacing)?;
        let mut cells = [1; DIM];
        let mut full_cells = true;

        for (axis, cell) in cells.iter_mut().enumerate() {
            let ratio = lengths[axis] / spacing;

            if ratio > MAX_LATTICE_CELLS as Real {
                return Err(SamplingError::LatticeTooLarge {
                    axis,
                    cells: ratio,
                });
            }

            let fitted = if ratio.is_finite() {
                (ratio + CELL_ROUNDING).floor() as usize
            } else {
                0
            };
            full_cells &= fitted > 0;
            *cell = fitted.max(1);
        }

        let nodes: Real = cells.iter().map(|n| (n + 1) as Real).product();
        if nodes > MAX_LATTICE_NODES as Real {
            return Err(SamplingError::TooManyLatticeNodes(nodes));
        }

        Ok(Self { cells, full_cells })
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn cells(&self) -> [usize; DIM] {
        self.cells
    }

    /// Whether every axis of the box is at least one spacing long.
    ///
    /// When this is `false`, no cell center lies inside the box with a half-spacing margin.
    #[inline]
    pub fn has_full_cells(&self) -> bool {
        self.full_cells
    }

    /// The number of nodes of this lattice, including those on the boundary of the box.
    pub fn num_nodes(&self) -> usize {
        self.cells.iter().map(|n| n + 1).product()
    }

    /// The number of cells of this lattice.
    pub fn num_cells(&self) -> usize {
        self.cells.iter().product()
    }

    /// The fractional coordinates of the node with index `id`.
    #[inline]
    pub fn node(&self, id: [usize; DIM]) -> [Real; DIM] {
        core::array::from_fn(|i| id[i] as Real / self.cells[i] as Real)
    }

    /// The fractional coordinates of the center of the cell with index `id`.
    #[inline]
    pub fn cell_center(&self, id: [usize; DIM]) -> [Real; DIM] {
        core::array::from_fn(|i| (id[i] as Real + 0.5) / self.cells[i] as Real)
    }
}
