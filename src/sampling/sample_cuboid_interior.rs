use crate::math::{Point, Real, DIM};
use crate::query::CONTAINMENT_EPSILON;
use crate::sampling::{validate_spacing, Lattice, SamplingError};
use crate::shape::Cuboid;

// The lattice whose cell centers (or nodes, with `fill_edges`) fill the box, if any.
fn interior_lattice(
    cuboid: &Cuboid,
    spacing: Real,
    fill_edges: bool,
) -> Result<Option<Lattice>, SamplingError> {
    let spacing = validate_spacing(spacing)?;

    if cuboid.is_degenerate() {
        log::warn!("Attempted to fill a degenerate box: {:?}", cuboid);
        return Ok(None);
    }

    let lattice = Lattice::new(cuboid.lengths(), spacing)?;

    if !fill_edges && !lattice.has_full_cells() {
        log::warn!(
            "Box {:?} is thinner than the particle spacing {}: no interior particle fits.",
            cuboid,
            spacing
        );
        return Ok(None);
    }

    Ok(Some(lattice))
}

/// Generates particles filling the volume of a box.
///
/// With `fill_edges` set, every node of the box lattice is emitted, including the nodes on its
/// faces, edges, and corners: the box then acts as its own boundary. Otherwise the centers of
/// the lattice cells are emitted instead. These are inset by at least half a spacing from every
/// face, so they never coincide with the boundary layers generated by
/// [`sample_cuboid_border`](crate::sampling::sample_cuboid_border) at the same spacing, and
/// they are all inside the box in the sense of [`PointQuery::is_inside`].
///
/// Points are emitted in increasing order of their first, then second, then third local
/// coordinate. A degenerate box emits nothing. Without `fill_edges`, a box with an edge shorter
/// than `spacing` emits nothing either.
///
/// Returns the number of emitted points.
///
/// [`PointQuery::is_inside`]: crate::query::PointQuery::is_inside
pub fn sample_cuboid_interior(
    cuboid: &Cuboid,
    spacing: Real,
    fill_edges: bool,
    emit: &mut dyn FnMut(Point<Real>),
) -> Result<usize, SamplingError> {
    let Some(lattice) = interior_lattice(cuboid, spacing, fill_edges)? else {
        return Ok(0);
    };
    let cells = lattice.cells();
    let extra = fill_edges as usize;
    let mut count = 0;

    for i in 0..cells[0] + extra {
        for j in 0..cells[1] + extra {
            for k in 0..cells[2] + extra {
                let t = if fill_edges {
                    lattice.node([i, j, k])
                } else {
                    lattice.cell_center([i, j, k])
                };

                emit(cuboid.point_at(t));
                count += 1;
            }
        }
    }

    Ok(count)
}

/// The number of points [`sample_cuboid_interior`] would emit, computed without generating
/// them.
pub fn cuboid_interior_count(
    cuboid: &Cuboid,
    spacing: Real,
    fill_edges: bool,
) -> Result<usize, SamplingError> {
    Ok(match interior_lattice(cuboid, spacing, fill_edges)? {
        Some(lattice) if fill_edges => lattice.num_nodes(),
        Some(lattice) => lattice.num_cells(),
        None => 0,
    })
}

/// Generates particles filling a shell of thickness `depth` inside of a box.
///
/// This uses the same cell centers as [`sample_cuboid_interior`] without `fill_edges`, but only
/// keeps those closer than `depth` (up to round-off) to at least one face. This is useful for
/// thick-walled containers. A non-positive `depth` emits nothing, and a `depth` reaching the
/// center of the box fills it entirely. Like [`sample_cuboid_interior`], a box with an edge
/// shorter than `spacing` emits nothing.
///
/// Returns the number of emitted points.
pub fn sample_cuboid_inner_shell(
    cuboid: &Cuboid,
    spacing: Real,
    depth: Real,
    emit: &mut dyn FnMut(Point<Real>),
) -> Result<usize, SamplingError> {
    let spacing = validate_spacing(spacing)?;

    if !(depth > 0.0) {
        return Ok(0);
    }

    let Some(lattice) = interior_lattice(cuboid, spacing, false)? else {
        return Ok(0);
    };
    let cells = lattice.cells();
    let lengths = cuboid.lengths();
    let mut count = 0;

    for i in 0..cells[0] {
        for j in 0..cells[1] {
            for k in 0..cells[2] {
                let t = lattice.cell_center([i, j, k]);
                let in_shell = (0..DIM).any(|a| {
                    let dist = t[a].min(1.0 - t[a]) * lengths[a];
                    dist <= depth + CONTAINMENT_EPSILON * lengths[a]
                });

                if in_shell {
                    emit(cuboid.point_at(t));
                    count += 1;
                }
            }
        }
    }

    Ok(count)
}
