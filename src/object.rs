//! Shapes along with the masses of the particles seeded in them.

use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, DIM};
use crate::particle::Particle;
use crate::sampling::{validate_spacing, LayerSpec, SamplingError};
use crate::shape::Shape;

/// A shape of a scene, along with the mass of the particles seeded in it and the mass
/// properties of the rigid body it makes.
///
/// The particle mass must be set (with [`Object::set_part_mass`] or
/// [`Object::set_particle_mass`]) before any of the fill methods is called. Every fill appends
/// to the caller's containers, and leaves them untouched if it fails.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Object<S> {
    shape: S,
    part_mass: Option<Real>,
    mass: Option<Real>,
    mass_properties: Option<MassProperties>,
}

fn validate_density(density: Real) -> Result<Real, SamplingError> {
    if density > 0.0 && density.is_finite() {
        Ok(density)
    } else {
        Err(SamplingError::InvalidDensity(density))
    }
}

impl<S: Shape> Object<S> {
    /// Wraps a shape. No mass is set yet.
    pub fn new(shape: S) -> Self {
        Self {
            shape,
            part_mass: None,
            mass: None,
            mass_properties: None,
        }
    }

    /// The wrapped shape.
    #[inline]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Sets the particle mass to the mass of a cube of side `spacing` filled with a fluid of
    /// the given `density`, and returns it.
    pub fn set_part_mass(&mut self, spacing: Real, density: Real) -> Result<Real, SamplingError> {
        let spacing = validate_spacing(spacing)?;
        let density = validate_density(density)?;
        let mass = spacing * spacing * spacing * density;
        self.part_mass = Some(mass);
        Ok(mass)
    }

    /// Sets the particle mass explicitly.
    pub fn set_particle_mass(&mut self, mass: Real) -> Result<Real, SamplingError> {
        if mass > 0.0 && mass.is_finite() {
            self.part_mass = Some(mass);
            Ok(mass)
        } else {
            Err(SamplingError::InvalidMass(mass))
        }
    }

    /// The mass given to each particle seeded in this object, if it was set.
    #[inline]
    pub fn part_mass(&self) -> Option<Real> {
        self.part_mass
    }

    /// Sets the mass of the rigid body to its volume times `density`, and returns it.
    pub fn set_mass(&mut self, spacing: Real, density: Real) -> Result<Real, SamplingError> {
        let spacing = validate_spacing(spacing)?;
        let density = validate_density(density)?;
        let mass = self.shape.volume(spacing) * density;
        self.mass = Some(mass);
        Ok(mass)
    }

    /// The mass of the rigid body, if it was set.
    #[inline]
    pub fn mass(&self) -> Option<Real> {
        self.mass
    }

    /// Computes the center of mass and inertia tensor of the rigid body.
    ///
    /// The body mass must have been set with [`Object::set_mass`].
    pub fn set_inertia(&mut self, spacing: Real) -> Result<&MassProperties, SamplingError> {
        let _ = validate_spacing(spacing)?;
        let mass = self.mass.ok_or(SamplingError::BodyMassNotSet)?;
        Ok(&*self
            .mass_properties
            .insert(self.shape.mass_properties(mass)))
    }

    /// The mass properties computed by the last call to [`Object::set_inertia`].
    #[inline]
    pub fn mass_properties(&self) -> Option<&MassProperties> {
        self.mass_properties.as_ref()
    }

    /// The volume of the wrapped shape.
    #[inline]
    pub fn volume(&self, spacing: Real) -> Real {
        self.shape.volume(spacing)
    }

    /// Tests if `pt` lies inside the wrapped shape, at least half a `spacing` away from its
    /// boundary.
    #[inline]
    pub fn is_inside(&self, pt: &Point<Real>, spacing: Real) -> bool {
        self.shape.is_inside(pt, spacing)
    }

    fn checked_part_mass(&self, spacing: Real) -> Result<Real, SamplingError> {
        let _ = validate_spacing(spacing)?;
        self.part_mass.ok_or(SamplingError::MassNotSet)
    }

    /// Fills the volume of the shape with particles at `spacing`, appending them to `points`.
    ///
    /// If `fill_edges` is `false` the particles are inset from the boundary so they don't
    /// overlap with a boundary layer generated at the same spacing. Otherwise particles are
    /// also placed on the boundary.
    ///
    /// Returns the number of particles appended.
    pub fn fill(
        &self,
        points: &mut Vec<Particle>,
        spacing: Real,
        fill_edges: bool,
    ) -> Result<usize, SamplingError> {
        let mass = self.checked_part_mass(spacing)?;
        let start = points.len();
        let result = self.shape.sample_interior(spacing, fill_edges, &mut |pt| {
            points.push(Particle::new(pt, mass))
        });
        finish(points, start, result, "fill")
    }

    /// The number of particles [`Object::fill`] would append, without generating them.
    ///
    /// This doesn't require the particle mass to be set, and its cost doesn't depend on the
    /// number of particles.
    pub fn fill_count(&self, spacing: Real, fill_edges: bool) -> Result<usize, SamplingError> {
        self.shape.interior_count(spacing, fill_edges)
    }

    /// Fills the part of the shape closer than `depth` to its boundary, appending the particles
    /// to `points`.
    pub fn inner_fill(
        &self,
        points: &mut Vec<Particle>,
        spacing: Real,
        depth: Real,
    ) -> Result<usize, SamplingError> {
        let mass = self.checked_part_mass(spacing)?;
        let start = points.len();
        let result = self
            .shape
            .sample_inner_shell(spacing, depth, &mut |pt| points.push(Particle::new(pt, mass)));
        finish(points, start, result, "inner fill")
    }

    /// Covers every face of the shape with one layer of particles.
    pub fn fill_border(
        &self,
        points: &mut Vec<Particle>,
        spacing: Real,
    ) -> Result<usize, SamplingError> {
        self.fill_border_layers(points, &LayerSpec::new(spacing))
    }

    /// Covers the faces of the shape with one layer of particles, leaving the top (`+z`) face
    /// open unless `fill_top` is set.
    pub fn fill_border_with_top(
        &self,
        points: &mut Vec<Particle>,
        spacing: Real,
        fill_top: bool,
    ) -> Result<usize, SamplingError> {
        self.fill_border_layers(points, &LayerSpec::new(spacing).with_top(fill_top))
    }

    /// Covers the faces selected by `spec` with `spec.layers` layers of particles.
    ///
    /// No position is generated twice, including on the edges and corners shared by several
    /// faces.
    pub fn fill_border_layers(
        &self,
        points: &mut Vec<Particle>,
        spec: &LayerSpec,
    ) -> Result<usize, SamplingError> {
        let mass = self.checked_part_mass(spec.spacing)?;
        let start = points.len();
        let result = self
            .shape
            .sample_border(spec, &mut |_, pt| points.push(Particle::new(pt, mass)));
        finish(points, start, result, "border fill")
    }

    /// Same as [`Object::fill_border_layers`], but the particles owned by the two faces normal
    /// to the `i`-th local axis are appended to `containers[i]`.
    ///
    /// Returns the number of particles appended to each container.
    pub fn fill_border_split(
        &self,
        spec: &LayerSpec,
        mut containers: [&mut Vec<Particle>; DIM],
    ) -> Result<[usize; DIM], SamplingError> {
        let mass = self.checked_part_mass(spec.spacing)?;
        let starts: [usize; DIM] = core::array::from_fn(|i| containers[i].len());
        let result = self.shape.sample_border(spec, &mut |face, pt| {
            containers[face.axis()].push(Particle::new(pt, mass))
        });

        match result {
            Ok(total) => {
                let counts = core::array::from_fn(|i| containers[i].len() - starts[i]);
                log::debug!("Split border fill: {} particles ({:?}).", total, counts);
                Ok(counts)
            }
            Err(e) => {
                for (container, start) in containers.iter_mut().zip(starts) {
                    container.truncate(start);
                }
                Err(e)
            }
        }
    }

    /// Removes from `points` the particles lying inside the shape, at least half a `spacing`
    /// away from its boundary.
    ///
    /// This carves the room taken by an obstacle out of a block of fluid. The order of the
    /// remaining particles is preserved. Returns the number of removed particles.
    pub fn unfill(&self, points: &mut Vec<Particle>, spacing: Real) -> Result<usize, SamplingError> {
        let spacing = validate_spacing(spacing)?;
        let initial_len = points.len();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let inside: Vec<bool> = points
                .par_iter()
                .map(|p| self.shape.is_inside(&p.point, spacing))
                .collect();
            let mut inside = inside.into_iter();
            points.retain(|_| !inside.next().unwrap_or(false));
        }

        #[cfg(not(feature = "parallel"))]
        points.retain(|p| !self.shape.is_inside(&p.point, spacing));

        let removed = initial_len - points.len();
        log::debug!("Unfill: removed {} of {} particles.", removed, initial_len);
        Ok(removed)
    }
}

fn finish(
    points: &mut Vec<Particle>,
    start: usize,
    result: Result<usize, SamplingError>,
    what: &str,
) -> Result<usize, SamplingError> {
    match result {
        Ok(count) => {
            log::debug!("{}: {} particles.", what, count);
            Ok(count)
        }
        Err(e) => {
            points.truncate(start);
            Err(e)
        }
    }
}
