use crate::{count_distinct, position_keys, random_isometry};
use partfill::math::{Point, Real, Vector};
use partfill::object::Object;
use partfill::sampling::{Lattice, LayerSpec};
use partfill::shape::{Cuboid, Face, FaceMask, Shape};

fn border(cuboid: &Cuboid, spec: &LayerSpec) -> Vec<(Face, Point<Real>)> {
    let mut out = Vec::new();
    let count = cuboid
        .sample_border(spec, &mut |face, pt| out.push((face, pt)))
        .unwrap();
    assert_eq!(count, out.len());
    out
}

#[test]
fn closed_forms_do_not_depend_on_the_pose() {
    let mut rng = oorandom::Rand64::new(1234);
    let unit = Cuboid::new(Point::origin(), Vector::x(), Vector::y(), Vector::z());

    for _ in 0..10 {
        let cube = unit.transform_by(&random_isometry(&mut rng));
        let mut obj = Object::new(cube);
        let _ = obj.set_part_mass(0.1, 1000.0).unwrap();
        let mut points = Vec::new();

        assert_eq!(obj.fill_border(&mut points, 0.1), Ok(602));
        assert_eq!(obj.fill_border_with_top(&mut points, 0.1, false), Ok(521));
        assert_eq!(
            obj.fill_border_layers(&mut points, &LayerSpec::new(0.1).with_layers(2)),
            Ok(988)
        );
        assert_eq!(obj.fill(&mut points, 0.1, false), Ok(1000));
        assert_eq!(obj.fill(&mut points, 0.1, true), Ok(1331));
    }
}

#[test]
fn layered_cube_closed_form() {
    let cube = Cuboid::new(Point::origin(), Vector::x(), Vector::y(), Vector::z());

    for layers in 1..=5 {
        let spec = LayerSpec::new(0.1).with_layers(layers);
        let n = 11 - 2 * layers;
        assert_eq!(border(&cube, &spec).len(), 11 * 11 * 11 - n * n * n);
    }

    // Enough layers to reach the center fill the whole lattice.
    let spec = LayerSpec::new(0.1).with_layers(20);
    assert_eq!(border(&cube, &spec).len(), 1331);
}

#[test]
fn random_borders_have_no_duplicates() {
    let mut rng = oorandom::Rand64::new(99);
    let spacing = 0.1;

    for _ in 0..200 {
        let lengths = Vector::from_fn(|_, _| 0.05 + rng.rand_float() * 1.2);
        let cuboid = Cuboid::from_extents(
            Point::origin(),
            lengths.x,
            lengths.y,
            lengths.z,
            &random_isometry(&mut rng).rotation,
        )
        .transform_by(&random_isometry(&mut rng));
        let flags = [0; 6].map(|_| rng.rand_float() < 0.7);
        let layers = 1 + rng.rand_range(0..4) as usize;
        let spec = LayerSpec::new(spacing)
            .with_layers(layers)
            .with_faces(flags);

        let points = border(&cuboid, &spec);
        let keys = position_keys(points.iter().map(|(_, pt)| pt), spacing);
        assert_eq!(count_distinct(&keys), keys.len(), "{lengths:?} {spec:?}");

        // Every point is emitted by an included face, within its layers.
        let cells = Lattice::new(cuboid.lengths(), spacing).unwrap().cells();
        for (face, pt) in &points {
            assert!(spec.faces.includes(*face));

            let local = cuboid.local_coordinates(pt).unwrap();
            let axis = face.axis();
            let step = lengths[axis] / cells[axis] as Real;
            let dist = if face.is_negative() {
                local[axis]
            } else {
                lengths[axis] - local[axis]
            };
            assert!(dist >= -1.0e-9 && dist <= (layers - 1) as Real * step + 1.0e-9);

            for i in 0..3 {
                assert!(local[i] >= -1.0e-9 && local[i] <= lengths[i] + 1.0e-9);
            }
        }

        if spec.faces == FaceMask::empty() {
            assert!(points.is_empty());
        }
    }
}

#[test]
fn border_and_interior_are_disjoint() {
    let mut rng = oorandom::Rand64::new(5);
    let spacing = 0.1;

    for _ in 0..20 {
        let lengths = Vector::from_fn(|_, _| 0.3 + rng.rand_float());
        let cuboid = Cuboid::from_extents(
            Point::origin(),
            lengths.x,
            lengths.y,
            lengths.z,
            &random_isometry(&mut rng).rotation,
        );
        let spec = LayerSpec::new(spacing).with_layers(2);

        let mut interior = Vec::new();
        let _ = cuboid
            .sample_interior(spacing, false, &mut |pt| interior.push(pt))
            .unwrap();
        let walls = border(&cuboid, &spec);

        let mut keys = position_keys(walls.iter().map(|(_, pt)| pt), spacing);
        keys.extend(position_keys(&interior, spacing));
        assert_eq!(count_distinct(&keys), walls.len() + interior.len());
    }
}
