use crate::{count_distinct, position_keys, random_isometry};
use partfill::math::{Point, Vector};
use partfill::object::Object;
use partfill::query::PointQuery;
use partfill::shape::Cuboid;

#[test]
fn interior_points_are_inside() {
    let mut rng = oorandom::Rand64::new(3);

    for _ in 0..50 {
        let lengths = Vector::from_fn(|_, _| 0.2 + rng.rand_float() * 1.5);
        let cuboid = Cuboid::from_extents(
            Point::origin(),
            lengths.x,
            lengths.y,
            lengths.z,
            &random_isometry(&mut rng).rotation,
        )
        .transform_by(&random_isometry(&mut rng));
        let mut obj = Object::new(cuboid);
        let _ = obj.set_part_mass(0.1, 1.0).unwrap();

        let mut fluid = Vec::new();
        let count = obj.fill(&mut fluid, 0.1, false).unwrap();
        assert_eq!(count, obj.fill_count(0.1, false).unwrap());
        assert!(fluid.iter().all(|p| cuboid.is_inside(&p.point, 0.1)));

        let keys = position_keys(fluid.iter().map(|p| &p.point), 0.1);
        assert_eq!(count_distinct(&keys), count);

        // Nodes on the boundary are never inside.
        let mut nodes = Vec::new();
        let _ = obj.fill(&mut nodes, 0.1, true).unwrap();
        assert!(!cuboid.contains_point(&nodes[0].point));
        assert!(!cuboid.contains_point(&nodes[nodes.len() - 1].point));
    }
}

#[test]
fn interior_fill_conserves_mass() {
    let mut rng = oorandom::Rand64::new(11);
    let spacing = 0.05;
    let density = 1000.0;

    for _ in 0..20 {
        // Extents that are multiples of the spacing.
        let cells = [0; 3].map(|_| 1 + rng.rand_range(0..30));
        let rotation = random_isometry(&mut rng).rotation;
        let cuboid = Cuboid::from_extents(
            Point::new(1.0, 2.0, 3.0),
            cells[0] as f64 * spacing,
            cells[1] as f64 * spacing,
            cells[2] as f64 * spacing,
            &rotation,
        );
        let mut obj = Object::new(cuboid);
        let _ = obj.set_part_mass(spacing, density).unwrap();
        let body_mass = obj.set_mass(spacing, density).unwrap();

        let mut fluid = Vec::new();
        let count = obj.fill(&mut fluid, spacing, false).unwrap();
        assert_eq!(count as u64, cells[0] * cells[1] * cells[2]);

        let total: f64 = fluid.iter().map(|p| p.mass).sum();
        assert_relative_eq!(total, body_mass, max_relative = 1.0e-9);
    }
}

#[test]
fn inner_fill_is_a_subset_of_the_fill() {
    let cuboid = Cuboid::new(
        Point::origin(),
        Vector::x() * 2.0,
        Vector::y() * 1.0,
        Vector::z() * 0.5,
    );
    let mut obj = Object::new(cuboid);
    let _ = obj.set_part_mass(0.1, 1000.0).unwrap();

    let mut full = Vec::new();
    let mut shell = Vec::new();
    let _ = obj.fill(&mut full, 0.1, false).unwrap();
    let count = obj.inner_fill(&mut shell, 0.1, 0.1).unwrap();

    // Only the outermost cells are within one step of a face: everything but an 18x8x3 core.
    assert_eq!(full.len(), 20 * 10 * 5);
    assert_eq!(count, 1000 - 18 * 8 * 3);

    let full_keys = position_keys(full.iter().map(|p| &p.point), 0.1);
    let mut keys = position_keys(shell.iter().map(|p| &p.point), 0.1);
    keys.extend(full_keys.iter().copied());
    assert_eq!(count_distinct(&keys), full.len());

    assert_eq!(obj.inner_fill(&mut shell, 0.1, 1.0), Ok(1000));
}

#[test]
fn spacings_just_above_a_divisor_stay_inside() {
    let deltas = [1.0e-12, 1.0e-10, 1.0e-9, 1.0e-8, 1.0e-7, 1.0e-6, 1.0e-4];
    let mut rng = oorandom::Rand64::new(17);

    for length in [1.0, 0.37, 2.5] {
        for cells in 1..=12 {
            for delta in deltas {
                let spacing = length / cells as f64 * (1.0 + delta);
                let pose = random_isometry(&mut rng);
                let cuboid = Cuboid::from_extents(
                    Point::origin(),
                    length,
                    length,
                    length,
                    &pose.rotation,
                )
                .transform_by(&pose);
                let mut obj = Object::new(cuboid);
                let _ = obj.set_particle_mass(1.0).unwrap();

                let mut fluid = Vec::new();
                let count = obj.fill(&mut fluid, spacing, false).unwrap();
                assert_eq!(count, obj.fill_count(spacing, false).unwrap());
                assert!(
                    fluid.iter().all(|p| cuboid.is_inside(&p.point, spacing)),
                    "length {length}, {cells} cells, spacing {spacing}"
                );

                let mut shell = Vec::new();
                let _ = obj.inner_fill(&mut shell, spacing, length).unwrap();
                assert_eq!(shell.len(), count);
            }
        }
    }
}

#[test]
fn spacings_just_above_a_divisor_on_random_boxes() {
    let mut rng = oorandom::Rand64::new(23);

    for _ in 0..100 {
        let lengths = Vector::from_fn(|_, _| 0.2 + rng.rand_float() * 1.5);
        // The spacing divides the first edge up to a tiny relative excess.
        let cells = 1 + rng.rand_range(0..10);
        let delta = 10.0f64.powf(-4.0 - rng.rand_float() * 8.0);
        let spacing = lengths.x / cells as f64 * (1.0 + delta);

        let cuboid = Cuboid::from_extents(
            Point::origin(),
            lengths.x,
            lengths.y,
            lengths.z,
            &random_isometry(&mut rng).rotation,
        )
        .transform_by(&random_isometry(&mut rng));
        let mut obj = Object::new(cuboid);
        let _ = obj.set_particle_mass(1.0).unwrap();

        let mut fluid = Vec::new();
        let count = obj.fill(&mut fluid, spacing, false).unwrap();
        assert_eq!(count, obj.fill_count(spacing, false).unwrap());
        assert!(fluid.iter().all(|p| cuboid.is_inside(&p.point, spacing)));
    }
}

#[test]
fn boxes_thinner_than_the_spacing_have_no_interior() {
    let mut rng = oorandom::Rand64::new(29);
    let pose = random_isometry(&mut rng);
    let slab = Cuboid::from_extents(Point::origin(), 0.05, 1.0, 1.0, &pose.rotation)
        .transform_by(&pose);
    let mut obj = Object::new(slab);
    let _ = obj.set_part_mass(0.1, 1000.0).unwrap();

    let mut fluid = Vec::new();
    assert_eq!(obj.fill(&mut fluid, 0.1, false), Ok(0));
    assert_eq!(obj.fill_count(0.1, false), Ok(0));
    assert_eq!(obj.inner_fill(&mut fluid, 0.1, 0.5), Ok(0));
    assert!(fluid.is_empty());

    // Filling the edges still covers both faces of the slab.
    assert_eq!(obj.fill(&mut fluid, 0.1, true), Ok(2 * 11 * 11));
    assert_eq!(obj.fill_count(0.1, true), Ok(2 * 11 * 11));

    // An edge exactly one spacing long holds one layer of cells.
    let plate = Cuboid::new(
        Point::origin(),
        Vector::x() * 0.1,
        Vector::y(),
        Vector::z(),
    );
    let mut obj = Object::new(plate);
    let _ = obj.set_particle_mass(1.0).unwrap();
    let mut fluid = Vec::new();
    assert_eq!(obj.fill(&mut fluid, 0.1, false), Ok(100));
    assert!(fluid.iter().all(|p| plate.is_inside(&p.point, 0.1)));
}
