use crate::random_isometry;
use partfill::math::{Point, Vector};
use partfill::query::PointQuery;
use partfill::shape::{Cuboid, Shape};

#[test]
fn volume_is_invariant_under_rigid_motions() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..100 {
        let lengths = Vector::from_fn(|_, _| 0.1 + rng.rand_float() * 3.0);
        let cuboid = Cuboid::new(
            Point::origin(),
            Vector::x() * lengths.x,
            Vector::y() * lengths.y,
            Vector::z() * lengths.z,
        );
        let moved = cuboid.transform_by(&random_isometry(&mut rng));
        let expected = lengths.x * lengths.y * lengths.z;

        assert_relative_eq!(cuboid.volume(), expected, max_relative = 1.0e-12);
        assert_relative_eq!(moved.volume(), expected, max_relative = 1.0e-9);
        assert_relative_eq!(Shape::volume(&moved, 0.05), expected, max_relative = 1.0e-9);
        assert_relative_eq!(*moved.lengths(), lengths, max_relative = 1.0e-9);
    }
}

#[test]
fn containment_is_invariant_under_rigid_motions() {
    let mut rng = oorandom::Rand64::new(7);
    let mut num_inside = 0;

    for _ in 0..50 {
        let pos = random_isometry(&mut rng);
        let cuboid = Cuboid::new(
            Point::new(1.0, -2.0, 0.5),
            Vector::x() * 2.0,
            Vector::y() * 1.0,
            Vector::z() * 0.5,
        );
        let moved = cuboid.transform_by(&pos);

        for _ in 0..100 {
            let t = [
                rng.rand_float() * 1.4 - 0.2,
                rng.rand_float() * 1.4 - 0.2,
                rng.rand_float() * 1.4 - 0.2,
            ];
            let pt = cuboid.point_at(t);
            let spacing = rng.rand_float() * 0.2;

            let inside = cuboid.is_inside(&pt, spacing);
            assert_eq!(inside, moved.is_inside(&(pos * pt), spacing), "{t:?}");
            assert_eq!(
                cuboid.contains_point(&pt),
                moved.contains_point(&(pos * pt))
            );
            num_inside += inside as usize;
        }
    }

    // About a quarter of the samples fall inside.
    assert!(num_inside > 500 && num_inside < 2500);
}

#[test]
fn skewed_and_flat_boxes() {
    let flat = Cuboid::new(Point::origin(), Vector::x(), Vector::y(), Vector::zeros());
    assert!(flat.is_degenerate());
    assert!(!flat.is_inside(&Point::origin(), 0.0));

    // Left-handed edge frames are still proper boxes.
    let left_handed = Cuboid::new(Point::origin(), Vector::y(), Vector::x(), Vector::z());
    assert!(!left_handed.is_degenerate());
    assert_relative_eq!(left_handed.volume(), 1.0);
    assert!(left_handed.contains_point(&Point::new(0.5, 0.5, 0.5)));
}
