use approx::assert_relative_eq;
use proxima3d::math::{Isometry, Point, Vector};
use proxima3d::query::gjk::VoronoiSimplex;
use proxima3d::query::{self, CollisionResult, QueryParams};
use proxima3d::shape::{Ball, Cuboid, PointShape};

#[test]
#[allow(non_snake_case)]
fn cuboid_cuboid_EPA() {
    let c = Cuboid::new(Vector::new(2.0, 1.0, 1.0));
    let m1 = Isometry::translation(3.5, 0.0, 0.0);
    let m2 = Isometry::identity();

    let res = query::collision_test(&m1, &c, &m2, &c).expect("Penetration not found.");
    assert!(res.colliding);
    assert_relative_eq!(res.signed_distance, -0.5, epsilon = 1.0e-6);
    assert_relative_eq!(
        res.separation_vector(),
        Vector::new(-0.5, 0.0, 0.0),
        epsilon = 1.0e-6
    );

    let m1 = Isometry::translation(0.0, 0.2, 0.0);
    let res = query::collision_test(&m1, &c, &m2, &c).expect("Penetration not found.");
    assert!(res.colliding);
    assert_relative_eq!(res.signed_distance, -1.8, epsilon = 1.0e-6);
    assert_relative_eq!(
        res.separation_vector(),
        Vector::new(0.0, -1.8, 0.0),
        epsilon = 1.0e-6
    );
}

#[test]
fn cube_vs_interior_point() {
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let point = PointShape(Point::new(0.25, 0.0, 0.0));
    let pose = Isometry::identity();

    let res = query::collision_test(&pose, &cube, &pose, &point).unwrap();

    assert!(res.colliding);
    assert_relative_eq!(res.signed_distance, -0.25, epsilon = 1.0e-6);
    assert_relative_eq!(res.point_on_a, Point::new(0.5, 0.0, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(res.point_on_b, Point::new(0.25, 0.0, 0.0), epsilon = 1.0e-6);

    // EPA does not estimate per-shape normals.
    assert!(res.normal_on_a.iter().all(|e| e.is_nan()));
    assert!(res.normal_on_b.iter().all(|e| e.is_nan()));
}

#[test]
fn epa_test_consumes_a_gjk_terminal_simplex() {
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let point = PointShape(Point::new(0.25, 0.0, 0.0));
    let pose = Isometry::identity();
    let params = QueryParams::default();

    // Run GJK by hand to obtain the origin-enclosing terminal simplex.
    let pos12 = pose.inv_mul(&pose);
    let mut simplex = VoronoiSimplex::new();
    let mut scratch = CollisionResult::new();
    let colliding = query::details::gjk_test_support_map_support_map(
        &pos12,
        &cube,
        &point,
        &mut simplex,
        &params,
        &mut scratch,
    );
    assert!(colliding);

    let res = query::epa_test(&pose, &cube, &pose, &point, &simplex, &params).unwrap();
    assert!(res.colliding);
    assert_relative_eq!(res.signed_distance, -0.25, epsilon = 1.0e-6);
}

#[test]
fn overlapping_balls_penetration_depth() {
    let ball = Ball::new(1.0);
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(1.5, 0.0, 0.0);

    let res = query::collision_test(&pos_a, &ball, &pos_b, &ball).unwrap();

    assert!(res.colliding);
    assert_relative_eq!(res.signed_distance, -0.5, epsilon = 1.0e-4);

    // Each witness point lies on its ball's surface.
    assert_relative_eq!(res.point_on_a.coords.norm(), 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(
        (res.point_on_b - Point::new(1.5, 0.0, 0.0)).norm(),
        1.0,
        epsilon = 1.0e-3
    );
}

#[test]
fn slightly_overlapping_balls() {
    let ball = Ball::new(1.0);
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(1.999, 0.0, 0.0);

    let res = query::collision_test(&pos_a, &ball, &pos_b, &ball).unwrap();

    assert!(res.colliding);
    assert_relative_eq!(res.signed_distance, -1.0e-3, epsilon = 1.0e-5);
}

#[test]
fn deep_ball_in_cube() {
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let ball = Ball::new(0.5);
    let pos_cube = Isometry::identity();
    let pos_ball = Isometry::translation(0.1, 0.0, 0.0);

    let res = query::collision_test(&pos_cube, &cube, &pos_ball, &ball).unwrap();

    assert!(res.colliding);
    assert_relative_eq!(res.signed_distance, -0.9, epsilon = 1.0e-5);
}

#[test]
fn minimal_translation_separates_the_shapes() {
    let ball = Ball::new(1.0);
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(1.5, 0.0, 0.0);

    let res = query::collision_test(&pos_a, &ball, &pos_b, &ball).unwrap();
    assert!(res.colliding);

    let sep = res.separation_vector();

    // Translating shape B by 1.01 × the separation vector resolves the
    // contact; translating by half of it does not.
    let resolved = Isometry::translation(1.5 + sep.x * 1.01, sep.y * 1.01, sep.z * 1.01);
    assert!(!query::intersection_test(&pos_a, &ball, &resolved, &ball).unwrap());

    let still_inside = Isometry::translation(1.5 + sep.x * 0.5, sep.y * 0.5, sep.z * 0.5);
    assert!(query::intersection_test(&pos_a, &ball, &still_inside, &ball).unwrap());
}

#[test]
fn minimal_translation_for_cube_vs_point() {
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let point = PointShape(Point::new(0.25, 0.0, 0.0));
    let pose = Isometry::identity();

    let res = query::collision_test(&pose, &cube, &pose, &point).unwrap();
    assert!(res.colliding);

    let sep = res.separation_vector();
    assert_relative_eq!(sep, Vector::new(0.25, 0.0, 0.0), epsilon = 1.0e-6);

    let resolved = Isometry::translation(sep.x * 1.01, sep.y * 1.01, sep.z * 1.01);
    assert!(!query::intersection_test(&pose, &cube, &resolved, &point).unwrap());

    let still_inside = Isometry::translation(sep.x * 0.5, sep.y * 0.5, sep.z * 0.5);
    assert!(query::intersection_test(&pose, &cube, &still_inside, &point).unwrap());
}
