use approx::assert_relative_eq;
use proxima3d::math::{Isometry, Point, Real, Vector};
use proxima3d::na;
use proxima3d::query::{self, CollisionResult, CollisionWorkspace, QueryError, QueryParams};
use proxima3d::shape::convex_polytope::ConvexPolytope;
use proxima3d::shape::{supporting_vertex, Ball, Cuboid, Shape, Torus};
use std::f64::consts::FRAC_PI_2;

#[test]
fn collision_test_agrees_with_distance_when_separated() {
    let ball = Ball::new(0.5);
    let cube = Cuboid::new(Vector::new(1.0, 0.5, 0.75));
    let pos_a = Isometry::translation(-1.0, 0.2, 0.0);
    let pos_b = Isometry::translation(2.0, -0.4, 0.3);

    let result = query::collision_test(&pos_a, &ball, &pos_b, &cube).unwrap();
    let dist = query::distance(&pos_a, &ball, &pos_b, &cube).unwrap();

    assert!(!result.colliding);
    assert_relative_eq!(result.signed_distance, dist, epsilon = 1.0e-6);
    assert!(query::intersection_test(&pos_a, &ball, &pos_b, &cube).unwrap() == result.colliding);
}

#[test]
fn swapping_the_shapes_swaps_the_result() {
    let ball_a = Ball::new(1.0);
    let ball_b = Ball::new(0.5);
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(1.2, 0.3, -0.1);

    let ab = query::collision_test(&pos_a, &ball_a, &pos_b, &ball_b).unwrap();
    let ba = query::collision_test(&pos_b, &ball_b, &pos_a, &ball_a).unwrap();

    assert!(ab.colliding && ba.colliding);
    assert_relative_eq!(ab.signed_distance, ba.signed_distance, epsilon = 1.0e-4);
    assert_relative_eq!(ab.point_on_a, ba.point_on_b, epsilon = 1.0e-3);
    assert_relative_eq!(ab.point_on_b, ba.point_on_a, epsilon = 1.0e-3);

    // `flip` implements the same role swap on a single result.
    let flipped = ab.flipped();
    assert_eq!(flipped.colliding, ab.colliding);
    assert_eq!(flipped.signed_distance, ab.signed_distance);
    assert_eq!(flipped.point_on_a, ab.point_on_b);
    assert_relative_eq!(
        flipped.separation_vector(),
        -ab.separation_vector(),
        epsilon = 1.0e-12
    );
}

#[test]
fn torus_queries_are_unsupported() {
    let torus = Torus::new(1.0, 0.25);
    let ball = Ball::new(1.0);
    let pose = Isometry::identity();

    assert!(torus.as_support_map().is_none());
    assert_eq!(
        query::collision_test(&pose, &torus, &pose, &ball).unwrap_err(),
        QueryError::Unsupported
    );
    assert_eq!(
        query::distance(&pose, &ball, &pose, &torus).unwrap_err(),
        QueryError::Unsupported
    );
    assert_eq!(
        supporting_vertex(&torus, &pose, &Vector::x()).unwrap_err(),
        QueryError::Unsupported
    );
}

#[test]
fn empty_polytope_queries_are_rejected() {
    let empty = ConvexPolytope::new();
    let ball = Ball::new(1.0);
    let pose = Isometry::identity();

    assert_eq!(
        query::collision_test(&pose, &empty, &pose, &ball).unwrap_err(),
        QueryError::EmptyShape
    );
    assert_eq!(
        supporting_vertex(&empty, &pose, &Vector::x()).unwrap_err(),
        QueryError::EmptyShape
    );
}

#[test]
fn zero_direction_is_rejected() {
    let ball = Ball::new(1.0);
    let pose = Isometry::identity();

    assert_eq!(
        supporting_vertex(&ball, &pose, &Vector::zeros()).unwrap_err(),
        QueryError::ZeroDirection
    );
    assert_eq!(
        supporting_vertex(&ball, &pose, &Vector::repeat(Real::NAN)).unwrap_err(),
        QueryError::ZeroDirection
    );
}

#[test]
fn supporting_vertex_round_trips_through_the_pose() {
    let cuboid = Cuboid::new(Vector::new(0.4, 0.3, 0.2));
    let rotation = na::UnitQuaternion::from_axis_angle(&Vector::z_axis(), FRAC_PI_2);
    let pose = Isometry::from_parts(na::Translation3::new(1.0, 2.0, 3.0), rotation);

    // All components of the local direction are non-zero, so the supporting
    // vertex is unambiguous.
    let dir = Vector::new(1.0, 0.1, 0.1);
    let support = supporting_vertex(&cuboid, &pose, &dir).unwrap();
    assert_relative_eq!(support, Point::new(1.3, 2.4, 3.2), epsilon = 1.0e-9);
}

#[test]
fn nan_shapes_propagate_without_panicking() {
    let nan_ball = Ball::new(Real::NAN);
    let ball = Ball::new(1.0);
    let pose = Isometry::identity();

    assert!(nan_ball.contains_nan());
    assert!(!ball.contains_nan());

    let dist = query::distance(&pose, &nan_ball, &pose, &ball).unwrap();
    assert!(dist.is_nan());

    let result = query::collision_test(&pose, &nan_ball, &pose, &ball).unwrap();
    assert!(result.contains_nan());
}

#[test]
fn workspace_reuse_resets_the_result() {
    let ball = Ball::new(1.0);
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let mut workspace = CollisionWorkspace::new();
    let mut result = CollisionResult::new();
    let params = QueryParams::default();
    let pos_a = Isometry::identity();

    // First query: penetrating.
    let pos_b = Isometry::translation(1.0, 0.0, 0.0);
    query::collision_test_with_workspace(
        &pos_a, &ball, &pos_b, &cube, &params, &mut workspace, &mut result,
    )
    .unwrap();
    assert!(result.colliding);
    assert_relative_eq!(result.signed_distance, -0.5, epsilon = 1.0e-4);

    // Second query with the same scratch state: separated.
    let pos_b = Isometry::translation(4.0, 0.0, 0.0);
    query::collision_test_with_workspace(
        &pos_a, &ball, &pos_b, &cube, &params, &mut workspace, &mut result,
    )
    .unwrap();
    assert!(!result.colliding);
    assert_relative_eq!(result.signed_distance, 2.5, epsilon = 1.0e-6);
}
