use approx::assert_relative_eq;
use proxima3d::math::{Isometry, Point, Real, Vector};
use proxima3d::na;
use proxima3d::query;
use proxima3d::shape::convex_polytope::ConvexPolytope;
use proxima3d::shape::{Ball, Cuboid, PointShape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Signed distance from a point to the surface of an axis-aligned cuboid
/// centered at the origin; zero (within tolerance) means "on the surface".
fn cuboid_surface_error(half_extents: &Vector<Real>, p: &Point<Real>) -> Real {
    (p.x.abs() - half_extents.x)
        .max(p.y.abs() - half_extents.y)
        .max(p.z.abs() - half_extents.z)
}

fn point_segment_distance(a: &Point<Real>, b: &Point<Real>, p: &Point<Real>) -> Real {
    let ab = b - a;
    let t = (p - a).dot(&ab) / ab.norm_squared();
    let t = t.clamp(0.0, 1.0);
    na::distance(&(a + ab * t), p)
}

/// Distance from `p` to the polygon of the given face (interior and boundary).
fn point_face_distance(polytope: &ConvexPolytope, fid: u32, p: &Point<Real>) -> Real {
    let face = polytope.face(fid).unwrap();
    let normal = face.normal();
    let vids = polytope.face_vertex_ids(fid);
    let pts: Vec<Point<Real>> = vids
        .iter()
        .map(|&vid| *polytope.vertex(vid).unwrap().point())
        .collect();

    let plane_dist = normal.dot(&(p - face.centroid()));
    let on_plane = p - *normal * plane_dist;

    let inside = (0..pts.len()).all(|i| {
        let u = pts[i];
        let v = pts[(i + 1) % pts.len()];
        (v - u).cross(&(on_plane - u)).dot(&normal) >= -1.0e-9
    });

    if inside {
        plane_dist.abs()
    } else {
        (0..pts.len())
            .map(|i| point_segment_distance(&pts[i], &pts[(i + 1) % pts.len()], p))
            .fold(Real::MAX, Real::min)
    }
}

#[test]
fn cube_vs_point_separated() {
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let point = PointShape(Point::new(0.5 + 0.37, 0.0, 0.0));
    let pose = Isometry::identity();

    let result = query::gjk_test(&pose, &cube, &pose, &point).unwrap();

    assert!(!result.colliding);
    assert_relative_eq!(result.signed_distance, 0.37, epsilon = 1.0e-6);
    assert_relative_eq!(result.point_on_a, Point::new(0.5, 0.0, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(result.point_on_b, Point::new(0.87, 0.0, 0.0), epsilon = 1.0e-6);

    // The normals are out of GJK's contract and must stay NaN.
    assert!(result.normal_on_a.iter().all(|e| e.is_nan()));
    assert!(result.normal_on_b.iter().all(|e| e.is_nan()));
}

#[test]
fn sphere_sphere_matches_closed_form() {
    let ball_a = Ball::new(1.0);
    let ball_b = Ball::new(1.0);

    // Centers 1.5 * (rA + rB) apart: distance must be 0.5 * (rA + rB).
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(3.0, 0.0, 0.0);

    let dist = query::distance(&pos_a, &ball_a, &pos_b, &ball_b).unwrap();
    assert_relative_eq!(dist, 1.0, epsilon = 2.0e-6);

    let dist_flipped = query::distance(&pos_b, &ball_b, &pos_a, &ball_a).unwrap();
    assert_relative_eq!(dist, dist_flipped, epsilon = 2.0e-6);

    // Same result off-axis.
    let pos_b = Isometry::translation(1.8, -2.1, 0.9);
    let center_dist = Vector::new(1.8, -2.1, 0.9).norm();
    let dist = query::distance(&pos_a, &ball_a, &pos_b, &ball_b).unwrap();
    assert_relative_eq!(dist, center_dist - 2.0, epsilon = 2.0e-6);
}

#[test]
fn ball_cuboid_witness_points_lie_on_the_shapes() {
    let ball = Ball::new(1.0);
    let half_extents = Vector::new(0.5, 0.5, 0.5);
    let cube = Cuboid::new(half_extents);

    let ball_center = Point::new(3.0, 0.5, 0.25);
    let pos_ball = Isometry::translation(ball_center.x, ball_center.y, ball_center.z);
    let pos_cube = Isometry::identity();

    let result = query::gjk_test(&pos_ball, &ball, &pos_cube, &cube).unwrap();

    assert!(!result.colliding);
    assert!(result.signed_distance > 0.0);

    // Witness validity: each point lies on its shape's surface.
    assert_relative_eq!(
        na::distance(&result.point_on_a, &ball_center),
        1.0,
        epsilon = 1.0e-6
    );
    assert!(cuboid_surface_error(&half_extents, &result.point_on_b).abs() <= 1.0e-6);

    // The witness pair realizes the reported distance.
    assert_relative_eq!(
        na::distance(&result.point_on_a, &result.point_on_b),
        result.signed_distance,
        epsilon = 1.0e-6
    );
}

#[test]
fn gjk_symmetry_swaps_witness_points() {
    let ball_a = Ball::new(0.7);
    let ball_b = Ball::new(1.3);
    let pos_a = Isometry::translation(0.1, -0.3, 0.2);
    let pos_b = Isometry::translation(2.5, 1.0, -0.7);

    let ab = query::gjk_test(&pos_a, &ball_a, &pos_b, &ball_b).unwrap();
    let ba = query::gjk_test(&pos_b, &ball_b, &pos_a, &ball_a).unwrap();

    assert_eq!(ab.colliding, ba.colliding);
    assert_relative_eq!(ab.signed_distance, ba.signed_distance, epsilon = 1.0e-6);
    assert_relative_eq!(ab.point_on_a, ba.point_on_b, epsilon = 1.0e-6);
    assert_relative_eq!(ab.point_on_b, ba.point_on_a, epsilon = 1.0e-6);
    assert_relative_eq!(
        ab.separation_vector(),
        -ba.separation_vector(),
        epsilon = 1.0e-6
    );
}

#[test]
fn separated_cuboids_face_to_face() {
    let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(2.0, 0.0, 0.0);

    let result = query::gjk_test(&pos_a, &cube, &pos_b, &cube).unwrap();

    assert!(!result.colliding);
    assert_relative_eq!(result.signed_distance, 1.0, epsilon = 1.0e-6);
    // The witness points are somewhere on the two facing faces.
    assert_relative_eq!(result.point_on_a.x, 0.5, epsilon = 1.0e-6);
    assert_relative_eq!(result.point_on_b.x, 1.5, epsilon = 1.0e-6);
}

#[test]
fn polytope_vs_primitive_cube_agree() {
    let corners = [
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(-0.5, -0.5, 0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
    ];
    let polytope = ConvexPolytope::from_points(&corners);
    let cuboid = Cuboid::new(Vector::new(0.5, 0.5, 0.5));

    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(2.0, 1.0, 0.5);

    let from_polytope = query::distance(&pos_a, &polytope, &pos_b, &cuboid).unwrap();
    let from_primitive = query::distance(&pos_a, &cuboid, &pos_b, &cuboid).unwrap();

    assert_relative_eq!(from_polytope, from_primitive, epsilon = 1.0e-6);
}

#[test]
fn polytope_point_distance_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(1234);
    let identity = Isometry::identity();

    for _ in 0..20 {
        let mut points = Vec::new();
        for _ in 0..12 {
            let v = Vector::new(
                rng.gen::<Real>() * 2.0 - 1.0,
                rng.gen::<Real>() * 2.0 - 1.0,
                rng.gen::<Real>() * 2.0 - 1.0,
            );
            if v.norm() > 1.0e-2 {
                points.push(Point::from(v.normalize()));
            }
        }
        let polytope = ConvexPolytope::from_points(&points);
        if polytope.num_faces() < 4 {
            continue;
        }

        // A query point safely outside the unit sphere.
        let mut dir = Vector::new(
            rng.gen::<Real>() * 2.0 - 1.0,
            rng.gen::<Real>() * 2.0 - 1.0,
            rng.gen::<Real>() * 2.0 - 1.0,
        );
        if dir.norm() < 1.0e-2 {
            dir = Vector::x();
        }
        let query_point = Point::from(dir.normalize() * (1.5 + rng.gen::<Real>() * 2.0));

        let gjk_dist = query::distance(
            &identity,
            &polytope,
            &identity,
            &PointShape(query_point),
        )
        .unwrap();

        let brute_force = polytope
            .face_ids()
            .map(|fid| point_face_distance(&polytope, fid, &query_point))
            .fold(Real::MAX, Real::min);

        assert_relative_eq!(gjk_dist, brute_force, epsilon = 1.0e-6);
    }
}
