use proxima3d::math::{Point, Real, Vector};
use proxima3d::shape::convex_polytope::ConvexPolytope;
use proxima3d::shape::SupportMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn cube_corners(half: Real) -> Vec<Point<Real>> {
    // Bottom face first, then the top face: exercises the planar extension
    // path before the polytope goes full-dimensional.
    vec![
        Point::new(-half, -half, -half),
        Point::new(half, -half, -half),
        Point::new(half, half, -half),
        Point::new(-half, half, -half),
        Point::new(-half, -half, half),
        Point::new(half, -half, half),
        Point::new(half, half, half),
        Point::new(-half, half, half),
    ]
}

fn random_sphere_points(rng: &mut StdRng, count: usize, radius: Real) -> Vec<Point<Real>> {
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let candidate = Vector::new(
            rng.gen::<Real>() * 2.0 - 1.0,
            rng.gen::<Real>() * 2.0 - 1.0,
            rng.gen::<Real>() * 2.0 - 1.0,
        );
        if candidate.norm() > 1.0e-2 {
            points.push(Point::from(candidate.normalize() * radius));
        }
    }
    points
}

fn assert_convex(polytope: &ConvexPolytope) {
    for fid in polytope.face_ids() {
        for point in polytope.points() {
            let dist = polytope.signed_distance_to_face(fid, point);
            assert!(
                dist <= 1.0e-7,
                "vertex {:?} is outside of face {} by {}",
                point,
                fid,
                dist
            );
        }
    }
}

fn face_edge_loop(polytope: &ConvexPolytope, fid: u32) -> Vec<u32> {
    let face = polytope.face(fid).unwrap();
    let mut loop_edges = Vec::new();
    let mut eid = face.first_edge();
    for _ in 0..face.num_edges() {
        loop_edges.push(eid);
        eid = polytope.half_edge(eid).unwrap().next();
    }
    assert_eq!(eid, face.first_edge());
    loop_edges
}

#[test]
fn degenerate_dimensionalities() {
    let mut polytope = ConvexPolytope::new();
    assert!(polytope.is_empty());
    assert_eq!(polytope.num_vertices(), 0);

    // A single point: no edges, no faces.
    assert!(polytope.insert_vertex(Point::origin()));
    assert_eq!(polytope.num_vertices(), 1);
    assert_eq!(polytope.num_half_edges(), 0);
    assert_eq!(polytope.num_faces(), 0);

    // A duplicate is absorbed.
    assert!(!polytope.insert_vertex(Point::new(0.0, 0.0, 1.0e-12)));
    assert_eq!(polytope.num_vertices(), 1);

    // A segment: one twin pair, no face.
    assert!(polytope.insert_vertex(Point::new(1.0, 0.0, 0.0)));
    assert_eq!(polytope.num_vertices(), 2);
    assert_eq!(polytope.num_half_edges(), 2);
    assert_eq!(polytope.num_faces(), 0);

    // A collinear point extends the segment instead of growing it.
    assert!(polytope.insert_vertex(Point::new(2.0, 0.0, 0.0)));
    assert_eq!(polytope.num_vertices(), 2);
    let support = polytope.local_support_point(&Vector::x());
    assert_eq!(support, Point::new(2.0, 0.0, 0.0));

    // A collinear interior point is absorbed.
    assert!(!polytope.insert_vertex(Point::new(0.5, 0.0, 0.0)));

    // A non-collinear point makes it planar: a single face without twins.
    assert!(polytope.insert_vertex(Point::new(0.0, 1.0, 0.0)));
    assert_eq!(polytope.num_vertices(), 3);
    assert_eq!(polytope.num_faces(), 1);
    assert_eq!(polytope.num_half_edges(), 3);

    let fid = polytope.face_ids().next().unwrap();
    for eid in face_edge_loop(&polytope, fid) {
        assert!(polytope.half_edge(eid).unwrap().twin().is_none());
    }
}

#[test]
fn coplanar_points_extend_the_single_face() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];
    let polytope = ConvexPolytope::from_points(&points);

    assert_eq!(polytope.num_vertices(), 4);
    assert_eq!(polytope.num_faces(), 1);
    assert_eq!(polytope.num_half_edges(), 4);

    // A point inside the polygon is absorbed.
    let mut polytope = polytope;
    assert!(!polytope.insert_vertex(Point::new(0.5, 0.5, 0.0)));
    assert_eq!(polytope.num_vertices(), 4);
}

#[test]
fn tetrahedron_from_points() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let polytope = ConvexPolytope::from_points(&points);

    assert_eq!(polytope.num_vertices(), 4);
    assert_eq!(polytope.num_faces(), 4);
    assert_eq!(polytope.num_half_edges(), 12);
    assert_convex(&polytope);

    // Full-dimensional: every half-edge has a twin, and the twin links back.
    for fid in polytope.face_ids() {
        for eid in face_edge_loop(&polytope, fid) {
            let edge = polytope.half_edge(eid).unwrap();
            let twin_id = edge.twin().unwrap();
            let twin = polytope.half_edge(twin_id).unwrap();
            assert_eq!(twin.twin(), Some(eid));
            assert_eq!(twin.origin(), edge.destination());
            assert_eq!(twin.destination(), edge.origin());
        }
    }
}

#[test]
fn cube_from_corners_has_six_quads() {
    let polytope = ConvexPolytope::from_points(&cube_corners(0.5));

    assert_eq!(polytope.num_vertices(), 8);
    assert_eq!(polytope.num_faces(), 6);
    assert_eq!(polytope.num_half_edges(), 24);
    assert_convex(&polytope);

    for fid in polytope.face_ids() {
        assert_eq!(polytope.face(fid).unwrap().num_edges(), 4);
    }
}

#[test]
fn interior_and_duplicate_points_are_absorbed() {
    let mut polytope = ConvexPolytope::from_points(&cube_corners(0.5));

    assert!(!polytope.insert_vertex(Point::origin()));
    assert!(!polytope.insert_vertex(Point::new(0.25, -0.25, 0.1)));
    assert!(!polytope.insert_vertex(Point::new(0.5, 0.5, 0.5)));
    assert_eq!(polytope.num_vertices(), 8);
    assert_eq!(polytope.num_faces(), 6);

    // A point beyond a corner does modify the hull: the three adjacent faces
    // are trimmed and the old corner, now interior, goes away with them.
    assert!(polytope.insert_vertex(Point::new(1.0, 1.0, 1.0)));
    assert_eq!(polytope.num_vertices(), 8);
    assert_convex(&polytope);
}

#[test]
fn supporting_vertex_matches_linear_scan() {
    let mut rng = StdRng::seed_from_u64(42);
    let points = random_sphere_points(&mut rng, 50, 1.0);
    let polytope = ConvexPolytope::from_points(&points);

    // Points sampled on a sphere are all hull vertices.
    assert_eq!(polytope.num_vertices(), 50);
    assert_convex(&polytope);

    for _ in 0..100 {
        let dir = Vector::new(
            rng.gen::<Real>() * 2.0 - 1.0,
            rng.gen::<Real>() * 2.0 - 1.0,
            rng.gen::<Real>() * 2.0 - 1.0,
        );
        if dir.norm() < 1.0e-2 {
            continue;
        }

        let support = polytope.local_support_point(&dir);
        let best = polytope
            .points()
            .map(|p| p.coords.dot(&dir))
            .fold(Real::MIN, Real::max);
        assert!(
            (support.coords.dot(&dir) - best).abs() <= 1.0e-10,
            "hill-climbed support disagrees with the linear scan"
        );
    }
}

#[test]
fn random_interior_points_never_dent_the_hull() {
    let mut rng = StdRng::seed_from_u64(7);
    let surface = random_sphere_points(&mut rng, 30, 2.0);
    let mut polytope = ConvexPolytope::from_points(&surface);
    assert_convex(&polytope);

    for _ in 0..50 {
        let radius = rng.gen::<Real>() * 0.5;
        let interior = random_sphere_points(&mut rng, 1, radius)[0];
        assert!(!polytope.insert_vertex(interior));
    }

    assert_eq!(polytope.num_vertices(), 30);
    assert_convex(&polytope);
}
