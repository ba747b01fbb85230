use approx::assert_relative_eq;
use proxima3d::math::{Isometry, Point, Real, Vector};
use proxima3d::query;
use proxima3d::shape::{
    Ball, Capsule, Cone, Cylinder, Ellipsoid, PointShape, Ramp, SupportMap, Triangle,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn ellipsoid_support_point() {
    let ellipsoid = Ellipsoid::new(Vector::new(1.0, 2.0, 3.0));

    assert_relative_eq!(
        ellipsoid.local_support_point(&Vector::x()),
        Point::new(1.0, 0.0, 0.0),
        epsilon = 1.0e-9
    );
    assert_relative_eq!(
        ellipsoid.local_support_point(&Vector::y()),
        Point::new(0.0, 2.0, 0.0),
        epsilon = 1.0e-9
    );
    assert_relative_eq!(
        ellipsoid.local_support_point(&Vector::z()),
        Point::new(0.0, 0.0, 3.0),
        epsilon = 1.0e-9
    );
}

#[test]
fn ellipsoid_support_maximizes_the_dot_product() {
    let radii = Vector::new(1.0, 2.0, 3.0);
    let ellipsoid = Ellipsoid::new(radii);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let dir = Vector::new(
            rng.gen::<Real>() * 2.0 - 1.0,
            rng.gen::<Real>() * 2.0 - 1.0,
            rng.gen::<Real>() * 2.0 - 1.0,
        );
        if dir.norm() < 1.0e-2 {
            continue;
        }

        let support = ellipsoid.local_support_point(&dir);

        // The support lies on the surface.
        let level = (support.x / radii.x).powi(2)
            + (support.y / radii.y).powi(2)
            + (support.z / radii.z).powi(2);
        assert_relative_eq!(level, 1.0, epsilon = 1.0e-9);

        // No sampled surface point does better.
        for _ in 0..20 {
            let sample = Vector::new(
                rng.gen::<Real>() * 2.0 - 1.0,
                rng.gen::<Real>() * 2.0 - 1.0,
                rng.gen::<Real>() * 2.0 - 1.0,
            );
            if sample.norm() < 1.0e-2 {
                continue;
            }
            let on_surface = sample.normalize().component_mul(&radii);
            assert!(on_surface.dot(&dir) <= support.coords.dot(&dir) + 1.0e-9);
        }
    }
}

#[test]
fn capsule_support_point() {
    let capsule = Capsule::new_y(1.0, 0.5);

    assert_relative_eq!(
        capsule.local_support_point(&Vector::y()),
        Point::new(0.0, 1.5, 0.0),
        epsilon = 1.0e-9
    );
    assert_relative_eq!(
        capsule.local_support_point(&Vector::new(0.0, -1.0, 0.0)),
        Point::new(0.0, -1.5, 0.0),
        epsilon = 1.0e-9
    );
}

#[test]
fn cylinder_support_point() {
    let cylinder = Cylinder::new(1.0, 0.5);

    assert_relative_eq!(
        cylinder.local_support_point(&Vector::new(1.0, 0.0, 0.0)),
        Point::new(0.5, 1.0, 0.0),
        epsilon = 1.0e-9
    );
    assert_relative_eq!(
        cylinder.local_support_point(&Vector::new(1.0, -0.1, 0.0)),
        Point::new(0.5, -1.0, 0.0),
        epsilon = 1.0e-9
    );
}

#[test]
fn cone_support_point() {
    let cone = Cone::new(1.0, 0.5);

    assert_relative_eq!(
        cone.local_support_point(&Vector::y()),
        Point::new(0.0, 1.0, 0.0),
        epsilon = 1.0e-9
    );
    assert_relative_eq!(
        cone.local_support_point(&Vector::new(1.0, -1.0, 0.0)),
        Point::new(0.5, -1.0, 0.0),
        epsilon = 1.0e-9
    );
}

#[test]
fn ramp_support_point() {
    let ramp = Ramp::new(Vector::new(2.0, 1.0, 1.0));

    // Ties are broken toward the lowest vertex index.
    assert_relative_eq!(
        ramp.local_support_point(&Vector::new(1.0, 0.0, 1.0)),
        Point::new(2.0, -0.5, 1.0),
        epsilon = 1.0e-9
    );
    assert_relative_eq!(
        ramp.local_support_point(&Vector::new(-1.0, 1.0, -1.0)),
        Point::new(0.0, 0.5, 0.0),
        epsilon = 1.0e-9
    );
}

#[test]
fn distances_between_assorted_primitives() {
    let identity = Isometry::identity();

    // Cylinder vs. ball across the cylinder's side.
    let cylinder = Cylinder::new(1.0, 0.5);
    let ball = Ball::new(0.5);
    let dist = query::distance(
        &identity,
        &cylinder,
        &Isometry::translation(3.0, 0.0, 0.0),
        &ball,
    )
    .unwrap();
    assert_relative_eq!(dist, 2.0, epsilon = 1.0e-5);

    // Capsule vs. ball across the capsule's cap.
    let capsule = Capsule::new_y(1.0, 0.5);
    let dist = query::distance(
        &identity,
        &capsule,
        &Isometry::translation(0.0, 3.0, 0.0),
        &ball,
    )
    .unwrap();
    assert_relative_eq!(dist, 1.0, epsilon = 1.0e-5);

    // Ellipsoid vs. point along its shortest radius.
    let ellipsoid = Ellipsoid::new(Vector::new(1.0, 2.0, 3.0));
    let dist = query::distance(
        &identity,
        &ellipsoid,
        &identity,
        &PointShape(Point::new(4.0, 0.0, 0.0)),
    )
    .unwrap();
    assert_relative_eq!(dist, 3.0, epsilon = 1.0e-5);

    // Ramp vs. point facing its tall back face.
    let ramp = Ramp::new(Vector::new(2.0, 1.0, 1.0));
    let dist = query::distance(
        &identity,
        &ramp,
        &identity,
        &PointShape(Point::new(4.0, 0.0, 0.5)),
    )
    .unwrap();
    assert_relative_eq!(dist, 2.0, epsilon = 1.0e-5);

    // Triangle vs. point above its plane.
    let triangle = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    );
    let dist = query::distance(
        &identity,
        &triangle,
        &identity,
        &PointShape(Point::new(0.2, 0.2, 2.0)),
    )
    .unwrap();
    assert_relative_eq!(dist, 2.0, epsilon = 1.0e-5);
}
