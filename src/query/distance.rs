use crate::math::{Isometry, Real, Vector};
use crate::query::gjk::{self, CSOPoint, GJKResult, VoronoiSimplex};
use crate::query::{QueryError, QueryParams};
use crate::shape::{Shape, SupportMap};

use na::{self, Unit};
use num::Bounded;

/// Computes the minimum distance separating two shapes.
///
/// Returns `0.0` if the shapes are touching or penetrating.
pub fn distance(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
) -> Result<Real, QueryError> {
    let pos12 = pos1.inv_mul(pos2);
    Ok(distance_support_map_support_map(
        &pos12,
        g1.support_map()?,
        g2.support_map()?,
    ))
}

/// Distance between support-mapped shapes.
pub fn distance_support_map_support_map<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
) -> Real
where
    G1: SupportMap,
    G2: SupportMap,
{
    distance_support_map_support_map_with_params(
        pos12,
        g1,
        g2,
        &mut VoronoiSimplex::new(),
        None,
        &QueryParams::default(),
    )
}

/// Distance between support-mapped shapes.
///
/// This allows a more fine grained control over the underlying GJK algorithm.
pub fn distance_support_map_support_map_with_params<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut VoronoiSimplex,
    init_dir: Option<Vector<Real>>,
    params: &QueryParams,
) -> Real
where
    G1: SupportMap,
    G2: SupportMap,
{
    let dir = init_dir.unwrap_or_else(|| -pos12.translation.vector);

    if let Some(dir) = Unit::try_new(dir, crate::math::DEFAULT_EPSILON) {
        simplex.reset(CSOPoint::from_shapes_toward(pos12, g1, g2, &dir));
    } else {
        simplex.reset(CSOPoint::from_shapes(
            pos12,
            g1,
            g2,
            &Vector::<Real>::x(),
        ));
    }

    match gjk::closest_points_with_params(
        pos12,
        g1,
        g2,
        Real::max_value(),
        true,
        simplex,
        params,
    ) {
        GJKResult::Intersection => 0.0,
        GJKResult::ClosestPoints(p1, p2, _) => na::distance(&p1, &p2),
        GJKResult::Proximity(_) => unreachable!(),
        GJKResult::NoIntersection(_) => 0.0,
    }
}
