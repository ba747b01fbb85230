use na::{self, Unit};

use crate::math::{Isometry, Real, Vector};
use crate::query::epa::EPA;
use crate::query::gjk::{self, CSOPoint, GJKResult, VoronoiSimplex};
use crate::query::{CollisionResult, QueryError, QueryParams};
use crate::shape::{Shape, SupportMap};

use num::Bounded;

/// Caller-owned scratch state for the collision queries.
///
/// One workspace serves one worker: reusing it across calls makes the
/// queries allocation-free, at the price of not being shareable between
/// concurrent query invocations. The default mode (a fresh workspace per
/// call) is what the plain query functions do.
#[derive(Default)]
pub struct CollisionWorkspace {
    /// The GJK working simplex.
    pub simplex: VoronoiSimplex,
    /// The EPA solver and its buffers.
    pub epa: EPA,
}

impl CollisionWorkspace {
    /// Creates a new scratch workspace.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Runs the GJK distance algorithm on two posed shapes.
///
/// On separation, the result carries the distance and world-space witness
/// points; on overlap it only carries `colliding = true` with a zero
/// distance (GJK cannot measure penetration; see [`epa_test`] or
/// [`collision_test`]). Normals are never produced by GJK and are left NaN.
pub fn gjk_test(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
) -> Result<CollisionResult, QueryError> {
    let pos12 = pos1.inv_mul(pos2);
    let mut result = CollisionResult::new();
    let _ = gjk_test_support_map_support_map(
        &pos12,
        g1.support_map()?,
        g2.support_map()?,
        &mut VoronoiSimplex::new(),
        &QueryParams::default(),
        &mut result,
    );
    result.transform_by(pos1);
    Ok(result)
}

/// Runs GJK and, only if the shapes overlap, hands the terminal simplex off
/// to EPA for the penetration depth.
pub fn collision_test(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
) -> Result<CollisionResult, QueryError> {
    let mut result = CollisionResult::new();
    collision_test_with_workspace(
        pos1,
        g1,
        pos2,
        g2,
        &QueryParams::default(),
        &mut CollisionWorkspace::new(),
        &mut result,
    )?;
    Ok(result)
}

/// Same as [`collision_test`], with explicit parameters, scratch state and
/// output record for allocation-free execution in tight loops.
pub fn collision_test_with_workspace(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
    params: &QueryParams,
    workspace: &mut CollisionWorkspace,
    result: &mut CollisionResult,
) -> Result<(), QueryError> {
    let pos12 = pos1.inv_mul(pos2);
    collision_test_support_map_support_map(
        &pos12,
        g1.support_map()?,
        g2.support_map()?,
        params,
        workspace,
        result,
    );
    result.transform_by(pos1);
    Ok(())
}

/// Runs EPA on two overlapping posed shapes, starting from a GJK terminal simplex.
///
/// The simplex must come from a GJK run on the same shape pair that reported
/// an intersection (see
/// [`gjk_test_support_map_support_map`]). The result carries the penetration
/// depth as a negative signed distance, and world-space witness points.
pub fn epa_test(
    pos1: &Isometry<Real>,
    g1: &dyn Shape,
    pos2: &Isometry<Real>,
    g2: &dyn Shape,
    simplex: &VoronoiSimplex,
    params: &QueryParams,
) -> Result<CollisionResult, QueryError> {
    let pos12 = pos1.inv_mul(pos2);
    let mut result = CollisionResult::new();
    epa_test_support_map_support_map(
        &pos12,
        g1.support_map()?,
        g2.support_map()?,
        simplex,
        params,
        &mut EPA::new(),
        &mut result,
    );
    result.transform_by(pos1);
    Ok(result)
}

/// GJK distance test between support-mapped shapes, in the local-space of
/// the first one. Returns `true` iff the shapes are colliding, in which case
/// the simplex is left in its terminal, origin-enclosing state for EPA.
pub fn gjk_test_support_map_support_map<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &mut VoronoiSimplex,
    params: &QueryParams,
    result: &mut CollisionResult,
) -> bool
where
    G1: SupportMap,
    G2: SupportMap,
{
    let dir = if let Some(dir) = Unit::try_new(-pos12.translation.vector, crate::math::DEFAULT_EPSILON)
    {
        dir
    } else {
        Vector::x_axis()
    };

    simplex.reset(CSOPoint::from_shapes_toward(pos12, g1, g2, &dir));

    match gjk::closest_points_with_params(
        pos12,
        g1,
        g2,
        Real::max_value(),
        true,
        simplex,
        params,
    ) {
        GJKResult::ClosestPoints(p1, p2, _) => {
            result.set_separated(na::distance(&p1, &p2), p1, p2);
            false
        }
        GJKResult::Intersection => {
            result.set_to_nan();
            result.colliding = true;
            result.signed_distance = 0.0;
            true
        }
        GJKResult::Proximity(_) | GJKResult::NoIntersection(_) => {
            result.set_to_nan();
            false
        }
    }
}

/// EPA penetration test between support-mapped shapes, in the local-space of
/// the first one, seeded with a GJK terminal simplex.
pub fn epa_test_support_map_support_map<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    simplex: &VoronoiSimplex,
    params: &QueryParams,
    epa: &mut EPA,
    result: &mut CollisionResult,
) where
    G1: SupportMap,
    G2: SupportMap,
{
    match epa.closest_points(pos12, g1, g2, simplex, params) {
        Some((p1, p2, _)) => {
            result.set_colliding(na::distance(&p1, &p2), p1, p2);
        }
        None => {
            // The expansion broke down on degenerate geometry; the shapes
            // are still known to overlap.
            result.set_to_nan();
            result.colliding = true;
        }
    }
}

/// Collision test between support-mapped shapes, in the local-space of the
/// first one: GJK, then EPA only when the shapes overlap.
pub fn collision_test_support_map_support_map<G1: ?Sized, G2: ?Sized>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    params: &QueryParams,
    workspace: &mut CollisionWorkspace,
    result: &mut CollisionResult,
) -> bool
where
    G1: SupportMap,
    G2: SupportMap,
{
    let colliding = gjk_test_support_map_support_map(
        pos12,
        g1,
        g2,
        &mut workspace.simplex,
        params,
        result,
    );

    if colliding {
        epa_test_support_map_support_map(
            pos12,
            g1,
            g2,
            &workspace.simplex,
            params,
            &mut workspace.epa,
            result,
        );
    }

    colliding
}
