//! The Gilbert-Johnson-Keerthi distance algorithm.

use na::{ComplexField, Unit};

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::gjk::{CSOPoint, VoronoiSimplex};
use crate::query::QueryParams;
use crate::shape::SupportMap;

use num::Bounded;

/// Results of the GJK algorithm.
///
/// All points and vectors in this result are expressed in the local-space of
/// the first shape.
#[derive(Clone, Debug, PartialEq)]
pub enum GJKResult {
    /// The shapes are intersecting: the origin is inside the Minkowski
    /// difference of the two shapes.
    ///
    /// GJK cannot compute a penetration depth; the terminal simplex it
    /// leaves behind is the seed of the EPA algorithm, which can.
    Intersection,
    /// The witness points on both shapes, and the unit direction from the
    /// first shape toward the second.
    ClosestPoints(Point<Real>, Point<Real>, Unit<Vector<Real>>),
    /// The shapes are close but not intersecting; only an approximate
    /// separating direction was computed.
    Proximity(Unit<Vector<Real>>),
    /// The shapes are separated by more than the distance bound given to the
    /// algorithm.
    NoIntersection(Unit<Vector<Real>>),
}

/// The default absolute tolerance used by the GJK algorithm.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 10.0
}

/// Computes the closest points between two support-mapped shapes using the
/// GJK algorithm, with the default [`QueryParams`].
///
/// The simplex should be seeded by the caller (see
/// [`VoronoiSimplex::reset`]) with a first Minkowski-difference support
/// point along any non-zero direction.
pub fn closest_points<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    max_dist: Real,
    exact_dist: bool,
    simplex: &mut VoronoiSimplex,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    closest_points_with_params(
        pos12,
        g1,
        g2,
        max_dist,
        exact_dist,
        simplex,
        &QueryParams::default(),
    )
}

/// Computes the closest points between two support-mapped shapes using the
/// GJK algorithm.
///
/// This is the core state machine: `Init → Iterate → {Separated | Colliding
/// | IterationLimitReached}`. Hitting the iteration cap is non-fatal: the
/// best simplex found so far is reported as a separated result.
pub fn closest_points_with_params<G1, G2>(
    pos12: &Isometry<Real>,
    g1: &G1,
    g2: &G2,
    max_dist: Real,
    exact_dist: bool,
    simplex: &mut VoronoiSimplex,
    params: &QueryParams,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let _eps_tol: Real = params.simplex_epsilon;
    let _eps_rel: Real = ComplexField::sqrt(_eps_tol);

    let mut proj = simplex.project_origin_and_reduce();

    if proj.coords.iter().any(|e| e.is_nan()) {
        // A NaN shape state propagates through the outputs instead of
        // crashing or being mistaken for an intersection.
        return nan_result(exact_dist);
    }

    let mut old_dir;

    if let Some(proj_dir) = Unit::try_new(proj.coords, 0.0) {
        old_dir = -proj_dir;
    } else {
        return GJKResult::Intersection;
    }

    let mut max_bound = Real::max_value();
    let mut dir;
    let mut niter = 0;

    loop {
        let old_max_bound = max_bound;

        if let Some((new_dir, dist)) = Unit::try_new_and_get(-proj.coords, _eps_tol) {
            dir = new_dir;
            max_bound = dist;
        } else {
            // The origin is on the simplex.
            return GJKResult::Intersection;
        }

        if max_bound >= old_max_bound {
            // Upper bounds inconsistencies: the best result is the previous one.
            if exact_dist {
                let (p1, p2) = result(simplex, true);
                return GJKResult::ClosestPoints(p1, p2, old_dir);
            } else {
                return GJKResult::Proximity(old_dir);
            }
        }

        let cso_point = CSOPoint::from_shapes(pos12, g1, g2, &dir);
        let min_bound = -dir.dot(&cso_point.point.coords);

        if min_bound.is_nan() {
            return nan_result(exact_dist);
        }

        if min_bound > max_dist {
            return GJKResult::NoIntersection(dir);
        } else if !exact_dist && min_bound > 0.0 && max_bound <= max_dist {
            return GJKResult::Proximity(old_dir);
        } else if max_bound - min_bound <= _eps_rel * max_bound {
            // The distance found has a good enough precision.
            if exact_dist {
                let (p1, p2) = result(simplex, false);
                return GJKResult::ClosestPoints(p1, p2, dir);
            } else {
                return GJKResult::Proximity(dir);
            }
        }

        if !simplex.add_point(cso_point) {
            // The new support point is already on the simplex: further
            // iterations cannot get any closer.
            if exact_dist {
                let (p1, p2) = result(simplex, false);
                return GJKResult::ClosestPoints(p1, p2, dir);
            } else {
                return GJKResult::Proximity(dir);
            }
        }

        old_dir = dir;
        proj = simplex.project_origin_and_reduce();

        if simplex.dimension() == DIM {
            if min_bound >= _eps_tol {
                if exact_dist {
                    let (p1, p2) = result(simplex, true);
                    return GJKResult::ClosestPoints(p1, p2, old_dir);
                } else {
                    return GJKResult::Proximity(old_dir);
                }
            } else {
                // The origin is inside of the cso.
                return GJKResult::Intersection;
            }
        }

        niter += 1;

        if niter == params.iteration_cap {
            // Guard against floating-point cycling: report the best simplex
            // found so far as an approximate separated result.
            if exact_dist {
                let (p1, p2) = result(simplex, false);
                return GJKResult::ClosestPoints(p1, p2, dir);
            } else {
                return GJKResult::Proximity(dir);
            }
        }
    }
}

fn nan_result(exact_dist: bool) -> GJKResult {
    if exact_dist {
        let nan = Point::new(Real::NAN, Real::NAN, Real::NAN);
        GJKResult::ClosestPoints(nan, nan, Vector::x_axis())
    } else {
        GJKResult::Proximity(Vector::x_axis())
    }
}

fn result(simplex: &VoronoiSimplex, prev: bool) -> (Point<Real>, Point<Real>) {
    let mut res = (Point::origin(), Point::origin());
    if prev {
        for i in 0..simplex.prev_dimension() + 1 {
            let coord = simplex.prev_proj_coord(i);
            let point = simplex.prev_point(i);
            res.0 += point.orig1.coords * coord;
            res.1 += point.orig2.coords * coord;
        }

        res
    } else {
        for i in 0..simplex.dimension() + 1 {
            let coord = simplex.proj_coord(i);
            let point = simplex.point(i);
            res.0 += point.orig1.coords * coord;
            res.1 += point.orig2.coords * coord;
        }

        res
    }
}
