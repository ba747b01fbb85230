//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::distance()`](crate::query::distance) to compute the distance between two shapes.
//! * [`query::intersection_test()`](crate::query::intersection_test) to determine if two shapes
//!   intersect or not.
//! * [`query::gjk_test()`](crate::query::gjk_test) to compute separation distance and witness
//!   points with GJK alone.
//! * [`query::epa_test()`](crate::query::epa_test) to compute penetration depth and witness
//!   points from a GJK terminal simplex.
//! * [`query::collision_test()`](crate::query::collision_test) to run GJK and, only on overlap,
//!   hand off to EPA.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones
//! described above, working on the [`SupportMap`](crate::shape::SupportMap) trait directly and
//! taking the caller-owned scratch state (simplex, EPA buffers) explicitly so that tight loops
//! can run allocation-free.

pub use self::collision::{
    collision_test, collision_test_with_workspace, epa_test, gjk_test, CollisionWorkspace,
};
pub use self::collision_result::CollisionResult;
pub use self::distance::distance;
pub use self::error::QueryError;
pub use self::intersection_test::intersection_test;
pub use self::point::{PointProjection, PointQueryWithLocation};

use crate::math::Real;
use crate::shape::convex_polytope::DEFAULT_CONSTRUCTION_EPSILON;

mod collision;
mod collision_result;
mod distance;
pub mod epa;
mod error;
pub mod gjk;
pub mod point;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::collision::{
        collision_test_support_map_support_map, epa_test_support_map_support_map,
        gjk_test_support_map_support_map,
    };
    pub use super::distance::{
        distance_support_map_support_map, distance_support_map_support_map_with_params,
    };
    pub use super::intersection_test::{
        intersection_test_support_map_support_map,
        intersection_test_support_map_support_map_with_params,
    };
}

/// Configuration knobs shared by the GJK and EPA algorithms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QueryParams {
    /// Bound on the number of iterations of one GJK or EPA execution.
    ///
    /// Hitting the cap is not an error: both algorithms report their best
    /// current estimate, which guards against floating-point cycling.
    pub iteration_cap: usize,
    /// Convergence tolerance of the GJK and EPA loops.
    pub simplex_epsilon: Real,
    /// Merge tolerance for near-coplanar or near-duplicate points of the
    /// polytopes the algorithms build.
    pub construction_epsilon: Real,
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryParams {
            iteration_cap: 100,
            simplex_epsilon: gjk::eps_tol(),
            construction_epsilon: DEFAULT_CONSTRUCTION_EPSILON,
        }
    }
}
