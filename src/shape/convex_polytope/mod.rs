//! The half-edge convex polytope shape.

pub use self::half_edge::{Face, HalfEdge, Vertex};
pub use self::polytope::{ConvexPolytope, DEFAULT_CONSTRUCTION_EPSILON};

mod half_edge;
mod polytope;
