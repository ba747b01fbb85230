use thiserror::Error;

/// Error reported by a geometric query on ill-suited input.
///
/// Numerical degeneracy (coincident points, zero-area faces, iteration caps)
/// is never reported through this type: it is absorbed internally and
/// surfaces as an approximate-but-valid result. Only malformed input and
/// queries on shapes that cannot support them fail.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum QueryError {
    /// The query requires a support mapping, which the shape does not have
    /// (e.g. a torus, which is not convex).
    #[error("query not supported between these shapes")]
    Unsupported,
    /// The query was given a shape with no geometry at all, like a convex
    /// polytope with no vertices.
    #[error("query on an empty shape")]
    EmptyShape,
    /// The query was given a zero-length (or NaN) direction.
    #[error("direction must be non-zero")]
    ZeroDirection,
}
