use crate::math::Real;

/// A torus around the `y` axis.
///
/// A torus is not convex, so it does not implement
/// [`SupportMap`](crate::shape::SupportMap): support-mapped queries on a
/// torus report [`QueryError::Unsupported`](crate::query::QueryError)
/// instead of silently returning a wrong point.
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Torus {
    /// The radius of the circle traced by the tube center.
    pub radius: Real,
    /// The radius of the tube.
    pub tube_radius: Real,
}

impl Torus {
    /// Creates a new torus from the radius of its center circle and of its tube.
    #[inline]
    pub fn new(radius: Real, tube_radius: Real) -> Torus {
        Torus {
            radius,
            tube_radius,
        }
    }
}
