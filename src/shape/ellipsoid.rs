//! Support mapping based Ellipsoid shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::SupportMap;

/// An ellipsoid with one radius per principal axis.
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ellipsoid {
    /// The radii of the ellipsoid along the `x`, `y` and `z` axes.
    pub radii: Vector<Real>,
}

impl Ellipsoid {
    /// Creates a new ellipsoid from its three radii.
    #[inline]
    pub fn new(radii: Vector<Real>) -> Ellipsoid {
        Ellipsoid { radii }
    }
}

impl SupportMap for Ellipsoid {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // The support point of { x : Σ (x_i / r_i)² ≤ 1 } along `dir` is
        // (r_i² d_i) / |(r_1 d_1, r_2 d_2, r_3 d_3)|.
        let scaled = self.radii.component_mul(dir);

        match scaled.try_normalize(DEFAULT_EPSILON) {
            Some(scaled) => Point::from(self.radii.component_mul(&scaled)),
            // Happens with an ellipsoid flattened to zero along an axis
            // orthogonal to `dir`.
            None => Point::origin(),
        }
    }
}
