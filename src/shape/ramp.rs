//! Support mapping based Ramp shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A ramp: a box truncated by the plane through its bottom-front and
/// top-back edges.
///
/// The remaining solid is a right wedge whose slope goes from the origin up
/// to `(extents.x, ±extents.y / 2, extents.z)`, with the `y` axis as its
/// prism axis.
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ramp {
    /// The full extents of the ramp along each axis.
    pub extents: Vector<Real>,
}

impl Ramp {
    /// Creates a new ramp from its full extents.
    #[inline]
    pub fn new(extents: Vector<Real>) -> Ramp {
        Ramp { extents }
    }

    /// The six vertices of this ramp, in its local frame.
    pub fn vertices(&self) -> [Point<Real>; 6] {
        let hy = self.extents.y / 2.0;
        [
            Point::new(0.0, -hy, 0.0),
            Point::new(0.0, hy, 0.0),
            Point::new(self.extents.x, -hy, 0.0),
            Point::new(self.extents.x, hy, 0.0),
            Point::new(self.extents.x, -hy, self.extents.z),
            Point::new(self.extents.x, hy, self.extents.z),
        ]
    }
}

impl SupportMap for Ramp {
    // Ties are broken toward the lowest vertex index.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let vertices = self.vertices();
        let mut best = vertices[0];
        let mut best_dot = best.coords.dot(dir);

        for vertex in &vertices[1..] {
            let dot = vertex.coords.dot(dir);
            if dot > best_dot {
                best = *vertex;
                best_dot = dot;
            }
        }

        best
    }
}
