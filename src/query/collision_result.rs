use crate::math::{Isometry, Point, Real, Vector};
use std::mem;

/// Geometric description of the result of a collision query.
///
/// This is the shared output contract of the GJK and EPA detectors. Points
/// are expressed in world space by the top-level queries (the
/// `details::` layer leaves them in the local-space of the first shape).
///
/// Fields that a detector does not compute are NaN: neither GJK nor EPA
/// estimates per-shape surface normals, so `normal_on_a`/`normal_on_b` stay
/// NaN unless filled by other means. This is a documented limitation of the
/// algorithms, not an error state.
///
/// The record is created once by the caller and overwritten in place by
/// successive queries, so tight loops can run without allocation.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct CollisionResult {
    /// Whether the two shapes overlap.
    pub colliding: bool,
    /// The distance separating the shapes; negative iff they are colliding,
    /// in which case its magnitude is the penetration depth.
    pub signed_distance: Real,
    /// The witness point on the first shape.
    pub point_on_a: Point<Real>,
    /// The witness point on the second shape.
    pub point_on_b: Point<Real>,
    /// The outward unit normal of the first shape at `point_on_a`, when computed.
    pub normal_on_a: Vector<Real>,
    /// The outward unit normal of the second shape at `point_on_b`, when computed.
    pub normal_on_b: Vector<Real>,
}

impl Default for CollisionResult {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionResult {
    /// Creates a result with every geometric field set to NaN.
    pub fn new() -> Self {
        CollisionResult {
            colliding: false,
            signed_distance: Real::NAN,
            point_on_a: Point::new(Real::NAN, Real::NAN, Real::NAN),
            point_on_b: Point::new(Real::NAN, Real::NAN, Real::NAN),
            normal_on_a: Vector::repeat(Real::NAN),
            normal_on_b: Vector::repeat(Real::NAN),
        }
    }

    /// Resets every geometric field to NaN and the colliding flag to `false`.
    pub fn set_to_nan(&mut self) {
        *self = Self::new();
    }

    /// Overwrites this result with a separated (non-colliding) outcome.
    pub fn set_separated(&mut self, distance: Real, point_on_a: Point<Real>, point_on_b: Point<Real>) {
        self.colliding = false;
        self.signed_distance = distance;
        self.point_on_a = point_on_a;
        self.point_on_b = point_on_b;
        self.normal_on_a = Vector::repeat(Real::NAN);
        self.normal_on_b = Vector::repeat(Real::NAN);
    }

    /// Overwrites this result with a colliding outcome of the given penetration depth.
    pub fn set_colliding(&mut self, depth: Real, point_on_a: Point<Real>, point_on_b: Point<Real>) {
        self.colliding = true;
        self.signed_distance = -depth;
        self.point_on_a = point_on_a;
        self.point_on_b = point_on_b;
        self.normal_on_a = Vector::repeat(Real::NAN);
        self.normal_on_b = Vector::repeat(Real::NAN);
    }

    /// The translation of the second shape that brings the two shapes into
    /// touching contact: `point_on_a - point_on_b`.
    ///
    /// For colliding results its magnitude is the penetration depth, and
    /// translating the second shape by any longer multiple of it separates
    /// the shapes.
    pub fn separation_vector(&self) -> Vector<Real> {
        self.point_on_a - self.point_on_b
    }

    /// Swaps the roles of the two shapes: witness points and normals are
    /// exchanged, while the colliding flag and the signed distance are
    /// unchanged.
    pub fn flip(&mut self) {
        mem::swap(&mut self.point_on_a, &mut self.point_on_b);
        mem::swap(&mut self.normal_on_a, &mut self.normal_on_b);
    }

    /// Returns this result with the roles of the two shapes swapped.
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Tests whether the distance or one of the witness points is NaN.
    ///
    /// The normals are not considered: they are NaN by contract whenever the
    /// detectors did not compute them.
    pub fn contains_nan(&self) -> bool {
        self.signed_distance.is_nan()
            || self.point_on_a.iter().any(|e| e.is_nan())
            || self.point_on_b.iter().any(|e| e.is_nan())
    }

    pub(crate) fn transform_by(&mut self, pos: &Isometry<Real>) {
        self.point_on_a = pos * self.point_on_a;
        self.point_on_b = pos * self.point_on_b;
        self.normal_on_a = pos * self.normal_on_a;
        self.normal_on_b = pos * self.normal_on_b;
    }
}
