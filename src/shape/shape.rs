use crate::math::Real;
use crate::math::{Isometry, Point, Vector};
use crate::query::QueryError;
use crate::shape::{
    Ball, Capsule, Cone, ConvexPolytope, Cuboid, Cylinder, Ellipsoid, PointShape, Ramp, Segment,
    SupportMap, Torus, Triangle,
};
use downcast_rs::{impl_downcast, DowncastSync};

/// Trait implemented by shapes usable with the shape-agnostic queries.
///
/// Collision-detection code depends only on this trait (and on
/// [`SupportMap`] through [`Shape::as_support_map`]), never on the concrete
/// shape types.
pub trait Shape: DowncastSync {
    /// Converts this shape to its support-mapping, if it has one.
    ///
    /// Non-convex shapes (e.g. [`Torus`]) return `None`: the support mapping
    /// is undefined for them and queries report
    /// [`QueryError::Unsupported`] instead of approximating.
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        None
    }

    /// Tests whether any coordinate or parameter of this shape is NaN.
    ///
    /// Queries on NaN shapes do not fail: NaN propagates through distances
    /// and witness points. Callers wanting to reject such shapes are
    /// expected to run this check beforehand.
    fn contains_nan(&self) -> bool;
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a capsule, if it is one.
    pub fn as_capsule(&self) -> Option<&Capsule> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cylinder, if it is one.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cone, if it is one.
    pub fn as_cone(&self) -> Option<&Cone> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to an ellipsoid, if it is one.
    pub fn as_ellipsoid(&self) -> Option<&Ellipsoid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a ramp, if it is one.
    pub fn as_ramp(&self) -> Option<&Ramp> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a point shape, if it is one.
    pub fn as_point_shape(&self) -> Option<&PointShape> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a segment, if it is one.
    pub fn as_segment(&self) -> Option<&Segment> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a triangle, if it is one.
    pub fn as_triangle(&self) -> Option<&Triangle> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a torus, if it is one.
    pub fn as_torus(&self) -> Option<&Torus> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a convex polytope, if it is one.
    pub fn as_convex_polytope(&self) -> Option<&ConvexPolytope> {
        self.downcast_ref()
    }

    /// The support mapping of this shape, or the error a query on it must report.
    ///
    /// A convex polytope with no vertices yields [`QueryError::EmptyShape`];
    /// a shape without a support mapping yields [`QueryError::Unsupported`].
    pub fn support_map(&self) -> Result<&dyn SupportMap, QueryError> {
        if let Some(polytope) = self.as_convex_polytope() {
            if polytope.is_empty() {
                return Err(QueryError::EmptyShape);
            }
        }

        self.as_support_map().ok_or(QueryError::Unsupported)
    }
}

/// Computes the point of `shape`, posed at `pose`, that is the farthest in the direction `dir`.
///
/// This is the validated entry point of the support-mapping contract: a
/// zero-length (or NaN) direction and shapes without a support mapping are
/// rejected instead of being silently approximated.
pub fn supporting_vertex(
    shape: &dyn Shape,
    pose: &Isometry<Real>,
    dir: &Vector<Real>,
) -> Result<Point<Real>, QueryError> {
    let support_map = shape.support_map()?;

    if !(dir.norm_squared() > 0.0) {
        return Err(QueryError::ZeroDirection);
    }

    Ok(support_map.support_point(pose, dir))
}

impl Shape for Ball {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.radius.is_nan()
    }
}

impl Shape for Cuboid {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.half_extents.iter().any(|e| e.is_nan())
    }
}

impl Shape for Capsule {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        Shape::contains_nan(&self.segment) || self.radius.is_nan()
    }
}

impl Shape for Cylinder {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.half_height.is_nan() || self.radius.is_nan()
    }
}

impl Shape for Cone {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.half_height.is_nan() || self.radius.is_nan()
    }
}

impl Shape for Ellipsoid {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.radii.iter().any(|r| r.is_nan())
    }
}

impl Shape for Ramp {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.extents.iter().any(|e| e.is_nan())
    }
}

impl Shape for PointShape {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.0.iter().any(|e| e.is_nan())
    }
}

impl Shape for Segment {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.a.iter().any(|e| e.is_nan()) || self.b.iter().any(|e| e.is_nan())
    }
}

impl Shape for Triangle {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.vertices().iter().any(|v| v.iter().any(|e| e.is_nan()))
    }
}

impl Shape for Torus {
    // No `as_support_map`: the torus is not convex.

    fn contains_nan(&self) -> bool {
        self.radius.is_nan() || self.tube_radius.is_nan()
    }
}

impl Shape for ConvexPolytope {
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self as &dyn SupportMap)
    }

    fn contains_nan(&self) -> bool {
        self.points().any(|p| p.iter().any(|e| e.is_nan()))
    }
}