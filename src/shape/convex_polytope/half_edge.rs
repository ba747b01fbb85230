//! Elements of the half-edge arena backing [`ConvexPolytope`].
//!
//! All cross-references (twin, next, previous, owning face, origin) are
//! indices into the polytope's flat arrays instead of owning pointers, so
//! the usual cyclic-ownership problem of doubly-connected edge lists does
//! not arise. Removed elements are tombstoned and skipped by accessors.

use crate::math::{Point, Real, Vector};
use na::Unit;
use smallvec::SmallVec;

/// Index value standing for the absence of a reference.
pub(crate) const NULL_ID: u32 = u32::MAX;

/// A vertex of a [`super::ConvexPolytope`].
#[derive(Clone, Debug)]
pub struct Vertex {
    pub(crate) point: Point<Real>,
    /// The half-edges originating from this vertex.
    pub(crate) edges_out: SmallVec<[u32; 8]>,
    pub(crate) deleted: bool,
}

impl Vertex {
    pub(crate) fn new(point: Point<Real>) -> Self {
        Vertex {
            point,
            edges_out: SmallVec::new(),
            deleted: false,
        }
    }

    /// The position of this vertex.
    #[inline]
    pub fn point(&self) -> &Point<Real> {
        &self.point
    }

    /// The half-edges originating from this vertex.
    ///
    /// May contain tombstoned edges; filter with
    /// [`super::ConvexPolytope::half_edge`].
    #[inline]
    pub fn edges_out(&self) -> &[u32] {
        &self.edges_out
    }
}

/// A directed edge of a [`super::ConvexPolytope`].
#[derive(Clone, Debug)]
pub struct HalfEdge {
    pub(crate) origin: u32,
    pub(crate) dest: u32,
    pub(crate) twin: u32,
    pub(crate) next: u32,
    pub(crate) prev: u32,
    pub(crate) face: u32,
    pub(crate) deleted: bool,
}

impl HalfEdge {
    /// The vertex this half-edge originates from.
    #[inline]
    pub fn origin(&self) -> u32 {
        self.origin
    }

    /// The vertex this half-edge points to.
    #[inline]
    pub fn destination(&self) -> u32 {
        self.dest
    }

    /// The opposite-direction half-edge on the neighboring face.
    ///
    /// `None` only while the polytope is lower-dimensional (a segment’s two
    /// half-edges are each other’s twins, but a lone planar face has
    /// twin-less boundary edges).
    #[inline]
    pub fn twin(&self) -> Option<u32> {
        (self.twin != NULL_ID).then_some(self.twin)
    }

    /// The half-edge following this one on the same face loop.
    #[inline]
    pub fn next(&self) -> u32 {
        self.next
    }

    /// The half-edge preceding this one on the same face loop.
    #[inline]
    pub fn previous(&self) -> u32 {
        self.prev
    }

    /// The face owning this half-edge, if any.
    #[inline]
    pub fn face(&self) -> Option<u32> {
        (self.face != NULL_ID).then_some(self.face)
    }
}

/// A face of a [`super::ConvexPolytope`]: an ordered loop of half-edges and
/// the supporting plane derived from them.
#[derive(Clone, Debug)]
pub struct Face {
    /// One half-edge of the boundary loop.
    pub(crate) edge: u32,
    pub(crate) num_edges: u32,
    pub(crate) normal: Unit<Vector<Real>>,
    pub(crate) centroid: Point<Real>,
    pub(crate) deleted: bool,
}

impl Face {
    /// One half-edge of this face's boundary loop.
    #[inline]
    pub fn first_edge(&self) -> u32 {
        self.edge
    }

    /// The number of half-edges (and vertices) of this face's boundary loop.
    #[inline]
    pub fn num_edges(&self) -> u32 {
        self.num_edges
    }

    /// The outward unit normal of this face's supporting plane.
    #[inline]
    pub fn normal(&self) -> Unit<Vector<Real>> {
        self.normal
    }

    /// The centroid of this face's vertices (a point of its supporting plane).
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.centroid
    }
}
