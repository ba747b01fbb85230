//! Shapes supported by proxima3d.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_polytope::ConvexPolytope;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::ellipsoid::Ellipsoid;
pub use self::point_shape::PointShape;
pub use self::ramp::Ramp;
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::shape::{supporting_vertex, Shape};
pub use self::support_map::SupportMap;
pub use self::tetrahedron::{Tetrahedron, TetrahedronPointLocation};
pub use self::torus::Torus;
pub use self::triangle::{Triangle, TrianglePointLocation};

mod ball;
mod capsule;
mod cone;
pub mod convex_polytope;
mod cuboid;
mod cylinder;
mod ellipsoid;
mod point_shape;
mod ramp;
mod segment;
mod shape;
mod support_map;
mod tetrahedron;
mod torus;
mod triangle;
