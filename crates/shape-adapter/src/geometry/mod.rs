pub mod curves;
pub mod point;
pub mod surfaces;
pub mod vector;

pub use curves::{Circle3d, Curve, CurveSegment, Line3d};
pub use point::Point3d;
pub use surfaces::{Cone, Cylinder, OrientedSurface, Plane, Sphere, Surface, Torus};
pub use vector::Vec3;
