use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::Vec3;

/// Analytic curve representations carried by edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Curve {
    Line(Line3d),
    Circle(Circle3d),
}

/// An infinite line defined by a point and a unit direction.
/// Bounded edges carry a parameter range in `CurveSegment`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line3d {
    pub origin: Point3d,
    pub direction: Vec3,
}

impl Line3d {
    pub fn new(origin: Point3d, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Line through `a` and `b`, parameterized by distance from `a`.
    pub fn from_points(a: Point3d, b: Point3d) -> Self {
        Self::new(a, b - a)
    }

    pub fn point_at(&self, t: f64) -> Point3d {
        self.origin + self.direction * t
    }
}

/// Circle lying in the plane through `center` perpendicular to `normal`,
/// parameterized by angle from the reference axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle3d {
    pub center: Point3d,
    pub normal: Vec3,
    pub radius: f64,
    /// In-plane direction the parameter angle is measured from.
    pub x_axis: Vec3,
}

impl Circle3d {
    pub fn with_frame(center: Point3d, normal: Vec3, x_axis: Vec3, radius: f64) -> Self {
        Self {
            center,
            normal: normal.normalize(),
            x_axis: x_axis.normalize(),
            radius,
        }
    }

    fn y_axis(&self) -> Vec3 {
        self.normal.cross(&self.x_axis)
    }

    pub fn point_at(&self, t: f64) -> Point3d {
        let (sin, cos) = t.sin_cos();
        let radial = self.x_axis * cos + self.y_axis() * sin;
        self.center + radial * self.radius
    }
}

impl Curve {
    pub fn point_at(&self, t: f64) -> Point3d {
        match self {
            Curve::Line(line) => line.point_at(t),
            Curve::Circle(circle) => circle.point_at(t),
        }
    }
}

/// A curve trimmed to a parameter range: the geometry of one edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveSegment {
    pub curve: Curve,
    pub t_start: f64,
    pub t_end: f64,
}

impl CurveSegment {
    pub fn new(curve: Curve, t_start: f64, t_end: f64) -> Self {
        Self {
            curve,
            t_start,
            t_end,
        }
    }

    pub fn midpoint_param(&self) -> f64 {
        0.5 * (self.t_start + self.t_end)
    }

    pub fn sample(&self, t: f64) -> Point3d {
        self.curve.point_at(t)
    }

    /// Straight-line distance between the segment ends. Used as the local
    /// length scale for offset sampling; falls back to zero for a closed
    /// segment, which callers must guard.
    pub fn chord_length(&self) -> f64 {
        self.sample(self.t_start).distance_to(&self.sample(self.t_end))
    }

    /// Unit tangent recovered from two nearby samples (central difference).
    /// `None` when the samples coincide.
    pub fn tangent_at(&self, t: f64) -> Option<Vec3> {
        let span = (self.t_end - self.t_start).abs();
        let dt = if span > 1e-12 { span * 1e-3 } else { 1e-6 };
        let ahead = self.sample(t + dt);
        let behind = self.sample(t - dt);
        (ahead - behind).normalized()
    }
}
