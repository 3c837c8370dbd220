use serde::{Deserialize, Serialize};

use dovetail_types::SurfaceTag;

use super::point::Point3d;
use super::vector::Vec3;

/// All analytic surface types the adapter can describe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Surface {
    Plane(Plane),
    Cylinder(Cylinder),
    Cone(Cone),
    Sphere(Sphere),
    Torus(Torus),
}

fn frame_axis_for(normal: &Vec3) -> Vec3 {
    if normal.x.abs() < 0.9 {
        Vec3::X.cross(normal).normalize()
    } else {
        Vec3::Y.cross(normal).normalize()
    }
}

/// An infinite plane with an explicit in-plane frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3d,
    pub normal: Vec3,
    pub u_axis: Vec3,
    pub v_axis: Vec3,
}

impl Plane {
    pub fn new(origin: Point3d, normal: Vec3) -> Self {
        let normal = normal.normalize();
        let u_axis = frame_axis_for(&normal);
        let v_axis = normal.cross(&u_axis);
        Self {
            origin,
            normal,
            u_axis,
            v_axis,
        }
    }

    pub fn evaluate(&self, u: f64, v: f64) -> Point3d {
        self.origin + self.u_axis * u + self.v_axis * v
    }

    pub fn normal_at(&self, _u: f64, _v: f64) -> Vec3 {
        self.normal
    }

    /// (u, v) of the point's projection onto the plane.
    pub fn parameters_of(&self, p: &Point3d) -> (f64, f64) {
        let d = *p - self.origin;
        (d.dot(&self.u_axis), d.dot(&self.v_axis))
    }
}

/// A cylinder surface, infinite along its axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cylinder {
    pub origin: Point3d,
    pub axis: Vec3,
    pub radius: f64,
    pub ref_dir: Vec3,
}

impl Cylinder {
    pub fn new(origin: Point3d, axis: Vec3, radius: f64) -> Self {
        let axis = axis.normalize();
        let ref_dir = frame_axis_for(&axis);
        Self {
            origin,
            axis,
            radius,
            ref_dir,
        }
    }

    /// Constructor with an explicit reference direction, which fixes where
    /// the angular parameter starts (and so where a seam sits).
    pub fn with_frame(origin: Point3d, axis: Vec3, ref_dir: Vec3, radius: f64) -> Self {
        Self {
            origin,
            axis: axis.normalize(),
            radius,
            ref_dir: ref_dir.normalize(),
        }
    }

    fn y_dir(&self) -> Vec3 {
        self.axis.cross(&self.ref_dir)
    }

    /// Evaluate at (u=angle, v=height along axis).
    pub fn evaluate(&self, u: f64, v: f64) -> Point3d {
        self.origin
            + self.ref_dir * (self.radius * u.cos())
            + self.y_dir() * (self.radius * u.sin())
            + self.axis * v
    }

    pub fn normal_at(&self, u: f64, _v: f64) -> Vec3 {
        (self.ref_dir * u.cos() + self.y_dir() * u.sin()).normalize()
    }

    pub fn parameters_of(&self, p: &Point3d) -> (f64, f64) {
        let d = *p - self.origin;
        let v = d.dot(&self.axis);
        let radial = d - self.axis * v;
        let u = radial.dot(&self.y_dir()).atan2(radial.dot(&self.ref_dir));
        (u, v)
    }
}

/// A cone surface with apex and half-angle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cone {
    pub apex: Point3d,
    pub axis: Vec3,
    pub half_angle: f64,
    pub ref_dir: Vec3,
}

impl Cone {
    pub fn new(apex: Point3d, axis: Vec3, half_angle: f64) -> Self {
        let axis = axis.normalize();
        let ref_dir = frame_axis_for(&axis);
        Self {
            apex,
            axis,
            half_angle,
            ref_dir,
        }
    }

    fn y_dir(&self) -> Vec3 {
        self.axis.cross(&self.ref_dir)
    }

    /// Evaluate at (u=angle, v=distance from apex along axis).
    pub fn evaluate(&self, u: f64, v: f64) -> Point3d {
        let r = v * self.half_angle.tan();
        self.apex + self.axis * v + self.ref_dir * (r * u.cos()) + self.y_dir() * (r * u.sin())
    }

    pub fn normal_at(&self, u: f64, _v: f64) -> Vec3 {
        let cos_a = self.half_angle.cos();
        let sin_a = self.half_angle.sin();
        let radial = self.ref_dir * u.cos() + self.y_dir() * u.sin();
        (radial * cos_a - self.axis * sin_a).normalize()
    }

    pub fn parameters_of(&self, p: &Point3d) -> (f64, f64) {
        let d = *p - self.apex;
        let v = d.dot(&self.axis);
        let radial = d - self.axis * v;
        let u = radial.dot(&self.y_dir()).atan2(radial.dot(&self.ref_dir));
        (u, v)
    }
}

/// A sphere surface, frame fixed to the world axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Point3d,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3d, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Evaluate at (u=longitude 0..2PI, v=latitude -PI/2..PI/2).
    pub fn evaluate(&self, u: f64, v: f64) -> Point3d {
        let cos_v = v.cos();
        Point3d::new(
            self.center.x + self.radius * cos_v * u.cos(),
            self.center.y + self.radius * cos_v * u.sin(),
            self.center.z + self.radius * v.sin(),
        )
    }

    pub fn normal_at(&self, u: f64, v: f64) -> Vec3 {
        let p = self.evaluate(u, v);
        (p - self.center).normalize()
    }

    pub fn parameters_of(&self, p: &Point3d) -> (f64, f64) {
        let d = *p - self.center;
        let len = d.length();
        if len < 1e-15 {
            return (0.0, 0.0);
        }
        let u = d.y.atan2(d.x);
        let v = (d.z / len).clamp(-1.0, 1.0).asin();
        (u, v)
    }
}

/// A torus surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Torus {
    pub center: Point3d,
    pub axis: Vec3,
    pub major_radius: f64,
    pub minor_radius: f64,
    pub ref_dir: Vec3,
}

impl Torus {
    pub fn new(center: Point3d, axis: Vec3, major_radius: f64, minor_radius: f64) -> Self {
        let axis = axis.normalize();
        let ref_dir = frame_axis_for(&axis);
        Self {
            center,
            axis,
            major_radius,
            minor_radius,
            ref_dir,
        }
    }

    fn y_dir(&self) -> Vec3 {
        self.axis.cross(&self.ref_dir)
    }

    fn ring_center(&self, u: f64) -> Point3d {
        self.center
            + self.ref_dir * (self.major_radius * u.cos())
            + self.y_dir() * (self.major_radius * u.sin())
    }

    /// Evaluate at (u=major angle, v=minor angle).
    pub fn evaluate(&self, u: f64, v: f64) -> Point3d {
        let ring = self.ring_center(u);
        let radial = (ring - self.center).normalize();
        ring + radial * (self.minor_radius * v.cos()) + self.axis * (self.minor_radius * v.sin())
    }

    pub fn normal_at(&self, u: f64, v: f64) -> Vec3 {
        let ring = self.ring_center(u);
        let p = self.evaluate(u, v);
        (p - ring).normalize()
    }

    pub fn parameters_of(&self, p: &Point3d) -> (f64, f64) {
        let d = *p - self.center;
        let axial = d.dot(&self.axis);
        let in_plane = d - self.axis * axial;
        let u = in_plane.dot(&self.y_dir()).atan2(in_plane.dot(&self.ref_dir));
        let ring = self.ring_center(u);
        let radial = (ring - self.center).normalize();
        let w = *p - ring;
        let v = w.dot(&self.axis).atan2(w.dot(&radial));
        (u, v)
    }
}

impl Surface {
    pub fn evaluate(&self, u: f64, v: f64) -> Point3d {
        match self {
            Surface::Plane(s) => s.evaluate(u, v),
            Surface::Cylinder(s) => s.evaluate(u, v),
            Surface::Cone(s) => s.evaluate(u, v),
            Surface::Sphere(s) => s.evaluate(u, v),
            Surface::Torus(s) => s.evaluate(u, v),
        }
    }

    pub fn normal_at(&self, u: f64, v: f64) -> Vec3 {
        match self {
            Surface::Plane(s) => s.normal_at(u, v),
            Surface::Cylinder(s) => s.normal_at(u, v),
            Surface::Cone(s) => s.normal_at(u, v),
            Surface::Sphere(s) => s.normal_at(u, v),
            Surface::Torus(s) => s.normal_at(u, v),
        }
    }

    /// Invert a point near the surface to its (u, v) parameters.
    /// Closed-form for every analytic type.
    pub fn parameters_of(&self, p: &Point3d) -> (f64, f64) {
        match self {
            Surface::Plane(s) => s.parameters_of(p),
            Surface::Cylinder(s) => s.parameters_of(p),
            Surface::Cone(s) => s.parameters_of(p),
            Surface::Sphere(s) => s.parameters_of(p),
            Surface::Torus(s) => s.parameters_of(p),
        }
    }

    /// Nearest surface point by invert-then-evaluate.
    pub fn project(&self, p: &Point3d) -> Point3d {
        let (u, v) = self.parameters_of(p);
        self.evaluate(u, v)
    }

    /// Geometry-type tag with the parameters the matcher compares.
    pub fn tag(&self) -> SurfaceTag {
        match self {
            Surface::Plane(_) => SurfaceTag::Plane,
            Surface::Cylinder(s) => SurfaceTag::Cylinder { radius: s.radius },
            Surface::Cone(s) => SurfaceTag::Cone {
                half_angle: s.half_angle,
            },
            Surface::Sphere(s) => SurfaceTag::Sphere { radius: s.radius },
            Surface::Torus(s) => SurfaceTag::Torus {
                major_radius: s.major_radius,
                minor_radius: s.minor_radius,
            },
        }
    }
}

/// A surface together with the face's orientation flag. When `reversed`,
/// the outward normal is the flipped surface normal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrientedSurface {
    pub surface: Surface,
    pub reversed: bool,
}

impl OrientedSurface {
    pub fn forward(surface: Surface) -> Self {
        Self {
            surface,
            reversed: false,
        }
    }

    pub fn reversed(surface: Surface) -> Self {
        Self {
            surface,
            reversed: true,
        }
    }

    pub fn evaluate(&self, u: f64, v: f64) -> Point3d {
        self.surface.evaluate(u, v)
    }

    /// Outward normal at (u, v), orientation applied.
    pub fn normal_at(&self, u: f64, v: f64) -> Vec3 {
        let n = self.surface.normal_at(u, v);
        if self.reversed {
            -n
        } else {
            n
        }
    }

    pub fn parameters_of(&self, p: &Point3d) -> (f64, f64) {
        self.surface.parameters_of(p)
    }

    pub fn project(&self, p: &Point3d) -> Point3d {
        self.surface.project(p)
    }

    pub fn tag(&self) -> SurfaceTag {
        self.surface.tag()
    }
}
