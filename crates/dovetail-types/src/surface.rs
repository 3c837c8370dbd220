use serde::{Deserialize, Serialize};

/// Geometry-type tag of a face's underlying surface, including the numeric
/// parameters that distinguish congruent instances of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SurfaceTag {
    Plane,
    Cylinder { radius: f64 },
    Cone { half_angle: f64 },
    Sphere { radius: f64 },
    Torus { major_radius: f64, minor_radius: f64 },
    /// Free-form (spline) surface. Carries no comparable parameters.
    FreeForm,
}

/// Parameterless surface-type discriminant, used for exact type matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SurfaceClass {
    Plane,
    Cylinder,
    Cone,
    Sphere,
    Torus,
    FreeForm,
}

impl SurfaceTag {
    pub fn class(&self) -> SurfaceClass {
        match self {
            SurfaceTag::Plane => SurfaceClass::Plane,
            SurfaceTag::Cylinder { .. } => SurfaceClass::Cylinder,
            SurfaceTag::Cone { .. } => SurfaceClass::Cone,
            SurfaceTag::Sphere { .. } => SurfaceClass::Sphere,
            SurfaceTag::Torus { .. } => SurfaceClass::Torus,
            SurfaceTag::FreeForm => SurfaceClass::FreeForm,
        }
    }

    /// True when both tags have the same surface type and their numeric
    /// parameters agree within `tol`. Types without parameters compare by
    /// type alone.
    pub fn params_match(&self, other: &SurfaceTag, tol: f64) -> bool {
        match (self, other) {
            (SurfaceTag::Plane, SurfaceTag::Plane) => true,
            (SurfaceTag::FreeForm, SurfaceTag::FreeForm) => true,
            (SurfaceTag::Cylinder { radius: a }, SurfaceTag::Cylinder { radius: b }) => {
                (a - b).abs() <= tol
            }
            (SurfaceTag::Cone { half_angle: a }, SurfaceTag::Cone { half_angle: b }) => {
                (a - b).abs() <= tol
            }
            (SurfaceTag::Sphere { radius: a }, SurfaceTag::Sphere { radius: b }) => {
                (a - b).abs() <= tol
            }
            (
                SurfaceTag::Torus {
                    major_radius: ma,
                    minor_radius: na,
                },
                SurfaceTag::Torus {
                    major_radius: mb,
                    minor_radius: nb,
                },
            ) => (ma - mb).abs() <= tol && (na - nb).abs() <= tol,
            _ => false,
        }
    }
}
