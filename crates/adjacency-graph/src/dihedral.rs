//! Dihedral classification across a shared edge.
//!
//! The classifier samples the shared curve at its midpoint, recovers each
//! face's in-plane transverse tangent from the surface frame, and measures
//! the signed angle between the two. Negative angles are convex edges,
//! positive concave. Angles within tolerance of a straight angle are either
//! reported as [`DihedralKind::Smooth`] or, when smoothing is disabled,
//! re-measured from offset samples pushed into each face interior.

use std::f64::consts::PI;

use dovetail_types::{DihedralKind, EdgeId, FaceId};
use shape_adapter::geometry::{OrientedSurface, Point3d, Vec3};
use shape_adapter::ShapeAdapter;

use crate::attributes::DihedralAttr;

/// Knobs for the classifier.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyOptions {
    /// Report near-flat transitions as `Smooth` instead of refining them.
    pub allow_smooth: bool,
    /// How close to a straight angle counts as flat, in radians.
    pub smooth_tolerance: f64,
    /// Model-space step used for offset sampling when refining a flat
    /// measurement. Scale to the part when classifying tiny geometry.
    pub refine_offset: f64,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            allow_smooth: true,
            smooth_tolerance: 1e-3,
            refine_offset: 1e-2,
        }
    }
}

impl ClassifyOptions {
    /// Classify tangential blends by their refined sign instead of `Smooth`.
    pub fn strict() -> Self {
        Self {
            allow_smooth: false,
            ..Self::default()
        }
    }
}

/// Classify the dihedral transition between faces `f` and `g`.
///
/// The shared edge is `edge_hint` when given, otherwise the lowest-id edge
/// the two faces share. `f == g` is the seam case: the edge's two co-edge
/// uses in the one face stand in for the two sides. Missing topology or
/// degenerate geometry yields [`DihedralKind::Undefined`]; the function
/// never panics and holds no state, so concurrent calls are safe whenever
/// the adapter is `Sync`.
pub fn classify_dihedral(
    shape: &dyn ShapeAdapter,
    f: FaceId,
    g: FaceId,
    edge_hint: Option<EdgeId>,
    options: &ClassifyOptions,
) -> DihedralAttr {
    try_classify(shape, f, g, edge_hint, options).unwrap_or_else(DihedralAttr::undefined)
}

fn try_classify(
    shape: &dyn ShapeAdapter,
    f: FaceId,
    g: FaceId,
    edge_hint: Option<EdgeId>,
    options: &ClassifyOptions,
) -> Option<DihedralAttr> {
    let edge = match edge_hint {
        Some(edge) if edge_is_shared(shape, f, g, edge) => edge,
        Some(_) => return None,
        None => shape.shared_edges(f, g).first().copied()?,
    };

    let segment = shape.edge_curve(edge)?;
    let t_mid = segment.midpoint_param();
    let p = segment.sample(t_mid);
    let tangent = segment.tangent_at(t_mid)?;

    let surf_f = shape.face_surface(f)?;
    let surf_g = shape.face_surface(g)?;

    let (forward_f, forward_g) = if f == g {
        // The two coincident uses of a seam edge run in opposite directions.
        let first = shape.coedge_forward(f, edge)?;
        (first, !first)
    } else {
        (shape.coedge_forward(f, edge)?, shape.coedge_forward(g, edge)?)
    };
    let t_f = if forward_f { tangent } else { -tangent };
    let t_g = if forward_g { tangent } else { -tangent };

    let v_f = transverse_tangent(&surf_f, &p, &t_f)?;
    let v_g = transverse_tangent(&surf_g, &p, &t_g)?;

    let angle = v_f.signed_angle_to(&v_g, &t_f);
    if PI - angle.abs() > options.smooth_tolerance {
        return Some(DihedralAttr::new(sign_to_kind(angle), angle));
    }

    if options.allow_smooth {
        return Some(DihedralAttr::new(DihedralKind::Smooth, angle));
    }

    match refine_flat(&surf_f, &surf_g, &p, &t_f, &v_f, &v_g, options) {
        Some(refined) if refined.abs() > options.smooth_tolerance => {
            // Reconstruct the full angle from the signed deviation.
            let angle = refined.signum() * (PI - refined.abs());
            Some(DihedralAttr::new(sign_to_kind(angle), angle))
        }
        _ => Some(DihedralAttr::new(DihedralKind::Undefined, angle)),
    }
}

fn sign_to_kind(angle: f64) -> DihedralKind {
    if angle < 0.0 {
        DihedralKind::Convex
    } else {
        DihedralKind::Concave
    }
}

/// True when `edge` bounds both faces, counting a seam edge's double use.
fn edge_is_shared(shape: &dyn ShapeAdapter, f: FaceId, g: FaceId, edge: EdgeId) -> bool {
    let faces = shape.edge_faces(edge);
    if f == g {
        faces.iter().filter(|id| **id == f).count() >= 2
    } else {
        faces.contains(&f) && faces.contains(&g)
    }
}

/// Unit tangent perpendicular to the co-edge direction, pointing into the
/// face interior: outward normal crossed with the co-edge direction.
fn transverse_tangent(
    surface: &OrientedSurface,
    p: &Point3d,
    coedge_dir: &Vec3,
) -> Option<Vec3> {
    let (u, v) = surface.parameters_of(p);
    let normal = surface.normal_at(u, v);
    normal.cross(coedge_dir).normalized()
}

/// Re-measure a flat-looking transition from offset samples.
///
/// Walks a few steps from the edge point into each face interior, projects
/// the offsets back onto their surfaces, and measures the angle between the
/// projected chords. Near the straight angle atan2 flips sign unstably, so
/// the samples are combined as signed deviations from ±π rather than raw
/// angles. Returns the mean signed deviation: negative for convex, positive
/// for concave, near zero when the transition really is flat.
fn refine_flat(
    surf_f: &OrientedSurface,
    surf_g: &OrientedSurface,
    p: &Point3d,
    t_ref: &Vec3,
    v_f: &Vec3,
    v_g: &Vec3,
    options: &ClassifyOptions,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut samples = 0usize;
    for scale in [0.5, 1.0, 2.0] {
        let step = options.refine_offset * scale;
        let q_f = surf_f.project(&(*p + *v_f * step));
        let q_g = surf_g.project(&(*p + *v_g * step));
        let w_f = (q_f - *p).normalized()?;
        let w_g = (q_g - *p).normalized()?;
        let angle = w_f.signed_angle_to(&w_g, t_ref);
        sum += angle.signum() * (PI - angle.abs());
        samples += 1;
    }
    if samples == 0 {
        return None;
    }
    Some(sum / samples as f64)
}
