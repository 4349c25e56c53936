// Decorative 3D layouts for the skill cloud, the about-section orbit ring and
// the cube avatar.
//
// Everything here is pure and deterministic: inputs are label lists and a few
// tuning numbers, outputs are positions and style parameters that the web
// layer turns into CSS transforms.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// A display label pinned to a fixed position in the cloud's local space.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledPoint {
    pub label: String,
    pub position: Vec3,
}

impl LabeledPoint {
    /// CSS `translate3d` for this point, in pixels.
    pub fn translate3d(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, {:.2}px)",
            self.position.x, self.position.y, self.position.z
        )
    }
}

/// Spread `labels` over a sphere of `radius` using the golden-angle spiral.
///
/// Index `i` of `n` lands at colatitude `acos(1 - 2(i + 0.5)/n)` and azimuth
/// `pi(1 + sqrt 5)(i + 0.5)`, which avoids the polar clustering of a
/// latitude/longitude grid. An empty list yields an empty layout.
pub fn fibonacci_sphere<S: AsRef<str>>(labels: &[S], radius: f32) -> Vec<LabeledPoint> {
    let n = labels.len();
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| LabeledPoint {
            label: label.as_ref().to_string(),
            position: fibonacci_point(i, n, radius),
        })
        .collect()
}

#[inline]
pub fn fibonacci_point(i: usize, n: usize, radius: f32) -> Vec3 {
    let k = i as f32 + 0.5;
    // clamp guards acos against rounding just past +-1
    let phi = (1.0 - 2.0 * k / n.max(1) as f32).clamp(-1.0, 1.0).acos();
    let theta = PI * (1.0 + 5.0_f32.sqrt()) * k;
    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

/// Scale and opacity used to fake depth for a point in the skill cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthStyle {
    pub scale: f32,
    pub opacity: f32,
}

/// Map a z coordinate to a depth style; nearer points are larger and more opaque.
///
/// `depth = (z + half_range) / (2 * half_range)` is left unclamped, so the
/// mapping stays strictly linear over the whole sphere.
#[inline]
pub fn depth_style(z: f32, half_range: f32) -> DepthStyle {
    let depth = (z + half_range) / (2.0 * half_range);
    DepthStyle {
        scale: 0.8 + depth * 0.6,
        opacity: 0.5 + depth * 0.5,
    }
}

// ---------------- Orbit ring (about section) ----------------

/// One label on the flattened figure-eight orbit under the about blurb.
#[derive(Clone, Debug, PartialEq)]
pub struct RingNode {
    pub label: String,
    pub position: Vec3,
    pub depth: f32,
}

impl RingNode {
    pub fn text_alpha(&self) -> f32 {
        0.6 + self.depth * 0.4
    }
    pub fn background_alpha(&self) -> f32 {
        0.05 + self.depth * 0.1
    }
    pub fn border_alpha(&self) -> f32 {
        0.2 + self.depth * 0.2
    }
    pub fn blur_px(&self) -> f32 {
        (1.0 - self.depth) * 0.5
    }
}

/// Ring extents (horizontal radius, vertical radius, depth swing) plus the
/// z range mapped onto `[0, 1]` depth and its floor.
#[derive(Clone, Copy, Debug)]
pub struct RingShape {
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
    pub depth_half_range: f32,
    pub min_depth: f32,
}

pub fn orbit_ring<S: AsRef<str>>(labels: &[S], shape: RingShape) -> Vec<RingNode> {
    let n = labels.len().max(1) as f32;
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let angle = (i as f32 / n) * TAU;
            let z = (angle * 2.0).sin() * shape.rz;
            let depth = ((z + shape.depth_half_range) / (2.0 * shape.depth_half_range))
                .max(shape.min_depth);
            RingNode {
                label: label.as_ref().to_string(),
                position: Vec3::new(angle.cos() * shape.rx, angle.sin() * shape.ry, z),
                depth,
            }
        })
        .collect()
}

// ---------------- Cube avatar ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeSide {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeFace {
    pub side: CubeSide,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub translate_z: f32,
}

impl CubeFace {
    pub fn css_transform(&self) -> String {
        let mut out = String::new();
        if self.rotate_y_deg != 0.0 {
            out.push_str(&format!("rotateY({}deg) ", self.rotate_y_deg));
        }
        if self.rotate_x_deg != 0.0 {
            out.push_str(&format!("rotateX({}deg) ", self.rotate_x_deg));
        }
        out.push_str(&format!("translateZ({}px)", self.translate_z));
        out
    }

    /// Outward unit normal after applying the face rotation to +Z.
    pub fn normal(&self) -> Vec3 {
        let rot = glam::Quat::from_rotation_y(self.rotate_y_deg.to_radians())
            * glam::Quat::from_rotation_x(-self.rotate_x_deg.to_radians());
        (rot * Vec3::Z).round()
    }
}

/// The six faces of a cube with half-size `half`, in CSS transform order.
pub fn cube_faces(half: f32) -> [CubeFace; 6] {
    let face = |side, rotate_x_deg, rotate_y_deg| CubeFace {
        side,
        rotate_x_deg,
        rotate_y_deg,
        translate_z: half,
    };
    [
        face(CubeSide::Front, 0.0, 0.0),
        face(CubeSide::Right, 0.0, 90.0),
        face(CubeSide::Back, 0.0, 180.0),
        face(CubeSide::Left, 0.0, -90.0),
        face(CubeSide::Top, 90.0, 0.0),
        face(CubeSide::Bottom, -90.0, 0.0),
    ]
}
