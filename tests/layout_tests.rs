// Host-side tests for the decorative layouts.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod layout {
    include!("../src/core/layout.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod content {
    include!("../src/content.rs");
}

use constants::*;
use layout::*;

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("skill-{i}")).collect()
}

#[test]
fn sphere_returns_one_point_per_label() {
    for n in 0..=64 {
        let pts = fibonacci_sphere(&labels(n), SKILL_SPHERE_RADIUS);
        assert_eq!(pts.len(), n, "wrong point count for n={n}");
    }
}

#[test]
fn sphere_of_nothing_is_empty() {
    let empty: [&str; 0] = [];
    assert!(fibonacci_sphere(&empty, SKILL_SPHERE_RADIUS).is_empty());
}

#[test]
fn sphere_single_label_is_finite_and_on_surface() {
    let pts = fibonacci_sphere(&["Rust"], SKILL_SPHERE_RADIUS);
    assert_eq!(pts.len(), 1);
    let p = pts[0].position;
    assert!(p.is_finite());
    assert!((p.length() - SKILL_SPHERE_RADIUS).abs() < 1e-2);
    assert_eq!(pts[0].label, "Rust");
}

#[test]
fn sphere_points_lie_on_radius() {
    for n in [1, 2, 5, 12, 18, 24, 100] {
        for p in fibonacci_sphere(&labels(n), SKILL_SPHERE_RADIUS) {
            let r2 = p.position.length_squared();
            let expected = SKILL_SPHERE_RADIUS * SKILL_SPHERE_RADIUS;
            assert!(
                (r2 - expected).abs() < expected * 1e-4,
                "{} off sphere: r2={r2}",
                p.label
            );
        }
    }
}

#[test]
fn sphere_points_are_pairwise_distinct() {
    for n in 2..=48 {
        let pts = fibonacci_sphere(&labels(n), SKILL_SPHERE_RADIUS);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = pts[i].position.distance(pts[j].position);
                assert!(d > 1.0, "points {i} and {j} coincide for n={n} (d={d})");
            }
        }
    }
}

#[test]
fn sphere_is_deterministic_and_keeps_label_order() {
    let names = ["a", "b", "c", "d"];
    let first = fibonacci_sphere(&names, 10.0);
    let second = fibonacci_sphere(&names, 10.0);
    assert_eq!(first, second);
    let got: Vec<&str> = first.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(got, names);
}

#[test]
fn sphere_spans_both_hemispheres() {
    let pts = fibonacci_sphere(&labels(24), SKILL_SPHERE_RADIUS);
    assert!(pts.iter().any(|p| p.position.z > 0.0));
    assert!(pts.iter().any(|p| p.position.z < 0.0));
    // first point sits near the +z pole, last near -z
    assert!(pts[0].position.z > pts[23].position.z);
}

#[test]
fn depth_style_is_monotonic_in_z() {
    let r = SKILL_SPHERE_RADIUS;
    let mut prev = depth_style(-r, SKILL_DEPTH_HALF_RANGE);
    let steps = 200;
    for k in 1..=steps {
        let z = -r + 2.0 * r * k as f32 / steps as f32;
        let s = depth_style(z, SKILL_DEPTH_HALF_RANGE);
        assert!(s.scale >= prev.scale, "scale decreased at z={z}");
        assert!(s.opacity >= prev.opacity, "opacity decreased at z={z}");
        prev = s;
    }
}

#[test]
fn depth_style_over_sphere_stays_visible() {
    let back = depth_style(-SKILL_SPHERE_RADIUS, SKILL_DEPTH_HALF_RANGE);
    let front = depth_style(SKILL_SPHERE_RADIUS, SKILL_DEPTH_HALF_RANGE);
    assert!(back.opacity > 0.5 && back.opacity < front.opacity);
    assert!(front.opacity <= 1.0);
    assert!(back.scale > 0.8 && front.scale < 1.4);
}

#[test]
fn translate3d_formats_pixels() {
    let p = LabeledPoint {
        label: "x".into(),
        position: glam::Vec3::new(1.0, -2.5, 3.25),
    };
    assert_eq!(p.translate3d(), "translate3d(1.00px, -2.50px, 3.25px)");
}

#[test]
fn cube_has_six_distinct_faces() {
    let faces = cube_faces(CUBE_HALF_PX);
    let normals: Vec<glam::Vec3> = faces.iter().map(|f| f.normal()).collect();
    for (i, a) in normals.iter().enumerate() {
        assert!((a.length() - 1.0).abs() < 1e-5);
        for b in normals.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
    assert!(faces.iter().all(|f| f.translate_z == CUBE_HALF_PX));
}

#[test]
fn cube_face_transforms_match_css() {
    let faces = cube_faces(40.0);
    assert_eq!(faces[0].css_transform(), "translateZ(40px)");
    assert_eq!(faces[1].css_transform(), "rotateY(90deg) translateZ(40px)");
    assert_eq!(faces[3].css_transform(), "rotateY(-90deg) translateZ(40px)");
    assert_eq!(faces[5].css_transform(), "rotateX(-90deg) translateZ(40px)");
    assert_eq!(faces[4].side, CubeSide::Top);
}

#[test]
fn orbit_ring_places_every_label_with_floored_depth() {
    let shape = RingShape {
        rx: RING_RX,
        ry: RING_RY,
        rz: RING_RZ,
        depth_half_range: RING_DEPTH_HALF_RANGE,
        min_depth: RING_MIN_DEPTH,
    };
    let nodes = orbit_ring(content::RING_SKILLS, shape);
    assert_eq!(nodes.len(), content::RING_SKILLS.len());
    for n in &nodes {
        assert!(n.depth >= RING_MIN_DEPTH && n.depth <= 1.0);
        assert!(n.position.x.abs() <= RING_RX + 1e-3);
        assert!(n.position.y.abs() <= RING_RY + 1e-3);
        assert!(n.text_alpha() <= 1.0 && n.blur_px() >= 0.0);
    }
    // first node starts on the +x axis
    assert!((nodes[0].position.x - RING_RX).abs() < 1e-3);
}
