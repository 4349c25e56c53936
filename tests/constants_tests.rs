// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod content {
    include!("../src/content.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Geometry should be positive
    assert!(SKILL_SPHERE_RADIUS > 0.0);
    assert!(CUBE_HALF_PX > 0.0);
    assert!(RING_RX > 0.0 && RING_RY > 0.0 && RING_RZ > 0.0);

    // Spring must be stable and damped
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_DAMPING > 0.0);
    assert!(SPRING_MAX_DT_SEC > 0.0 && SPRING_MAX_DT_SEC < 0.1);
    assert!(SPRING_SETTLE_EPS > 0.0);

    // Depth floor is a fraction
    assert!(RING_MIN_DEPTH >= 0.0 && RING_MIN_DEPTH <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sphere_fits_inside_stage_and_depth_range() {
    // the whole sphere maps into positive depth, so nothing goes fully transparent
    assert!(SKILL_DEPTH_HALF_RANGE > SKILL_SPHERE_RADIUS);
    assert!(SKILL_STAGE_PX >= 2.0 * SKILL_SPHERE_RADIUS);
    // ring depth range covers its z swing
    assert!(RING_DEPTH_HALF_RANGE >= RING_RZ);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lod_breakpoints_are_ordered() {
    assert!(LOD_SMALL_BELOW_PX < LOD_MEDIUM_BELOW_PX);
    assert!(LOD_SMALL_COUNT < LOD_MEDIUM_COUNT);
    assert!(LOD_MEDIUM_COUNT < content::SKILLS.len());
    // fallback viewport lands in the full-detail bucket
    assert!(FALLBACK_VIEWPORT_PX >= LOD_MEDIUM_BELOW_PX);
}

#[test]
fn resting_pose_matches_reference() {
    assert_eq!(SKILL_REST_X_DEG, 15.0);
    assert_eq!(SKILL_REST_Y_DEG, -20.0);
}

#[test]
fn content_labels_are_unique() {
    for list in [content::SKILLS, content::RING_SKILLS] {
        for (i, a) in list.iter().enumerate() {
            for b in list.iter().skip(i + 1) {
                assert_ne!(a, b, "duplicate label {a}");
            }
        }
    }
    assert!(!content::PROJECTS.is_empty());
    assert!(content::SCENE_URL.starts_with("https://"));
}
