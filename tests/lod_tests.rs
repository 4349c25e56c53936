// Host-side tests for the skill cloud level-of-detail policy.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lod {
    include!("../src/core/lod.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod content {
    include!("../src/content.rs");
}

use constants::*;
use lod::*;

fn policy() -> LodPolicy {
    LodPolicy {
        small_below: LOD_SMALL_BELOW_PX,
        medium_below: LOD_MEDIUM_BELOW_PX,
        small_count: LOD_SMALL_COUNT,
        medium_count: LOD_MEDIUM_COUNT,
    }
}

#[test]
fn reference_list_has_24_skills() {
    assert_eq!(content::SKILLS.len(), 24);
}

#[test]
fn label_count_follows_viewport_width() {
    let p = policy();
    assert_eq!(p.select(content::SKILLS, 500.0).len(), 12);
    assert_eq!(p.select(content::SKILLS, 800.0).len(), 18);
    assert_eq!(p.select(content::SKILLS, 1200.0).len(), 24);
}

#[test]
fn bucket_boundaries_are_half_open() {
    let p = policy();
    assert_eq!(p.bucket(0.0), LodBucket::Small);
    assert_eq!(p.bucket(639.9), LodBucket::Small);
    assert_eq!(p.bucket(640.0), LodBucket::Medium);
    assert_eq!(p.bucket(1023.9), LodBucket::Medium);
    assert_eq!(p.bucket(1024.0), LodBucket::Large);
    assert_eq!(p.bucket(4096.0), LodBucket::Large);
}

#[test]
fn selection_is_a_prefix() {
    let p = policy();
    let picked = p.select(content::SKILLS, 700.0);
    assert_eq!(picked, &content::SKILLS[..18]);
    assert_eq!(picked[0], "Python");
}

#[test]
fn short_lists_are_returned_whole() {
    let p = policy();
    let few = ["Rust", "WGSL", "WebAssembly"];
    assert_eq!(p.select(&few, 320.0).len(), 3);
    let none: [&str; 0] = [];
    assert!(p.select(&none, 320.0).is_empty());
}

#[test]
fn large_bucket_has_no_budget() {
    let p = policy();
    assert_eq!(p.budget(LodBucket::Small), Some(12));
    assert_eq!(p.budget(LodBucket::Medium), Some(18));
    assert_eq!(p.budget(LodBucket::Large), None);
}
