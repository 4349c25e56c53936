// Host-side checks on the bundled stylesheet and page copy.

#![allow(dead_code)]
mod content {
    include!("../src/content.rs");
}

const STYLES: &str = include_str!("../src/styles.css");

fn rules_for(selector: &str) -> Vec<&'static str> {
    STYLES
        .lines()
        .filter(|line| {
            line.split('{')
                .next()
                .map(|sel| sel.split(',').any(|s| s.trim() == selector))
                .unwrap_or(false)
        })
        .collect()
}

#[test]
fn spinner_does_not_share_the_orbit_ring_rule() {
    // `.ring` is absolutely positioned to fill its stage; the loader spinner must not pick it up
    assert!(rules_for(".loader .ring").is_empty());
    assert_eq!(rules_for(".loader .spinner").len(), 1);
    assert!(rules_for(".ring")[0].contains("position: absolute"));
}

#[test]
fn block_padding_applies_to_section_wrappers() {
    // sections are wrapped in `<div class="wrap block">`
    assert!(rules_for("section.block").is_empty());
    let block = rules_for(".block");
    assert_eq!(block.len(), 1);
    // horizontal padding comes from `.wrap`
    assert!(block[0].contains("padding-top") && block[0].contains("padding-bottom"));
    assert!(!block[0].contains("padding:"));
}

#[test]
fn shell_classes_are_styled() {
    for selector in [".skip-link", ".skip-link:focus", ".divider", ".divider .fade"] {
        assert_eq!(rules_for(selector).len(), 1, "missing rule for {selector}");
    }
}

#[test]
fn contact_pitch_has_a_blurb() {
    assert!(content::CONTACT_BLURB.starts_with("I partner with startups"));
    assert!(!content::CONTACT_BLURB.contains("  "));
    assert_eq!(content::CONTACT_PITCH.len(), 3);
}
