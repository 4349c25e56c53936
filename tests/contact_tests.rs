// Host-side tests for the contact form state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod contact {
    include!("../src/core/contact.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::CONTACT_SUBMIT_DELAY_MS;
use contact::*;

const T0: f64 = 5_000.0;

fn filled() -> ContactForm {
    let mut form = ContactForm::new(CONTACT_SUBMIT_DELAY_MS);
    form.draft = ContactDraft {
        name: "Ada Lovelace".into(),
        email: "ada@compute.org".into(),
        message: "Let's build an engine.".into(),
    };
    form
}

#[test]
fn form_starts_idle_and_enabled() {
    let form = ContactForm::new(CONTACT_SUBMIT_DELAY_MS);
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert!(!form.status().submit_disabled());
    assert_eq!(form.status().button_label(), "Send Message");
}

#[test]
fn submit_goes_idle_loading_done() {
    let mut form = filled();
    assert!(form.submit(T0));
    assert_eq!(form.status(), SubmitStatus::Loading);
    assert!(form.status().submit_disabled());
    assert_eq!(form.status().button_label(), "Sending");

    assert!(form.tick(T0 + 1200.0));
    assert_eq!(form.status(), SubmitStatus::Done);
    assert_eq!(form.status().button_label(), "Sent \u{2713}");
}

#[test]
fn resubmitting_while_loading_is_ignored() {
    let mut form = filled();
    assert!(form.submit(T0));
    assert!(!form.submit(T0));
    assert_eq!(form.status(), SubmitStatus::Loading);
}

#[test]
fn done_form_stays_disabled() {
    let mut form = filled();
    form.submit(T0);
    form.tick(T0 + 1200.0);
    assert!(form.status().submit_disabled());
    assert!(!form.submit(T0));
    assert!(!form.tick(T0 + 1200.0));
    assert_eq!(form.status(), SubmitStatus::Done);
}

#[test]
fn tick_without_submit_is_a_noop() {
    let mut form = filled();
    assert!(!form.tick(T0 + 1200.0));
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn blank_fields_block_submit() {
    let mut form = filled();
    form.draft.email = "   ".into();
    assert!(!form.draft.is_complete());
    assert!(!form.submit(T0));
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn stays_loading_until_delay_elapses() {
    let mut form = filled();
    assert!(form.submit(T0));
    assert_eq!(form.remaining_ms(T0), Some(1200));
    for elapsed in [0.0, 1.0, 600.0, 1199.0, 1199.5] {
        assert!(!form.tick(T0 + elapsed), "completed early at {elapsed}ms");
        assert_eq!(form.status(), SubmitStatus::Loading);
        assert!(form.status().submit_disabled());
        assert!(!form.submit(T0 + elapsed));
    }
    assert_eq!(form.remaining_ms(T0 + 1199.5), Some(1));
    assert_eq!(form.remaining_ms(T0 + 1200.0), None);
    assert!(form.tick(T0 + 1200.0));
    assert_eq!(form.status(), SubmitStatus::Done);
    assert!(!form.tick(T0 + 5000.0));
}

#[test]
fn late_timer_still_completes() {
    let mut form = filled();
    form.submit(T0);
    assert!(form.tick(T0 + 60_000.0));
    assert_eq!(form.status(), SubmitStatus::Done);
}

#[test]
fn delay_is_a_parameter() {
    let mut form = ContactForm::new(50);
    form.draft = filled().draft;
    assert_eq!(form.delay_ms(), 50);
    assert!(form.submit(0.0));
    assert!(!form.tick(49.0));
    assert!(form.tick(50.0));

    let mut instant = ContactForm::new(0);
    instant.draft = filled().draft;
    assert!(instant.submit(0.0));
    assert_eq!(instant.remaining_ms(0.0), None);
    assert!(instant.tick(0.0));
}

#[test]
fn idle_form_has_nothing_pending() {
    let form = filled();
    assert_eq!(form.remaining_ms(T0), None);
    let mut form = filled();
    form.submit(f64::NAN);
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn delay_is_1200ms() {
    assert_eq!(CONTACT_SUBMIT_DELAY_MS, 1200);
}
