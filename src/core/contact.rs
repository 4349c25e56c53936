/// Submit lifecycle of the contact form. There is no failure state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Done,
}

impl SubmitStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Loading => "Sending",
            SubmitStatus::Done => "Sent \u{2713}",
        }
    }

    /// The submit control only accepts input while idle.
    pub fn submit_disabled(self) -> bool {
        self != SubmitStatus::Idle
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// All three fields are required; whitespace-only counts as blank.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|s| !s.trim().is_empty())
    }
}

/// Client-side contact form state. Nothing is sent anywhere.
///
/// A submission is simulated: it stays Loading until `delay_ms` has elapsed
/// since `submit`, measured on the caller's millisecond clock.
#[derive(Clone, Debug)]
pub struct ContactForm {
    pub draft: ContactDraft,
    status: SubmitStatus,
    delay_ms: u32,
    sent_at_ms: Option<f64>,
}

impl ContactForm {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            draft: ContactDraft::default(),
            status: SubmitStatus::Idle,
            delay_ms,
            sent_at_ms: None,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Start a submission at `now_ms`. Returns `true` only on the Idle -> Loading edge.
    pub fn submit(&mut self, now_ms: f64) -> bool {
        if self.status != SubmitStatus::Idle || !self.draft.is_complete() || !now_ms.is_finite() {
            return false;
        }
        self.status = SubmitStatus::Loading;
        self.sent_at_ms = Some(now_ms);
        true
    }

    /// Milliseconds left before the send completes; `None` once it is due or
    /// when nothing is in flight.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<u32> {
        if self.status != SubmitStatus::Loading {
            return None;
        }
        let sent_at = self.sent_at_ms?;
        let left = f64::from(self.delay_ms) - (now_ms - sent_at);
        (left > 0.0).then(|| left.ceil() as u32)
    }

    /// Finish the send if its delay has elapsed. Returns `true` on the
    /// Loading -> Done edge.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.status != SubmitStatus::Loading || self.remaining_ms(now_ms).is_some() {
            return false;
        }
        self.status = SubmitStatus::Done;
        self.sent_at_ms = None;
        true
    }
}
