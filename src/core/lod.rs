/// Viewport size classes used to thin out the skill cloud on small screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LodBucket {
    Small,
    Medium,
    Large,
}

/// Breakpoints (CSS px) and the label budget for the two reduced buckets.
#[derive(Clone, Copy, Debug)]
pub struct LodPolicy {
    pub small_below: f64,
    pub medium_below: f64,
    pub small_count: usize,
    pub medium_count: usize,
}

impl LodPolicy {
    pub fn bucket(&self, viewport_width: f64) -> LodBucket {
        if viewport_width < self.small_below {
            LodBucket::Small
        } else if viewport_width < self.medium_below {
            LodBucket::Medium
        } else {
            LodBucket::Large
        }
    }

    /// Label budget for a bucket; `None` means the full list.
    pub fn budget(&self, bucket: LodBucket) -> Option<usize> {
        match bucket {
            LodBucket::Small => Some(self.small_count),
            LodBucket::Medium => Some(self.medium_count),
            LodBucket::Large => None,
        }
    }

    /// Prefix of `labels` to render at `viewport_width`.
    pub fn select<'a, S>(&self, labels: &'a [S], viewport_width: f64) -> &'a [S] {
        match self.budget(self.bucket(viewport_width)) {
            Some(n) => &labels[..n.min(labels.len())],
            None => labels,
        }
    }
}
