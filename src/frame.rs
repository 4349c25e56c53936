use crate::constants::{SPRING_DAMPING, SPRING_MAX_DT_SEC, SPRING_SETTLE_EPS, SPRING_STIFFNESS};
use crate::core::{Rotation, RotationState, SmoothedRotation, SpringParams};
use crate::dom;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Per-frame work driven by a [`FrameLoop`].
pub trait FrameContext {
    /// Advance by `dt_sec`; return `false` once there is nothing left to animate.
    fn frame(&mut self, dt_sec: f32) -> bool;
}

/// On-demand requestAnimationFrame loop.
///
/// Runs while the context reports work, sleeps once it settles and is woken
/// again with [`FrameLoop::kick`]. Dropping the loop cancels the pending frame.
pub struct FrameLoop<T: FrameContext + 'static> {
    ctx: Rc<RefCell<T>>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    last_instant: Rc<Cell<Option<Instant>>>,
}

impl<T: FrameContext + 'static> FrameLoop<T> {
    pub fn new(ctx: T) -> Self {
        Self {
            ctx: Rc::new(RefCell::new(ctx)),
            pending: Rc::new(RefCell::new(None)),
            last_instant: Rc::new(Cell::new(None)),
        }
    }

    pub fn kick(&self) {
        if self.pending.borrow().is_some() {
            return;
        }
        schedule(
            self.ctx.clone(),
            self.pending.clone(),
            self.last_instant.clone(),
        );
    }

    pub fn is_running(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<T: FrameContext + 'static> Drop for FrameLoop<T> {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

fn schedule<T: FrameContext + 'static>(
    ctx: Rc<RefCell<T>>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    last_instant: Rc<Cell<Option<Instant>>>,
) {
    let pending_tick = pending.clone();
    let handle = request_animation_frame(move |_| {
        pending_tick.borrow_mut().take();
        let now = Instant::now();
        // first frame after waking has no meaningful delta
        let dt_sec = last_instant
            .replace(Some(now))
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0);
        let keep_running = ctx.borrow_mut().frame(dt_sec);
        if keep_running {
            schedule(ctx, pending_tick, last_instant);
        } else {
            last_instant.set(None);
        }
    });
    *pending.borrow_mut() = Some(handle);
}

// ---------------- Skill cloud ----------------

/// Eases the skill cloud toward the pointer-driven target rotation.
pub struct SkillCloudFrame {
    pub cloud: web::Element,
    pub rotation: Rc<RefCell<RotationState>>,
    pub smoothed: SmoothedRotation,
}

impl SkillCloudFrame {
    pub fn new(cloud: web::Element, rotation: Rc<RefCell<RotationState>>) -> Self {
        let start: Rotation = rotation.borrow().target();
        dom::set_style(&cloud, "transform", &start.css());
        Self {
            cloud,
            rotation,
            smoothed: SmoothedRotation::new(start),
        }
    }
}

pub const SPRING: SpringParams = SpringParams {
    stiffness: SPRING_STIFFNESS,
    damping: SPRING_DAMPING,
    max_dt_sec: SPRING_MAX_DT_SEC,
};

impl FrameContext for SkillCloudFrame {
    fn frame(&mut self, dt_sec: f32) -> bool {
        let target = self.rotation.borrow().target();
        let current = self.smoothed.step(target, dt_sec, &SPRING);
        dom::set_style(&self.cloud, "transform", &current.css());
        !self.smoothed.is_settled(target, SPRING_SETTLE_EPS)
    }
}
