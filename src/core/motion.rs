// Pointer-to-transform math shared by the interactive sections.
//
// All functions take plain numbers (client coordinates, a measured rect) so
// they can be exercised on the host. A rect that cannot be measured yields
// `None` and callers keep their previous state.

/// Bounding box of a container in client (CSS px) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    /// A rect is usable once laid out with a finite, non-zero size.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.left.is_finite()
            && self.top.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn center(&self) -> [f32; 2] {
        [self.left + self.width * 0.5, self.top + self.height * 0.5]
    }
}

/// Pointer position relative to `rect`, `[0, 1]` on each axis inside the box.
///
/// Points outside the box map outside `[0, 1]`; no clamping is applied.
#[inline]
pub fn normalize_pointer(rect: &ContainerRect, client_x: f32, client_y: f32) -> Option<[f32; 2]> {
    if !rect.is_measurable() || !client_x.is_finite() || !client_y.is_finite() {
        return None;
    }
    Some([
        (client_x - rect.left) / rect.width,
        (client_y - rect.top) / rect.height,
    ])
}

/// Two-axis rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x_deg: f32,
    pub y_deg: f32,
}

impl Rotation {
    pub const fn new(x_deg: f32, y_deg: f32) -> Self {
        Self { x_deg, y_deg }
    }

    pub fn css(&self) -> String {
        format!("rotateX({:.3}deg) rotateY({:.3}deg)", self.x_deg, self.y_deg)
    }
}

/// Linear pointer-to-rotation mapping centred on a resting pose.
///
/// `x_deg = (ny - 0.5) * x_span + rest.x_deg` and
/// `y_deg = (nx - 0.5) * y_span + rest.y_deg`.
#[derive(Clone, Copy, Debug)]
pub struct RotationMap {
    pub rest: Rotation,
    pub x_span_deg: f32,
    pub y_span_deg: f32,
}

impl RotationMap {
    #[inline]
    pub fn map(&self, normalized: [f32; 2]) -> Rotation {
        let [nx, ny] = normalized;
        Rotation {
            x_deg: (ny - 0.5) * self.x_span_deg + self.rest.x_deg,
            y_deg: (nx - 0.5) * self.y_span_deg + self.rest.y_deg,
        }
    }
}

/// Target rotation of a pointer-tracked body.
///
/// Holds the last valid target; unmeasurable containers leave it untouched.
#[derive(Clone, Debug)]
pub struct RotationState {
    map: RotationMap,
    target: Rotation,
}

impl RotationState {
    pub fn new(map: RotationMap) -> Self {
        Self {
            map,
            target: map.rest,
        }
    }

    pub fn target(&self) -> Rotation {
        self.target
    }

    /// Feed a pointer move; returns `true` when the target changed.
    pub fn on_pointer(&mut self, rect: &ContainerRect, client_x: f32, client_y: f32) -> bool {
        match normalize_pointer(rect, client_x, client_y) {
            Some(n) => {
                self.target = self.map.map(n);
                true
            }
            None => false,
        }
    }
}

// ---------------- Spring smoothing ----------------

/// Damped spring parameters (unit mass).
#[derive(Clone, Copy, Debug)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub max_dt_sec: f32,
}

/// One spring-driven scalar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
}

impl Spring {
    pub const fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    /// Semi-implicit Euler step toward `target`. Non-finite inputs are ignored.
    pub fn step(&mut self, target: f32, dt_sec: f32, p: &SpringParams) {
        if !target.is_finite() || !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        // long stalls (background tab) would otherwise explode the integrator
        let dt = dt_sec.min(p.max_dt_sec);
        let accel = p.stiffness * (target - self.value) - p.damping * self.velocity;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
    }

    pub fn is_settled(&self, target: f32, eps: f32) -> bool {
        (self.value - target).abs() < eps && self.velocity.abs() < eps
    }
}

/// Spring-smoothed rotation that chases a [`RotationState`] target.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedRotation {
    x: Spring,
    y: Spring,
}

impl SmoothedRotation {
    pub fn new(start: Rotation) -> Self {
        Self {
            x: Spring::at(start.x_deg),
            y: Spring::at(start.y_deg),
        }
    }

    pub fn step(&mut self, target: Rotation, dt_sec: f32, p: &SpringParams) -> Rotation {
        self.x.step(target.x_deg, dt_sec, p);
        self.y.step(target.y_deg, dt_sec, p);
        self.current()
    }

    pub fn current(&self) -> Rotation {
        Rotation::new(self.x.value, self.y.value)
    }

    pub fn is_settled(&self, target: Rotation, eps: f32) -> bool {
        self.x.is_settled(target.x_deg, eps) && self.y.is_settled(target.y_deg, eps)
    }
}

// ---------------- Parallax and tilt ----------------

/// Hero parallax offset: pointer displacement from the container's half-size,
/// as a fraction of its size.
///
/// Uses the container size only (not its offset), so it tracks window-level
/// pointer moves over the whole page.
#[inline]
pub fn parallax_offset(rect: &ContainerRect, client_x: f32, client_y: f32) -> Option<[f32; 2]> {
    if !rect.is_measurable() || !client_x.is_finite() || !client_y.is_finite() {
        return None;
    }
    Some([
        (client_x - rect.width * 0.5) / rect.width,
        (client_y - rect.height * 0.5) / rect.height,
    ])
}

/// Tilt for a project card: pointer offset from the card centre scaled to degrees.
#[derive(Clone, Copy, Debug)]
pub struct TiltMap {
    pub x_per_unit_deg: f32,
    pub y_per_unit_deg: f32,
}

impl TiltMap {
    pub fn tilt(&self, rect: &ContainerRect, client_x: f32, client_y: f32) -> Option<Rotation> {
        let [nx, ny] = normalize_pointer(rect, client_x, client_y)?;
        Some(Rotation {
            x_deg: (ny - 0.5) * self.x_per_unit_deg,
            y_deg: (nx - 0.5) * self.y_per_unit_deg,
        })
    }
}

// ---------------- Scroll progress ----------------

/// Page scroll progress in `[0, 1]`: `scroll_y / (doc_height - viewport_h)`.
///
/// `None` when the page cannot scroll (document no taller than the viewport)
/// or an input is not finite. Overscroll is clamped.
#[inline]
pub fn scroll_progress(scroll_y: f32, doc_height: f32, viewport_h: f32) -> Option<f32> {
    let range = doc_height - viewport_h;
    if !scroll_y.is_finite() || !range.is_finite() || range <= 0.0 {
        return None;
    }
    Some((scroll_y / range).clamp(0.0, 1.0))
}
