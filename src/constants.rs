// Layout and interaction tuning constants.
//
// These keep magic numbers out of the section code. Lengths are CSS pixels,
// angles are degrees, times are milliseconds unless the name says otherwise.

// Skill cloud geometry
pub const SKILL_SPHERE_RADIUS: f32 = 220.0;
pub const SKILL_DEPTH_HALF_RANGE: f32 = 300.0; // z span mapped to depth 0..1
pub const SKILL_STAGE_PX: f32 = 560.0; // square stage the sphere is centred in

// Skill cloud resting pose and pointer spans
pub const SKILL_REST_X_DEG: f32 = 15.0;
pub const SKILL_REST_Y_DEG: f32 = -20.0;
pub const SKILL_X_SPAN_DEG: f32 = -20.0; // vertical pointer travel -> rotateX
pub const SKILL_Y_SPAN_DEG: f32 = 30.0; // horizontal pointer travel -> rotateY

// Rotation spring
pub const SPRING_STIFFNESS: f32 = 80.0;
pub const SPRING_DAMPING: f32 = 20.0;
pub const SPRING_MAX_DT_SEC: f32 = 1.0 / 30.0;
pub const SPRING_SETTLE_EPS: f32 = 0.01;

// Level of detail
pub const LOD_SMALL_BELOW_PX: f64 = 640.0;
pub const LOD_MEDIUM_BELOW_PX: f64 = 1024.0;
pub const LOD_SMALL_COUNT: usize = 12;
pub const LOD_MEDIUM_COUNT: usize = 18;
pub const FALLBACK_VIEWPORT_PX: f64 = 1200.0; // when innerWidth is unavailable

// Hero parallax
pub const HERO_PARALLAX_PX: f32 = 10.0;
pub const AVATAR_TILT_DEG: f32 = 10.0;

// Scroll-linked dividers between sections; travel at full page scroll
pub const DIVIDER_UPPER_TRAVEL_PX: f32 = -150.0;
pub const DIVIDER_LOWER_TRAVEL_PX: f32 = 150.0;

// Project card tilt
pub const CARD_TILT_X_DEG: f32 = -8.0;
pub const CARD_TILT_Y_DEG: f32 = 10.0;

// About section
pub const CUBE_HALF_PX: f32 = 40.0;
pub const RING_RX: f32 = 140.0;
pub const RING_RY: f32 = 80.0;
pub const RING_RZ: f32 = 80.0;
pub const RING_DEPTH_HALF_RANGE: f32 = 100.0;
pub const RING_MIN_DEPTH: f32 = 0.4;

// Contact form
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1200;
