use crate::constants::{
    LOD_MEDIUM_BELOW_PX, LOD_MEDIUM_COUNT, LOD_SMALL_BELOW_PX, LOD_SMALL_COUNT,
    SKILL_DEPTH_HALF_RANGE, SKILL_REST_X_DEG, SKILL_REST_Y_DEG, SKILL_SPHERE_RADIUS,
    SKILL_STAGE_PX, SKILL_X_SPAN_DEG, SKILL_Y_SPAN_DEG,
};
use crate::content::SKILLS;
use crate::core::{
    depth_style, fibonacci_sphere, LabeledPoint, LodPolicy, Rotation, RotationMap, RotationState,
};
use crate::dom::{self, child, js_err, text_child};
use crate::events;
use crate::frame::{FrameLoop, SkillCloudFrame};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub const SKILL_LOD: LodPolicy = LodPolicy {
    small_below: LOD_SMALL_BELOW_PX,
    medium_below: LOD_MEDIUM_BELOW_PX,
    small_count: LOD_SMALL_COUNT,
    medium_count: LOD_MEDIUM_COUNT,
};

pub const SKILL_ROTATION: RotationMap = RotationMap {
    rest: Rotation::new(SKILL_REST_X_DEG, SKILL_REST_Y_DEG),
    x_span_deg: SKILL_X_SPAN_DEG,
    y_span_deg: SKILL_Y_SPAN_DEG,
};

/// Rotating sphere of skill labels that follows the pointer.
///
/// The label count is picked from the viewport width once, at mount.
pub struct SkillsSection {
    _listener: EventListener,
    _frames: Rc<FrameLoop<SkillCloudFrame>>,
}

impl SkillsSection {
    pub fn mount(document: &web::Document, slot: &web::Element) -> anyhow::Result<Self> {
        let wrap = child(document, slot, "div", "wrap block")?;
        let head = child(document, &wrap, "div", "section-head")?;
        text_child(document, &head, "h2", "", "Skills")?;
        text_child(
            document,
            &head,
            "p",
            "",
            "A rotating 3D cloud of technologies I use.",
        )?;

        let container = child(document, &wrap, "div", "skills-box")?;
        let cloud = child(document, &container, "div", "skill-cloud")?;
        cloud.set_attribute("role", "img").map_err(js_err)?;
        cloud
            .set_attribute("aria-label", "3D skill cloud")
            .map_err(js_err)?;
        let stage = format!("{}px", SKILL_STAGE_PX);
        dom::set_style(&cloud, "width", &stage);
        dom::set_style(&cloud, "height", &stage);

        let width = dom::viewport_width();
        let labels = SKILL_LOD.select(SKILLS, width);
        let nodes = fibonacci_sphere(labels, SKILL_SPHERE_RADIUS);
        for node in &nodes {
            mount_node(document, &cloud, node)?;
        }
        log::info!(
            "[skills] viewport={:.0}px bucket={:?} nodes={}",
            width,
            SKILL_LOD.bucket(width),
            nodes.len()
        );

        let rotation = Rc::new(RefCell::new(RotationState::new(SKILL_ROTATION)));
        let frames = Rc::new(FrameLoop::new(SkillCloudFrame::new(cloud, rotation.clone())));

        let container_for_move = container.clone();
        let frames_for_move = Rc::downgrade(&frames);
        let listener = events::on_pointer_move(&container, move |x, y| {
            // unmeasurable container: keep the previous rotation
            let Some(rect) = dom::measure(&container_for_move) else {
                return;
            };
            if !rotation.borrow_mut().on_pointer(&rect, x, y) {
                return;
            }
            if let Some(frames) = frames_for_move.upgrade() {
                if !frames.is_running() {
                    log::debug!("[skills] wake frame loop");
                }
                frames.kick();
            }
        });

        Ok(Self {
            _listener: listener,
            _frames: frames,
        })
    }
}

fn mount_node(
    document: &web::Document,
    cloud: &web::Element,
    node: &LabeledPoint,
) -> anyhow::Result<()> {
    let el = text_child(document, cloud, "div", "node", &node.label)?;
    el.set_attribute("tabindex", "0").map_err(js_err)?;
    let style = depth_style(node.position.z, SKILL_DEPTH_HALF_RANGE);
    dom::set_style(
        &el,
        "transform",
        &format!(
            "translate(-50%, -50%) {} scale({:.3})",
            node.translate3d(),
            style.scale
        ),
    );
    dom::set_style(&el, "opacity", &format!("{:.3}", style.opacity));
    Ok(())
}
