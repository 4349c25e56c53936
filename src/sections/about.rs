use crate::constants::{
    CUBE_HALF_PX, RING_DEPTH_HALF_RANGE, RING_MIN_DEPTH, RING_RX, RING_RY, RING_RZ,
};
use crate::content::{ABOUT_BLURB, ABOUT_POINTS, RING_SKILLS};
use crate::core::{cube_faces, orbit_ring, RingShape};
use crate::dom::{self, child, js_err, text_child};
use web_sys as web;

const RING_SHAPE: RingShape = RingShape {
    rx: RING_RX,
    ry: RING_RY,
    rz: RING_RZ,
    depth_half_range: RING_DEPTH_HALF_RANGE,
    min_depth: RING_MIN_DEPTH,
};

/// About block: avatar disc, spinning cube, orbit ring and the blurb.
///
/// Static apart from the avatar disc, whose tilt is driven by the hero's
/// pointer tracking.
pub struct AboutBlock {
    pub avatar: web::Element,
}

impl AboutBlock {
    pub fn mount(document: &web::Document, parent: &web::Element) -> anyhow::Result<Self> {
        let block = child(document, parent, "div", "wrap about")?;
        block.set_id("about");

        let visual = child(document, &block, "div", "about-visual")?;
        visual.set_attribute("aria-hidden", "true").map_err(js_err)?;
        let avatar = child(document, &visual, "div", "avatar-disc")?;
        mount_cube(document, &avatar)?;
        mount_ring(document, &visual)?;

        let copy = child(document, &block, "div", "about-copy")?;
        text_child(document, &copy, "h2", "", "About Me")?;
        text_child(document, &copy, "p", "", ABOUT_BLURB)?;
        let list = child(document, &copy, "ul", "")?;
        for point in ABOUT_POINTS {
            text_child(document, &list, "li", "", point)?;
        }

        Ok(Self { avatar })
    }

    pub fn tilt(&self, x_deg: f32, y_deg: f32) {
        dom::set_style(
            &self.avatar,
            "transform",
            &format!("rotateX({:.3}deg) rotateY({:.3}deg)", x_deg, y_deg),
        );
    }
}

fn mount_cube(document: &web::Document, parent: &web::Element) -> anyhow::Result<()> {
    let stage = child(document, parent, "div", "cube-stage")?;
    stage.set_attribute("role", "img").map_err(js_err)?;
    stage.set_attribute("aria-label", "3D avatar").map_err(js_err)?;
    let cube = child(document, &stage, "div", "cube")?;
    for face in cube_faces(CUBE_HALF_PX) {
        let el = child(document, &cube, "div", "face")?;
        dom::set_style(&el, "transform", &face.css_transform());
    }
    Ok(())
}

fn mount_ring(document: &web::Document, parent: &web::Element) -> anyhow::Result<()> {
    let stage = child(document, parent, "div", "ring-stage")?;
    stage.set_attribute("aria-label", "3D skill cloud").map_err(js_err)?;
    let ring = child(document, &stage, "div", "ring")?;
    for node in orbit_ring(RING_SKILLS, RING_SHAPE) {
        let span = text_child(document, &ring, "span", "", &node.label)?;
        let p = node.position;
        dom::set_style(
            &span,
            "transform",
            &format!(
                "translate(-50%, -50%) translate3d({:.2}px, {:.2}px, {:.2}px)",
                p.x, p.y, p.z
            ),
        );
        dom::set_style(
            &span,
            "color",
            &format!("rgba(255,255,255,{:.3})", node.text_alpha()),
        );
        dom::set_style(
            &span,
            "background",
            &format!("rgba(100,255,218,{:.3})", node.background_alpha()),
        );
        dom::set_style(
            &span,
            "border",
            &format!("1px solid rgba(100,255,218,{:.3})", node.border_alpha()),
        );
        dom::set_style(&span, "filter", &format!("blur({:.2}px)", node.blur_px()));
    }
    Ok(())
}
