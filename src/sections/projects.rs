use crate::constants::{CARD_TILT_X_DEG, CARD_TILT_Y_DEG};
use crate::content::{Project, PROJECTS, PROJECT_DETAILS};
use crate::core::TiltMap;
use crate::dom::{self, child, js_err, text_child};
use crate::events;
use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

const CARD_TILT: TiltMap = TiltMap {
    x_per_unit_deg: CARD_TILT_X_DEG,
    y_per_unit_deg: CARD_TILT_Y_DEG,
};

pub struct ProjectsSection {
    _listeners: Vec<EventListener>,
}

impl ProjectsSection {
    pub fn mount(document: &web::Document, slot: &web::Element) -> anyhow::Result<Self> {
        let wrap = child(document, slot, "div", "wrap block")?;
        let head = child(document, &wrap, "div", "section-head")?;
        text_child(document, &head, "h2", "", "Projects")?;
        text_child(
            document,
            &head,
            "p",
            "",
            "Interactive 3D cards that reveal details on hover and click.",
        )?;
        let hire = text_child(document, &head, "a", "cta", "Hire Me")?;
        hire.set_attribute("href", "#contact").map_err(js_err)?;

        let grid = child(document, &wrap, "div", "projects-grid")?;
        let mut listeners = Vec::with_capacity(PROJECTS.len() * 3);
        for project in PROJECTS {
            let card = mount_card(document, &grid, project)?;
            listeners.extend(wire_card(card));
        }
        log::info!("[projects] {} cards", PROJECTS.len());
        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn mount_card(
    document: &web::Document,
    grid: &web::Element,
    project: &Project,
) -> anyhow::Result<web::Element> {
    let card = child(document, grid, "button", "card")?;
    card.set_attribute("type", "button").map_err(js_err)?;
    card.set_attribute("aria-expanded", "false").map_err(js_err)?;
    card.set_attribute("aria-label", &format!("{} details", project.title))
        .map_err(js_err)?;

    let body = child(document, &card, "div", "body")?;
    text_child(document, &body, "h3", "", project.title)?;
    text_child(document, &body, "span", "badge", "Project")?;
    text_child(document, &body, "p", "", project.desc)?;
    let tags = child(document, &body, "div", "tags")?;
    for tag in project.tags {
        text_child(document, &tags, "span", "tag", tag)?;
    }
    let details = child(document, &body, "div", "details")?;
    let list = child(document, &details, "ul", "")?;
    for line in PROJECT_DETAILS {
        text_child(document, &list, "li", "", line)?;
    }
    Ok(card)
}

fn set_tilt(card: &web::Element, x_deg: f32, y_deg: f32) {
    dom::set_style(card, "--rx", &format!("{:.3}deg", x_deg));
    dom::set_style(card, "--ry", &format!("{:.3}deg", y_deg));
}

fn wire_card(card: web::Element) -> [EventListener; 3] {
    let card_move = card.clone();
    let on_move = events::on_pointer_move(&card, move |x, y| {
        if let Some(rect) = dom::measure(&card_move) {
            if let Some(tilt) = CARD_TILT.tilt(&rect, x, y) {
                set_tilt(&card_move, tilt.x_deg, tilt.y_deg);
            }
        }
    });

    let card_leave = card.clone();
    let on_leave = events::on_pointer_leave(&card, move || set_tilt(&card_leave, 0.0, 0.0));

    let open = Rc::new(Cell::new(false));
    let card_click = card.clone();
    let on_click = events::on_click(&card, move || {
        let next = !open.get();
        open.set(next);
        _ = card_click.set_attribute("aria-expanded", if next { "true" } else { "false" });
    });

    [on_move, on_leave, on_click]
}
