use crate::constants::{AVATAR_TILT_DEG, HERO_PARALLAX_PX};
use crate::content::{HERO_BLURB, HERO_HEADLINE, SCENE_URL};
use crate::core::parallax_offset;
use crate::dom::{self, child, js_err, text_child};
use crate::events;
use crate::overlay;
use crate::sections::about::AboutBlock;
use gloo::events::EventListener;
use web_sys as web;

// Custom element of the embedded scene viewer; its script is loaded by the host page.
const SCENE_TAG: &str = "spline-viewer";
const SCENE_LOADED_EVENTS: &[&str] = &["load-complete", "load"];

pub struct HeroSection {
    _listeners: Vec<EventListener>,
}

impl HeroSection {
    pub fn mount(document: &web::Document, slot: &web::Element) -> anyhow::Result<Self> {
        let hero = child(document, slot, "div", "hero")?;

        let scene_box = child(document, &hero, "div", "scene")?;
        let scene = child(document, &scene_box, SCENE_TAG, "")?;
        scene.set_attribute("url", SCENE_URL).map_err(js_err)?;
        scene
            .set_attribute("aria-label", "Interactive 3D Scene")
            .map_err(js_err)?;
        child(document, &hero, "div", "shade")?;

        let loader = child(document, &hero, "div", "loader")?;
        loader.set_attribute("aria-live", "polite").map_err(js_err)?;
        child(document, &loader, "div", "spinner")?;
        overlay::show(&loader);

        let copy = child(document, &hero, "div", "wrap copy")?;
        text_child(document, &copy, "h1", "", HERO_HEADLINE)?;
        text_child(document, &copy, "p", "lead", HERO_BLURB)?;
        let ctas = child(document, &copy, "div", "ctas")?;
        for (href, text) in [("#projects", "View My Work"), ("#contact", "Get In Touch")] {
            let a = text_child(document, &ctas, "a", "cta", text)?;
            a.set_attribute("href", href).map_err(js_err)?;
        }

        let about = AboutBlock::mount(document, &hero)?;

        let mut listeners = Vec::new();
        for event in SCENE_LOADED_EVENTS {
            let loader = loader.clone();
            listeners.push(EventListener::new(&scene, *event, move |_| {
                if !overlay::is_hidden(&loader) {
                    overlay::hide(&loader);
                    log::info!("[hero] scene loaded");
                }
            }));
        }

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let hero_for_move = hero.clone();
        listeners.push(events::on_pointer_move(&window, move |x, y| {
            let Some(rect) = dom::measure(&hero_for_move) else {
                return;
            };
            let Some([px, py]) = parallax_offset(&rect, x, y) else {
                return;
            };
            dom::set_style(
                &copy,
                "transform",
                &format!(
                    "translate3d({:.2}px, {:.2}px, 0)",
                    px * HERO_PARALLAX_PX,
                    py * HERO_PARALLAX_PX
                ),
            );
            about.tilt(py * -AVATAR_TILT_DEG, px * AVATAR_TILT_DEG);
        }));

        Ok(Self {
            _listeners: listeners,
        })
    }
}
