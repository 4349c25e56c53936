use crate::constants::{DIVIDER_LOWER_TRAVEL_PX, DIVIDER_UPPER_TRAVEL_PX};
use crate::content::SITE_TITLE;
use crate::core::scroll_progress;
use crate::dom::{self, child, js_err, text_child};
use crate::events;
use gloo::events::EventListener;
use web_sys as web;

/// Header, main slots for each section, footer.
pub struct Shell {
    pub root: web::Element,
    pub home: web::Element,
    pub projects: web::Element,
    pub skills: web::Element,
    pub contact: web::Element,
    _anchors: EventListener,
    _scroll: EventListener,
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

fn link(
    document: &web::Document,
    parent: &web::Element,
    href: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let a = text_child(document, parent, "a", class, text)?;
    a.set_attribute("href", href).map_err(js_err)?;
    Ok(a)
}

/// Decorative strip between two sections, moved by page scroll.
fn divider(
    document: &web::Document,
    main: &web::Element,
    class: &str,
) -> anyhow::Result<web::Element> {
    let strip = child(document, main, "div", "divider")?;
    strip.set_attribute("aria-hidden", "true").map_err(js_err)?;
    child(document, &strip, "div", class)?;
    Ok(strip)
}

fn slot(
    document: &web::Document,
    main: &web::Element,
    id: &str,
    label: &str,
) -> anyhow::Result<web::Element> {
    let section = child(document, main, "section", "")?;
    section.set_id(id);
    section.set_attribute("aria-label", label).map_err(js_err)?;
    Ok(section)
}

impl Shell {
    pub fn mount(document: &web::Document, host: &web::Element) -> anyhow::Result<Self> {
        let root = child(document, host, "div", "page")?;
        link(document, &root, "#main", "skip-link", "Skip to content")?;

        let header = child(document, &root, "header", "site-header")?;
        let nav = child(document, &header, "nav", "wrap")?;
        nav.set_attribute("aria-label", "Primary").map_err(js_err)?;
        link(document, &nav, "#home", "brand", SITE_TITLE)?;
        let links = child(document, &nav, "div", "links")?;
        for (href, text) in NAV_LINKS {
            link(document, &links, href, "", text)?;
        }
        link(document, &links, "#projects", "", "View My Work")?;

        let main = child(document, &root, "main", "")?;
        main.set_id("main");
        let home = slot(document, &main, "home", "Hero and About")?;
        let upper = divider(document, &main, "fade tall")?;
        let projects = slot(document, &main, "projects", "Projects")?;
        let lower = divider(document, &main, "fade")?;
        let skills = slot(document, &main, "skills", "Skills")?;
        let contact = slot(document, &main, "contact", "Contact")?;

        let footer = child(document, &root, "footer", "site-footer")?;
        let year = js_sys::Date::new_0().get_full_year();
        text_child(
            document,
            &footer,
            "p",
            "",
            &format!("\u{a9} {} {}. Built with Rust and WebAssembly.", year, SITE_TITLE),
        )?;
        let touch = child(document, &footer, "p", "")?;
        link(document, &touch, "#contact", "", "Get in touch")?;

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let scroll = events::on_scroll(&window, move || {
            let Some((scroll_y, doc_height, viewport_h)) = dom::scroll_metrics() else {
                return;
            };
            let Some(progress) = scroll_progress(scroll_y, doc_height, viewport_h) else {
                return;
            };
            for (strip, travel) in [
                (&upper, DIVIDER_UPPER_TRAVEL_PX),
                (&lower, DIVIDER_LOWER_TRAVEL_PX),
            ] {
                dom::set_style(
                    strip,
                    "transform",
                    &format!("translate3d(0, {:.2}px, 0)", progress * travel),
                );
            }
        });

        Ok(Self {
            root,
            home,
            projects,
            skills,
            contact,
            _anchors: events::wire_smooth_anchors(document),
            _scroll: scroll,
        })
    }
}
