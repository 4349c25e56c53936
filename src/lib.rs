#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod content;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod sections;

use sections::{ContactSection, HeroSection, ProjectsSection, Shell, SkillsSection};

/// Everything mounted on the page. Dropping it detaches every listener and
/// stops the animation loop; `unmount` also removes the DOM.
struct Page {
    shell: Shell,
    _hero: HeroSection,
    _projects: ProjectsSection,
    _skills: SkillsSection,
    _contact: ContactSection,
}

impl Page {
    fn mount(document: &web::Document) -> anyhow::Result<Self> {
        dom::install_stylesheet(document, crate::core::STYLES_CSS)?;
        let host = match document.get_element_by_id("app") {
            Some(el) => el,
            None => document
                .body()
                .map(Into::into)
                .ok_or_else(|| anyhow::anyhow!("missing #app and <body>"))?,
        };
        let shell = Shell::mount(document, &host)?;
        let hero = HeroSection::mount(document, &shell.home)?;
        let projects = ProjectsSection::mount(document, &shell.projects)?;
        let skills = SkillsSection::mount(document, &shell.skills)?;
        let contact = ContactSection::mount(document, &shell.contact)?;
        Ok(Self {
            shell,
            _hero: hero,
            _projects: projects,
            _skills: skills,
            _contact: contact,
        })
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    mount_page()
}

fn mount_page() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if PAGE.with(|p| p.borrow().is_some()) {
        log::warn!("[page] already mounted");
        return Ok(());
    }
    let page = Page::mount(&document)?;
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    log::info!("[page] mounted");
    Ok(())
}

/// Mount the page again after `unmount`. A no-op while already mounted.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_page().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Tear the page down: listeners detach as their guards drop. `mount`
/// rebuilds it from scratch.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if let Some(page) = page {
        page.shell.root.remove();
        drop(page);
        log::info!("[page] unmounted");
    }
}
