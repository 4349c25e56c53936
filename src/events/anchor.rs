use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Smooth-scroll in-page `#id` links instead of jumping.
pub fn wire_smooth_anchors(document: &web::Document) -> EventListener {
    let doc = document.clone();
    EventListener::new_with_options(
        document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
                return;
            };
            let Ok(Some(anchor)) = target.closest("a[href^=\"#\"]") else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let id = href.trim_start_matches('#');
            if id.is_empty() {
                return;
            }
            if let Some(section) = doc.get_element_by_id(id) {
                ev.prevent_default();
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                section.scroll_into_view_with_scroll_into_view_options(&opts);
                log::debug!("[page] scroll to #{}", id);
            }
        },
    )
}
