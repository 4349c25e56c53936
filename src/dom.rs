use crate::constants::FALLBACK_VIEWPORT_PX;
use crate::core::ContainerRect;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Convert a `JsValue` error from web-sys into an `anyhow::Error`.
#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Create `<tag class="...">`.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let node = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        node.set_class_name(class);
    }
    Ok(node)
}

/// Create `<tag class="...">text</tag>`.
pub fn text_el(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let node = el(document, tag, class)?;
    node.set_text_content(Some(text));
    Ok(node)
}

/// Create an element and append it to `parent`.
pub fn child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let node = el(document, tag, class)?;
    parent.append_child(&node).map_err(js_err)?;
    Ok(node)
}

pub fn text_child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let node = text_el(document, tag, class, text)?;
    parent.append_child(&node).map_err(js_err)?;
    Ok(node)
}

#[inline]
pub fn set_style(element: &web::Element, property: &str, value: &str) {
    if let Some(h) = element.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property(property, value);
    }
}

/// Measure an element; `None` until it has been laid out with a real size.
pub fn measure(element: &web::Element) -> Option<ContainerRect> {
    let r = element.get_bounding_client_rect();
    let rect = ContainerRect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    };
    rect.is_measurable().then_some(rect)
}

/// Current `innerWidth` in CSS px, or a desktop-sized fallback.
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(FALLBACK_VIEWPORT_PX)
}

/// `(scrollY, scrollHeight, innerHeight)` of the window, in CSS px.
pub fn scroll_metrics() -> Option<(f32, f32, f32)> {
    let window = web::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let doc_height = window.document()?.document_element()?.scroll_height();
    let viewport_h = window.inner_height().ok()?.as_f64()?;
    Some((scroll_y as f32, doc_height as f32, viewport_h as f32))
}

/// Inject the page stylesheet into `<head>` once.
pub fn install_stylesheet(document: &web::Document, css: &str) -> anyhow::Result<()> {
    if document.get_element_by_id("folio-styles").is_some() {
        return Ok(());
    }
    let style = text_el(document, "style", "", css)?;
    style.set_id("folio-styles");
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}
