use web_sys as web;

// Overlays are toggled by class with an inline-style fallback, so they still
// hide before the stylesheet has been injected.

#[inline]
pub fn show(element: &web::Element) {
    _ = element.class_list().remove_1("hidden");
    _ = element.remove_attribute("style");
    _ = element.set_attribute("aria-busy", "true");
}

#[inline]
pub fn hide(element: &web::Element) {
    _ = element.class_list().add_1("hidden");
    _ = element.set_attribute("style", "display:none");
    _ = element.set_attribute("aria-busy", "false");
}

#[inline]
pub fn is_hidden(element: &web::Element) -> bool {
    if element.class_list().contains("hidden") {
        return true;
    }
    element
        .get_attribute("style")
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}
