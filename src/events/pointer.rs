use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Client coordinates of a mouse or pointer event.
#[inline]
pub fn client_xy(ev: &web::Event) -> Option<(f32, f32)> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some((ev.client_x() as f32, ev.client_y() as f32))
}

/// Listen for `pointermove` on `target`; the guard detaches on drop.
pub fn on_pointer_move(
    target: &web::EventTarget,
    mut handler: impl FnMut(f32, f32) + 'static,
) -> EventListener {
    EventListener::new(target, "pointermove", move |ev| {
        if let Some((x, y)) = client_xy(ev) {
            handler(x, y);
        }
    })
}

pub fn on_pointer_leave(
    target: &web::EventTarget,
    mut handler: impl FnMut() + 'static,
) -> EventListener {
    EventListener::new(target, "pointerleave", move |_| handler())
}

/// `click` listener on `target`.
pub fn on_click(target: &web::EventTarget, mut handler: impl FnMut() + 'static) -> EventListener {
    EventListener::new(target, "click", move |_| handler())
}

/// Passive `scroll` listener on `target`.
pub fn on_scroll(
    target: &web::EventTarget,
    mut handler: impl FnMut() + 'static,
) -> EventListener {
    EventListener::new(target, "scroll", move |_| handler())
}
