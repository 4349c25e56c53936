use crate::constants::CONTACT_SUBMIT_DELAY_MS;
use crate::content::{CONTACT_BLURB, CONTACT_PITCH};
use crate::core::{ContactDraft, ContactForm, SubmitStatus};
use crate::dom::{child, js_err, text_child};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct Fields {
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
}

impl Fields {
    fn draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.value(),
            email: self.email.value(),
            message: self.message.value(),
        }
    }
}

/// Contact form with a simulated send. Nothing leaves the browser.
pub struct ContactSection {
    _submit: EventListener,
}

fn field(
    document: &web::Document,
    form: &web::Element,
    id: &str,
    label: &str,
    tag: &str,
    kind: &str,
    placeholder: &str,
) -> anyhow::Result<web::Element> {
    let row = child(document, form, "div", "field")?;
    let lbl = text_child(document, &row, "label", "", label)?;
    lbl.set_attribute("for", id).map_err(js_err)?;
    let input = child(document, &row, tag, "")?;
    input.set_id(id);
    input.set_attribute("name", id).map_err(js_err)?;
    input.set_attribute("required", "").map_err(js_err)?;
    input
        .set_attribute("placeholder", placeholder)
        .map_err(js_err)?;
    if !kind.is_empty() {
        input.set_attribute("type", kind).map_err(js_err)?;
    }
    Ok(input)
}

fn render_status(button: &web::HtmlButtonElement, status: SubmitStatus) {
    button.set_disabled(status.submit_disabled());
    button.set_text_content(Some(status.button_label()));
    _ = button.set_attribute("data-status", &format!("{:?}", status).to_lowercase());
}

impl ContactSection {
    pub fn mount(document: &web::Document, slot: &web::Element) -> anyhow::Result<Self> {
        let wrap = child(document, slot, "div", "wrap block")?;
        let head = child(document, &wrap, "div", "section-head")?;
        text_child(document, &head, "h2", "", "Contact")?;
        text_child(
            document,
            &head,
            "p",
            "",
            "Let\u{2019}s build something intelligent together.",
        )?;

        let grid = child(document, &wrap, "div", "contact-grid")?;
        let form_el = child(document, &grid, "form", "")?;
        form_el
            .set_attribute("aria-label", "Contact form")
            .map_err(js_err)?;

        let fields = Fields {
            name: field(document, &form_el, "name", "Name", "input", "text", "Ada Lovelace")?
                .dyn_into::<web::HtmlInputElement>()
                .map_err(unexpected_element)?,
            email: field(
                document,
                &form_el,
                "email",
                "Email",
                "input",
                "email",
                "ada@compute.org",
            )?
            .dyn_into::<web::HtmlInputElement>()
            .map_err(unexpected_element)?,
            message: field(
                document,
                &form_el,
                "message",
                "Message",
                "textarea",
                "",
                "Tell me about your project...",
            )?
            .dyn_into::<web::HtmlTextAreaElement>()
            .map_err(unexpected_element)?,
        };
        fields.message.set_rows(5);

        let footer = child(document, &form_el, "div", "form-footer")?;
        text_child(
            document,
            &footer,
            "p",
            "note",
            "I\u{2019}ll get back within 1-2 business days.",
        )?;
        let button: web::HtmlButtonElement = child(document, &footer, "button", "send")?
            .dyn_into()
            .map_err(unexpected_element)?;
        button.set_type("submit");
        _ = button.set_attribute("aria-live", "polite");

        let pitch = child(document, &grid, "div", "pitch")?;
        text_child(document, &pitch, "h3", "", "Let\u{2019}s collaborate")?;
        text_child(document, &pitch, "p", "lead", CONTACT_BLURB)?;
        let list = child(document, &pitch, "ul", "")?;
        for line in CONTACT_PITCH {
            text_child(document, &list, "li", "", line)?;
        }

        let form = Rc::new(RefCell::new(ContactForm::new(CONTACT_SUBMIT_DELAY_MS)));
        render_status(&button, form.borrow().status());

        let submit = EventListener::new_with_options(
            &form_el,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |ev| {
                ev.prevent_default();
                form.borrow_mut().draft = fields.draft();
                if !form.borrow_mut().submit(instant::now()) {
                    return;
                }
                render_status(&button, form.borrow().status());
                log::info!("[contact] sending (simulated)");

                let form = form.clone();
                let button = button.clone();
                spawn_local(async move {
                    loop {
                        let wait = form.borrow().remaining_ms(instant::now());
                        match wait {
                            Some(ms) => TimeoutFuture::new(ms).await,
                            None => break,
                        }
                    }
                    if form.borrow_mut().tick(instant::now()) {
                        render_status(&button, form.borrow().status());
                        log::info!("[contact] sent");
                    }
                });
            },
        );

        Ok(Self { _submit: submit })
    }
}

fn unexpected_element(e: web::Element) -> anyhow::Error {
    anyhow::anyhow!("unexpected element <{}>", e.tag_name().to_lowercase())
}
