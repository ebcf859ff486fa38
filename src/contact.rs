use crate::constants::{FORM_SEND_DELAY_MS, FORM_SENDING_LABEL, FORM_SENT_MESSAGE};
use crate::core::validate::Submission;
use crate::dom;
use crate::notify::{self, NotifyKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Intercepts the contact form and simulates a send; nothing leaves the
/// page. Validation failures surface as error toasts.
pub fn wire_form(document: &web::Document) {
    let form = match document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        Some(f) => f,
        None => return,
    };

    let document = document.clone();
    let form_in = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let submission = match read_submission(&form_in) {
            Some(s) => s,
            None => return,
        };
        if let Err(problem) = submission.validate() {
            notify::show(&document, problem.message(), NotifyKind::Error);
            return;
        }

        let button = match form_in
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
        {
            Some(b) => b,
            None => return,
        };
        let original_label = button.text_content().unwrap_or_default();
        button.set_text_content(Some(FORM_SENDING_LABEL));
        button.set_disabled(true);

        let document = document.clone();
        let form_done = form_in.clone();
        dom::after_timeout(FORM_SEND_DELAY_MS, move || {
            notify::show(&document, FORM_SENT_MESSAGE, NotifyKind::Success);
            form_done.reset();
            button.set_text_content(Some(&original_label));
            button.set_disabled(false);
        });
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn read_submission(form: &web::HtmlFormElement) -> Option<Submission> {
    let data = web::FormData::new_with_form(form).ok()?;
    Some(Submission {
        name: data.get("name").as_string().unwrap_or_default(),
        email: data.get("email").as_string().unwrap_or_default(),
        subject: data.get("subject").as_string().unwrap_or_default(),
        message: data.get("message").as_string().unwrap_or_default(),
    })
}
