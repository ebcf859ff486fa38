use crate::constants::{NOTIFY_LINGER_MS, NOTIFY_SLIDE_IN_DELAY_MS, NOTIFY_SLIDE_OUT_MS};
use crate::dom;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
    Info,
}

impl NotifyKind {
    fn css_class(self) -> &'static str {
        match self {
            NotifyKind::Success => "notification-success",
            NotifyKind::Error => "notification-error",
            NotifyKind::Info => "notification-info",
        }
    }

    fn background(self) -> &'static str {
        match self {
            NotifyKind::Success => "linear-gradient(135deg, #10b981, #059669)",
            NotifyKind::Error => "linear-gradient(135deg, #ef4444, #dc2626)",
            NotifyKind::Info => "linear-gradient(135deg, #3b82f6, #2563eb)",
        }
    }
}

const TOAST_STYLE: &str = "position: fixed; top: 20px; right: 20px; padding: 15px 20px; \
    border-radius: 8px; color: #fff; font-weight: 500; z-index: 10000; \
    transform: translateX(100%); transition: transform 0.3s ease; \
    max-width: 300px; word-wrap: break-word;";

/// Shows a toast in the top corner, replacing any toast already there. It
/// slides in, lingers, slides back out and removes itself.
pub fn show(document: &web::Document, message: &str, kind: NotifyKind) {
    for stale in dom::select_all(document, ".notification") {
        stale.remove();
    }

    let toast = match document.create_element("div") {
        Ok(el) => el,
        Err(_) => return,
    };
    toast.set_class_name(&format!("notification {}", kind.css_class()));
    toast.set_text_content(Some(message));
    if let Some(style) = dom::style_of(&toast) {
        style.set_css_text(TOAST_STYLE);
        _ = style.set_property("background", kind.background());
    }
    let body = match document.body() {
        Some(b) => b,
        None => return,
    };
    if body.append_child(&toast).is_err() {
        return;
    }

    let toast_in = toast.clone();
    dom::after_timeout(NOTIFY_SLIDE_IN_DELAY_MS, move || {
        if let Some(style) = dom::style_of(&toast_in) {
            _ = style.set_property("transform", "translateX(0)");
        }
    });

    dom::after_timeout(NOTIFY_LINGER_MS, move || {
        if let Some(style) = dom::style_of(&toast) {
            _ = style.set_property("transform", "translateX(100%)");
        }
        dom::after_timeout(NOTIFY_SLIDE_OUT_MS, move || {
            toast.remove();
        });
    });
}
