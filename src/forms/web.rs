use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{self, Array};
use web_sys::{Document, File, FormData, HtmlButtonElement, HtmlFormElement};

use super::payload::Payload;
use super::submit::{self, Feedback, FormKind, FormSurface, SubmitButton};
use super::webhook::HttpWebhook;
use crate::config;

impl SubmitButton for HtmlButtonElement {
    fn label(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        self.set_text_content(Some(label));
    }

    fn set_disabled(&self, disabled: bool) {
        HtmlButtonElement::set_disabled(self, disabled);
    }
}

pub struct HtmlForm {
    form: HtmlFormElement,
    document: Document,
}

impl HtmlForm {
    fn submit_button(&self) -> Option<HtmlButtonElement> {
        self.form
            .query_selector(config::SUBMIT_BUTTON)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    }
}

impl FormSurface for HtmlForm {
    fn payload(&self) -> Payload {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return Payload::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Payload::new();
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.dyn_into::<Array>().ok())
            .filter_map(|pair| {
                let name = pair.get(0).as_string()?;
                let value = pair.get(1);
                let value = value
                    .as_string()
                    .or_else(|| value.dyn_ref::<File>().map(File::name))
                    .unwrap_or_default();
                Some((name, value))
            })
            .collect()
    }

    fn webhook(&self) -> Option<String> {
        self.form.get_attribute(config::WEBHOOK_ATTRIBUTE)
    }

    fn clear_feedback(&self) {
        if let Ok(Some(existing)) = self.form.query_selector(config::FORM_MESSAGE) {
            existing.remove();
        }
    }

    fn append_feedback(&self, feedback: Feedback) {
        let Ok(message) = self.document.create_element("div") else {
            return;
        };
        message.set_class_name(feedback.kind.class_name());
        let _ = message.set_attribute("style", feedback.kind.style());
        message.set_text_content(Some(feedback.text));
        if self.form.append_child(&message).is_err() {
            return;
        }

        Timeout::new(config::MESSAGE_TIMEOUT_MS, move || message.remove()).forget();
    }

    fn reset(&self) {
        self.form.reset();
    }
}

pub fn init(document: &Document, kind: FormKind) {
    let Some(form) = document
        .get_element_by_id(kind.form_id())
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        debug!("No #{} on this page", kind.form_id());
        return;
    };

    let surface = Rc::new(HtmlForm {
        form: form.clone(),
        document: document.clone(),
    });
    crate::dom::on(&form, "submit", move |event| {
        event.prevent_default();
        let surface = surface.clone();
        spawn_local(async move {
            let button = surface.submit_button();
            let outcome = submit::submit(kind, &*surface, button.as_ref(), &HttpWebhook).await;
            debug!("#{} submission finished: {:?}", kind.form_id(), outcome);
        });
    });
    debug!("#{} ready", kind.form_id());
}
