use std::cell::Cell;
use std::rc::Rc;

use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, FormData, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use crate::config;
use crate::toast::{Toast, ToastKind};

const FORM_ID: &str = "contact-form";
const VALIDATION_MESSAGE: &str = "Please fill in all fields";
const SENDING_MESSAGE: &str = "Sending...";
const SUCCESS_MESSAGE: &str = "Message sent. Thank you!";
const REJECTED_FALLBACK: &str = "Failed to send message";
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

enum SubmitOutcome {
    Delivered,
    Rejected(Option<String>),
    Failed,
}

/// Submit flow: validate the trimmed required fields locally, then POST the
/// form data once. Every outcome ends in a toast; success also resets the
/// form. A submission already in flight makes further submits no-ops and
/// keeps the submit button disabled until the outcome lands.
pub fn install(document: &Document, toast: Toast) -> Result<(), JsValue> {
    let Some(form) = document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };

    let in_flight = Rc::new(Cell::new(false));
    let handled = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        if in_flight.get() {
            return;
        }

        let name = field_value(&handled, "name");
        let email = field_value(&handled, "email");
        let message = field_value(&handled, "message");
        if name.is_empty() || email.is_empty() || message.is_empty() {
            toast.notify(VALIDATION_MESSAGE, ToastKind::Error);
            return;
        }

        let Ok(data) = FormData::new_with_form(&handled) else {
            toast.notify(GENERIC_FAILURE, ToastKind::Error);
            return;
        };

        in_flight.set(true);
        set_submit_disabled(&handled, true);
        toast.notify(SENDING_MESSAGE, ToastKind::Info);

        let toast = toast.clone();
        let form = handled.clone();
        let in_flight = in_flight.clone();
        spawn_local(async move {
            match send(data).await {
                SubmitOutcome::Delivered => {
                    toast.notify(SUCCESS_MESSAGE, ToastKind::Success);
                    form.reset();
                }
                SubmitOutcome::Rejected(server_message) => {
                    toast.notify(
                        server_message.as_deref().unwrap_or(REJECTED_FALLBACK),
                        ToastKind::Error,
                    );
                }
                SubmitOutcome::Failed => {
                    toast.notify(GENERIC_FAILURE, ToastKind::Error);
                }
            }
            in_flight.set(false);
            set_submit_disabled(&form, false);
        });
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

async fn send(data: FormData) -> SubmitOutcome {
    let response = match Request::post(config::contact_endpoint())
        .header("Accept", "application/json")
        .body(data)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            log!("contact submission failed:", err.to_string());
            return SubmitOutcome::Failed;
        }
    };

    // The endpoint always answers JSON; an unreadable body is the generic
    // failure branch even on an ok status.
    let ok = response.ok();
    match response.json::<serde_json::Value>().await {
        Ok(_) if ok => SubmitOutcome::Delivered,
        Ok(body) => SubmitOutcome::Rejected(rejection_message(body)),
        Err(err) => {
            log!("unreadable response from form endpoint:", err.to_string());
            SubmitOutcome::Failed
        }
    }
}

fn rejection_message(body: serde_json::Value) -> Option<String> {
    serde_json::from_value::<ErrorResponse>(body)
        .ok()
        .map(|reply| reply.error)
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Ok(Some(control)) = form.query_selector(&format!("[name='{}']", name)) else {
        return String::new();
    };
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        return input.value().trim().to_string();
    }
    if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        return area.value().trim().to_string();
    }
    String::new()
}

fn set_submit_disabled(form: &HtmlFormElement, disabled: bool) {
    if let Ok(Some(control)) = form.query_selector("button[type='submit'], input[type='submit']") {
        if let Some(button) = control.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::rejection_message;
    use serde_json::json;

    #[test]
    fn server_error_field_becomes_the_message() {
        let body = json!({ "error": "Rate limited", "ok": false });
        assert_eq!(rejection_message(body).as_deref(), Some("Rate limited"));
    }

    #[test]
    fn missing_error_field_falls_back() {
        assert_eq!(rejection_message(json!({ "ok": false })), None);
    }

    #[test]
    fn non_string_error_field_falls_back() {
        assert_eq!(rejection_message(json!({ "error": 500 })), None);
    }
}
