//! Behavior layer for the portfolio page: smooth in-page navigation,
//! scroll-triggered reveals, an image lightbox, the contact form and the
//! floating action menu. Everything is wired onto the existing markup once
//! the document is ready.

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

mod config;
mod contact;
mod fab;
mod lightbox;
mod nav;
mod reveal;
mod styles;
mod toast;

pub use lightbox::Lightbox;
pub use toast::{Toast, ToastKind};

/// Owns the lazily-created page singletons (toast, lightbox) and installs
/// every handler against one document.
pub struct PageController {
    document: Document,
    toast: Toast,
    lightbox: Lightbox,
}

impl PageController {
    pub fn new(document: Document) -> Self {
        let toast = Toast::new(document.clone());
        let lightbox = Lightbox::new(document.clone());
        Self {
            document,
            toast,
            lightbox,
        }
    }

    /// Wires all page behaviors. Missing markup (no contact form, no fab)
    /// just leaves the corresponding behavior uninstalled.
    pub fn install(&self) -> Result<(), JsValue> {
        styles::ensure_installed(&self.document)?;
        nav::install(&self.document)?;
        reveal::install(&self.document)?;
        self.lightbox.install()?;
        contact::install(&self.document, self.toast.clone())?;
        fab::install(&self.document)?;
        info!("page behavior installed");
        Ok(())
    }

    /// Shared notifier, for quick actions that want to surface a status
    /// message without reaching into the DOM themselves.
    pub fn toast(&self) -> Toast {
        self.toast.clone()
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox.clone()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let deferred = document.clone();
        let on_ready = Closure::wrap(Box::new(move || {
            let controller = PageController::new(deferred.clone());
            if let Err(err) = controller.install() {
                log::error!("failed to install page behavior: {:?}", err);
            }
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        PageController::new(document).install()?;
    }
    Ok(())
}
