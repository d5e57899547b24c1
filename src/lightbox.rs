use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent};

const IMAGE_SELECTOR: &str = "#project img";

/// Full-screen overlay for viewing a project image. The overlay is built on
/// first open and reused; closing only hides it.
#[derive(Clone)]
pub struct Lightbox {
    document: Document,
    overlay: Rc<RefCell<Option<Overlay>>>,
}

#[derive(Clone)]
struct Overlay {
    root: HtmlElement,
    image: HtmlImageElement,
}

impl Lightbox {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            overlay: Rc::new(RefCell::new(None)),
        }
    }

    /// Wires a click handler onto every project image and the document-level
    /// Escape handler.
    pub fn install(&self) -> Result<(), JsValue> {
        let images = self.document.query_selector_all(IMAGE_SELECTOR)?;
        for i in 0..images.length() {
            let Some(image) = images
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
            else {
                continue;
            };
            let _ = image.style().set_property("cursor", "zoom-in");

            let lightbox = self.clone();
            let clicked = image.clone();
            let on_click = Closure::wrap(Box::new(move |_event: MouseEvent| {
                lightbox.open(&clicked.src(), &clicked.alt());
            }) as Box<dyn FnMut(MouseEvent)>);
            image.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }

        let lightbox = self.clone();
        let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                lightbox.close();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        self.document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        on_keydown.forget();
        Ok(())
    }

    /// Shows the overlay with the given image and locks page scroll.
    pub fn open(&self, src: &str, alt: &str) {
        let Some(overlay) = self.overlay_or_create() else {
            return;
        };
        overlay.image.set_src(src);
        overlay.image.set_alt(alt);
        let _ = overlay.root.style().set_property("display", "flex");
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    /// Hides the overlay and restores page scroll. A no-op until the overlay
    /// has been built.
    pub fn close(&self) {
        let overlay = self.overlay.borrow();
        let Some(overlay) = overlay.as_ref() else {
            return;
        };
        let _ = overlay.root.style().set_property("display", "none");
        if let Some(body) = self.document.body() {
            let _ = body.style().remove_property("overflow");
        }
    }

    fn overlay_or_create(&self) -> Option<Overlay> {
        if let Some(overlay) = self.overlay.borrow().as_ref() {
            return Some(overlay.clone());
        }

        let root = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let _ = root.set_attribute(
            "style",
            "position: fixed; inset: 0; display: flex; align-items: center; \
             justify-content: center; background: rgba(0,0,0,0.75); z-index: 9999; \
             padding: 24px;",
        );

        // Any click inside the overlay closes it.
        let closer = self.clone();
        let on_click = Closure::wrap(Box::new(move |_event: MouseEvent| {
            closer.close();
        }) as Box<dyn FnMut(MouseEvent)>);
        root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .ok()?;
        on_click.forget();

        let wrap = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let _ = wrap.set_attribute("style", "max-width: 90%; max-height: 90%;");

        let image = self
            .document
            .create_element("img")
            .ok()?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        let _ = image.set_attribute(
            "style",
            "width: 100%; height: auto; border-radius: 10px; \
             box-shadow: 0 18px 60px rgba(0,0,0,0.6);",
        );

        wrap.append_child(&image).ok()?;
        root.append_child(&wrap).ok()?;
        self.document.body()?.append_child(&root).ok()?;

        let overlay = Overlay { root, image };
        *self.overlay.borrow_mut() = Some(overlay.clone());
        Some(overlay)
    }
}
