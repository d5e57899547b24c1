use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

const TOAST_ID: &str = "site-toast";
const HIDE_DELAY_MS: u32 = 3_800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub(crate) fn background(self) -> &'static str {
        match self {
            ToastKind::Error => "linear-gradient(90deg,#d9534f,#c63b3b)",
            ToastKind::Success => "linear-gradient(90deg,#16c28b,#0ea86e)",
            ToastKind::Info => "rgba(0,0,0,0.75)",
        }
    }
}

/// Transient status message in the page corner. One shared element, created
/// on first use; each call replaces the text, the color and the pending
/// auto-hide timer, so rapid calls are last-write-wins.
#[derive(Clone)]
pub struct Toast {
    document: Document,
    node: Rc<RefCell<Option<HtmlElement>>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl Toast {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            node: Rc::new(RefCell::new(None)),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn notify(&self, text: &str, kind: ToastKind) {
        // Dropping the pending timeout cancels it.
        self.timer.borrow_mut().take();

        let Some(node) = self.node_or_create() else {
            return;
        };
        node.set_text_content(Some(text));
        let style = node.style();
        let _ = style.set_property("background", kind.background());
        let _ = style.set_property("opacity", "1");

        let fading = node.clone();
        let timer = Timeout::new(HIDE_DELAY_MS, move || {
            let _ = fading.style().set_property("opacity", "0");
        });
        *self.timer.borrow_mut() = Some(timer);
    }

    fn node_or_create(&self) -> Option<HtmlElement> {
        if let Some(node) = self.node.borrow().as_ref() {
            return Some(node.clone());
        }
        // The page may already carry a toast element of its own.
        let node = match self
            .document
            .get_element_by_id(TOAST_ID)
            .and_then(|existing| existing.dyn_into::<HtmlElement>().ok())
        {
            Some(existing) => existing,
            None => {
                let created = self
                    .document
                    .create_element("div")
                    .ok()?
                    .dyn_into::<HtmlElement>()
                    .ok()?;
                created.set_id(TOAST_ID);
                let _ = created.set_attribute(
                    "style",
                    "position: fixed; right: 20px; bottom: 80px; z-index: 99999; \
                     padding: 12px 16px; border-radius: 10px; color: #fff; font-weight: 600; \
                     box-shadow: 0 8px 30px rgba(0,0,0,0.25); transition: opacity .3s ease;",
                );
                self.document.body()?.append_child(&created).ok()?;
                created
            }
        };
        *self.node.borrow_mut() = Some(node.clone());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::ToastKind;

    #[test]
    fn each_kind_maps_to_a_distinct_background() {
        let backgrounds = [
            ToastKind::Info.background(),
            ToastKind::Success.background(),
            ToastKind::Error.background(),
        ];
        assert_ne!(backgrounds[0], backgrounds[1]);
        assert_ne!(backgrounds[1], backgrounds[2]);
        assert_ne!(backgrounds[0], backgrounds[2]);
    }
}
