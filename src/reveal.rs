use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

const REVEAL_SELECTOR: &str = "section, .project, form";
const REVEAL_CLASS: &str = "in";
const REVEAL_THRESHOLD: f64 = 0.15;

/// Adds the reveal class the first time an element scrolls into view, then
/// stops observing it. The class is never removed.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let targets = document.query_selector_all(REVEAL_SELECTOR)?;

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for i in 0..targets.length() {
        if let Some(target) = targets.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&target);
        }
    }
    Ok(())
}
