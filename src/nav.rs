use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

const ACTIVE_CLASS: &str = "active";
const ACTIVE_THRESHOLD: f64 = 0.45;

/// Resolves a nav href to a section id. Accepts raw fragments ("#about"),
/// hrefs carrying a fragment ("/page#about") and bare path-like hrefs
/// ("/about" or "about").
pub(crate) fn normalize_target(href: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    let target = match href.rsplit_once('#') {
        Some((_, fragment)) => fragment,
        None => href,
    };
    Some(target.strip_prefix('/').unwrap_or(target).to_string())
}

pub fn install(document: &Document) -> Result<(), JsValue> {
    let links = Rc::new(nav_links(document)?);
    install_smoothing(document, &links)?;
    install_tracker(document, links)
}

fn nav_links(document: &Document) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all("nav a")?;
    let mut links = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(link) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            links.push(link);
        }
    }
    Ok(links)
}

/// Click on a link whose target resolves to a real section scrolls there
/// smoothly and replaces the address fragment. Anything else keeps the
/// default link behavior.
fn install_smoothing(document: &Document, links: &Rc<Vec<Element>>) -> Result<(), JsValue> {
    for link in links.iter() {
        let clicked = link.clone();
        let doc = document.clone();
        let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
            let target = clicked
                .get_attribute("href")
                .and_then(|href| normalize_target(&href))
                .and_then(|id| doc.get_element_by_id(&id).map(|section| (id, section)));
            let Some((id, section)) = target else {
                return;
            };

            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);

            // Update the fragment without a reload or a new history entry.
            if let Some(history) = doc.default_view().and_then(|window| window.history().ok()) {
                let _ = history.replace_state_with_url(
                    &JsValue::NULL,
                    "",
                    Some(&format!("#{}", id)),
                );
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Marks the link matching the most recently intersecting section; with
/// several sections in view at once the last processed entry wins.
fn install_tracker(document: &Document, links: Rc<Vec<Element>>) -> Result<(), JsValue> {
    let sections = document.query_selector_all("section[id]")?;

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let id = entry.target().id();
                let matching = links.iter().find(|link| {
                    link.get_attribute("href")
                        .and_then(|href| normalize_target(&href))
                        .is_some_and(|target| target == id)
                });
                if let Some(link) = matching {
                    for other in links.iter() {
                        let _ = other.class_list().remove_1(ACTIVE_CLASS);
                    }
                    let _ = link.class_list().add_1(ACTIVE_CLASS);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ACTIVE_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    for i in 0..sections.length() {
        if let Some(section) = sections.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&section);
        }
    }
    Ok(())
}
