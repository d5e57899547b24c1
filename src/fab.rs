use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent};

const TRIGGER_ID: &str = "fab-main-btn";
const MENU_SELECTOR: &str = ".fab-menu";
const ITEM_SELECTOR: &str = ".fab-item";
const OPEN_CLASS: &str = "active";

/// The trigger button toggles the menu; clicking any item closes it. Wired
/// only when both the trigger and the menu exist.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let trigger = document.get_element_by_id(TRIGGER_ID);
    let menu = document.query_selector(MENU_SELECTOR)?;
    let (Some(trigger), Some(menu)) = (trigger, menu) else {
        return Ok(());
    };

    let toggled = menu.clone();
    let on_toggle = Closure::wrap(Box::new(move |_event: MouseEvent| {
        let _ = toggled.class_list().toggle(OPEN_CLASS);
    }) as Box<dyn FnMut(MouseEvent)>);
    trigger.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
    on_toggle.forget();

    let items = document.query_selector_all(ITEM_SELECTOR)?;
    for i in 0..items.length() {
        let Some(item) = items.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let closed = menu.clone();
        let on_close = Closure::wrap(Box::new(move |_event: MouseEvent| {
            let _ = closed.class_list().remove_1(OPEN_CLASS);
        }) as Box<dyn FnMut(MouseEvent)>);
        item.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }
    Ok(())
}
