#![cfg(target_arch = "wasm32")]

use portfolio_frontend::{PageController, ToastKind};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn set_body(html: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(html);
    document
}

fn click_event() -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap()
}

fn submit_event() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("submit", &init).unwrap()
}

fn escape_event() -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

fn body_overflow(document: &Document) -> String {
    document
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

fn toast_text(document: &Document) -> String {
    document
        .get_element_by_id("site-toast")
        .expect("toast element")
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn nav_click_on_known_section_is_intercepted() {
    let document = set_body(
        r##"<nav><a id="link" href="#about">About</a></nav>
           <section id="about">About me</section>"##,
    );
    PageController::new(document.clone()).install().unwrap();

    let link = document.get_element_by_id("link").unwrap();
    let event = click_event();
    link.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    let hash = web_sys::window().unwrap().location().hash().unwrap();
    assert_eq!(hash, "#about");
}

#[wasm_bindgen_test]
fn nav_click_on_bare_path_href_resolves_the_identifier() {
    let document = set_body(
        r#"<nav><a id="link" href="/projects">Projects</a></nav>
           <section id="projects">Work</section>"#,
    );
    PageController::new(document.clone()).install().unwrap();

    let link = document.get_element_by_id("link").unwrap();
    let event = click_event();
    link.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    let hash = web_sys::window().unwrap().location().hash().unwrap();
    assert_eq!(hash, "#projects");
}

#[wasm_bindgen_test]
fn nav_click_without_matching_section_keeps_default() {
    let document = set_body(r##"<nav><a id="link" href="#missing">Missing</a></nav>"##);
    PageController::new(document.clone()).install().unwrap();

    let link = document.get_element_by_id("link").unwrap();
    let event = click_event();
    link.dispatch_event(&event).unwrap();

    assert!(!event.default_prevented());
}

#[wasm_bindgen_test]
async fn visible_sections_get_revealed() {
    let document = set_body(
        r#"<section id="intro" style="height: 40px;">hello</section>
           <div class="project" style="height: 40px;">project</div>"#,
    );
    PageController::new(document.clone()).install().unwrap();

    gloo_timers::future::TimeoutFuture::new(250).await;

    let section = document.get_element_by_id("intro").unwrap();
    assert!(section.class_list().contains("in"));
    let project = document.query_selector(".project").unwrap().unwrap();
    assert!(project.class_list().contains("in"));
}

#[wasm_bindgen_test]
async fn exactly_one_nav_link_is_active() {
    let document = set_body(
        r##"<nav>
               <a href="#one">One</a>
               <a href="#two">Two</a>
           </nav>
           <section id="one" style="height: 40px;">one</section>
           <section id="two" style="height: 40px;">two</section>"##,
    );
    PageController::new(document.clone()).install().unwrap();

    gloo_timers::future::TimeoutFuture::new(250).await;

    let links = document.query_selector_all("nav a").unwrap();
    let mut active = 0;
    for i in 0..links.length() {
        let link = links.get(i).unwrap().dyn_into::<web_sys::Element>().unwrap();
        if link.class_list().contains("active") {
            active += 1;
        }
    }
    assert_eq!(active, 1);
}

#[wasm_bindgen_test]
fn lightbox_opens_on_image_click_and_escape_closes() {
    let document = set_body(
        r#"<div id="project"><img id="pic" src="/assets/shot.png" alt="A shot"></div>"#,
    );
    PageController::new(document.clone()).install().unwrap();

    let image: HtmlElement = document
        .get_element_by_id("pic")
        .unwrap()
        .dyn_into()
        .unwrap();
    image.dispatch_event(&click_event()).unwrap();

    // The page image plus the overlay copy.
    let copies = document.query_selector_all("img[alt='A shot']").unwrap();
    assert_eq!(copies.length(), 2);
    assert_eq!(body_overflow(&document), "hidden");

    document.dispatch_event(&escape_event()).unwrap();
    assert_eq!(body_overflow(&document), "");

    // Reopening reuses the cached overlay instead of building another.
    image.dispatch_event(&click_event()).unwrap();
    let copies = document.query_selector_all("img[alt='A shot']").unwrap();
    assert_eq!(copies.length(), 2);
    assert_eq!(body_overflow(&document), "hidden");

    document.dispatch_event(&escape_event()).unwrap();
}

#[wasm_bindgen_test]
fn escape_without_an_open_lightbox_is_a_no_op() {
    let document = set_body(r#"<section id="solo">nothing to zoom</section>"#);
    PageController::new(document.clone()).install().unwrap();

    document.dispatch_event(&escape_event()).unwrap();
    assert_eq!(body_overflow(&document), "");
}

#[wasm_bindgen_test]
fn blank_contact_fields_toast_and_skip_the_network() {
    let document = set_body(
        r#"<form id="contact-form">
               <input name="name" id="name" value="   ">
               <input name="email" id="email" value="">
               <textarea name="message" id="message"></textarea>
               <button type="submit" id="send">Send</button>
           </form>"#,
    );
    PageController::new(document.clone()).install().unwrap();

    let form: HtmlFormElement = document
        .get_element_by_id("contact-form")
        .unwrap()
        .dyn_into()
        .unwrap();
    let event = submit_event();
    form.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    assert_eq!(toast_text(&document), "Please fill in all fields");

    // The submit button is only disabled once a request is in flight.
    let send: HtmlButtonElement = document
        .get_element_by_id("send")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(!send.disabled());
}

#[wasm_bindgen_test]
fn populated_submit_disables_the_button_and_guards_reentry() {
    let document = set_body(
        r#"<form id="contact-form">
               <input name="name" id="name" value="Ada">
               <input name="email" id="email" value="ada@example.com">
               <textarea name="message" id="message">hello there</textarea>
               <button type="submit" id="send">Send</button>
           </form>"#,
    );
    PageController::new(document.clone()).install().unwrap();

    let form: HtmlFormElement = document
        .get_element_by_id("contact-form")
        .unwrap()
        .dyn_into()
        .unwrap();
    form.dispatch_event(&submit_event()).unwrap();

    assert_eq!(toast_text(&document), "Sending...");
    let send: HtmlButtonElement = document
        .get_element_by_id("send")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(send.disabled());

    // A second submit while in flight is ignored; emptying a field first
    // proves it never reaches validation.
    let name: HtmlInputElement = document
        .get_element_by_id("name")
        .unwrap()
        .dyn_into()
        .unwrap();
    name.set_value("");
    form.dispatch_event(&submit_event()).unwrap();
    assert_eq!(toast_text(&document), "Sending...");
}

#[wasm_bindgen_test]
fn toast_replaces_the_previous_message() {
    let document = set_body("");
    let controller = PageController::new(document.clone());

    let toast = controller.toast();
    toast.notify("first", ToastKind::Info);
    toast.notify("second", ToastKind::Success);

    let nodes = document.query_selector_all("#site-toast").unwrap();
    assert_eq!(nodes.length(), 1);
    let node: HtmlElement = nodes.get(0).unwrap().dyn_into().unwrap();
    assert_eq!(node.text_content().unwrap(), "second");
    assert_eq!(node.style().get_property_value("opacity").unwrap(), "1");
}

#[wasm_bindgen_test]
fn fab_trigger_toggles_and_items_close() {
    let document = set_body(
        r#"<button id="fab-main-btn">+</button>
           <div class="fab-menu">
               <button class="fab-item" id="item">Email</button>
           </div>"#,
    );
    PageController::new(document.clone()).install().unwrap();

    let trigger = document.get_element_by_id("fab-main-btn").unwrap();
    let menu = document.query_selector(".fab-menu").unwrap().unwrap();

    trigger.dispatch_event(&click_event()).unwrap();
    assert!(menu.class_list().contains("active"));

    trigger.dispatch_event(&click_event()).unwrap();
    assert!(!menu.class_list().contains("active"));

    trigger.dispatch_event(&click_event()).unwrap();
    let item = document.get_element_by_id("item").unwrap();
    item.dispatch_event(&click_event()).unwrap();
    assert!(!menu.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn style_injection_is_idempotent() {
    let document = set_body(r#"<section id="once">once</section>"#);
    PageController::new(document.clone()).install().unwrap();
    PageController::new(document.clone()).install().unwrap();

    let styles = document
        .query_selector_all("style[data-nav-active]")
        .unwrap();
    assert_eq!(styles.length(), 1);
}
