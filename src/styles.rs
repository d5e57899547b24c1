use wasm_bindgen::JsValue;
use web_sys::Document;

const MARKER_ATTRIBUTE: &str = "data-nav-active";

const PAGE_CSS: &str = r#"
    nav a.active{ background: rgba(255,255,255,0.14); transform: translateY(-1px); box-shadow: 0 8px 22px rgba(0,0,0,0.06); }
    section.in{ transform: translateY(0); opacity:1; transition: opacity .6s ease, transform .6s ease; }
    section{ opacity:0; transform: translateY(8px); }
"#;

/// Installs the active-link and reveal rules once. A marker attribute on the
/// injected element keeps repeated installs from stacking duplicates.
pub fn ensure_installed(document: &Document) -> Result<(), JsValue> {
    let marker = format!("style[{}]", MARKER_ATTRIBUTE);
    if document.query_selector(&marker)?.is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_attribute(MARKER_ATTRIBUTE, "1")?;
    style.set_text_content(Some(PAGE_CSS));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}
