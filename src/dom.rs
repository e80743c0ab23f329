use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions,
    Window,
};

use crate::error::{PageError, PageResult};

/// Attaches `handler` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> PageResult<()> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Runs `run` on window `load`, or right away if the page already finished
/// loading before the module started.
pub fn when_loaded(
    window: &Window,
    document: &Document,
    run: impl FnOnce() + 'static,
) -> PageResult<()> {
    if document.ready_state() == "complete" {
        run();
        return Ok(());
    }
    let mut run = Some(run);
    listen(window, "load", move |_| {
        if let Some(run) = run.take() {
            run();
        }
    })
}

pub fn by_id(document: &Document, id: &str) -> PageResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", id)))
}

pub fn html_by_id(document: &Document, id: &str) -> PageResult<HtmlElement> {
    by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::MissingElement(format!("#{}", id)))
}

pub fn query(document: &Document, selector: &str) -> PageResult<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| PageError::MissingElement(selector.to_string()))
}

pub fn query_html(document: &Document, selector: &str) -> PageResult<HtmlElement> {
    query(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::MissingElement(selector.to_string()))
}

pub fn query_all(document: &Document, selector: &str) -> PageResult<Vec<Element>> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> PageResult<Vec<Element>> {
    Ok(elements(&root.query_selector_all(selector)?))
}

pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn scroll_target_top(rect_top: f64, page_y: f64, header_offset: f64) -> f64 {
    rect_top + page_y - header_offset
}

/// Smoothly scrolls so `target` sits just below the fixed header.
pub fn scroll_below_header(window: &Window, target: &Element, header_offset: f64) {
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = scroll_target_top(target.get_bounding_client_rect().top(), page_y, header_offset);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Leading number of a CSS length, read the way `parseFloat` reads it.
pub fn css_px(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let numeric = raw
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map(|(i, _)| &raw[..i])
        .unwrap_or(raw);

    (1..=numeric.len())
        .rev()
        .find_map(|end| numeric[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
