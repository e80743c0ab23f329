use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::{query_all, set_style};
use crate::error::PageResult;
use crate::page::Page;

pub const REVEAL_SELECTOR: &str = ".testimonial-card, .product-card, .showcase-item, .promo-card";

const HIDDEN: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];
const SHOWN: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

fn apply(element: &HtmlElement, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        set_style(element, property, value);
    }
}

/// Fades cards in as they scroll into view. Each card is revealed once.
pub fn install(page: &Page) -> PageResult<()> {
    let targets: Vec<HtmlElement> = query_all(&page.document, REVEAL_SELECTOR)?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect();
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    apply(element, &SHOWN);
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(page.config.reveal_threshold));
    options.set_root_margin(&page.config.reveal_root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &targets {
        apply(element, &HIDDEN);
        observer.observe(element);
    }
    log::debug!("Observing {} cards for reveal", targets.len());
    Ok(())
}
