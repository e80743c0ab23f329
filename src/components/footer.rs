use chrono::Datelike;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::{by_id, listen, query_all, query_html};
use crate::error::PageResult;
use crate::page::Page;

pub fn next_display(current: &str) -> &'static str {
    if current == "block" {
        "none"
    } else {
        "block"
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// `#city` folds the contact links in `.foot-cont-three` open and shut.
pub fn install(page: &Page) -> PageResult<()> {
    let city = by_id(&page.document, "city")?;
    let links: Vec<HtmlElement> = query_all(&page.document, ".foot-cont-three a")?
        .into_iter()
        .filter_map(|link| link.dyn_into::<HtmlElement>().ok())
        .collect();

    let toggle = city.clone();
    listen(&city, "click", move |_| {
        let _ = toggle.class_list().toggle("active");
        for link in &links {
            let style = link.style();
            let current = style.get_property_value("display").unwrap_or_default();
            let _ = style.set_property("display", next_display(&current));
        }
    })
}

pub fn install_year(page: &Page) -> PageResult<()> {
    let span = query_html(&page.document, "#year")?;
    span.set_inner_text(&current_year().to_string());
    Ok(())
}
