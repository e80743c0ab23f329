use web_sys::Element;

use crate::dom::{listen, query_all, scroll_below_header};
use crate::error::{PageError, PageResult};
use crate::page::Page;

/// CTA buttons and the section each one scrolls to.
const CTA_TARGETS: &[(&str, &str)] = &[
    (".btn-hero-primary, .btn-promo", "#products"),
    (".btn-hero-secondary", "#bestsellers"),
];

/// Selector to scroll to for an in-page link, or `None` for a bare `#`.
pub fn anchor_selector(href: Option<&str>) -> Option<&str> {
    match href {
        Some(href) if href.starts_with('#') && href.len() > 1 => Some(href),
        _ => None,
    }
}

fn bind_scroll(page: &Page, trigger: &Element, target: Option<String>) -> PageResult<()> {
    let window = page.window.clone();
    let document = page.document.clone();
    let header_offset = page.config.header_offset;
    let anchor = trigger.clone();

    listen(trigger, "click", move |event| {
        event.prevent_default();
        let href = anchor.get_attribute("href");
        let selector = target.as_deref().or_else(|| anchor_selector(href.as_deref()));
        // Markup can carry hrefs that are not valid selectors.
        if let Some(Ok(Some(element))) = selector.map(|s| document.query_selector(s)) {
            scroll_below_header(&window, &element, header_offset);
        }
    })
}

pub fn install(page: &Page) -> PageResult<()> {
    let anchors = query_all(&page.document, "a[href^=\"#\"]")?;
    for anchor in &anchors {
        bind_scroll(page, anchor, None)?;
    }

    let mut bound = anchors.len();
    for (buttons, target) in CTA_TARGETS {
        for button in query_all(&page.document, buttons)? {
            bind_scroll(page, &button, Some(target.to_string()))?;
            bound += 1;
        }
    }

    if bound == 0 {
        return Err(PageError::MissingElement("a[href^=\"#\"]".to_string()));
    }
    log::debug!("Smooth scroll bound to {} elements", bound);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_selector(Some("#")), None);
        assert_eq!(anchor_selector(None), None);
    }

    #[test]
    fn fragment_is_used_as_selector() {
        assert_eq!(anchor_selector(Some("#faq")), Some("#faq"));
        assert_eq!(anchor_selector(Some("/shop#faq")), None);
    }
}
