use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::{listen, query_all, set_style, when_loaded};
use crate::error::{PageError, PageResult};
use crate::page::Page;

pub fn zoom_transform(hovered: bool) -> &'static str {
    if hovered {
        "scale(1.1)"
    } else {
        "scale(1)"
    }
}

fn product_image(card: &Element) -> Option<HtmlElement> {
    card.query_selector(".product-image img")
        .ok()
        .flatten()
        .and_then(|image| image.dyn_into::<HtmlElement>().ok())
}

pub fn install_hover(page: &Page) -> PageResult<()> {
    for card in query_all(&page.document, ".product-card")? {
        {
            let card_ref = card.clone();
            listen(&card, "mouseenter", move |_| {
                if let Some(image) = product_image(&card_ref) {
                    set_style(&image, "transform", zoom_transform(true));
                    set_style(&image, "transition", "transform 0.3s ease");
                }
            })?;
        }
        let card_ref = card.clone();
        listen(&card, "mouseleave", move |_| {
            if let Some(image) = product_image(&card_ref) {
                set_style(&image, "transform", zoom_transform(false));
            }
        })?;
    }
    Ok(())
}

/// Body starts transparent once the page has loaded and fades in shortly after.
pub fn install_fade_in(page: &Page) -> PageResult<()> {
    let body = page
        .document
        .body()
        .ok_or_else(|| PageError::MissingElement("body".to_string()))?;
    let delay_ms = page.config.body_fade_delay_ms;

    when_loaded(&page.window, &page.document, move || {
        set_style(&body, "opacity", "0");
        set_style(&body, "transition", "opacity 0.3s ease");
        Timeout::new(delay_ms, move || set_style(&body, "opacity", "1")).forget();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_only_while_hovered() {
        assert_eq!(zoom_transform(true), "scale(1.1)");
        assert_eq!(zoom_transform(false), "scale(1)");
    }
}
