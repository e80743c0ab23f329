use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::debounce::{Debouncer, TimeoutScheduler};
use crate::dom::{listen, query, query_all, set_style};
use crate::error::PageResult;
use crate::page::Page;

pub const ADDED_LABEL: &str = "✓ Dodano!";
pub const ADDED_BACKGROUND: &str = "linear-gradient(135deg, #22c55e 0%, #10b981 100%)";
pub const NEWSLETTER_MESSAGE: &str =
    "Dziękujemy za zainteresowanie! Formularz zapisu do newslettera zostanie wkrótce dodany.";

/// Add-to-cart buttons confirm for a moment, then go back to their label.
pub fn install_cart(page: &Page) -> PageResult<()> {
    let buttons = query_all(&page.document, ".btn-add-cart")?;

    for button in buttons {
        let Ok(button) = button.dyn_into::<HtmlElement>() else {
            continue;
        };
        // Captured once so a second click mid-feedback can't latch the feedback text.
        let label = button.text_content();

        let restore = {
            let button = button.clone();
            Rc::new(Debouncer::new(
                TimeoutScheduler,
                page.config.cart_feedback_ms,
                move || {
                    button.set_text_content(label.as_deref());
                    set_style(&button, "background", "");
                },
            ))
        };

        let target = button.clone();
        listen(&target, "click", move |event| {
            event.prevent_default();
            button.set_text_content(Some(ADDED_LABEL));
            set_style(&button, "background", ADDED_BACKGROUND);
            restore.trigger();
        })?;
    }

    Ok(())
}

pub fn install_newsletter(page: &Page) -> PageResult<()> {
    let button = query(&page.document, ".btn-newsletter")?;
    let window = page.window.clone();
    listen(&button, "click", move |event| {
        event.prevent_default();
        let _ = window.alert_with_message(NEWSLETTER_MESSAGE);
    })
}
