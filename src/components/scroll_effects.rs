use crate::dom::{listen, query_html, set_style};
use crate::error::{PageError, PageResult};
use crate::page::Page;

pub const SHADOW_RAISED: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";
pub const SHADOW_RESTING: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1)";

pub fn header_shadow(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        SHADOW_RAISED
    } else {
        SHADOW_RESTING
    }
}

/// Empty string clears the inline `display` so the stylesheet applies again.
pub fn warn_display(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        "none"
    } else {
        ""
    }
}

pub fn install(page: &Page) -> PageResult<()> {
    let header = query_html(&page.document, ".header").ok();
    let warn = query_html(&page.document, ".warn").ok();
    if header.is_none() && warn.is_none() {
        return Err(PageError::MissingElement(".header, .warn".to_string()));
    }

    let window = page.window.clone();
    let shadow_threshold = page.config.header_shadow_threshold;
    let warn_threshold = page.config.warn_hide_threshold;

    listen(&page.window, "scroll", move |_| {
        let scroll_y = window.page_y_offset().unwrap_or(0.0);
        if let Some(header) = &header {
            set_style(header, "box-shadow", header_shadow(scroll_y, shadow_threshold));
        }
        if let Some(warn) = &warn {
            set_style(warn, "display", warn_display(scroll_y, warn_threshold));
        }
    })
}
