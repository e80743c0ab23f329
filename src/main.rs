use log::{error, info};

mod config;
mod debounce;
mod dom;
mod error;
mod page;
mod slider;
mod storage;
mod components {
    pub mod age_gate;
    pub mod buttons;
    pub mod carousel;
    pub mod effects;
    pub mod faq;
    pub mod footer;
    pub mod menu;
    pub mod navigation;
    pub mod reveal;
    pub mod scroll_effects;
}

use page::Page;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting storefront");
    page::banner();

    match Page::new() {
        Ok(page) => page.install(),
        Err(e) => error!("Page is not available: {}", e),
    }
}
