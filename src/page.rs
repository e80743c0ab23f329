use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{Document, Window};

use crate::components::carousel::Sliders;
use crate::components::menu::{closes_on_resize, MobileMenu};
use crate::components::{
    age_gate, buttons, carousel, effects, faq, footer, menu, navigation, reveal, scroll_effects,
};
use crate::config::PageConfig;
use crate::debounce::{Debouncer, TimeoutScheduler};
use crate::dom::listen;
use crate::error::{PageError, PageResult};

pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: PageConfig,
}

fn report<T>(component: &str, result: PageResult<T>) -> Option<T> {
    match result {
        Ok(value) => {
            debug!("Installed {}", component);
            Some(value)
        }
        Err(PageError::MissingElement(selector)) => {
            debug!("Skipping {}: no {} on this page", component, selector);
            None
        }
        Err(e) => {
            warn!("Failed to install {}: {}", component, e);
            None
        }
    }
}

impl Page {
    pub fn new() -> PageResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| PageError::Js("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Js("window has no document".to_string()))?;
        let config = PageConfig::from_document(&document);
        Ok(Self {
            window,
            document,
            config,
        })
    }

    /// Wires up every behavior whose markup is present. A missing section
    /// never prevents the others from working.
    pub fn install(&self) {
        let menu = report("mobile menu", menu::install(self));
        report("faq accordion", faq::install(self));
        report("smooth scroll", navigation::install(self));
        report("scroll effects", scroll_effects::install(self));
        report("reveal on scroll", reveal::install(self));
        report("add to cart feedback", buttons::install_cart(self));
        report("newsletter button", buttons::install_newsletter(self));
        report("product hover", effects::install_hover(self));
        report("page fade in", effects::install_fade_in(self));
        let sliders = report("sliders", carousel::install(self));
        report("age gate", age_gate::install(self));
        report("footer toggle", footer::install(self));
        report("footer year", footer::install_year(self));
        report("resize handling", self.install_resize(menu, sliders));

        info!("Page behaviors ready");
    }

    /// One debounced resize pass closes the mobile menu on wide viewports
    /// and snaps every slider back to its first item.
    fn install_resize(
        &self,
        menu: Option<Rc<MobileMenu>>,
        sliders: Option<Sliders>,
    ) -> PageResult<()> {
        let window = self.window.clone();
        let breakpoint = self.config.mobile_breakpoint;

        let debouncer = Debouncer::new(TimeoutScheduler, self.config.resize_debounce_ms, move || {
            if let Some(menu) = &menu {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|width| width.as_f64())
                    .unwrap_or(0.0);
                if closes_on_resize(width, breakpoint) {
                    menu.close();
                }
            }
            if let Some(sliders) = &sliders {
                if let Ok(mut sliders) = sliders.try_borrow_mut() {
                    sliders.reset_on_resize();
                }
            }
        });

        listen(&self.window, "resize", move |_| debouncer.trigger())
    }
}

pub fn banner() {
    gloo_console::log!(
        "%c🔥 Kup-Jednorazówki.pl 🔥",
        "color: #4353FF; font-size: 24px; font-weight: bold;"
    );
    gloo_console::log!(
        "%cNajlepsze jednorazówki w najlepszych cenach!",
        "color: #22c55e; font-size: 14px;"
    );
}
