use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::dom::{self, by_id, listen, set_class};
use crate::error::PageResult;
use crate::page::Page;

const ACTIVE: &str = "active";

/// Open/closed state of the mobile navigation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

/// A click closes the menu unless it landed on the hamburger or inside the menu.
pub fn closes_on_click(in_hamburger: bool, in_menu: bool) -> bool {
    !in_hamburger && !in_menu
}

pub fn closes_on_resize(inner_width: f64, breakpoint: f64) -> bool {
    inner_width > breakpoint
}

/// Hamburger, menu panel and the warning bar all carry `active` together.
pub struct MobileMenu {
    hamburger: Element,
    panel: Element,
    warn: Option<Element>,
    state: Cell<MenuState>,
}

impl MobileMenu {
    fn set(&self, state: MenuState) {
        self.state.set(state);
        set_class(&self.hamburger, ACTIVE, state.open);
        set_class(&self.panel, ACTIVE, state.open);
        if let Some(warn) = &self.warn {
            set_class(warn, ACTIVE, state.open);
        }
    }

    pub fn toggle(&self) {
        self.set(self.state.get().toggled());
    }

    pub fn close(&self) {
        self.set(self.state.get().closed());
    }

    fn contains(&self, target: Option<&Node>) -> (bool, bool) {
        (
            self.hamburger.contains(target),
            self.panel.contains(target),
        )
    }
}

pub fn install(page: &Page) -> PageResult<Rc<MobileMenu>> {
    let document = &page.document;
    let hamburger = by_id(document, "hamburger")?;
    let panel = by_id(document, "mobileMenu")?;

    let menu = Rc::new(MobileMenu {
        warn: document.query_selector(".warn").ok().flatten(),
        state: Cell::new(MenuState {
            open: hamburger.class_list().contains(ACTIVE),
        }),
        hamburger,
        panel,
    });

    {
        let hamburger = menu.hamburger.clone();
        let menu = menu.clone();
        listen(&hamburger, "click", move |_| menu.toggle())?;
    }

    for link in dom::query_all_in(&menu.panel, "a")? {
        let menu = menu.clone();
        listen(&link, "click", move |_| menu.close())?;
    }

    {
        let menu = menu.clone();
        listen(document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let (in_hamburger, in_menu) = menu.contains(target.as_ref());
            if closes_on_click(in_hamburger, in_menu) {
                menu.close();
            }
        })?;
    }

    Ok(menu)
}
