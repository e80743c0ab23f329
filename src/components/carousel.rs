use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{css_px, query_all_in, set_style};
use crate::error::PageResult;
use crate::page::Page;
use crate::slider::{CarouselHost, CarouselView, Layout, SliderController};

/// Name under which the controller is reachable from inline `onclick` markup.
pub const MOVE_SLIDER_GLOBAL: &str = "moveSlider";

pub type Sliders = Rc<RefCell<SliderController<DomCarousels>>>;

pub struct DomCarousel {
    window: Window,
    container: HtmlElement,
    track: HtmlElement,
    items: Vec<Element>,
}

impl DomCarousel {
    fn gap(&self) -> f64 {
        self.window
            .get_computed_style(&self.track)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("column-gap").ok())
            .and_then(|gap| css_px(&gap))
            .unwrap_or(0.0)
    }
}

impl CarouselView for DomCarousel {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn measure(&self) -> Layout {
        Layout {
            container_width: self.container.offset_width() as f64,
            item_width: self
                .items
                .first()
                .map(|item| item.get_bounding_client_rect().width())
                .unwrap_or(0.0),
            gap: self.gap(),
        }
    }

    fn render(&self, transform: &str) {
        set_style(&self.track, "transform", transform);
    }
}

/// Looks carousels up in the live document on every call.
pub struct DomCarousels {
    window: Window,
    document: Document,
}

impl CarouselHost for DomCarousels {
    type View = DomCarousel;

    fn view(&self, id: &str) -> Option<DomCarousel> {
        let container = self
            .document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let track = container
            .query_selector(".slider-track")
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()?;
        let items = query_all_in(&track, ".slider-item").ok()?;
        Some(DomCarousel {
            window: self.window.clone(),
            container,
            track,
            items,
        })
    }
}

/// JS numbers arrive as floats; anything non-finite moves nowhere.
pub fn direction_from(value: Option<f64>) -> i64 {
    match value {
        Some(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}

pub fn install(page: &Page) -> PageResult<Sliders> {
    let host = DomCarousels {
        window: page.window.clone(),
        document: page.document.clone(),
    };
    let sliders = Rc::new(RefCell::new(SliderController::new(
        host,
        page.config.slider_ids.iter().cloned(),
    )));

    let controller = sliders.clone();
    let entry = Closure::<dyn Fn(JsValue, JsValue)>::new(move |id: JsValue, direction: JsValue| {
        let Some(id) = id.as_string() else {
            return;
        };
        let Ok(mut controller) = controller.try_borrow_mut() else {
            return;
        };
        controller.advance(&id, direction_from(direction.as_f64()));
        log::debug!("{} at index {:?}", id, controller.index(&id));
    });
    js_sys::Reflect::set(
        &page.window,
        &JsValue::from_str(MOVE_SLIDER_GLOBAL),
        entry.as_ref(),
    )?;
    entry.forget();

    Ok(sliders)
}
