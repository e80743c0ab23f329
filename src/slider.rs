use std::collections::BTreeMap;

/// Measurements taken from the rendered carousel at the moment of a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub container_width: f64,
    pub item_width: f64,
    pub gap: f64,
}

impl Layout {
    /// Count of whole items that fit the container. Never less than 1, so
    /// hidden or unmeasured carousels still page one item at a time.
    pub fn items_visible(&self) -> usize {
        let ratio = ((self.container_width + self.gap) / (self.item_width + self.gap)).round();
        if ratio.is_finite() && ratio >= 1.0 {
            ratio as usize
        } else {
            1
        }
    }

    pub fn step(&self) -> f64 {
        self.item_width + self.gap
    }
}

pub fn max_index(total_items: usize, items_visible: usize) -> usize {
    total_items.saturating_sub(items_visible)
}

/// Moves `index` by `direction`, clamping to `0` first and `max` second.
pub fn clamp_index(index: usize, direction: i64, max: usize) -> usize {
    let moved = (index as i64).saturating_add(direction).max(0) as usize;
    moved.min(max)
}

pub fn translate_x(offset: f64) -> String {
    if offset == 0.0 {
        "translateX(0px)".to_string()
    } else {
        format!("translateX(-{}px)", offset)
    }
}

/// A single carousel as currently rendered.
pub trait CarouselView {
    fn item_count(&self) -> usize;
    fn measure(&self) -> Layout;
    fn render(&self, transform: &str);
}

/// Resolves a carousel id to its rendered view, if the markup exists.
pub trait CarouselHost {
    type View: CarouselView;

    fn view(&self, id: &str) -> Option<Self::View>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
}

/// Owns the logical index of every registered carousel. The rendered
/// transform is only ever written from that index, never read back.
pub struct SliderController<H: CarouselHost> {
    host: H,
    carousels: BTreeMap<String, Carousel>,
}

impl<H: CarouselHost> SliderController<H> {
    pub fn new<I, S>(host: H, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let carousels = ids
            .into_iter()
            .map(|id| (id.into(), Carousel::default()))
            .collect();
        Self { host, carousels }
    }

    pub fn index(&self, id: &str) -> Option<usize> {
        self.carousels.get(id).map(|carousel| carousel.index)
    }

    /// Pages the carousel by `direction` whole items. Unknown ids, missing
    /// markup and empty tracks leave everything untouched.
    pub fn advance(&mut self, id: &str, direction: i64) {
        let Some(carousel) = self.carousels.get_mut(id) else {
            return;
        };
        let Some(view) = self.host.view(id) else {
            return;
        };
        let total = view.item_count();
        if total == 0 {
            return;
        }

        let layout = view.measure();
        let max = max_index(total, layout.items_visible());
        carousel.index = clamp_index(carousel.index, direction, max);

        view.render(&translate_x(carousel.index as f64 * layout.step()));
    }

    pub fn reset_on_resize(&mut self) {
        for (id, carousel) in self.carousels.iter_mut() {
            if let Some(view) = self.host.view(id) {
                carousel.index = 0;
                view.render(&translate_x(0.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeView {
        items: usize,
        layout: Layout,
        rendered: Rc<RefCell<Vec<String>>>,
    }

    impl CarouselView for FakeView {
        fn item_count(&self) -> usize {
            self.items
        }

        fn measure(&self) -> Layout {
            self.layout
        }

        fn render(&self, transform: &str) {
            self.rendered.borrow_mut().push(transform.to_string());
        }
    }

    #[derive(Default)]
    struct FakeHost {
        views: HashMap<String, FakeView>,
    }

    impl FakeHost {
        fn with(mut self, id: &str, items: usize, layout: Layout) -> Self {
            self.views.insert(
                id.to_string(),
                FakeView {
                    items,
                    layout,
                    rendered: Rc::default(),
                },
            );
            self
        }

        fn rendered(&self, id: &str) -> Rc<RefCell<Vec<String>>> {
            self.views[id].rendered.clone()
        }
    }

    impl CarouselHost for FakeHost {
        type View = FakeView;

        fn view(&self, id: &str) -> Option<FakeView> {
            self.views.get(id).cloned()
        }
    }

    // 3 items of 100px with a 20px gap fit a 340px container.
    const THREE_UP: Layout = Layout {
        container_width: 340.0,
        item_width: 100.0,
        gap: 20.0,
    };

    #[test]
    fn items_visible_rounds_and_floors_at_one() {
        assert_eq!(THREE_UP.items_visible(), 3);
        let hidden = Layout {
            container_width: 0.0,
            item_width: 0.0,
            gap: 0.0,
        };
        assert_eq!(hidden.items_visible(), 1);
        let zero_item = Layout {
            container_width: 300.0,
            item_width: 0.0,
            gap: 0.0,
        };
        assert_eq!(zero_item.items_visible(), 1);
        let narrow = Layout {
            container_width: 40.0,
            item_width: 200.0,
            gap: 0.0,
        };
        assert_eq!(narrow.items_visible(), 1);
    }

    #[test]
    fn clamps_low_before_high() {
        assert_eq!(clamp_index(0, -1, 3), 0);
        assert_eq!(clamp_index(3, 1, 3), 3);
        assert_eq!(clamp_index(2, 100, 3), 3);
        assert_eq!(clamp_index(2, i64::MIN, 3), 0);
        assert_eq!(clamp_index(0, 1, 0), 0);
    }

    #[test]
    fn six_items_three_visible_stops_at_three() {
        let host = FakeHost::default().with("jnrSlider", 6, THREE_UP);
        let rendered = host.rendered("jnrSlider");
        let mut controller = SliderController::new(host, ["jnrSlider"]);

        let mut seen = Vec::new();
        for _ in 0..4 {
            controller.advance("jnrSlider", 1);
            seen.push(controller.index("jnrSlider").unwrap());
        }
        assert_eq!(seen, vec![1, 2, 3, 3]);
        assert_eq!(
            *rendered.borrow(),
            vec![
                "translateX(-120px)",
                "translateX(-240px)",
                "translateX(-360px)",
                "translateX(-360px)",
            ]
        );
    }

    #[test]
    fn zero_direction_keeps_index_and_offset() {
        let host = FakeHost::default().with("fumotSlider", 8, THREE_UP);
        let rendered = host.rendered("fumotSlider");
        let mut controller = SliderController::new(host, ["fumotSlider"]);

        controller.advance("fumotSlider", 2);
        controller.advance("fumotSlider", 0);
        assert_eq!(controller.index("fumotSlider"), Some(2));
        let rendered = rendered.borrow();
        assert_eq!(rendered[0], rendered[1]);
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        let host = FakeHost::default().with("merrymiSlider", 7, THREE_UP);
        let mut controller = SliderController::new(host, ["merrymiSlider"]);
        let max = max_index(7, THREE_UP.items_visible());

        for direction in [1, 5, -2, 9, -30, 3, 0, 1, 1, 1, -1, 40] {
            controller.advance("merrymiSlider", direction);
            let index = controller.index("merrymiSlider").unwrap();
            assert!(index <= max, "index {} exceeded {}", index, max);
        }
    }

    #[test]
    fn all_items_fit_collapses_to_zero() {
        let wide = Layout {
            container_width: 1000.0,
            item_width: 100.0,
            gap: 20.0,
        };
        let host = FakeHost::default().with("jnrSlider", 2, wide);
        let rendered = host.rendered("jnrSlider");
        let mut controller = SliderController::new(host, ["jnrSlider"]);

        controller.advance("jnrSlider", 1);
        assert_eq!(controller.index("jnrSlider"), Some(0));
        assert_eq!(*rendered.borrow(), vec!["translateX(0px)"]);
    }

    #[test]
    fn empty_or_unknown_carousels_are_ignored() {
        let host = FakeHost::default()
            .with("jnrSlider", 0, THREE_UP)
            .with("unregistered", 6, THREE_UP);
        let empty = host.rendered("jnrSlider");
        let unregistered = host.rendered("unregistered");
        let mut controller = SliderController::new(host, ["jnrSlider", "fumotSlider"]);

        controller.advance("jnrSlider", 1);
        controller.advance("fumotSlider", 1);
        controller.advance("unregistered", 1);

        assert_eq!(controller.index("jnrSlider"), Some(0));
        assert_eq!(controller.index("fumotSlider"), Some(0));
        assert_eq!(controller.index("unregistered"), None);
        assert!(empty.borrow().is_empty());
        assert!(unregistered.borrow().is_empty());
    }

    #[test]
    fn reset_zeroes_every_rendered_carousel() {
        let host = FakeHost::default()
            .with("merrymiSlider", 9, THREE_UP)
            .with("jnrSlider", 6, THREE_UP);
        let rendered = host.rendered("merrymiSlider");
        let mut controller =
            SliderController::new(host, ["merrymiSlider", "jnrSlider", "fumotSlider"]);

        controller.advance("merrymiSlider", 4);
        controller.advance("jnrSlider", 2);
        controller.reset_on_resize();

        assert_eq!(controller.index("merrymiSlider"), Some(0));
        assert_eq!(controller.index("jnrSlider"), Some(0));
        assert_eq!(controller.index("fumotSlider"), Some(0));
        assert_eq!(rendered.borrow().last().map(String::as_str), Some("translateX(0px)"));
    }

    #[test]
    fn offset_is_index_times_step() {
        let layout = Layout {
            container_width: 612.5,
            item_width: 187.5,
            gap: 24.0,
        };
        let host = FakeHost::default().with("jnrSlider", 10, layout);
        let rendered = host.rendered("jnrSlider");
        let mut controller = SliderController::new(host, ["jnrSlider"]);

        controller.advance("jnrSlider", 2);
        assert_eq!(
            rendered.borrow()[0],
            format!("translateX(-{}px)", 2.0 * (187.5 + 24.0))
        );
    }
}
