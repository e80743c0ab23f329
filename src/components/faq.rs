use std::rc::Rc;

use crate::dom::{listen, query_all, set_class};
use crate::error::{PageError, PageResult};
use crate::page::Page;

const ACTIVE: &str = "active";

/// Toggles `clicked` and closes every other item, so at most one stays open.
pub fn toggle_exclusive(open: &mut [bool], clicked: usize) {
    for (i, item) in open.iter_mut().enumerate() {
        *item = if i == clicked { !*item } else { false };
    }
}

pub fn install(page: &Page) -> PageResult<()> {
    let items = Rc::new(query_all(&page.document, ".faq-item")?);
    if items.is_empty() {
        return Err(PageError::MissingElement(".faq-item".to_string()));
    }

    for (index, item) in items.iter().enumerate() {
        let Some(question) = item.query_selector(".faq-question")? else {
            continue;
        };
        let items = items.clone();
        listen(&question, "click", move |_| {
            let mut open: Vec<bool> = items
                .iter()
                .map(|item| item.class_list().contains(ACTIVE))
                .collect();
            toggle_exclusive(&mut open, index);
            for (item, open) in items.iter().zip(open) {
                set_class(item, ACTIVE, open);
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_rest() {
        let mut open = vec![true, false, false];
        toggle_exclusive(&mut open, 2);
        assert_eq!(open, vec![false, false, true]);
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let mut open = vec![false, true, false];
        toggle_exclusive(&mut open, 1);
        assert_eq!(open, vec![false, false, false]);
    }

    #[test]
    fn out_of_range_click_closes_everything() {
        let mut open = vec![true, false];
        toggle_exclusive(&mut open, 7);
        assert_eq!(open, vec![false, false]);
    }
}
