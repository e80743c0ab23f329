use crate::dom::{by_id, html_by_id, listen, set_style, when_loaded};
use crate::error::PageResult;
use crate::page::Page;
use crate::storage::{age_confirmed, confirm_age};

pub const REFUSAL_MESSAGE: &str = "Dostęp zabroniony. Strona tylko dla osób 18+";

pub fn modal_display(confirmed: bool) -> &'static str {
    if confirmed {
        "none"
    } else {
        "flex"
    }
}

/// Blocks the page behind `#ageModal` until the visitor confirms they are an adult.
/// Without localStorage the modal shows on every visit.
pub fn install(page: &Page) -> PageResult<()> {
    let document = &page.document;
    let modal = html_by_id(document, "ageModal")?;
    let yes = by_id(document, "yesBtn")?;
    let no = by_id(document, "noBtn")?;
    let storage = page.window.local_storage().ok().flatten();

    {
        let modal = modal.clone();
        let storage = storage.clone();
        when_loaded(&page.window, document, move || {
            let confirmed = storage.as_ref().map(|s| age_confirmed(s)).unwrap_or(false);
            set_style(&modal, "display", modal_display(confirmed));
        })?;
    }

    listen(&yes, "click", move |_| {
        if let Some(storage) = &storage {
            if let Err(e) = confirm_age(storage) {
                log::warn!("Could not persist age confirmation: {}", e);
            }
        }
        set_style(&modal, "display", modal_display(true));
    })?;

    let window = page.window.clone();
    let redirect = page.config.age_redirect_url.clone();
    listen(&no, "click", move |_| {
        let _ = window.alert_with_message(REFUSAL_MESSAGE);
        let _ = window.close();
        let _ = window.location().set_href(&redirect);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::MemoryStore;

    #[test]
    fn modal_shows_until_confirmed() {
        let store = MemoryStore::default();
        assert_eq!(modal_display(age_confirmed(&store)), "flex");
        confirm_age(&store).unwrap();
        assert_eq!(modal_display(age_confirmed(&store)), "none");
    }
}
