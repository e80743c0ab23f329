use web_sys::Storage;

use crate::error::PageResult;

pub const AGE_CONFIRMED_KEY: &str = "ageConfirmed";

/// String key/value storage that survives page reloads.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> PageResult<()>;
}

impl FlagStore for Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> PageResult<()> {
        self.set_item(key, value)?;
        Ok(())
    }
}

pub fn age_confirmed(store: &impl FlagStore) -> bool {
    store.get(AGE_CONFIRMED_KEY).as_deref() == Some("true")
}

pub fn confirm_age(store: &impl FlagStore) -> PageResult<()> {
    store.set(AGE_CONFIRMED_KEY, "true")
}
