//! In-memory [`SessionStorage`] for unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::state::store::SessionStorage;

#[derive(Default)]
pub(crate) struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub(crate) fn with(pairs: &[(&str, &str)]) -> Self {
        let storage = Self::default();
        for (k, v) in pairs {
            storage.items.borrow_mut().insert((*k).to_owned(), (*v).to_owned());
        }
        storage
    }

    pub(crate) fn keys(&self) -> Vec<String> {
        self.items.borrow().keys().cloned().collect()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
