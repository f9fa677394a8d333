use super::KeyValueStore;
use crate::errors::AppResult;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-process store. Clones share the same map, so a facade and a widget
/// built from clones of one `MemoryStore` see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.map.borrow_mut().remove(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
