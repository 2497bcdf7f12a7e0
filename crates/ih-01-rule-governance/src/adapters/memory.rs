use crate::domain::StoreError;
use crate::ports::outbound::ObjectStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory object store.
///
/// Each get/set is atomic on its own. A fetch-mutate-persist sequence is not.
#[derive(Default)]
pub struct InMemoryObjectStore {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.data.write().insert(key.to_string(), value);
        Ok(())
    }
}
