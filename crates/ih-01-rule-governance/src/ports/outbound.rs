//! # Outbound Ports
//!
//! Persistence the rule manager depends on.
//!
//! Production: the hub's ledger-backed object store.
//! Testing: `InMemoryObjectStore` (adapters/memory.rs).

use crate::domain::{RuleError, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Durable mapping from string key to opaque serialized value.
pub trait ObjectStore: Send + Sync {
    /// Get the raw value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}

/// Typed JSON helpers over any [`ObjectStore`].
pub trait ObjectStoreExt: ObjectStore {
    /// Decode the value under `key`. `Ok(None)` if the key is absent.
    fn get_object<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RuleError> {
        match self.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Encode `value` as JSON and store it under `key`.
    fn set_object<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), RuleError> {
        let bytes = serde_json::to_vec(value)?;
        self.set(key, bytes)?;
        Ok(())
    }
}

impl<S: ObjectStore + ?Sized> ObjectStoreExt for S {}
