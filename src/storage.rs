use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Failure reported by the injected configuration store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("configuration store failure: {0}")]
pub struct StorageError(pub String);

/// The persistence capability the host must inject: a single-slot
/// key-value store holding the serialized rule table.
///
/// All calls happen on explicit configuration commands, never on the
/// interception hot path.
pub trait ConfigStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

impl<S: ConfigStore> ConfigStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.as_ref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.as_ref().set(key, value)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.as_ref().clear()
    }
}

/// In-memory store for hosts without durable storage and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slot
            .as_ref()
            .filter(|(stored_key, _)| stored_key == key)
            .map(|(_, value)| value.clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some((key.to_string(), value.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
        Ok(())
    }
}
