//! Durable key-value storage behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only needs `get`/`set`/`remove` on string slots. The
//! browser backend wraps `window.localStorage`; the in-memory backend serves
//! tests and non-browser hosts. JSON encoding lives here so callers never
//! repeat the serde glue.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure reported by a storage backend or by JSON encoding.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (SSR, sandboxed iframe, disabled by the user).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused a read.
    #[error("storage read failed: {0}")]
    Read(String),

    /// The backend refused a write or delete (quota exceeded, security error).
    #[error("storage write failed: {0}")]
    Write(String),

    /// A value could not be encoded as JSON.
    #[error("serialize failed: {0}")]
    Serialize(serde_json::Error),

    /// A stored value is not valid JSON for the requested type.
    #[error("stored value is malformed: {0}")]
    Malformed(serde_json::Error),
}

/// String key-value slots with `localStorage` semantics.
pub trait KeyValueStorage {
    /// Read the raw value at `key`, `Ok(None)` when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend is unreachable or rejects the read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend is unreachable or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Clear the slot at `key`. Clearing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend is unreachable or rejects the delete.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and decode a JSON value stored at `key`.
///
/// # Errors
///
/// Returns [`StorageError::Malformed`] when the slot holds something that does
/// not decode as `T`, or any backend error from the read.
pub fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(StorageError::Malformed)
}

/// Encode `value` as JSON and store it at `key`.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] when encoding fails, or any backend error
/// from the write.
pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(StorageError::Serialize)?;
    storage.set_item(key, &raw)
}

/// `window.localStorage`, looked up on every call.
///
/// Outside the `hydrate` build every operation reports
/// [`StorageError::Unavailable`], so server rendering starts from an empty
/// session.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process storage. Clones share the same slots, so a clone handed to a
/// second store behaves like the same browser profile after a reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
