//! In-memory dots slot
//!
//! Behaves like a browser key-value slot: it stores the serialized string,
//! so hosts and tests can plant arbitrary payloads (including broken ones)
//! and read back exactly what the store wrote. Clones share the same slot.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Dot;

use super::codec::{decode_dots, encode_dots};
use super::error::{StorageError, StorageResult};
use super::persistence::DotPersistence;

#[derive(Debug, Default)]
struct SlotState {
    payload: Option<String>,
    reject_writes: bool,
    writes: usize,
}

/// Shared handle to an in-memory slot
#[derive(Debug, Clone)]
pub struct MemorySlot {
    key: String,
    state: Rc<RefCell<SlotState>>,
}

impl MemorySlot {
    /// Create an empty slot under the given key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            state: Rc::default(),
        }
    }

    /// Create a slot pre-filled with a raw payload
    pub fn with_payload(key: impl Into<String>, payload: impl Into<String>) -> Self {
        let slot = Self::new(key);
        slot.set_payload(payload);
        slot
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw stored payload, if any
    pub fn payload(&self) -> Option<String> {
        self.state.borrow().payload.clone()
    }

    /// Overwrite the raw payload
    pub fn set_payload(&self, payload: impl Into<String>) {
        self.state.borrow_mut().payload = Some(payload.into());
    }

    /// Make subsequent writes fail as if the quota were exhausted
    pub fn set_reject_writes(&self, reject: bool) {
        self.state.borrow_mut().reject_writes = reject;
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }
}

impl DotPersistence for MemorySlot {
    fn load(&self) -> StorageResult<Option<Vec<Dot>>> {
        match self.state.borrow().payload.as_deref() {
            Some(payload) => decode_dots(payload),
            None => Ok(None),
        }
    }

    fn save(&mut self, dots: &[Dot]) -> StorageResult<()> {
        let mut state = self.state.borrow_mut();
        if state.reject_writes {
            return Err(StorageError::SlotFull {
                key: self.key.clone(),
            });
        }
        state.payload = Some(encode_dots(dots)?);
        state.writes += 1;
        Ok(())
    }
}
