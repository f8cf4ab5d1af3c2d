//! # Persisted Cell
//!
//! An in-memory value mirrored into one storage key.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Uninitialized ─────── load() ───────► Loaded                          │
//! │        │                                   │                            │
//! │        │ update()                          │ update()                   │
//! │        ▼                                   ▼                            │
//! │   memory only                         memory + queued write             │
//! │   (nothing written)                   (whole value as JSON)             │
//! │                                                                         │
//! │   load() replaces memory with what storage holds:                       │
//! │     key absent        ──► Default                                       │
//! │     unparseable blob  ──► Default (warn!)                               │
//! │     read failure      ──► Default (error!)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gate keeps a store that has not read storage yet from overwriting
//! what is there with its empty startup value.

use std::sync::{Mutex, MutexGuard, PoisonError};

use nexa_store::{LocalStorage, StorageKey};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::writer::WriterHandle;

/// Where a persisted store is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Uninitialized,
    Loaded,
}

struct Slot<T> {
    phase: LoadPhase,
    value: T,
}

/// A value of type `T` held in memory and written to `key` after each
/// change once loaded.
pub(crate) struct PersistedCell<T> {
    key: StorageKey,
    slot: Mutex<Slot<T>>,
    writer: WriterHandle,
}

impl<T> PersistedCell<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(key: StorageKey, writer: WriterHandle) -> Self {
        PersistedCell {
            key,
            slot: Mutex::new(Slot {
                phase: LoadPhase::Uninitialized,
                value: T::default(),
            }),
            writer,
        }
    }

    /// Reads the key and moves to [`LoadPhase::Loaded`]. Never fails.
    pub async fn load(&self, storage: &LocalStorage) {
        let value = match storage.get(self.key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key = %self.key, error = %e, "Stored value unreadable, starting empty");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                error!(key = %self.key, ?e, "Failed to load, starting empty");
                T::default()
            }
        };

        let mut slot = self.lock();
        slot.value = value;
        slot.phase = LoadPhase::Loaded;
        debug!(key = %self.key, "Loaded");
    }

    pub fn phase(&self) -> LoadPhase {
        self.lock().phase
    }

    /// Runs `f` against the current value.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().value)
    }

    /// Runs `f` against the value, then queues a write of the result if
    /// loaded.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut slot = self.lock();
        let result = f(&mut slot.value);

        // queued under the lock so channel order matches mutation order
        match slot.phase {
            LoadPhase::Loaded => self.persist(&slot.value),
            LoadPhase::Uninitialized => {
                debug!(key = %self.key, "Not loaded yet, write skipped")
            }
        }

        result
    }

    /// Resets memory to the default value without writing.
    pub fn reset(&self) {
        self.lock().value = T::default();
    }

    fn persist(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.writer.set(self.key, json),
            Err(e) => error!(key = %self.key, error = %e, "Failed to serialize"),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
