//! # Storage Writer
//!
//! Background task that applies persistence commands to local storage.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storage Writer                                    │
//! │                                                                         │
//! │  CartStore::add ──┐                                                    │
//! │  WishlistStore ───┼──► WriterHandle ──► unbounded mpsc ──┐             │
//! │  SessionStore ────┘    (sync send,                       │             │
//! │                         never blocks)                    ▼             │
//! │                                              ┌──────────────────────┐  │
//! │                                              │   StorageWriter      │  │
//! │                                              │   (tokio task)       │  │
//! │                                              │                      │  │
//! │                                              │  Set ──► kv upsert   │  │
//! │                                              │  Remove ──► delete   │  │
//! │                                              │  ClearAll ──► tx     │  │
//! │                                              │  Flush ──► ack       │  │
//! │                                              └──────────┬───────────┘  │
//! │                                                         ▼              │
//! │                                                   LocalStorage         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands are applied one at a time in the order they were sent, so the
//! last write to a key wins. A failed command is logged and skipped.

use nexa_store::{DbResult, LocalStorage, StorageKey};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

// =============================================================================
// Commands
// =============================================================================

/// A unit of work for the writer task.
#[derive(Debug)]
pub(crate) enum WriteCommand {
    /// Replace the value stored under a key.
    Set { key: StorageKey, value: String },

    /// Remove a single key.
    Remove { key: StorageKey },

    /// Remove every storefront key.
    ClearAll,

    /// Acknowledge once every earlier command has been applied.
    Flush(oneshot::Sender<()>),
}

impl WriteCommand {
    /// Key name for log fields.
    fn target(&self) -> &'static str {
        match self {
            WriteCommand::Set { key, .. } | WriteCommand::Remove { key } => key.as_str(),
            WriteCommand::ClearAll => "*",
            WriteCommand::Flush(_) => "flush",
        }
    }
}

// =============================================================================
// Writer Task
// =============================================================================

/// Applies [`WriteCommand`]s to local storage.
pub struct StorageWriter {
    storage: LocalStorage,
    rx: mpsc::UnboundedReceiver<WriteCommand>,
}

/// Cloneable handle for submitting writes.
#[derive(Debug, Clone)]
pub struct WriterHandle {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl StorageWriter {
    /// Creates a writer and its handle. Call [`StorageWriter::run`] to start it.
    pub fn new(storage: LocalStorage) -> (Self, WriterHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (StorageWriter { storage, rx }, WriterHandle { tx })
    }

    /// Creates a writer and spawns it on the current tokio runtime.
    pub fn spawn(storage: LocalStorage) -> WriterHandle {
        let (writer, handle) = StorageWriter::new(storage);
        tokio::spawn(writer.run());
        handle
    }

    /// Runs until every [`WriterHandle`] has been dropped.
    pub async fn run(mut self) {
        info!("Storage writer starting");

        while let Some(command) = self.rx.recv().await {
            match command {
                WriteCommand::Flush(ack) => {
                    let _ = ack.send(());
                }
                command => {
                    if let Err(e) = self.apply(&command).await {
                        error!(?e, key = command.target(), "Storage write failed");
                    }
                }
            }
        }

        info!("Storage writer stopped");
    }

    async fn apply(&self, command: &WriteCommand) -> DbResult<()> {
        match command {
            WriteCommand::Set { key, value } => {
                debug!(key = %key, bytes = value.len(), "Persisting");
                self.storage.set(*key, value).await
            }
            WriteCommand::Remove { key } => self.storage.remove(*key).await,
            WriteCommand::ClearAll => self.storage.clear_all().await,
            WriteCommand::Flush(_) => Ok(()),
        }
    }
}

impl WriterHandle {
    /// Queues a write of `value` under `key`.
    pub fn set(&self, key: StorageKey, value: String) {
        self.send(WriteCommand::Set { key, value });
    }

    /// Queues removal of `key`.
    pub fn remove(&self, key: StorageKey) {
        self.send(WriteCommand::Remove { key });
    }

    /// Queues removal of all five storefront keys.
    pub fn clear_all(&self) {
        self.send(WriteCommand::ClearAll);
    }

    /// Waits until every write queued before this call has been applied.
    ///
    /// Returns immediately if the writer task is gone.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(ack_tx)).is_err() {
            return;
        }
        let _ = ack_rx.await;
    }

    fn send(&self, command: WriteCommand) {
        if let Err(e) = self.tx.send(command) {
            warn!(key = e.0.target(), "Storage writer stopped, dropping write");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexa_store::StorageConfig;

    async fn storage() -> LocalStorage {
        LocalStorage::open(StorageConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_writes_apply_in_order() {
        let storage = storage().await;
        let writer = StorageWriter::spawn(storage.clone());

        writer.set(StorageKey::CartItems, "[1]".to_string());
        writer.set(StorageKey::CartItems, "[1,2]".to_string());
        writer.set(StorageKey::AuthToken, "t".to_string());
        writer.remove(StorageKey::AuthToken);
        writer.flush().await;

        assert_eq!(
            storage.get(StorageKey::CartItems).await.unwrap().as_deref(),
            Some("[1,2]")
        );
        assert_eq!(storage.get(StorageKey::AuthToken).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_all_after_writes() {
        let storage = storage().await;
        let writer = StorageWriter::spawn(storage.clone());

        writer.set(StorageKey::WishlistItems, "[]".to_string());
        writer.set(StorageKey::OrderHistory, "[]".to_string());
        writer.clear_all();
        writer.flush().await;

        assert_eq!(storage.kv().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_write_does_not_stop_writer() {
        let storage = storage().await;
        let writer = StorageWriter::spawn(storage.clone());

        storage.close().await;
        writer.set(StorageKey::CartItems, "[]".to_string());
        writer.flush().await;

        // still accepting and acknowledging commands
        writer.set(StorageKey::CartItems, "[]".to_string());
        writer.flush().await;
    }
}
