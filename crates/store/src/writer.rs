//! Write scheduling between the store and the persistence adapter.
//!
//! Every mutation of the store produces one [`PendingWrite`] carrying the
//! fully encoded entity. The store hands it to a [`WriteSink`] and returns;
//! it never waits for the medium. Writes are never coalesced or skipped.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::WriterClosed;
use crate::persistence::{PersistenceAdapter, StorageKey};

/// One scheduled overwrite of a storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub key: StorageKey,
    /// JSON encoding of the whole entity at mutation time.
    pub payload: String,
}

/// Receives persistence work from the store.
///
/// `submit` must not block on the medium for long and must not fail the
/// caller. Failures are the sink's to report.
pub trait WriteSink: Send {
    fn submit(&mut self, write: PendingWrite);
}

/// Counters reported by a writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterStats {
    pub written: u64,
    pub failed: u64,
}

impl WriterStats {
    fn record(&mut self, key: StorageKey, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.written += 1;
                tracing::debug!(%key, "Persisted");
            }
            Err(e) => {
                self.failed += 1;
                tracing::error!(%key, error = %e, "Failed to persist");
            }
        }
    }
}

/// Writes through the adapter on the caller's thread.
#[derive(Debug)]
pub struct InlineWriter {
    adapter: PersistenceAdapter,
    stats: WriterStats,
}

impl InlineWriter {
    pub fn new(adapter: PersistenceAdapter) -> Self {
        Self {
            adapter,
            stats: WriterStats::default(),
        }
    }

    pub fn stats(&self) -> WriterStats {
        self.stats
    }
}

impl WriteSink for InlineWriter {
    fn submit(&mut self, write: PendingWrite) {
        let result = self
            .adapter
            .write_raw(write.key, &write.payload)
            .map_err(|e| e.to_string());
        self.stats.record(write.key, result);
    }
}

enum WriterMessage {
    Write(PendingWrite),
    Flush(oneshot::Sender<()>),
    Shutdown,
}

/// Queues writes to a tokio task that applies them in submission order.
#[derive(Debug, Clone)]
pub struct BackgroundWriter {
    tx: mpsc::UnboundedSender<WriterMessage>,
}

/// Control side of a [`BackgroundWriter`].
#[derive(Debug)]
pub struct WriterHandle {
    tx: mpsc::UnboundedSender<WriterMessage>,
    task: JoinHandle<WriterStats>,
}

impl std::fmt::Debug for WriterMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriterMessage::Write(write) => f.debug_tuple("Write").field(&write.key).finish(),
            WriterMessage::Flush(_) => f.write_str("Flush"),
            WriterMessage::Shutdown => f.write_str("Shutdown"),
        }
    }
}

impl BackgroundWriter {
    /// Spawn the writer task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn(adapter: PersistenceAdapter) -> (Self, WriterHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_writer(adapter, rx));
        (Self { tx: tx.clone() }, WriterHandle { tx, task })
    }
}

impl WriteSink for BackgroundWriter {
    fn submit(&mut self, write: PendingWrite) {
        let key = write.key;
        if self.tx.send(WriterMessage::Write(write)).is_err() {
            tracing::error!(%key, "Persistence writer stopped, write dropped");
        }
    }
}

impl WriterHandle {
    /// Resolve once every write submitted before this call has been applied.
    pub async fn flush(&self) -> Result<(), WriterClosed> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(WriterMessage::Flush(ack_tx))
            .map_err(|_| WriterClosed)?;
        ack_rx.await.map_err(|_| WriterClosed)
    }

    /// Apply all pending writes, stop the task, and return its counters.
    pub async fn shutdown(self) -> Result<WriterStats, WriterClosed> {
        self.tx
            .send(WriterMessage::Shutdown)
            .map_err(|_| WriterClosed)?;
        self.task.await.map_err(|_| WriterClosed)
    }
}

async fn run_writer(
    adapter: PersistenceAdapter,
    mut rx: mpsc::UnboundedReceiver<WriterMessage>,
) -> WriterStats {
    let mut stats = WriterStats::default();

    while let Some(message) = rx.recv().await {
        match message {
            WriterMessage::Write(write) => {
                let key = write.key;
                let adapter = adapter.clone();
                let result = tokio::task::spawn_blocking(move || {
                    adapter.write_raw(write.key, &write.payload)
                })
                .await;

                let result = match result {
                    Ok(inner) => inner.map_err(|e| e.to_string()),
                    Err(join) => Err(format!("write task failed: {join}")),
                };
                stats.record(key, result);
            }
            WriterMessage::Flush(ack) => {
                let _ = ack.send(());
            }
            WriterMessage::Shutdown => break,
        }
    }

    tracing::debug!(written = stats.written, failed = stats.failed, "Persistence writer stopped");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, StorageResult};
    use crate::storage::KeyValueStorage;
    use standings_model::{default_teams, TeamPatch};
    use std::sync::Arc;

    /// Medium that reads as empty and refuses every write.
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Io {
                path: key.into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn remove(&self, _key: &str) -> StorageResult<bool> {
            Ok(false)
        }
    }

    fn read_only_adapter() -> PersistenceAdapter {
        PersistenceAdapter::new(Arc::new(ReadOnlyStorage))
    }

    fn write(key: StorageKey, payload: &str) -> PendingWrite {
        PendingWrite {
            key,
            payload: payload.to_string(),
        }
    }

    #[test]
    fn test_inline_writer_applies_immediately() {
        let adapter = PersistenceAdapter::in_memory();
        let mut writer = InlineWriter::new(adapter.clone());

        writer.submit(write(StorageKey::Teams, "[]"));

        assert_eq!(adapter.load_teams(), Vec::new());
        assert_eq!(writer.stats(), WriterStats { written: 1, failed: 0 });
    }

    #[tokio::test]
    async fn test_background_writer_applies_in_order() {
        let adapter = PersistenceAdapter::in_memory();
        let (mut writer, handle) = BackgroundWriter::spawn(adapter.clone());

        writer.submit(write(StorageKey::Teams, "[]"));
        let encoded = serde_json::to_string(&default_teams()).unwrap();
        writer.submit(write(StorageKey::Teams, &encoded));

        handle.flush().await.unwrap();
        assert_eq!(adapter.load_teams(), default_teams());

        let stats = handle.shutdown().await.unwrap();
        assert_eq!(stats.written, 2);
        assert_eq!(stats.failed, 0);
    }

    #[tokio::test]
    async fn test_submit_after_shutdown_is_dropped_quietly() {
        let adapter = PersistenceAdapter::in_memory();
        let (mut writer, handle) = BackgroundWriter::spawn(adapter.clone());
        handle.shutdown().await.unwrap();

        writer.submit(write(StorageKey::Teams, "[]"));
        assert!(adapter.storage().get("teams").unwrap().is_none());
    }

    #[test]
    fn test_inline_writer_counts_failures() {
        let mut writer = InlineWriter::new(read_only_adapter());

        writer.submit(write(StorageKey::Teams, "[]"));

        assert_eq!(writer.stats(), WriterStats { written: 0, failed: 1 });
    }

    #[tokio::test]
    async fn test_background_writer_counts_failures_and_keeps_running() {
        let (mut writer, handle) = BackgroundWriter::spawn(read_only_adapter());

        writer.submit(write(StorageKey::TournamentInfo, "{}"));
        handle.flush().await.unwrap();
        writer.submit(write(StorageKey::Teams, "[]"));

        let stats = handle.shutdown().await.unwrap();
        assert_eq!(stats, WriterStats { written: 0, failed: 2 });
    }

    #[test]
    fn test_store_keeps_update_when_write_fails() {
        let adapter = read_only_adapter();
        let sink = Box::new(InlineWriter::new(adapter.clone()));
        let mut store = crate::store::TournamentStore::open(&adapter, sink);

        assert!(store.update_team("team-2", TeamPatch::default().pp(7)));
        assert_eq!(store.team("team-2").unwrap().pp, 7);
    }
}
