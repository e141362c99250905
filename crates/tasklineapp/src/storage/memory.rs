use super::{matches_ids, StorageResult, TaskId, TaskRecord, TaskStorage};
use crate::error::TasklineError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-memory storage backend.
///
/// Keeps both record sets in process memory and replaces a set wholesale on every
/// write. Nothing is persisted.
pub struct MemoryStorage<T> {
    name: String,
    active: RwLock<Vec<T>>,
    archive: RwLock<Vec<T>>,
    simulate_write_error: AtomicBool,
}

impl<T> MemoryStorage<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: RwLock::new(Vec::new()),
            archive: RwLock::new(Vec::new()),
            simulate_write_error: AtomicBool::new(false),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(TasklineError::Storage("Simulated write error".to_string()));
        }
        Ok(())
    }
}

fn select<T: TaskRecord + Clone>(records: &[T], ids: Option<&[TaskId]>) -> Vec<T> {
    records
        .iter()
        .filter(|r| matches_ids(ids, r.id()))
        .cloned()
        .collect()
}

#[async_trait]
impl<T> TaskStorage<T> for MemoryStorage<T>
where
    T: TaskRecord + Clone + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, ids: Option<&[TaskId]>) -> StorageResult<Vec<T>> {
        let active = self.active.read().await;
        Ok(select(&active, ids))
    }

    async fn get_archive(&self, ids: Option<&[TaskId]>) -> StorageResult<Vec<T>> {
        let archive = self.archive.read().await;
        Ok(select(&archive, ids))
    }

    async fn set(&self, records: &[T]) -> StorageResult<()> {
        self.check_writable()?;
        *self.active.write().await = records.to_vec();
        Ok(())
    }

    async fn set_archive(&self, records: &[T]) -> StorageResult<()> {
        self.check_writable()?;
        *self.archive.write().await = records.to_vec();
        Ok(())
    }
}
