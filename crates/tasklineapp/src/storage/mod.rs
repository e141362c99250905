//! # Storage Layer
//!
//! This module defines the contract every task storage backend satisfies. The
//! [`TaskStorage`] trait lets the application read and write task records without
//! knowing whether they live on local disk or in a remote document store.
//!
//! ## Selecting a Backend
//!
//! The resolved config names the active backend in `activeStorageModule` and describes
//! every configured backend in `storageModules`. Startup code looks the active entry up
//! with [`ConfigDocument::active_storage_module`], matches on its
//! [`StorageModuleType`] and builds the backend from the entry's typed config. That
//! happens once; afterward the backend is used independently of the config store.
//!
//! ## Record Sets
//!
//! A backend manages two ordered sets of records: the active set and the archive.
//! Reads take an optional identifier filter where `None` or an empty slice means "all"
//! and nothing else is filtered out. Writes hand over the whole set.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStorage`]: in-memory reference backend for tests.
//!
//! [`ConfigDocument::active_storage_module`]: crate::config::ConfigDocument::active_storage_module
//! [`StorageModuleType`]: crate::config::StorageModuleType

use async_trait::async_trait;

pub mod memory;

pub use crate::error::Result as StorageResult;

/// Identifier of a task record, unique within a backend.
pub type TaskId = u64;

/// A record a generic backend can filter by identifier.
pub trait TaskRecord {
    fn id(&self) -> TaskId;
}

/// Storage interface for task persistence.
///
/// Reads must be idempotent. Calls may suspend on disk or network I/O; ordering between
/// concurrent calls on one instance is up to the backend.
#[async_trait]
pub trait TaskStorage<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Name matched against `activeStorageModule`.
    fn name(&self) -> &str;

    /// Active records, optionally restricted to `ids`.
    async fn get(&self, ids: Option<&[TaskId]>) -> StorageResult<Vec<T>>;

    /// Archived records, optionally restricted to `ids`.
    async fn get_archive(&self, ids: Option<&[TaskId]>) -> StorageResult<Vec<T>>;

    /// Replace (or upsert, backend-defined) the active records.
    async fn set(&self, records: &[T]) -> StorageResult<()>;

    /// Replace (or upsert, backend-defined) the archived records.
    async fn set_archive(&self, records: &[T]) -> StorageResult<()>;
}

/// Whether `id` passes an identifier filter. `None` and an empty filter accept everything.
pub fn matches_ids(filter: Option<&[TaskId]>, id: TaskId) -> bool {
    match filter {
        None => true,
        Some([]) => true,
        Some(ids) => ids.contains(&id),
    }
}
