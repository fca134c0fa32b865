//! Storage abstraction for assignment documents.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::assignment::AssignmentDocument;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("assignment not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for backend-agnostic async signatures.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for assignment storage backends.
///
/// The hosted database service sits behind this boundary in production;
/// the backends in this module cover tests and local drafts. Injected
/// where needed so callers can substitute a fake.
pub trait Storage: Send + Sync {
    /// Save an assignment.
    fn save(&self, id: &str, document: &AssignmentDocument) -> BoxFuture<'_, StorageResult<()>>;

    /// Load an assignment.
    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<AssignmentDocument>>;

    /// Delete an assignment.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all assignment IDs.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if an assignment exists.
    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
