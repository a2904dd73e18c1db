use crate::error::Result;
use crate::models::{DeletionOutcome, RepositoryId};

/// A remote label collection scoped to one repository
///
/// Each backend (GitHub, GitHub Enterprise) provides its own implementation.
/// `delete_label` must report a missing label as `LabelError::NotFound` so the
/// remover can treat it as already deleted.
pub trait LabelStore: Send + Sync {
    /// Repository this store is bound to
    fn repository(&self) -> &RepositoryId;

    /// Delete a label by name
    fn delete_label(&self, name: &str) -> Result<()>;
}

/// Receives progress events while a batch runs
pub trait Progress {
    /// Called once before the first request
    fn begin(&self, repository: &RepositoryId, total: usize) {
        let _ = (repository, total);
    }

    fn started(&self, name: &str) {
        let _ = name;
    }

    fn finished(&self, name: &str, outcome: &DeletionOutcome) {
        let _ = (name, outcome);
    }
}

/// Progress sink that ignores every event
pub struct NoProgress;

impl Progress for NoProgress {}
