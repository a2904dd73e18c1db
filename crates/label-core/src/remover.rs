//! Batch label removal
//!
//! Every label gets exactly one delete attempt. A failed label never stops
//! its siblings; only an error the store cannot classify aborts the batch.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{LabelError, RemoveError};
use crate::models::{default_labels, BatchResult, DeletionOutcome, LabelSpec};
use crate::traits::{LabelStore, Progress};

/// Choose the labels to delete.
///
/// `defaults` wins over a custom label when both are given.
pub fn select_labels(defaults: bool, label: Option<&str>) -> Result<Vec<LabelSpec>, RemoveError> {
    if defaults {
        return Ok(default_labels());
    }

    match label {
        Some(name) if !name.trim().is_empty() => Ok(vec![LabelSpec::new(name)]),
        _ => Err(RemoveError::NoLabelSelected),
    }
}

/// Delete `labels` from the store's repository, one request per distinct name.
pub fn remove_labels(
    store: &dyn LabelStore,
    labels: &[LabelSpec],
    progress: &dyn Progress,
) -> Result<BatchResult, RemoveError> {
    if labels.is_empty() {
        return Err(RemoveError::InvalidInput("No labels to delete".to_string()));
    }
    if let Some(index) = labels.iter().position(|l| l.name.trim().is_empty()) {
        return Err(RemoveError::InvalidInput(format!(
            "Label #{} has an empty name",
            index + 1
        )));
    }

    let repo = store.repository();
    let mut batch = BatchResult::default();
    let mut seen = HashSet::new();
    let distinct = labels
        .iter()
        .map(|l| l.name.as_str())
        .collect::<HashSet<_>>()
        .len();

    progress.begin(repo, distinct);

    for label in labels {
        if !seen.insert(label.name.as_str()) {
            debug!(label = %label.name, "skipping duplicate label");
            continue;
        }

        progress.started(&label.name);
        debug!(label = %label.name, %repo, "deleting label");

        let outcome = match classify(store.delete_label(&label.name)) {
            Ok(outcome) => outcome,
            Err(err) => {
                return Err(RemoveError::Fatal {
                    partial: batch,
                    message: format!("'{}': {}", label.name, err),
                });
            }
        };

        if let DeletionOutcome::Failed { reason } = &outcome {
            warn!(label = %label.name, %reason, "failed to delete label");
        }

        progress.finished(&label.name, &outcome);
        batch.push(label.name.clone(), outcome);
    }

    Ok(batch)
}

/// Map a store response onto an outcome. `Err` means the batch must stop.
fn classify(result: Result<(), LabelError>) -> Result<DeletionOutcome, LabelError> {
    match result {
        Ok(()) => Ok(DeletionOutcome::Deleted),
        Err(LabelError::NotFound(_)) => Ok(DeletionOutcome::NotFound),
        Err(err @ LabelError::Internal(_)) => Err(err),
        Err(err) => Ok(DeletionOutcome::Failed {
            reason: err.to_string(),
        }),
    }
}
