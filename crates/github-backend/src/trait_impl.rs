//! Implementation of label-core traits for GitHubClient

use label_core::{LabelError, LabelStore, RepositoryId, Result};

use crate::client::GitHubClient;

impl LabelStore for GitHubClient {
    fn repository(&self) -> &RepositoryId {
        GitHubClient::repository(self)
    }

    fn delete_label(&self, name: &str) -> Result<()> {
        GitHubClient::delete_label(self, name).map_err(LabelError::from)
    }
}
