pub mod client;
pub mod error;
mod trait_impl;


pub use client::GitHubClient;
pub use error::{GitHubError, Result};

// Re-export label-core types for convenience
pub use label_core::{LabelError, LabelStore, RepositoryId};
