pub mod error;
pub mod models;
pub mod remover;
pub mod traits;

pub use error::{LabelError, RemoveError, Result};
pub use models::*;
pub use remover::{remove_labels, select_labels};
pub use traits::{LabelStore, NoProgress, Progress};
