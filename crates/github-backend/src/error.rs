use label_core::LabelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("Label not found: {0}")]
    LabelNotFound(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for LabelError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => LabelError::Http(e.to_string()),
            GitHubError::LabelNotFound(name) => LabelError::NotFound(name),
            GitHubError::Unauthorized => LabelError::Unauthorized,
            GitHubError::RateLimited => LabelError::RateLimited,
            GitHubError::Api { status, message } => LabelError::Api { status, message },
        }
    }
}
