use label_core::RepositoryId;
use std::time::Duration;
use tracing::debug;
use ureq::Agent;

use crate::error::{GitHubError, Result};

/// Public GitHub REST API host
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub REST API client scoped to one repository
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    repository: RepositoryId,
    token: String,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new(repository: RepositoryId, token: &str) -> Self {
        Self::with_base_url(DEFAULT_API_URL, repository, token)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str, repository: RepositoryId, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            // A redirected DELETE is re-sent as GET; surface the 3xx instead
            .max_redirects(0)
            .max_redirects_will_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            repository,
            token: token.to_string(),
        }
    }

    /// Get the repository for this client
    pub fn repository(&self) -> &RepositoryId {
        &self.repository
    }

    /// Build a repo-scoped URL
    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.base_url, self.repository.owner, self.repository.name, path
        )
    }

    /// Build the Authorization header value
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Detect rate limiting: 403 with x-ratelimit-remaining: 0
        if status == 403 {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining.to_str().unwrap_or("") == "0" {
                    return Err(GitHubError::RateLimited);
                }
            }
        }
        if status == 429 {
            return Err(GitHubError::RateLimited);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // GitHub error bodies look like {"message": "...", "documentation_url": "..."}
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(GitHubError::Unauthorized)
        } else {
            Err(GitHubError::Api { status, message })
        }
    }

    // ==================== Label Operations ====================

    /// Delete a label by name
    ///
    /// Only 200 and 204 count as deleted. A 404 is reported as
    /// [`GitHubError::LabelNotFound`].
    pub fn delete_label(&self, name: &str) -> Result<()> {
        let encoded_name = urlencoding::encode(name);
        let url = self.repo_url(&format!("/labels/{}", encoded_name));

        debug!(%url, "DELETE label");

        let response = self
            .agent
            .delete(&url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .call()
            .map_err(GitHubError::Http)?;

        let status = response.status().as_u16();
        debug!(status, label = name, "DELETE label response");

        match status {
            200 | 204 => Ok(()),
            404 => Err(GitHubError::LabelNotFound(name.to_string())),
            _ => match self.check_response(response) {
                Err(e) => Err(e),
                Ok(_) => Err(GitHubError::Api {
                    status,
                    message: format!("Unexpected HTTP {} for DELETE", status),
                }),
            },
        }
    }
}
