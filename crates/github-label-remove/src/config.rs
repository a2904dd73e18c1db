use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use github_backend::client::DEFAULT_API_URL;
use label_core::RepositoryId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

const APP_NAME: &str = "github-label-remove";

/// Problems found before any request is made
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to load config: {0}")]
    Load(String),

    #[error("GitHub token not configured. Set via --token, GITHUB_TOKEN env var, or config file")]
    MissingToken,

    #[error("Repository not configured. Set via --repo <owner/repo> or config file")]
    MissingRepo,

    #[error("{0}")]
    InvalidRepo(String),

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("No label selected. Pass --label <name> or --defaults")]
    NoLabelSelected,
}

/// Layered configuration: defaults, config file, `LABEL_REMOVE_*` env vars, CLI flags
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// API base URL
    pub api: Option<String>,
    pub token: Option<String>,
    /// Target repository as `owner/repo`
    pub repo: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Some(DEFAULT_API_URL.to_string()),
            token: None,
            repo: None,
        }
    }
}

/// Validated connection parameters for one invocation
#[derive(Debug, Clone)]
pub struct Connection {
    pub api_base_url: Url,
    pub token: String,
    pub repository: RepositoryId,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("LABEL_REMOVE_").ignore(&["config", "log"]));

        figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))
    }

    pub fn merge_with_cli(
        &mut self,
        cli_api: Option<String>,
        cli_token: Option<String>,
        cli_repo: Option<String>,
    ) {
        if let Some(api) = cli_api {
            self.api = Some(api);
        }
        if let Some(token) = cli_token {
            self.token = Some(token);
        }
        if let Some(repo) = cli_repo {
            self.repo = Some(repo);
        }
    }

    pub fn validate(&self) -> Result<Connection, ConfigError> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let repository: RepositoryId = self
            .repo
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or(ConfigError::MissingRepo)?
            .parse()
            .map_err(|e: label_core::LabelError| ConfigError::InvalidRepo(e.to_string()))?;

        let api = self.api.as_deref().unwrap_or(DEFAULT_API_URL).trim();
        let api_base_url = parse_api_url(api)?;

        Ok(Connection {
            api_base_url,
            token: token.to_string(),
            repository,
        })
    }
}

fn parse_api_url(api: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidApiUrl {
        url: api.to_string(),
        reason,
    };

    let url = Url::parse(api).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url)
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join(APP_NAME).join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join(APP_NAME)
            .join("config.toml")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api: Option<&str>, token: Option<&str>, repo: Option<&str>) -> Config {
        Config {
            api: api.map(String::from),
            token: token.map(String::from),
            repo: repo.map(String::from),
        }
    }

    #[test]
    fn test_validate_defaults_api_url() {
        let connection = config(None, Some("secret"), Some("octocat/hello-world"))
            .validate()
            .unwrap();

        assert_eq!(connection.api_base_url.as_str(), "https://api.github.com/");
        assert_eq!(connection.token, "secret");
        assert_eq!(connection.repository, RepositoryId::new("octocat", "hello-world"));
    }

    #[test]
    fn test_validate_missing_token() {
        let err = config(None, None, Some("octocat/hello-world"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));

        let err = config(None, Some("  "), Some("octocat/hello-world"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_validate_repo() {
        let err = config(None, Some("secret"), None).validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingRepo));

        let err = config(None, Some("secret"), Some("hello-world"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRepo(_)));
        assert!(err.to_string().contains("owner/name"));
    }

    #[test]
    fn test_validate_api_url() {
        for api in ["not a url", "ftp://example.com", "file:///tmp/api"] {
            let err = config(Some(api), Some("secret"), Some("octocat/hello-world"))
                .validate()
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidApiUrl { .. }),
                "expected '{}' to be rejected",
                api
            );
        }

        let connection = config(
            Some("https://ghe.example.com/api/v3"),
            Some("secret"),
            Some("octocat/hello-world"),
        )
        .validate()
        .unwrap();
        assert_eq!(connection.api_base_url.host_str(), Some("ghe.example.com"));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut cfg = config(None, Some("file-token"), Some("file/repo"));
        cfg.merge_with_cli(None, Some("cli-token".to_string()), None);

        assert_eq!(cfg.token.as_deref(), Some("cli-token"));
        assert_eq!(cfg.repo.as_deref(), Some("file/repo"));
        assert_eq!(cfg.api, None);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "token = \"file-token\"\nrepo = \"octocat/hello-world\"\n",
        )
        .unwrap();

        let cfg = Config::load(Some(path)).unwrap();
        assert_eq!(cfg.token.as_deref(), Some("file-token"));
        assert_eq!(cfg.repo.as_deref(), Some("octocat/hello-world"));
        assert_eq!(cfg.api.as_deref(), Some(DEFAULT_API_URL));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
