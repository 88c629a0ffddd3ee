//! Configuration
//!
//! Optional YAML config file with per-field defaults. Lookup order:
//! explicit `--config` path, then the platform config directory, then
//! `./config.yaml`. No file at all is fine; defaults apply.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Columns shown when the gallery first loads.
    #[serde(default = "default_columns")]
    pub default_columns: usize,

    /// Upper bound for the columns control.
    #[serde(default = "default_max_columns")]
    pub max_columns: usize,

    /// Images per column per page when the gallery first loads.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Choices offered by the page-size control.
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_columns() -> usize {
    2
}

fn default_max_columns() -> usize {
    8
}

fn default_page_size() -> usize {
    10
}

fn default_page_sizes() -> Vec<usize> {
    vec![10, 20, 50, 100]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            default_columns: default_columns(),
            max_columns: default_max_columns(),
            default_page_size: default_page_size(),
            page_sizes: default_page_sizes(),
        }
    }
}

impl Config {
    /// Pull nonsense values back into ranges the rest of the app relies
    /// on: at least one column, default inside the column bound, page
    /// size positive, page-size options positive and non-empty.
    pub fn normalized(mut self) -> Self {
        self.max_columns = self.max_columns.max(1);
        self.default_columns = self.default_columns.clamp(1, self.max_columns);
        self.default_page_size = self.default_page_size.max(1);
        self.page_sizes.retain(|&size| size > 0);
        if self.page_sizes.is_empty() {
            self.page_sizes = vec![self.default_page_size];
        }
        self
    }
}

/// Determine the config file path with fallback logic.
///
/// `None` means no config file anywhere, which callers treat as
/// "use the defaults".
fn find_config_path(cli_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    // An explicitly requested file must exist
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(Some(path));
        }
        bail!("config file not found at specified path: {}", path.display());
    }

    // Try ~/.config/imgrid/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("imgrid").join("config.yaml");
        if candidate.exists() {
            return Ok(Some(candidate));
        }
    }

    // Fallback to ./config.yaml
    let local = PathBuf::from("config.yaml");
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(None)
}

/// Load configuration, falling back to defaults when no file exists.
pub fn load(cli_path: Option<PathBuf>) -> Result<Config> {
    let Some(path) = find_config_path(cli_path)? else {
        return Ok(Config::default());
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("invalid config at {}", path.display()))?;
    Ok(config.normalized())
}
