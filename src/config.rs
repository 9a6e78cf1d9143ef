use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SmartDocError};

/// Name of the configuration file stored inside the `.smartdoc` directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Name of the hidden directory used to store smartdoc metadata.
pub const SMARTDOC_DIR: &str = ".smartdoc";

/// Default completions endpoint the generator posts to.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1/completions";

/// Configuration for a smartdoc project.
///
/// Controls where service files are looked up and how the documentation
/// generator is called. The API key is never stored here; the host supplies
/// it at call time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartDocConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Directory, relative to the project root, holding backend service files.
    pub services_dir: String,
    /// File extension of service files, without the leading dot.
    pub service_extension: String,
    /// Completions endpoint for documentation generation.
    pub api_base_url: String,
    /// Model requested from the completions endpoint.
    pub model: String,
    /// Token budget for a generated comment.
    pub max_tokens: u32,
    /// Sampling temperature for generation.
    pub temperature: f32,
}

impl Default for SmartDocConfig {
    fn default() -> Self {
        Self {
            version: 1,
            services_dir: "services".to_string(),
            service_extension: "js".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: "gpt-3.5-turbo-instruct".to_string(),
            max_tokens: 150,
            temperature: 0.5,
        }
    }
}

/// Returns the path to the `.smartdoc` directory within the given project root.
pub fn get_smartdoc_dir(project_root: &Path) -> PathBuf {
    project_root.join(SMARTDOC_DIR)
}

/// Returns the path to the configuration file (`config.json`) within the `.smartdoc` directory.
pub fn get_config_path(project_root: &Path) -> PathBuf {
    get_smartdoc_dir(project_root).join(CONFIG_FILENAME)
}

/// Loads the configuration from disk.
///
/// If the configuration file does not exist, returns the default configuration.
pub fn load_config(project_root: &Path) -> Result<SmartDocConfig> {
    let config_path = get_config_path(project_root);

    if !config_path.exists() {
        return Ok(SmartDocConfig::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| SmartDocError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: SmartDocConfig =
        serde_json::from_str(&contents).map_err(|e| SmartDocError::Config {
            message: format!(
                "failed to parse config file '{}': {}",
                config_path.display(),
                e
            ),
        })?;

    Ok(config)
}

/// Saves the configuration to disk using an atomic write.
///
/// Writes to a temporary file first and then renames it to the final location,
/// ensuring that a partial write never corrupts the configuration.
pub fn save_config(project_root: &Path, config: &SmartDocConfig) -> Result<()> {
    let smartdoc_dir = get_smartdoc_dir(project_root);
    fs::create_dir_all(&smartdoc_dir).map_err(|e| SmartDocError::Config {
        message: format!(
            "failed to create smartdoc directory '{}': {}",
            smartdoc_dir.display(),
            e
        ),
    })?;

    let config_path = get_config_path(project_root);
    let tmp_path = config_path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| SmartDocError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| SmartDocError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, &config_path).map_err(|e| SmartDocError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            config_path.display(),
            e
        ),
    })?;

    Ok(())
}
