//! Configuration handling for module templates.
//! Each template ships a small key-value configuration resource
//! (config.json, config.yml or config.yaml) under the templates root.

use crate::constants::{CONFIG_FILES, TEMPLATES_DIR, TEMPLATES_DIR_ENV};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-template configuration record. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    /// Template description, substituted into the manifest and readme
    pub descr: String,

    /// Free-form template-specific fields, in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

/// Resolves the templates root directory.
/// Defaults to ./templates, overridable via CREATE_MODULE_TEMPLATES_DIR.
pub fn templates_root() -> PathBuf {
    std::env::var(TEMPLATES_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(TEMPLATES_DIR))
}

/// Loads the configuration for a template id, trying multiple file formats.
/// Supports: config.json, config.yml, config.yaml
///
/// # Arguments
/// * `templates_root` - Directory containing all template directories
/// * `template` - Template id to look up
///
/// # Returns
/// * `Result<TemplateConfig>` - Parsed configuration of the template
///
/// # Errors
/// * `Error::TemplateNotFound` if the template directory or its
///   configuration resource does not exist
/// * `Error::ConfigError` if the configuration cannot be parsed
pub fn load_template_config<P: AsRef<Path>>(
    templates_root: P,
    template: &str,
) -> Result<TemplateConfig> {
    let template_dir = templates_root.as_ref().join(template);
    if !template_dir.is_dir() {
        return Err(Error::TemplateNotFound { template: template.to_string() });
    }

    for file in CONFIG_FILES {
        let config_path = template_dir.join(file);
        if config_path.exists() {
            debug!("Loading template configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path).map_err(Error::IoError)?;
            return parse_template_config(&content);
        }
    }

    Err(Error::TemplateNotFound { template: template.to_string() })
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_template_config(content: &str) -> Result<TemplateConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}
