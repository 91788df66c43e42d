//! Manifest (package.json) generation.
//! The manifest is built entirely from the assembled Options and an in-code
//! skeleton; it is written once and never read back.

use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use crate::options::Options;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct PublishConfig {
    pub access: String,
}

#[derive(Debug, Serialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub repo_type: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct Engines {
    pub node: String,
}

/// The generated package descriptor. Field order matches the emitted JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
    pub files: Vec<String>,
    pub main: String,
    pub types: String,
    pub publish_config: PublishConfig,
    pub repository: Repository,
    pub engines: Engines,
    pub version: String,
    pub description: String,
    pub author: String,
    pub license: String,
}

impl Manifest {
    /// Builds the manifest content from the assembled options.
    pub fn from_options(opt: &Options) -> Self {
        Self {
            name: opt.npm_full_name.clone(),
            scripts: IndexMap::new(),
            dependencies: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
            files: vec![
                "dist".to_string(),
                "src".to_string(),
                "!src/test".to_string(),
                "!src/**/*.test.ts".to_string(),
                "!src/**/__snapshots__".to_string(),
                "!src/**/__exclude".to_string(),
            ],
            main: "dist/index.js".to_string(),
            types: "dist/index.d.ts".to_string(),
            publish_config: PublishConfig { access: opt.npm_access.clone() },
            repository: Repository {
                repo_type: "git".to_string(),
                url: format!("https://github.com/{}", opt.github_full_name),
            },
            engines: Engines { node: ">=10.13".to_string() },
            version: "0.0.0".to_string(),
            description: opt.descr.clone(),
            author: opt.module_author.clone(),
            license: opt.module_license.clone(),
        }
    }

    /// Serializes the manifest as formatted JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Manifest serialization failed: {}", e)))
    }
}

/// Generates `<moduleDir>/package.json` from the options.
/// Returns the path of the written manifest.
pub fn generate_manifest(opt: &Options) -> Result<PathBuf> {
    let manifest_path = opt.module_dir.join(MANIFEST_FILE);
    let manifest = Manifest::from_options(opt);
    std::fs::write(&manifest_path, manifest.to_json()?).map_err(Error::IoError)?;
    Ok(manifest_path)
}
