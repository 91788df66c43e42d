//! Option assembly: merges answers, template configuration and derived
//! identifiers into the single immutable context record that every
//! generation stage reads from.

use crate::answers::Answers;
use crate::config::TemplateConfig;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The fully assembled context driving every generation step.
/// No stage mutates it after assembly; stages only read from it and
/// write to the filesystem or launch external processes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub module_template: String,
    pub npm_scope: String,
    pub npm_module_name: String,
    pub github_org: String,
    pub module_author: String,
    pub module_license: String,
    pub npm_access: String,

    pub descr: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,

    /// Fully-qualified npm package name, e.g. `@acme/widgets`
    pub npm_full_name: String,
    /// Fully-qualified GitHub repository name, e.g. `acme-org/widgets`
    pub github_full_name: String,
    pub module_dir: PathBuf,
}

impl Options {
    /// Pure assembly from answers, template config and the target directory.
    /// Same inputs always produce identical Options.
    pub fn assemble(answers: Answers, config: TemplateConfig, module_dir: &Path) -> Self {
        let npm_full_name = if answers.npm_scope.is_empty() {
            answers.npm_module_name.clone()
        } else {
            format!("{}/{}", answers.npm_scope, answers.npm_module_name)
        };
        let github_full_name = format!("{}/{}", answers.github_org, answers.npm_module_name);

        Self {
            module_template: answers.module_template,
            npm_scope: answers.npm_scope,
            npm_module_name: answers.npm_module_name,
            github_org: answers.github_org,
            module_author: answers.module_author,
            module_license: answers.module_license,
            npm_access: answers.npm_access,
            descr: config.descr,
            extra: config.extra,
            npm_full_name,
            github_full_name,
            module_dir: module_dir.to_path_buf(),
        }
    }

    /// Flat JSON context used for readme placeholder substitution.
    pub fn context(&self) -> serde_json::Value {
        // Serialization of a plain struct with string fields cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
