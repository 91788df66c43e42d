//! Answer collection for the module generation pipeline.
//! Defines the fixed question list, the `Answers` record it produces,
//! and the npm naming validation applied before any directory is touched.

use crate::constants::MODULE_TEMPLATES;
use crate::error::{Error, Result};
use crate::prompt::{Prompter, Question};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

/// Fully populated answer set. Created once per run; immutable afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    pub module_template: String,
    /// npm @scope, e.g. `@naturalcycles`; empty means no scope
    pub npm_scope: String,
    /// Module name without scope, e.g. `js-lib`
    pub npm_module_name: String,
    pub github_org: String,
    pub module_author: String,
    pub module_license: String,
    pub npm_access: String,
}

/// The ordered question list presented in interactive mode.
pub fn questions() -> Vec<Question> {
    vec![
        Question::select(
            "moduleTemplate",
            "Module template",
            Some("nodejs-lib"),
            &MODULE_TEMPLATES,
        ),
        Question::text(
            "npmScope",
            "NPM @scope of the module (e.g `@angular`). Default to empty (no scope)",
            Some(""),
        ),
        Question::text("npmModuleName", "Module name (without scope), e.g `js-lib`", None),
        Question::text("githubOrg", "GitHub Org / Author, e.g `NaturalCycles`", Some("NaturalCycles")),
        Question::text("moduleAuthor", "package.json author", Some("Natural Cycles Team")),
        Question::text("moduleLicense", "package.json license", Some("MIT")),
        Question::select("npmAccess", "NPM access", Some("public"), &["public", "restricted"]),
    ]
}

fn take(answers: &mut IndexMap<String, String>, key: &str) -> Result<String> {
    answers
        .shift_remove(key)
        .ok_or_else(|| Error::PromptError(format!("missing answer for '{}'", key)))
}

impl Answers {
    /// Collects a full answer set from the given prompter.
    pub fn collect(prompter: &dyn Prompter) -> Result<Self> {
        let mut raw = prompter.ask(&questions())?;

        let answers = Self {
            module_template: take(&mut raw, "moduleTemplate")?,
            npm_scope: take(&mut raw, "npmScope")?,
            npm_module_name: take(&mut raw, "npmModuleName")?,
            github_org: take(&mut raw, "githubOrg")?,
            module_author: take(&mut raw, "moduleAuthor")?,
            module_license: take(&mut raw, "moduleLicense")?,
            npm_access: take(&mut raw, "npmAccess")?,
        };

        answers.validate()?;
        Ok(answers)
    }

    /// Canned answer set used with --debug.
    pub fn debug() -> Self {
        Self {
            module_template: "nodejs-lib".to_string(),
            npm_scope: "@naturalcycles".to_string(),
            npm_module_name: "some-lib".to_string(),
            github_org: "NaturalCycles".to_string(),
            module_author: "test author".to_string(),
            module_license: "MIT".to_string(),
            npm_access: "public".to_string(),
        }
    }

    /// Validates the module name and scope against npm naming rules.
    /// Runs before directory creation so an invalid name never produces
    /// partial output on disk.
    pub fn validate(&self) -> Result<()> {
        // Unwraps are safe: the patterns are compile-time literals.
        let scope_re = Regex::new(r"^@[a-z0-9\-~][a-z0-9\-._~]*$").unwrap();
        let name_re = Regex::new(r"^[a-z0-9\-~][a-z0-9\-._~]*$").unwrap();

        if !self.npm_scope.is_empty() && !scope_re.is_match(&self.npm_scope) {
            return Err(Error::ValidationError(format!(
                "invalid npm scope '{}': must start with '@' followed by lowercase letters, digits, '-', '.', '_' or '~'",
                self.npm_scope
            )));
        }

        if !name_re.is_match(&self.npm_module_name) {
            return Err(Error::ValidationError(format!(
                "invalid module name '{}': must consist of lowercase letters, digits, '-', '.', '_' or '~'",
                self.npm_module_name
            )));
        }

        if !MODULE_TEMPLATES.contains(&self.module_template.as_str()) {
            return Err(Error::TemplateNotFound {
                template: self.module_template.clone(),
            });
        }

        Ok(())
    }
}
