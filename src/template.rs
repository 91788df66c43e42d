//! Template file copying and readme rendering.
//! The copier clones the template's `files/` subtree into the module
//! directory, dotfiles included; the readme renderer then substitutes the
//! assembled options into the copied `readme.md` in place.

use crate::constants::{README_FILE, TEMPLATE_FILES_DIR};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copies every file under `<templatesRoot>/<template>/files`
/// into the module directory, preserving relative paths.
///
/// Hidden (dot-prefixed) files are copied too: templates ship semantically
/// required dotfiles such as lint and ignore configuration.
pub fn copy_template_files<P: AsRef<Path>>(templates_root: P, opt: &Options) -> Result<()> {
    let files_dir = templates_root.as_ref().join(&opt.module_template).join(TEMPLATE_FILES_DIR);
    if !files_dir.is_dir() {
        return Err(Error::MissingAssetError { path: files_dir.display().to_string() });
    }

    for entry in WalkDir::new(&files_dir) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let path = entry.path();
        let relative_path = path
            .strip_prefix(&files_dir)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        if relative_path.as_os_str().is_empty() {
            continue;
        }

        let target_path = opt.module_dir.join(relative_path);
        if path.is_dir() {
            fs::create_dir_all(&target_path).map_err(Error::IoError)?;
        } else {
            debug!("Copying {} -> {}", path.display(), target_path.display());
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent).map_err(Error::IoError)?;
            }
            fs::copy(path, &target_path).map(|_| ()).map_err(Error::IoError)?;
        }
    }

    Ok(())
}

/// Renders `<moduleDir>/readme.md` in place, substituting every placeholder
/// with values from the options.
///
/// The readme is expected to have been placed by the template file copier;
/// its absence is a fatal missing-asset error.
pub fn render_readme(opt: &Options, engine: &dyn TemplateRenderer) -> Result<()> {
    let readme_path = opt.module_dir.join(README_FILE);
    if !readme_path.is_file() {
        return Err(Error::MissingAssetError { path: readme_path.display().to_string() });
    }

    let template = fs::read_to_string(&readme_path).map_err(Error::IoError)?;
    let rendered = engine.render(&template, &opt.context())?;
    fs::write(&readme_path, rendered).map_err(Error::IoError)?;

    Ok(())
}
