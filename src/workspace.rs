//! Target directory preparation.
//! The empty-directory check is the primary safety guard: it runs before
//! any generation so an existing project is never silently overwritten.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Ensures the module directory exists and is empty.
///
/// Creates the directory (and intermediate directories) if needed, then
/// fails with `Error::DirectoryNotEmptyError` if it contains any entry.
pub fn ensure_dir_empty<P: AsRef<Path>>(module_dir: P) -> Result<()> {
    let module_dir = module_dir.as_ref();
    fs::create_dir_all(module_dir).map_err(Error::IoError)?;

    let mut entries = fs::read_dir(module_dir).map_err(Error::IoError)?;
    if entries.next().is_some() {
        return Err(Error::DirectoryNotEmptyError {
            module_dir: module_dir.display().to_string(),
        });
    }

    Ok(())
}

/// Forcibly clears the module directory, creating it if needed.
/// Only used in debug mode.
pub fn clear_dir<P: AsRef<Path>>(module_dir: P) -> Result<()> {
    let module_dir = module_dir.as_ref();
    fs::create_dir_all(module_dir).map_err(Error::IoError)?;

    for entry in fs::read_dir(module_dir).map_err(Error::IoError)? {
        let entry = entry.map_err(Error::IoError)?;
        let path = entry.path();
        debug!("Removing {}", path.display());
        // file_type() does not follow symlinks; a symlink to a directory
        // must be removed as a file, not descended into.
        let file_type = entry.file_type().map_err(Error::IoError)?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(Error::IoError)?;
        } else {
            fs::remove_file(&path).map_err(Error::IoError)?;
        }
    }

    Ok(())
}
