//! Error handling for the create-module application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for create-module operations.
///
/// This enum represents all possible errors that can occur while generating
/// a module. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the minijinja rendering engine
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The requested template id is not in the known template list
    /// or its configuration resource is missing
    #[error("Template not found: '{template}'.")]
    TemplateNotFound { template: String },

    /// A required template asset (e.g. the readme) is absent
    #[error("Missing template asset: '{path}'.")]
    MissingAssetError { path: String },

    /// The target directory contains files and cannot be generated into
    #[error("Please make sure your working directory is empty: {module_dir}.")]
    DirectoryNotEmptyError { module_dir: String },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// An external command exited with a non-zero status
    #[error("Command '{command}' failed with exit code {code}.")]
    CommandError { command: String, code: i32 },
}

/// Convenience type alias for Results with create-module's Error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with a non-zero status.
/// A failed external command propagates its own exit code; every other
/// error exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    let code = match err {
        Error::CommandError { code, .. } => code,
        _ => 1,
    };
    std::process::exit(code);
}
