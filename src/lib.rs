//! create-module is an interactive scaffolding tool for node library modules.
//! It collects a fixed answer set, then generates a new module directory from
//! a named template: manifest, static files, rendered readme, installed dev
//! dependencies and an initialized git repository.

/// Answer collection and npm naming validation
pub mod answers;

/// Command-line interface module for the create-module application
pub mod cli;

/// Per-template configuration handling
/// Supports JSON and YAML formats (config.json, config.yml, config.yaml)
pub mod config;

/// Declarative data: template ids, file names, dependency lists, commands
pub mod constants;

/// Dev dependency installation via yarn
pub mod deps;

/// Error types and handling for the create-module application
pub mod error;

/// External command execution with live output streaming
pub mod exec;

/// Logger initialization
pub mod logger;

/// Manifest (package.json) generation
pub mod manifest;

/// Option assembly: answers + template config + derived identifiers
pub mod options;

/// The ordered module generation pipeline
/// Combines all components to generate the final output
pub mod pipeline;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;

/// Template file copying and readme rendering
pub mod template;

/// Git repository initialization for the generated module
pub mod vcs;

/// Target directory preparation and the empty-directory safety guard
pub mod workspace;
