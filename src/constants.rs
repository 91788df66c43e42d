//! Common constants used throughout the create-module application.
//! Dependency lists and command strings live here as plain data so they can
//! be updated without touching the pipeline control flow.

/// Known template ids; the template choice prompt is restricted to this list
pub const MODULE_TEMPLATES: [&str; 1] = ["nodejs-lib"];

/// Supported per-template configuration file names
pub const CONFIG_FILES: [&str; 3] = ["config.json", "config.yml", "config.yaml"];

/// Subdirectory of a template holding the files to copy verbatim
pub const TEMPLATE_FILES_DIR: &str = "files";

/// Generated package descriptor file name
pub const MANIFEST_FILE: &str = "package.json";

/// Readme template file name, expected inside the template's files tree
pub const README_FILE: &str = "readme.md";

/// Default templates root, relative to the working directory
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable overriding the templates root
pub const TEMPLATES_DIR_ENV: &str = "CREATE_MODULE_TEMPLATES_DIR";

/// Module directory used when running with --debug
pub const DEBUG_MODULE_DIR: &str = "./m";

/// Dev dependencies installed into every generated module
pub const DEV_DEPENDENCIES: [&str; 11] = [
    "@naturalcycles/semantic-release",
    "@naturalcycles/shared-module",
    "@types/jest",
    "@types/node",
    "jest",
    "jest-junit",
    "prettier",
    "ts-jest",
    "ts-node",
    "tslint",
    "typescript",
];

/// Command that pulls shared tooling configuration into the module
pub const SYNC_COMMAND: &str = "yarn update-from-shared-module";

/// Commit message used for the initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "feat: init project by create-module";
