//! The module generation pipeline.
//! An ordered sequence of all-or-nothing stages turning a collected answer
//! set into an initialized, committed, dependency-installed module
//! directory. A failure in any stage aborts the remaining stages; there is
//! no retry and no rollback of already-written files.

use crate::answers::Answers;
use crate::cli::Args;
use crate::config::{load_template_config, templates_root};
use crate::constants::{DEBUG_MODULE_DIR, README_FILE};
use crate::deps::install_dev_dependencies;
use crate::error::{Error, Result};
use crate::manifest::generate_manifest;
use crate::options::Options;
use crate::prompt::{DialoguerPrompter, Prompter};
use crate::renderer::MiniJinjaRenderer;
use crate::template::{copy_template_files, render_readme};
use crate::vcs::setup_git;
use crate::workspace::{clear_dir, ensure_dir_empty};
use log::debug;
use std::path::{Path, PathBuf};

/// Runs the full pipeline with the interactive prompter and the default
/// templates root.
pub fn run(args: Args) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    run_with(args, &templates_root(), &prompter)
}

/// Runs the full pipeline with an explicit templates root and prompter.
///
/// # Flow
/// 1. Collects answers (canned set in debug mode, clearing the directory)
/// 2. Loads the template configuration
/// 3. Assembles the immutable Options record
/// 4. Ensures the module directory exists and is empty
/// 5. Writes package.json
/// 6. Copies the template files tree (dotfiles included)
/// 7. Renders readme.md in place
/// 8. Installs dev dependencies via yarn
/// 9. Initializes git and creates the initial commit
pub fn run_with(args: Args, templates_root: &Path, prompter: &dyn Prompter) -> Result<()> {
    let engine = MiniJinjaRenderer::new();

    let (module_dir, answers) = if args.debug {
        let module_dir =
            args.module_dir.unwrap_or_else(|| PathBuf::from(DEBUG_MODULE_DIR));
        clear_dir(&module_dir)?;
        (module_dir, Answers::debug())
    } else {
        let module_dir = match args.module_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(Error::IoError)?,
        };
        (module_dir, Answers::collect(prompter)?)
    };

    let config = load_template_config(templates_root, &answers.module_template)?;
    debug!("Template config: {:?}", config);

    let opt = Options::assemble(answers, config, &module_dir);
    debug!("Assembled options: {:?}", opt);

    ensure_dir_empty(&opt.module_dir)?;

    let manifest_path = generate_manifest(&opt)?;
    println!("Generated '{}'", manifest_path.display());

    copy_template_files(templates_root, &opt)?;
    println!("Copied template files into '{}'", opt.module_dir.display());

    render_readme(&opt, &engine)?;
    println!("Generated '{}'", opt.module_dir.join(README_FILE).display());

    install_dev_dependencies(&opt)?;

    setup_git(&opt)?;

    println!(
        "Module '{}' created successfully in {}.",
        opt.npm_full_name,
        opt.module_dir.display()
    );
    Ok(())
}
