//! Version control initialization for the generated module.
//! The terminal pipeline stage: initializes a git repository, points it at
//! the derived GitHub remote and creates the initial commit.

use crate::constants::INITIAL_COMMIT_MESSAGE;
use crate::error::Result;
use crate::exec::run_command;
use crate::options::Options;

/// The ordered git command sequence for the given options.
pub fn git_commands(opt: &Options) -> Vec<String> {
    vec![
        "git init".to_string(),
        format!("git remote add origin git@github.com:{}.git", opt.github_full_name),
        "git add -A".to_string(),
        format!("git commit -a -m \"{}\"", INITIAL_COMMIT_MESSAGE),
        "git status".to_string(),
    ]
}

/// Runs the git setup sequence inside the module directory.
/// Any non-zero exit aborts the remaining commands.
pub fn setup_git(opt: &Options) -> Result<()> {
    for cmd in git_commands(opt) {
        run_command(&cmd, &opt.module_dir)?;
    }
    Ok(())
}
