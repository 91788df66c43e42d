//! Dev dependency installation for the generated module.

use crate::constants::{DEV_DEPENDENCIES, SYNC_COMMAND};
use crate::error::Result;
use crate::exec::run_command;
use crate::options::Options;

/// Builds the `yarn add -D` command from the fixed dependency list.
pub fn install_command() -> String {
    let mut parts = vec!["yarn add -D".to_string()];
    parts.extend(DEV_DEPENDENCIES.iter().map(|d| d.to_string()));
    parts.join(" ")
}

/// Installs the fixed dev dependency list into the module directory, then
/// synchronizes shared tooling configuration from the shared module package.
/// Both commands stream their output live; a non-zero exit aborts the run.
pub fn install_dev_dependencies(opt: &Options) -> Result<()> {
    run_command(&install_command(), &opt.module_dir)?;
    run_command(SYNC_COMMAND, &opt.module_dir)?;
    Ok(())
}
