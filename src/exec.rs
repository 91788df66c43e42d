//! External command execution.
//! Commands run through the shell with the given working directory; their
//! output streams straight to the operator's terminal and the exit code is
//! the sole success signal.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs a shell command in the given working directory.
///
/// # Arguments
/// * `cmd` - Shell command string
/// * `cwd` - Working directory the command runs in
///
/// # Returns
/// * `Result<()>` - Ok if the command exited with status zero
///
/// # Errors
/// * `Error::CommandError` carrying the command and its exit code on a
///   non-zero exit
/// * `Error::IoError` if the command could not be launched
pub fn run_command<P: AsRef<Path>>(cmd: &str, cwd: P) -> Result<()> {
    println!(">> {}", cmd);

    let status = Command::new("sh")
        .arg("-c")
        .arg(cmd)
        .current_dir(cwd.as_ref())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(Error::IoError)?;

    if !status.success() {
        return Err(Error::CommandError {
            command: cmd.to_string(),
            code: status.code().unwrap_or(1),
        });
    }

    Ok(())
}
