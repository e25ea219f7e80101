//! Running `*-config` style tools and capturing their one-line answers.

use std::io;
use std::path::Path;
use std::process::Command;
use std::process::ExitStatus;

use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum ConfigToolError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("`{tool} {flag}` exited with {status}")]
    Failed {
        tool: String,
        flag: String,
        status: ExitStatus,
    },
}

/// Run `tool flag` and return its trimmed standard output.
pub(crate) fn query(tool: &Path, flag: &str) -> Result<String, ConfigToolError> {
    debug!("querying `{} {flag}`", tool.display());

    let output = Command::new(tool)
        .arg(flag)
        .output()
        .map_err(|source| ConfigToolError::Spawn {
            tool: tool.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ConfigToolError::Failed {
            tool: tool.display().to_string(),
            flag: flag.to_owned(),
            status: output.status,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
