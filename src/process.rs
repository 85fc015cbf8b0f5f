use std::io;
use std::process::Command;

use thiserror::Error;

/// Failure to run an external tool to completion.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} {args} exited with status {code:?}: {stderr}")]
    Exit {
        program: String,
        args: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Run a tool and capture stdout as String.
pub fn tool_output(program: &str, args: &[&str]) -> Result<String, ToolError> {
    log::debug!("Running {program} {}", args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| ToolError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ToolError::Exit {
            program: program.to_string(),
            args: args.join(" "),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
