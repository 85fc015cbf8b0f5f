use crate::error::PreconditionError;
use crate::process::tool_output;

/// Source of the staged diff.
///
/// This abstraction allows faking the git executable in tests.
#[cfg_attr(test, mockall::automock)]
pub trait DiffSource: Send + Sync {
    /// Confirm the working directory is a repository the tool can read.
    fn check_ready(&self) -> Result<(), PreconditionError>;

    /// Raw, untrimmed staged diff.
    fn staged_diff(&self) -> Result<String, PreconditionError>;
}

/// `DiffSource` backed by the system `git` binary.
pub struct GitCli;

impl DiffSource for GitCli {
    fn check_ready(&self) -> Result<(), PreconditionError> {
        git_output(&["status"]).map(|_| ())
    }

    fn staged_diff(&self) -> Result<String, PreconditionError> {
        git_output(&["diff", "--staged"])
    }
}

/// Run a git command and capture stdout as String.
fn git_output(args: &[&str]) -> Result<String, PreconditionError> {
    tool_output("git", args).map_err(|e| PreconditionError::NotARepository(e.to_string()))
}
