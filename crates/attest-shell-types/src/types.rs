//! Core types for the shell executor contract.

use serde::{Deserialize, Serialize};

/// A request to run a single command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellRequest {
    /// The command line to execute, untouched by the console.
    pub command: String,
    /// The directory to execute in. Unset means the executor's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

impl ShellRequest {
    pub fn new(command: &str) -> ShellRequest {
        return ShellRequest {
            command: command.to_string(),
            working_dir: None,
        };
    }

    pub fn with_working_dir(mut self, working_dir: &str) -> ShellRequest {
        self.working_dir = Some(working_dir.to_string());
        return self;
    }
}

/// The structured result of one command invocation.
///
/// Produced once per request and consumed immediately by the console's output
/// formatter; never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// Captured standard output, verbatim.
    pub stdout: String,
    /// Captured standard error, verbatim.
    pub stderr: String,
    /// The process exit code.
    pub exit_code: i32,
    /// Whether the executor considers the invocation successful.
    pub success: bool,
}

impl ShellOutput {
    /// A successful invocation carrying only standard output.
    pub fn success(stdout: &str) -> ShellOutput {
        return ShellOutput {
            stdout: stdout.to_string(),
            stderr: "".to_string(),
            exit_code: 0,
            success: true,
        };
    }

    /// A failed invocation carrying standard error and its exit code.
    pub fn failure(stderr: &str, exit_code: i32) -> ShellOutput {
        return ShellOutput {
            stdout: "".to_string(),
            stderr: stderr.to_string(),
            exit_code,
            success: false,
        };
    }
}
