//! Type definitions for the shell executor contract
//!
//! This crate provides the shared contract between the attest console and the
//! host-side shell executor service. Centralizing the request/response types
//! keeps the console and any executor implementation from drifting apart, and
//! lets both sides validate the wire format at compile time. The console never
//! interprets command syntax or output; it only carries these types across the
//! boundary.
//!
//! ## Example
//!
//! ```rust
//! use attest_shell_types::{ShellRequest, ShellOutput};
//!
//! let request = ShellRequest::new("git status");
//! assert!(request.working_dir.is_none());
//!
//! let output = ShellOutput::success("On branch main\n");
//! assert_eq!(output.exit_code, 0);
//! ```

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ShellRequest::new("git status");
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: ShellRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }

    #[test]
    fn test_request_omits_unset_working_dir() {
        let request = ShellRequest::new("ls");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"command":"ls"}"#);
    }

    #[test]
    fn test_request_with_working_dir() {
        let request = ShellRequest::new("ls").with_working_dir("/tmp");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"command":"ls","working_dir":"/tmp"}"#);
    }

    #[test]
    fn test_output_wire_field_names() {
        let json = r#"{"stdout":"OK\n","stderr":"","exit_code":0,"success":true}"#;
        let output: ShellOutput = serde_json::from_str(json).unwrap();
        assert_eq!(output.stdout, "OK\n");
        assert!(output.success);
    }

    #[test]
    fn test_output_round_trip() {
        let output = ShellOutput {
            stdout: "".to_string(),
            stderr: "boom\n".to_string(),
            exit_code: 1,
            success: false,
        };
        let json = serde_json::to_string(&output).unwrap();
        let deserialized: ShellOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(output, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ShellError::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "shell service unreachable: connection refused"
        );
    }
}
