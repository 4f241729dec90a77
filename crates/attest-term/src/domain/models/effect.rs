use attest_shell_types::ShellRequest;

use super::TextStyle;

/// Side effects requested by the console state machine. The transition
/// function itself never touches the display or the executor; it returns
/// effects for the application loop to apply, which keeps every transition
/// testable without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Write(TextStyle, String),
    ClearScreen,
    Execute(ShellRequest),
}
