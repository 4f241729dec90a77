use attest_shell_types::ShellOutput;

/// Logical events fed to the console state machine, derived from raw
/// keystrokes or from the command runner reporting a settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    KeyboardCharInput(char),
    KeyboardBackspace,
    KeyboardEnter,
    KeyboardArrowUp,
    KeyboardArrowDown,
    KeyboardCTRLC,
    KeyboardCTRLL,
    KeyboardCTRLD,
    CommandSettled(CommandOutcome),
}

/// How an executor invocation settled. A command that ran and exited non-zero
/// is still `Completed`; `TransportFailed` means the call itself never
/// produced a structured result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed(ShellOutput),
    TransportFailed(String),
}
