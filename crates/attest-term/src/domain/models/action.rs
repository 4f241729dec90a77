use attest_shell_types::ShellRequest;

/// Requests handed off to the background runner service.
#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(ShellRequest),
}
