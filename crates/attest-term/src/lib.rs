//! Interactive command console for the attest workspace.
//!
//! This crate owns line editing, command history, execution sequencing, and
//! output formatting for the terminal panel. Commands themselves run in an
//! external shell executor reached over a trait boundary; the display is an
//! ANSI surface the console only issues semantic writes to. The heart of the
//! crate is a pure state machine ([`domain::services::Console`]) that turns
//! logical key events into display effects, which keeps the whole dispatch
//! table testable without a terminal.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;

pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Action, CommandOutcome, DisplaySurface, Effect, Event, ExecutorName, ShellExecutor, TextStyle,
};
pub use domain::services::{Console, History, LineBuffer, RunnerService};
pub use infrastructure::clients::ExecutorManager;
pub use infrastructure::display::AnsiDisplay;
