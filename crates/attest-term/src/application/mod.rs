//! Application layer orchestrating the console.
//!
//! This module owns command-line parsing, logging setup, and the main loop
//! that shuttles events into the state machine and effects back out to the
//! display and the runner.

pub mod cli;
pub mod ui;
