//! Core domain logic for the command console.
//!
//! This module contains the state machine and data models that drive the
//! console, independent of the real terminal, the real executor, or any other
//! external collaborator.

pub mod models;
pub mod services;
