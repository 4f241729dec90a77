//! Infrastructure layer providing external integrations.
//!
//! This module contains the concrete executor clients and the ANSI display
//! surface; everything here implements a trait the domain defines.

pub mod clients;
pub mod display;
