//! Foundation module - Core utilities shared by the rest of the engine
//!
//! - Logging setup

pub mod logging;
