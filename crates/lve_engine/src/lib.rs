//! # LVE Engine
//!
//! Window bootstrap for a Vulkan renderer. The crate owns exactly one thing of
//! substance: the lifetime of a native window and of the windowing library's
//! process-wide state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lve_engine::prelude::*;
//!
//! fn main() -> Result<(), WindowError> {
//!     let mut window: Window = Window::new(800, 600, "Hello Vulkan!")?;
//!     while !window.should_close() {
//!         window.poll_events();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod window;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, WindowConfig},
        window::{
            GlfwBackend, HeadlessBackend, NativeWindow, Subsystem, Window, WindowBackend,
            WindowError, WindowResult,
        },
    };
}
