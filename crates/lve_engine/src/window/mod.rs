//! Window management subsystem
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!        ┌──────▼──────┐
//!        │   Window    │ ← Lifecycle manager (handle.rs)
//!        └──┬───────┬──┘
//!    owns   │       │   owns
//! ┌─────────▼──┐ ┌──▼──────────────┐
//! │ B::Window  │ │ Subsystem<B>    │ ← Library init guard (subsystem.rs)
//! └────────────┘ └──┬──────────────┘
//!                   │ B: WindowBackend (backend.rs)
//!        ┌──────────▼──────────┐
//!        │ GlfwBackend         │ ← glfw_backend.rs
//!        │ HeadlessBackend     │ ← headless.rs
//!        └─────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`handle`**: [`Window`], the application-facing lifecycle manager
//! - **`subsystem`**: [`Subsystem`], scoped library init/terminate
//! - **`backend`**: traits a windowing library implements, plus errors
//! - **`glfw_backend`**: the GLFW implementation used by the application
//! - **`headless`**: display-free implementation for tests

mod backend;
mod glfw_backend;
mod handle;
pub mod headless;
mod subsystem;

#[cfg(test)]
mod tests;

pub use backend::{
    NativeWindow, WindowBackend, WindowDescriptor, WindowError, WindowHints, WindowResult,
};
pub use glfw_backend::{GlfwBackend, GlfwWindow};
pub use handle::Window;
pub use headless::{
    HeadlessBackend, HeadlessOptions, HeadlessProbe, HeadlessWindow, LifecycleEvent,
};
pub use subsystem::Subsystem;
