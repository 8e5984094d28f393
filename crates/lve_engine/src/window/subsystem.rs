//! Scoped ownership of the windowing library's process-wide state

use super::backend::{WindowBackend, WindowDescriptor, WindowResult};

/// RAII guard for an initialized windowing library
///
/// Holding a `Subsystem` means the library is initialized. Dropping it
/// terminates the library. One guard per process is assumed; no reference
/// counting is done across guards.
pub struct Subsystem<B: WindowBackend> {
    backend: B,
}

impl<B: WindowBackend> Subsystem<B> {
    /// Initialize the windowing library
    pub fn init() -> WindowResult<Self> {
        log::info!("Initializing {} windowing subsystem", B::NAME);
        let backend = B::init()?;
        Ok(Self::adopt(backend))
    }

    /// Take ownership of an already initialized backend
    pub fn adopt(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the backend
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub(crate) fn create_window(
        &mut self,
        descriptor: &WindowDescriptor<'_>,
    ) -> WindowResult<B::Window> {
        self.backend.create_window(descriptor)
    }

    pub(crate) fn poll_events(&mut self) {
        self.backend.poll_events();
    }
}

impl<B: WindowBackend> Drop for Subsystem<B> {
    fn drop(&mut self) {
        // The backend field drops right after this and performs the terminate.
        log::info!("Terminating {} windowing subsystem", B::NAME);
    }
}
