//! Application shell: one fixed-size window and the main loop

use lve_engine::window::{GlfwBackend, Window, WindowBackend, WindowError};
use thiserror::Error;

/// Window width
pub const WIDTH: u32 = 800;
/// Window height
pub const HEIGHT: u32 = 600;
/// Window title
pub const TITLE: &str = "Hello Vulkan!";

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Window subsystem error propagated to application level
    #[error("Window error: {0}")]
    Window(#[from] WindowError),
}

/// The application: owns the window for its whole lifetime
pub struct FirstApp<B: WindowBackend = GlfwBackend> {
    window: Window<B>,
}

impl FirstApp {
    /// Open the GLFW window
    pub fn new() -> Result<Self, AppError> {
        let app = Self::with_backend()?;

        if app.window.vulkan_supported() {
            let extensions = app.window.required_instance_extensions()?;
            log::debug!("Vulkan instance extensions for presentation: {:?}", extensions);
        } else {
            log::warn!("GLFW found no Vulkan loader; the window can be shown but not rendered to");
        }

        Ok(app)
    }
}

impl<B: WindowBackend> FirstApp<B> {
    /// Open the window on backend `B`
    pub fn with_backend() -> Result<Self, AppError> {
        let window = Window::create(WIDTH, HEIGHT, TITLE)?;
        Ok(Self::with_window(window))
    }

    /// Wrap an already created window
    pub const fn with_window(window: Window<B>) -> Self {
        Self { window }
    }

    /// Run until the window is asked to close
    ///
    /// Each iteration pumps window events; frame work goes after the poll once
    /// there is a renderer.
    pub fn run(&mut self) -> Result<(), AppError> {
        log::info!("Starting main loop...");

        let mut frames: u64 = 0;
        while !self.window.should_close() {
            self.window.poll_events();
            frames += 1;
        }

        log::info!("Close requested after {} frames", frames);
        Ok(())
    }

    #[cfg(test)]
    pub const fn window(&self) -> &Window<B> {
        &self.window
    }
}
