//! Window management using GLFW
//!
//! GLFW's process-wide state lives in [`glfw::Glfw`]; dropping the last
//! context terminates the library. [`glfw::PWindow`] destroys its window on
//! drop.

use super::backend::{NativeWindow, WindowBackend, WindowDescriptor, WindowError, WindowResult};

/// Route GLFW error callbacks into the log
#[allow(clippy::needless_pass_by_value)]
fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {:?}: {}", error, description);
}

/// GLFW library context
pub struct GlfwBackend {
    glfw: glfw::Glfw,
}

impl GlfwBackend {
    /// Whether GLFW found a Vulkan loader and a surface-capable driver
    pub fn vulkan_supported(&self) -> bool {
        self.glfw.vulkan_supported()
    }

    /// Vulkan instance extensions needed to create surfaces for GLFW windows
    pub fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.glfw
            .get_required_instance_extensions()
            .ok_or(WindowError::VulkanUnsupported)
    }
}

impl WindowBackend for GlfwBackend {
    type Window = GlfwWindow;

    const NAME: &'static str = "GLFW";

    fn init() -> WindowResult<Self> {
        let glfw = glfw::init(log_glfw_error).map_err(|e| WindowError::InitializationFailed {
            backend: Self::NAME,
            reason: format!("{e:?}"),
        })?;

        log::debug!("GLFW {} initialized", glfw::get_version_string());
        Ok(Self { glfw })
    }

    fn create_window(&mut self, descriptor: &WindowDescriptor<'_>) -> WindowResult<GlfwWindow> {
        let client_api = if descriptor.hints.client_api {
            glfw::ClientApiHint::OpenGl
        } else {
            glfw::ClientApiHint::NoApi
        };
        self.glfw.window_hint(glfw::WindowHint::ClientApi(client_api));
        self.glfw.window_hint(glfw::WindowHint::Resizable(descriptor.hints.resizable));

        // Windowed mode: no monitor, no shared context
        let (window, events) = self
            .glfw
            .create_window(
                descriptor.width,
                descriptor.height,
                descriptor.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| descriptor.creation_failed())?;

        Ok(GlfwWindow { window, events })
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }
}

/// GLFW window handle with its event queue
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl NativeWindow for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (
            u32::try_from(width).unwrap_or(0),
            u32::try_from(height).unwrap_or(0),
        )
    }

    fn discard_events(&mut self) {
        glfw::flush_messages(&self.events).for_each(drop);
    }
}
