//! Window lifecycle manager
//!
//! [`Window`] owns one native window and the windowing subsystem it was created
//! from. Construction runs library init then window creation; drop runs window
//! destruction then library terminate. Both happen exactly once.

use super::backend::{
    NativeWindow, WindowBackend, WindowDescriptor, WindowError, WindowHints, WindowResult,
};
use super::glfw_backend::GlfwBackend;
use super::subsystem::Subsystem;
use crate::config::WindowConfig;

/// A fixed-size window and the library state behind it
///
/// `Window` is move-only. Copying it would duplicate the native handle and
/// the one-time library initialization:
///
/// ```compile_fail
/// use lve_engine::window::{HeadlessBackend, Window};
///
/// fn duplicate<T: Clone>(value: &T) -> T {
///     value.clone()
/// }
///
/// let window = Window::<HeadlessBackend>::create(800, 600, "Hello Vulkan!").unwrap();
/// let _copy = duplicate(&window);
/// ```
pub struct Window<B: WindowBackend = GlfwBackend> {
    width: u32,
    height: u32,
    title: String,
    // Fields drop in declaration order: the handle must go before the subsystem.
    handle: B::Window,
    subsystem: Subsystem<B>,
}

impl Window {
    /// Create a GLFW window with the given client area size and title
    ///
    /// # Errors
    /// Fails if either dimension is zero, GLFW cannot be initialized, or the
    /// window cannot be created.
    pub fn new(width: u32, height: u32, title: &str) -> WindowResult<Self> {
        Self::create(width, height, title)
    }

    /// Whether the Vulkan loader and a surface-capable ICD were found
    pub fn vulkan_supported(&self) -> bool {
        self.subsystem.backend().vulkan_supported()
    }

    /// Instance extensions Vulkan needs to present to this window
    ///
    /// # Errors
    /// [`WindowError::VulkanUnsupported`] when GLFW found no usable Vulkan.
    pub fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.subsystem.backend().required_instance_extensions()
    }
}

impl<B: WindowBackend> Window<B> {
    /// Initialize the backend and create a window on it
    ///
    /// # Errors
    /// Fails if either dimension is zero, the backend cannot be initialized,
    /// or the window cannot be created.
    pub fn create(width: u32, height: u32, title: &str) -> WindowResult<Self> {
        validate_size(width, height)?;
        let subsystem = Subsystem::init()?;
        Self::with_subsystem(subsystem, width, height, title)
    }

    /// Create a window from a [`WindowConfig`]
    ///
    /// # Errors
    /// Same as [`Window::create`].
    pub fn from_config(config: &WindowConfig) -> WindowResult<Self> {
        Self::create(config.width, config.height, &config.title)
    }

    /// Create a window on an already initialized subsystem
    ///
    /// The window takes ownership of the subsystem. If creation fails the
    /// subsystem is dropped, so the library is terminated either way.
    ///
    /// # Errors
    /// Fails if either dimension is zero or the window cannot be created.
    pub fn with_subsystem(
        mut subsystem: Subsystem<B>,
        width: u32,
        height: u32,
        title: &str,
    ) -> WindowResult<Self> {
        validate_size(width, height)?;

        let descriptor = WindowDescriptor {
            width,
            height,
            title,
            hints: WindowHints::presentation_only(),
        };
        let handle = subsystem.create_window(&descriptor).map_err(|e| {
            log::error!("Failed to create window \"{}\": {}", title, e);
            e
        })?;

        log::info!("Created {}x{} window \"{}\" ({})", width, height, title, B::NAME);
        Ok(Self {
            width,
            height,
            title: title.to_string(),
            handle,
            subsystem,
        })
    }

    /// Whether the user or the application asked the window to close
    pub fn should_close(&self) -> bool {
        self.handle.should_close()
    }

    /// Raise or clear the close request
    pub fn set_should_close(&mut self, should_close: bool) {
        self.handle.set_should_close(should_close);
    }

    /// Process pending window system events
    pub fn poll_events(&mut self) {
        self.subsystem.poll_events();
        self.handle.discard_events();
    }

    /// Width requested at construction
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height requested at construction
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width and height requested at construction
    pub const fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Title given at construction
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Client area size as reported by the windowing library
    pub fn native_size(&self) -> (u32, u32) {
        self.handle.size()
    }

    /// Borrow the native handle
    pub const fn native(&self) -> &B::Window {
        &self.handle
    }

    /// Borrow the windowing subsystem
    pub const fn subsystem(&self) -> &Subsystem<B> {
        &self.subsystem
    }
}

impl<B: WindowBackend> Drop for Window<B> {
    fn drop(&mut self) {
        log::debug!("Destroying window \"{}\"", self.title);
    }
}

impl<B: WindowBackend> std::fmt::Debug for Window<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("backend", &B::NAME)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

fn validate_size(width: u32, height: u32) -> WindowResult<()> {
    if width == 0 || height == 0 {
        return Err(WindowError::InvalidDimensions { width, height });
    }
    Ok(())
}
