//! Windowing library contract
//!
//! [`WindowBackend`] is everything the window lifecycle needs from a windowing
//! library: process-wide init (constructing the backend), terminate (dropping
//! it), window creation, and event pumping. [`NativeWindow`] is the handle the
//! backend hands out; dropping it destroys the native window.

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing library refused to initialize
    #[error("{backend} initialization failed: {reason}")]
    InitializationFailed {
        /// Backend that failed
        backend: &'static str,
        /// Library-provided description
        reason: String,
    },

    /// The library returned no window handle
    #[error("Window creation failed for \"{title}\" ({width}x{height})")]
    CreationFailed {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested title
        title: String,
    },

    /// Width or height was zero
    #[error("Invalid window size {width}x{height}: both dimensions must be non-zero")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// The windowing library cannot present to Vulkan on this machine
    #[error("Vulkan is not supported by the windowing system")]
    VulkanUnsupported,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Creation hints applied before the native window is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHints {
    /// Bind a legacy client API (OpenGL) context to the window
    pub client_api: bool,
    /// Let the user resize the window
    pub resizable: bool,
}

impl WindowHints {
    /// Presentation surface only: no client API context, fixed size
    pub const fn presentation_only() -> Self {
        Self {
            client_api: false,
            resizable: false,
        }
    }
}

impl Default for WindowHints {
    fn default() -> Self {
        Self::presentation_only()
    }
}

/// Everything a backend needs to create one window
#[derive(Debug, Clone, Copy)]
pub struct WindowDescriptor<'a> {
    /// Client area width
    pub width: u32,
    /// Client area height
    pub height: u32,
    /// Title bar text
    pub title: &'a str,
    /// Creation hints
    pub hints: WindowHints,
}

impl WindowDescriptor<'_> {
    pub(crate) fn creation_failed(&self) -> WindowError {
        WindowError::CreationFailed {
            width: self.width,
            height: self.height,
            title: self.title.to_string(),
        }
    }
}

/// A windowing library with process-wide state
///
/// Constructing a value with [`WindowBackend::init`] initializes the library.
/// Dropping that value terminates it. Handles returned by
/// [`WindowBackend::create_window`] must be dropped before the backend.
pub trait WindowBackend: Sized {
    /// Native window handle type
    type Window: NativeWindow;

    /// Name used in logs and errors
    const NAME: &'static str;

    /// Initialize the library
    fn init() -> WindowResult<Self>;

    /// Apply `descriptor.hints` and create a windowed, unshared native window
    fn create_window(&mut self, descriptor: &WindowDescriptor<'_>) -> WindowResult<Self::Window>;

    /// Process pending window system events
    ///
    /// Close requests from the user are only observed after this runs.
    fn poll_events(&mut self);
}

/// An exclusively owned native window
///
/// Dropping the value destroys the native window.
pub trait NativeWindow {
    /// Whether a close request is pending
    fn should_close(&self) -> bool;

    /// Raise or clear the close request
    fn set_should_close(&mut self, should_close: bool);

    /// Current client area size
    fn size(&self) -> (u32, u32);

    /// Drop any queued window events
    ///
    /// Backends that buffer events per window override this so the queue does
    /// not grow while nothing consumes it.
    fn discard_events(&mut self) {}
}
