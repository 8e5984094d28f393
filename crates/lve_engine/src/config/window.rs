//! Window creation parameters

use super::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// # Window Configuration
///
/// Size and title of the single application window. The window is created
/// non-resizable, so these values hold for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Client area width in screen coordinates
    pub width: u32,
    /// Client area height in screen coordinates
    pub height: u32,
    /// Title bar text
    pub title: String,
}

impl WindowConfig {
    /// Default client area width
    pub const DEFAULT_WIDTH: u32 = 800;
    /// Default client area height
    pub const DEFAULT_HEIGHT: u32 = 600;
    /// Default title bar text
    pub const DEFAULT_TITLE: &'static str = "Hello Vulkan!";

    /// Create a new window configuration
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
        }
    }

    /// Set the window size
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the window title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT, Self::DEFAULT_TITLE)
    }
}

impl Config for WindowConfig {}
