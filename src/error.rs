//! Startup errors for the overlay.
//!
//! Everything here is fatal: the render loop never starts when one of these
//! is returned. Per-frame work has no error path.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    /// The platform event loop could not be created or exited abnormally
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The overlay window could not be created
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// The composite surface could not be created
    #[error("surface creation failed: {0}")]
    Surface(#[from] pixels::Error),

    #[error("no usable font found; set {env} or configure a font path")]
    FontNotFound { env: &'static str },

    #[error("failed to read font {}: {source}", .path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid TrueType/OpenType font", .0.display())]
    InvalidFont(PathBuf),
}
