use thiserror::Error;

use crate::config::ConfigError;
use crate::image::StoreError;

/// Failures that stop the tool before or while bringing up the window.
/// Once a session is running, event handling never produces these.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Grid image unavailable: {0}")]
    Store(#[from] StoreError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Graphics error: {0}")]
    Graphics(#[from] pixels::Error),
}
