// src/error.rs

use thiserror::Error;

use crate::court_lib::ConfigurationError;

/// Startup failures of the viewer. Runtime surface errors are handled in
/// the frame loop instead.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid court configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("could not create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("could not create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("could not request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

pub type AppResult<T> = Result<T, AppError>;
