use error_iter::ErrorIter;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop failed")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not create window")]
    Window(#[from] winit::error::OsError),
    #[error("could not set up pixel buffer")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize pixel surface")]
    Texture(#[from] pixels::TextureError),
}

/// Logs `err` followed by each error in its source chain.
pub fn log_error<E: ErrorIter>(method_name: &str, err: &E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
