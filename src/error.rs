use thiserror::Error;

/// Reasons the decorative background could not be drawn. None of these are
/// surfaced to the visitor; the layer is simply left out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackgroundError {
    #[error("Background canvas is not attached to the document")]
    CanvasMissing,
    #[error("2D canvas context is not supported")]
    ContextUnavailable,
    #[error("Couldn't acquire 2D canvas context: {0}")]
    ContextRejected(String),
    #[error("Couldn't draw starfield: {0}")]
    Draw(String),
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Invalid leptos configuration: {0}")]
    Config(String),
    #[error("Couldn't bind or serve: {0}")]
    Io(#[from] std::io::Error),
}
