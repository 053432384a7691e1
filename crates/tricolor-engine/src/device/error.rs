/// Failures surfaced by the render sequence.
///
/// Only two kinds are recognized. Everything else the backend reports is
/// carried through as [`RenderError::Backend`] with its context chain.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The graphics API is not available in this environment.
    #[error("graphics acceleration is not supported in this environment")]
    Unsupported,

    /// The runtime found no suitable physical adapter.
    #[error("failed to find a suitable GPU adapter")]
    NoAdapter,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
