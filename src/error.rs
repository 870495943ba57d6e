use thiserror::Error;

/// Errors raised while setting up or persisting a benchmark run.
///
/// Environmental failures (`Pin`, `Priority`) are absorbed by the callers in
/// [`affinity`](crate::affinity) and [`priority`](crate::priority) and only
/// ever show up as warnings.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The OS refused to bind a thread to a core.
    #[error("could not pin thread to core {core}: {reason}")]
    Pin { core: usize, reason: String },

    /// The OS refused to raise the process priority.
    #[error("unable to set priority: {reason}")]
    Priority { reason: String },

    #[error("failed to spawn worker for core {core}: {source}")]
    Spawn {
        core: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("worker for core {core} panicked")]
    WorkerPanicked { core: usize },

    #[error("invalid run configuration: {detail}")]
    Config { detail: String },

    /// A persisted log contained something other than a core id.
    #[error("malformed log entry {position}: {token:?}")]
    MalformedLog { position: usize, token: String },
}

pub type Result<T> = std::result::Result<T, BenchError>;
