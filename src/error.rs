use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The pipeline stage a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Computing how many candidates to allocate for.
    Bound,
    /// Enumerating permutations into the candidate list.
    Generate,
    /// The duplicate-elimination pool pass.
    Deduplicate,
    /// The dictionary-membership pool pass.
    Lookup,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bound       => "bound",
            Self::Generate    => "generate",
            Self::Deduplicate => "deduplicate",
            Self::Lookup      => "lookup",
        })
    }
}

/// Coarse classification of a [`RemixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    ResourceExhausted,
    ConcurrencyInitFailure,
}

#[derive(Error, Debug)]
pub enum RemixError {
    // Input
    #[error("empty word")]
    EmptyWord,

    #[error("invalid thread count: {0}")]
    InvalidThreadCount(usize),

    #[error("no dictionary available")]
    NoDictionary,

    // Resources
    #[error("out of memory during {stage} stage")]
    ResourceExhausted {
        stage:     Stage,
        /// Number of items the stage tried to make room for, when known.
        requested: Option<usize>,
    },

    // Concurrency
    #[error("failed to spawn worker during {stage} stage")]
    ThreadSpawn {
        stage: Stage,
        #[source]
        source: std::io::Error,
    },

    #[error("worker panicked during {stage} stage")]
    WorkerPanicked { stage: Stage },

    // Dictionary loading
    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RemixError {
    /// Which of the three failure families this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyWord
            | Self::InvalidThreadCount(_)
            | Self::NoDictionary
            | Self::Io { .. } => ErrorKind::InvalidInput,
            Self::ResourceExhausted { .. } => ErrorKind::ResourceExhausted,
            Self::ThreadSpawn { .. } | Self::WorkerPanicked { .. } => {
                ErrorKind::ConcurrencyInitFailure
            }
        }
    }

    /// The stage this error occurred in, if it is tied to one.
    /// Input errors are raised before any stage starts and return `None`.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::ResourceExhausted { stage, .. }
            | Self::ThreadSpawn { stage, .. }
            | Self::WorkerPanicked { stage } => Some(*stage),
            _ => None,
        }
    }

    pub(crate) fn exhausted(stage: Stage, requested: usize) -> Self {
        Self::ResourceExhausted { stage, requested: Some(requested) }
    }
}
