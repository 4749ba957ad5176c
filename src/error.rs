use thiserror::Error;

/// Errors reported by the strict decoders and the CLI.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PathError {
    #[error("invalid point token {token:?} at byte {offset}")]
    InvalidToken { offset: usize, token: String },

    #[error("invalid path segment {index}: {segment:?}")]
    InvalidSegment { index: usize, segment: String },

    #[error("failed to read path: {0}")]
    Io(#[from] std::io::Error),
}
