use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::conf::MAX_CHUNK_SIZE;


#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Failed to read input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid symbol name: {0:?}")]
    InvalidSymbol(String),

    #[error("Chunk size must be between 1 and {max} bytes, got {0}", max = MAX_CHUNK_SIZE)]
    InvalidChunkSize(usize),

    #[error("Input length changed while embedding: declared {declared} bytes, streamed {written}")]
    LengthMismatch { declared: u64, written: u64 },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type EmbedResult<T> = Result<T, EmbedError>;
