use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{EmbedError, EmbedResult};


pub const DEFAULT_INPUT: &str = "zcblive-build/zcblive.dll";
pub const DEFAULT_OUTPUT: &str = "src/embed.hpp";
pub const DEFAULT_SYMBOL: &str = "zcblive_dll";
pub const DEFAULT_CHUNK_SIZE: usize = 256;
/// Upper bound on the read buffer, 16 MiB.
pub const MAX_CHUNK_SIZE: usize = 16 << 20;


#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EmbedConf {
    /// Binary to embed, relative to the working directory.
    pub input: PathBuf,

    /// Header to generate, relative to the working directory.
    pub output: PathBuf,

    pub symbol: String,

    pub chunk_size: usize,

    pub log_init: bool,
}

impl Default for EmbedConf {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            symbol: DEFAULT_SYMBOL.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            log_init: true,
        }
    }
}

impl EmbedConf {
    /// Loads a JSON config. Keys that are absent keep their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EmbedResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| EmbedError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| EmbedError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
