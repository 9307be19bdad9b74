mod conf;
mod cmd;
mod errors;
pub mod header;
pub mod embed;

pub use cmd::EmbedCommand;
pub use conf::{
    DEFAULT_CHUNK_SIZE, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_SYMBOL, EmbedConf, MAX_CHUNK_SIZE,
};
pub use embed::{EmbedReport, EmbedStats, embed_file, embed_reader};
pub use errors::{EmbedError, EmbedResult};
pub use header::{HeaderWriter, Symbol, is_valid_symbol, render};
