use std::path::PathBuf;

use argh::FromArgs;

use crate::conf::EmbedConf;
use crate::errors::EmbedResult;


#[derive(FromArgs, PartialEq, Eq, Debug, Clone)]
/// Generate a C++ header embedding a binary as a byte array
pub struct EmbedCommand {
    #[argh(option, short = 'i')]
    /// binary file to embed
    pub input: Option<PathBuf>,

    #[argh(option, short = 'o')]
    /// header file to write
    pub output: Option<PathBuf>,

    #[argh(option, short = 's')]
    /// name of the generated array
    pub symbol: Option<String>,

    #[argh(option)]
    /// bytes read from the input per chunk
    pub chunk_size: Option<usize>,

    #[argh(option, short = 'c')]
    /// JSON config file
    pub config: Option<PathBuf>,

    #[argh(switch, short = 'v', long = "verbose")]
    /// enable verbose output
    pub verbose: bool,
}

impl EmbedCommand {
    /// Defaults, then the config file, then explicit flags.
    pub fn resolve(&self) -> EmbedResult<EmbedConf> {
        let mut conf = match &self.config {
            Some(path) => EmbedConf::from_file(path)?,
            None => EmbedConf::default(),
        };

        if let Some(input) = &self.input {
            conf.input = input.clone();
        }
        if let Some(output) = &self.output {
            conf.output = output.clone();
        }
        if let Some(symbol) = &self.symbol {
            conf.symbol = symbol.clone();
        }
        if let Some(chunk_size) = self.chunk_size {
            conf.chunk_size = chunk_size;
        }
        Ok(conf)
    }
}
