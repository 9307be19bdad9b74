use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::conf::{EmbedConf, MAX_CHUNK_SIZE};
use crate::errors::{EmbedError, EmbedResult};
use crate::header::{HeaderWriter, Symbol};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedStats {
    pub declared_len: u64,
    pub written_len: u64,
    pub chunks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub declared_len: u64,
    pub written_len: u64,
    pub chunks: u64,
}

fn check_params(symbol: &str, chunk_size: usize) -> EmbedResult<Symbol> {
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(EmbedError::InvalidChunkSize(chunk_size));
    }
    Symbol::new(symbol)
}

/// Shared by [`embed_reader`] and [`embed_file`]; read failures go through
/// `on_read_error`, write failures surface as [`EmbedError::Io`].
fn embed_stream<R, W, F>(
    reader: &mut R,
    len: u64,
    symbol: &Symbol,
    chunk_size: usize,
    out: W,
    on_read_error: F,
) -> EmbedResult<EmbedStats>
where
    R: Read,
    W: Write,
    F: Fn(io::Error) -> EmbedError,
{
    let mut writer = HeaderWriter::begin(out, symbol, len)?;
    let mut buf = vec![0u8; chunk_size];
    let mut chunks = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(on_read_error(e)),
        };
        writer.push(&buf[..n])?;
        chunks += 1;
    }
    let written_len = writer.written();
    writer.finish()?;
    Ok(EmbedStats {
        declared_len: len,
        written_len,
        chunks,
    })
}

/// Streams `reader` into `out` as a header declaring an array of `len` bytes.
///
/// `len` must be the exact number of bytes `reader` yields; any difference is
/// reported as [`EmbedError::LengthMismatch`] and the literal is left open.
pub fn embed_reader<R: Read, W: Write>(
    mut reader: R,
    len: u64,
    symbol: &str,
    chunk_size: usize,
    out: W,
) -> EmbedResult<EmbedStats> {
    let symbol = check_params(symbol, chunk_size)?;
    embed_stream(&mut reader, len, &symbol, chunk_size, out, EmbedError::Io)
}

/// Rewrites bare I/O failures as failures on the output file.
fn at_output(path: &Path) -> impl Fn(EmbedError) -> EmbedError + '_ {
    move |err| match err {
        EmbedError::Io(source) => EmbedError::WriteOutput {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}

/// Generates the header described by `conf`, overwriting any existing file.
///
/// The output is written in place; if this fails midway the destination is
/// left truncated or partial.
pub fn embed_file(conf: &EmbedConf) -> EmbedResult<EmbedReport> {
    let symbol = check_params(&conf.symbol, conf.chunk_size)?;

    let read_input = |source| EmbedError::ReadInput {
        path: conf.input.clone(),
        source,
    };

    let len = fs::metadata(&conf.input).map_err(read_input)?.len();
    let mut input = File::open(&conf.input).map_err(read_input)?;

    tracing::info!(
        "Embedding {} ({} bytes) into {}",
        conf.input.display(),
        len,
        conf.output.display()
    );
    tracing::debug!(
        symbol = symbol.as_str(),
        chunk_size = conf.chunk_size,
        "Header parameters"
    );

    let output = File::create(&conf.output).map_err(|source| EmbedError::WriteOutput {
        path: conf.output.clone(),
        source,
    })?;

    let stats = embed_stream(
        &mut input,
        len,
        &symbol,
        conf.chunk_size,
        BufWriter::new(output),
        read_input,
    )
    .map_err(at_output(&conf.output))?;

    tracing::info!(
        "Wrote {} ({} bytes in {} chunks)",
        conf.output.display(),
        stats.written_len,
        stats.chunks
    );

    Ok(EmbedReport {
        input: conf.input.clone(),
        output: conf.output.clone(),
        declared_len: stats.declared_len,
        written_len: stats.written_len,
        chunks: stats.chunks,
    })
}
