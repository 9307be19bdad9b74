use std::process::ExitCode;

use embedder::{EmbedCommand, embed_file};
use tracing_subscriber::EnvFilter;


fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cmd: EmbedCommand = argh::from_env();

    let conf = match cmd.resolve() {
        Ok(conf) => conf,
        Err(e) => {
            // logging is configured by the file that failed to load
            eprintln!("embedder: {e}");
            return ExitCode::FAILURE;
        }
    };

    if conf.log_init {
        init_logging(cmd.verbose);
    }

    match embed_file(&conf) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            // the filter may mute the event above
            eprintln!("embedder: {e}");
            ExitCode::FAILURE
        }
    }
}
