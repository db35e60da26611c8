//! kemgen binary: generate an ML-KEM-1024 key pair in the working directory.

use std::io;
use std::process::ExitCode;

use kemgen::KeygenConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .init();

    let config = KeygenConfig::default();

    match kemgen::run(&config, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
