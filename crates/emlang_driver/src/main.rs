mod cli;
mod driver;


use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as _;
use emlang_session::diagnostics::{Config, PrettyDiagnosticEmitter};
use emlang_session::sourcemap::Source;
use emlang_session::{ErrorsEmitted, Session};

use crate::cli::{Cli, Command};

#[derive(thiserror::Error, Debug)]
enum DriverError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("errors while parsing")]
    HadErrors,
}

impl From<ErrorsEmitted> for DriverError {
    fn from(_: ErrorsEmitted) -> Self {
        Self::HadErrors
    }
}

type DriverResult<T> = Result<T, DriverError>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> DriverResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            input,
            source,
            emit,
            color,
        } => {
            let source = if source {
                Source::new("<unnamed>", input)
            } else {
                let text = std::fs::read_to_string(&input)?;
                Source::with_path(input.clone(), PathBuf::from(input), text)
            };
            let text = source.source.clone();

            let emitter = PrettyDiagnosticEmitter::new(color.into(), Config::default());
            let mut session = Session::new(emitter);

            let program = driver::parse_source(&mut session, source)?;
            print!("{}", driver::render(&program, &text, emit));

            Ok(())
        }
    }
}
