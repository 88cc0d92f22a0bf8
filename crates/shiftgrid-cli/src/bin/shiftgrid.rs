//! Shiftgrid terminal puzzle.
//!
//! This is the main entry point for the command-line game.

use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Configuration file: `rows cols` on the first line, then one command
    /// per line, replayed before the prompt appears.
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!(
        "Starting shiftgrid, version={}",
        shiftgrid_cli::version::build_version()
    );

    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());
    match shiftgrid_cli::run(args.config.as_deref(), input, output) {
        Ok(end) => {
            log::debug!("session ended: {end:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{}", err.user_message());
            ExitCode::from(err.exit_status())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn config_is_optional() {
        let args = Args::try_parse_from(["shiftgrid"]).unwrap();
        assert_eq!(args.config, None);

        let args = Args::try_parse_from(["shiftgrid", "grid.txt"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("grid.txt")));
    }

    #[test]
    fn second_positional_is_rejected() {
        let err = Args::try_parse_from(["shiftgrid", "a.txt", "b.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory as _;
        Args::command().debug_assert();
    }
}
