use std::{error::Error as _, path::PathBuf, process::ExitCode};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use lined_frontend::{error::AppError, settings::Settings};
use thiserror::Error;
use tracing::{debug, error, Level};
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Application error")]
    App(#[from] AppError),
    #[error("Initialization error")]
    Initialization,
    #[error("Tracing error")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}

fn main() -> ExitCode {
    let args = cli().get_matches();

    // NOTE: the guard flushes pending log lines when main returns
    let _guard = match init_tracing(args.get_flag("debug")) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("lined: logging disabled: {}", err);
            None
        }
    };

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&args, &mut settings);

    match lined_frontend::run(settings).map_err(Error::from) {
        Ok(()) => {
            debug!("closing application");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn cli() -> Command {
    Command::new("lined")
        .about("lined - edit the lines of a text file in the terminal, quit with ctrl-q")
        .args([
            // NOTE: arguments
            Arg::new("path")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .default_value("test.txt")
                .help("path of the file to open"),
            // NOTE: options
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("write debug logs to the cache directory"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    if let Some(path) = args.get_one::<PathBuf>("path") {
        settings.startup_path = path.clone();
    }
}

fn init_tracing(debug: bool) -> Result<WorkerGuard, Error> {
    let logpath = get_logging_path()?;
    let logfile = tracing_appender::rolling::daily(logpath, "log");
    let (writer, guard) = tracing_appender::non_blocking(logfile);

    let level = if debug { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_max_level(level)
        .with_writer(writer)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/lined/logs"))
}

fn print_error(err: &Error) {
    eprintln!("lined: {}", err);

    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
