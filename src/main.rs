use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use notification_aggregator::config::{AppConfig, CliConfig, FileConfig, LogSettings};
use notification_aggregator::events::{load_events, Id};
use notification_aggregator::logging::init_logging;
use notification_aggregator::notifications::{
    NotificationService, OutputFormat, StdoutReporter, TimestampZone,
};

const MISSING_PARAMS_ERROR: &str = "Error: file_name and user_id are required";

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), "-", env!("GIT_HASH")),
    about = "Prints the aggregated notifications of a user"
)]
struct CliArgs {
    /// Path to the JSON file holding the interaction events.
    #[clap(value_parser = parse_path)]
    pub input_file: PathBuf,

    /// Id of the user whose notifications are printed.
    pub user_id: Id,

    /// Path to an optional TOML config file, its values override the CLI ones.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Directory where the log file is written.
    #[clap(long, value_parser = parse_path)]
    pub log_dir: Option<PathBuf>,

    /// Print the notifications of every receiver, audience ones included.
    #[clap(long)]
    pub all_receivers: bool,

    /// Output format of each notification.
    #[clap(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Time zone used to render timestamps.
    #[clap(long, value_enum, default_value = "local")]
    pub timezone: TimestampZone,

    /// Also write log records to stderr.
    #[clap(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    fn cli_config(&self) -> CliConfig {
        CliConfig {
            log_dir: self.log_dir.clone(),
            all_receivers: self.all_receivers,
            format: self.format,
            timezone: self.timezone,
            verbose: self.verbose,
        }
    }
}

fn resolve_config(cli_args: &CliArgs) -> Result<AppConfig> {
    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    AppConfig::resolve(&cli_args.cli_config(), file_config)
}

fn run(cli_args: &CliArgs, app_config: AppConfig) -> Result<()> {
    let events = load_events(&cli_args.input_file)
        .with_context(|| format!("Failed to load events for user {}", cli_args.user_id))?;

    let service = NotificationService::new(app_config.templates, app_config.presentation);
    service.notifications_for_user(&events, &cli_args.user_id, &mut StdoutReporter);
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected panic".to_string()
    }
}

fn main() -> ExitCode {
    let cli_args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if err.use_stderr() {
                // The guard must be dropped before exiting so the log is flushed.
                if let Ok(_guard) = init_logging(&LogSettings::default()) {
                    if err.kind() == ErrorKind::MissingRequiredArgument {
                        error!("{}", MISSING_PARAMS_ERROR);
                    } else {
                        error!("Invalid command line: {}", err);
                    }
                }
            }
            err.exit()
        }
    };

    let app_config = match resolve_config(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            if let Ok(_guard) = init_logging(&LogSettings::from_cli(&cli_args.cli_config())) {
                error!("{:?}", err);
            }
            println!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    let _guard = match init_logging(&app_config.log) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("Starting application...");

    panic::set_hook(Box::new(|panic_info| {
        error!("{}\n{}", panic_info, Backtrace::force_capture());
    }));

    let exit_code = match panic::catch_unwind(AssertUnwindSafe(|| run(&cli_args, app_config))) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            error!("{:?}", err);
            println!("Error: {:#}", err);
            ExitCode::FAILURE
        }
        Err(payload) => {
            println!("Error: {}", panic_message(payload.as_ref()));
            ExitCode::FAILURE
        }
    };

    info!("Shutting down application...");
    exit_code
}
