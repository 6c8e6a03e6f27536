use clap::Parser;
use sensor_template::app::ACTION_GET_DATA;
use sensor_template::{ConfigError, DEFAULT_CONFIG_FILE, DataTemplate, FileStore, StaticSource};
use std::fs;
use std::io::{self, Write};
use std::panic::{self, PanicHookInfo};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Exit codes for the application
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_PANIC: i32 = 2;

#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Options {
    /// Directory backing the settings store.
    #[arg(long, default_value = ".", value_name = "DIR")]
    settings_dir: PathBuf,

    /// File name of the persisted template configuration.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, value_name = "NAME")]
    config_file: String,

    /// Read the measurement document from this file instead of stdin.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Replace the active template with this JSON configuration
    /// before rendering.
    /// Format: {"template_start":"","template_end":"","template_data":"..."}
    #[arg(long, value_name = "JSON")]
    template: Option<String>,

    /// Persist the template given with --template.
    #[arg(long, requires = "template")]
    save: bool,

    /// Print the active template configuration and exit.
    #[arg(long)]
    show_config: bool,
}

/// Errors surfaced to the process exit path.
#[derive(Error, Debug)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("action rejected: {0}")]
    Action(String),
}

/// Drive one render through the component.
///
/// This function:
/// 1. Opens the settings store and bootstraps the persisted template
/// 2. Applies `--template` (optionally persisting it)
/// 3. Reads the measurement document from `--input` or stdin
/// 4. Renders it and writes the result to stdout
fn run(options: Options) -> Result<(), RunError> {
    let store = FileStore::new(&options.settings_dir);

    // --show-config never consumes the measurement input
    let payload = if options.show_config {
        String::new()
    } else {
        match &options.input {
            Some(path) => fs::read_to_string(path)?,
            None => io::read_to_string(io::stdin())?,
        }
    };

    let mut component = DataTemplate::new(
        &options.config_file,
        Box::new(StaticSource::new(payload)),
        Box::new(store),
    );
    component.begin()?;

    if let Some(template) = &options.template {
        component.set_config(template, options.save)?;
    }

    if options.show_config {
        println!("{}", component.get_config());
        return Ok(());
    }

    let (is_error, body) = component.receive_action(ACTION_GET_DATA, "");
    if is_error {
        return Err(RunError::Action(body));
    }
    write!(io::stdout(), "{body}")?;
    io::stdout().flush()?;
    Ok(())
}

fn main() {
    // Set up panic hook to ensure clean exit codes for process managers
    // that monitor exit status
    panic::set_hook(Box::new(move |info: &PanicHookInfo| {
        eprintln!("Panic! {}", info);
        std::process::exit(EXIT_PANIC);
    }));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = Options::parse();

    match run(options) {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(why) => {
            eprintln!("error: {}", why);
            std::process::exit(EXIT_ERROR);
        }
    }
}
