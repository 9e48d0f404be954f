use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use version_detect::config::DetectConfig;
use version_detect::{ReaderRegistry, Strategy};

#[derive(Parser)]
#[command(name = "version-detect")]
#[command(version, about = "Detect a project's current version from its build manifest files")]
struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Manifest file to read, relative to the project directory
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// JSON config file enabling or disabling readers
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbose: u8, json: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    let config = DetectConfig::resolve(cli.config.as_deref())?;
    let mut strategy = Strategy::new(cli.dir.unwrap_or_default())
        .with_registry(ReaderRegistry::from_config(&config.readers));
    if let Some(file) = cli.file {
        strategy = strategy.with_file(file);
    }

    let detection = strategy.detect()?;
    match cli.format {
        OutputFormat::Text => println!("{}", detection.version),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "version": detection.version.to_string(),
                "reader": detection.reader.as_str(),
                "file": detection.path.display().to_string(),
            })
        ),
    }

    Ok(())
}
