use anysummary::config::{Config, ConfigOverrides};
use anysummary::logging::{self, LogTarget};
use anysummary::service::HttpSummaryService;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

#[derive(Debug, Parser)]
#[command(
    name = "anysummary",
    version,
    about = "Summarize pasted text through a remote summarization service"
)]
struct Cli {
    /// Summarization endpoint URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Path to config file (default: ~/.config/anysummary/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds, 0 for none (overrides config)
    #[arg(long)]
    timeout: Option<u32>,

    /// Summarize FILE (or stdin) once and print the result instead of starting the TUI
    #[arg(long)]
    print: bool,

    /// Also copy the summary to the clipboard (with --print). On Linux the
    /// process stays up to 30s serving the clipboard unless a clipboard
    /// manager takes it over first
    #[arg(long, requires = "print")]
    copy: bool,

    /// Log file for the TUI (overrides config)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Input file for --print; stdin when omitted
    #[arg(requires = "print")]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let overrides = ConfigOverrides {
        endpoint: cli.endpoint.clone(),
        timeout_seconds: cli.timeout,
        log_file: cli.log_file.clone(),
    };
    let config = match Config::load_from(&config_path).and_then(|c| c.apply_overrides(overrides)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(2);
        }
    };

    let log_target = if cli.print {
        LogTarget::Stderr
    } else {
        LogTarget::File(
            config
                .ui
                .log_file
                .clone()
                .unwrap_or_else(logging::default_log_path),
        )
    };
    if let Err(err) = logging::init(&log_target) {
        eprintln!("Warning: logging disabled: {}", err);
    }

    let result = if cli.print {
        run_print(&config, cli.file.as_deref(), cli.copy).await
    } else {
        anysummary::ui::run(config).await.map(|_| ExitCode::SUCCESS)
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run_print(
    config: &Config,
    file: Option<&std::path::Path>,
    copy: bool,
) -> anyhow::Result<ExitCode> {
    let input = match file {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let service = Arc::new(HttpSummaryService::new(&config.service)?);
    match anysummary::print::run(service, input, copy).await {
        // The summary was written by the print host.
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Already reported on stderr by the print host.
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
