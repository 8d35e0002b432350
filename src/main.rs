use clap::Parser;
use sl_locations::app::{render, write_output, ExportRequest};
use sl_locations::utils::logger;
use sl_locations::{CliConfig, Result, Validate, SRI_LANKA};

fn run(config: &CliConfig) -> Result<()> {
    // Reject bad flags before touching the data
    config.validate()?;
    // The embedded table must be consistent before anything is exported
    SRI_LANKA.validate()?;

    let request = ExportRequest::try_from(config)?;
    let rendered = render(&request)?;
    write_output(&rendered, config.output.as_deref())
}

fn main() {
    let config = CliConfig::parse();

    // Initialize logging
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sl-locations");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Exit code follows the error category
    if let Err(e) = run(&config) {
        tracing::error!("❌ Export failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}
