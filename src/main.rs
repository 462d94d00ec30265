use clap::Parser;
use serial_qr::core::ConfigProvider;
use serial_qr::utils::error::ErrorSeverity;
use serial_qr::utils::{logger, validation::Validate};
use serial_qr::{
    BatchDriver, CliConfig, ConsoleReporter, LabelError, LocalStorage, NoopReporter, RunSummary,
    TomlConfig,
};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.as_deref() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            TomlConfig::from_file(path).and_then(|config| execute(config, &cli))
        }
        None => execute(cli.clone(), &cli),
    }
    .and_then(|summary| report(&summary, &cli));

    if let Err(e) = result {
        tracing::error!(
            "Label generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn execute<C: ConfigProvider + Validate>(
    config: C,
    cli: &CliConfig,
) -> Result<RunSummary, LabelError> {
    config.validate()?;

    let storage = LocalStorage::new(config.output_dir());
    if cli.quiet || cli.summary_json {
        BatchDriver::new(storage, config, NoopReporter).run()
    } else {
        BatchDriver::new(storage, config, ConsoleReporter).run()
    }
}

fn report(summary: &RunSummary, cli: &CliConfig) -> Result<(), LabelError> {
    if cli.summary_json {
        println!("{}", summary.to_json()?);
    } else if cli.quiet {
        println!(
            "Generated {} QR labels in {}",
            summary.processed, summary.output_dir
        );
    }
    Ok(())
}
