use box_volume::adapters::render;
use box_volume::utils::error::ErrorSeverity;
use box_volume::utils::{logger, validation::Validate};
use box_volume::{BoxError, BoxSource, CliConfig, LayeredConfig, TomlConfig, VolumeEngine};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting box-volume");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: CliConfig) -> Result<(), BoxError> {
    config.validate()?;

    match config.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading boxes from: {}", path.display());
            let file = TomlConfig::from_file(&path)?;
            file.validate()?;
            measure_and_print(LayeredConfig::new(file, config))
        }
        None => {
            if !config.has_boxes() {
                tracing::info!("No boxes given, measuring the demo set");
            }
            measure_and_print(config)
        }
    }
}

fn measure_and_print<S: BoxSource>(source: S) -> Result<(), BoxError> {
    let engine = VolumeEngine::new(source);
    let report = engine.run()?;
    let output = render(&report, engine.source().output_format())?;
    print!("{}", output);
    Ok(())
}
