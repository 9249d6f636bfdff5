use clap::Parser;
use report_gen::utils::{logger, validation::Validate};
use report_gen::CliConfig;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting report-gen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match report_gen::generate_report(&config) {
        Ok(output_path) => {
            tracing::info!("✅ Report generated successfully!");
            println!("✅ Report generated successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Report generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
