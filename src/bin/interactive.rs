use anyhow::Context;
use report_gen::config::interactive;
use report_gen::utils::{logger, validation::Validate};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    println!("report-gen interactive mode");
    let request = interactive::collect_request().context("failed to read paths from stdin")?;

    if let Err(e) = request.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match report_gen::generate_report(&request) {
        Ok(output_path) => {
            println!("✅ Report generated successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
