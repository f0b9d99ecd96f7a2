use anyhow::Result;

use email_validator::config::{init_logging, AddressSource, ValidatorConfig};
use email_validator::report::{self, BANNER};
use email_validator::validation::{check_address, read_addresses, BatchReport, SystemResolver};

fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = ValidatorConfig::from_args_and_env()?;
    init_logging(&config.log_level);

    println!("{}", BANNER);
    println!("{}", report::separator());

    let addresses = match &config.source {
        AddressSource::Single(email) => vec![email.clone()],
        AddressSource::File(path) => read_addresses(path),
    };
    log::info!("Checking {} addresses", addresses.len());

    let resolver = SystemResolver::new();
    let mut results = BatchReport::new();

    // Print as we go; a slow lookup should not hide earlier results
    for address in &addresses {
        if let Some(result) = check_address(address, &resolver) {
            println!("{}", result);
            results.push(result);
        }
    }

    report::print_summary(&results);

    if let Some(output) = &config.output {
        match report::write_report(output, &results) {
            Ok(()) => println!("\nResults saved to: {}", output.display()),
            Err(e) => {
                log::error!("Failed to write {}: {}", output.display(), e);
                println!("Error saving results: {}", e);
            }
        }
    }

    Ok(())
}
