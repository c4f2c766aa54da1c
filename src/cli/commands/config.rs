use crate::cli::ConfigCommand;
use crate::config::Config;
use crate::error::Result;

pub fn execute(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init => {
            let config_path = Config::config_file_path()?;
            Config::create_sample_at(&config_path)?;
            println!("Created sample config file at: {}", config_path.display());
        }
        ConfigCommand::Path => {
            let config_path = Config::config_file_path()?;
            println!("Config file path: {}", config_path.display());

            if config_path.exists() {
                println!("Status: File exists");

                match Config::load_from(&config_path) {
                    Ok(config) => {
                        println!("Valid: Yes");
                        println!("\nFormatting:");
                        println!("  Grouping: {:?}", config.format.grouping);
                        println!("  Currency symbol: {}", config.format.currency_symbol);
                        println!("\nAlerts:");
                        println!(
                            "  Expiring threshold: {} hours",
                            config.alerts.expiring_threshold_hours
                        );
                        println!("  Send alerts: {}", config.alerts.send_alert);
                    }
                    Err(e) => {
                        println!("Valid: No");
                        println!("Error: {}", e);
                    }
                }
            } else {
                println!("Status: File does not exist");
                println!("\nTo create a sample config file, run:");
                println!("  pia-alerts config init");
            }
        }
    }

    Ok(())
}
