use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            println!("📄 Config file: {}\n", Config::config_file().display());
            println!("{}", serde_yaml::to_string(cfg)?);
        } else {
            println!("Nothing to do. Use --print to show the configuration.");
        }
    }

    Ok(())
}
