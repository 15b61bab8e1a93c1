use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                println!("No config file at {} (defaults in use)", path.display());
            }
        }

        if *check {
            match Config::check() {
                Ok(()) => success("Configuration file is valid."),
                Err(e) => {
                    error(format!("{e}"));
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}
