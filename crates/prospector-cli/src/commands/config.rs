//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    if args.save {
        config.save_to(path)?;
        println!(
            "{}",
            formatter.success(&format!("Saved configuration to {}", path.display()))
        );
        return Ok(());
    }

    println!("{}", formatter.info(&format!("Config file: {}", path.display())));
    println!("{}", config.to_toml()?);
    Ok(())
}
