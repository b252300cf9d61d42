//! Prints the default inputs.

use anyhow::Result;
use landfill_core::InputParameters;

/// Writes the default inputs to stdout as a TOML config file.
pub fn execute() -> Result<()> {
    print!("{}", defaults_toml()?);
    Ok(())
}

fn defaults_toml() -> Result<String> {
    Ok(toml::to_string_pretty(&InputParameters::default())?)
}
