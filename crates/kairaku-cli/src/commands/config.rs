//! `kairaku config`: read and change `<data dir>/config.toml`.

use clap::Subcommand;
use kairaku_core::Config;

use super::CliResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting, e.g. `suggestions.count`
    Get { key: String },
    /// Change one setting and write the file
    Set { key: String, value: String },
    /// Print every setting as `key = value`
    List,
    /// Overwrite the file with the built-in defaults
    Reset,
}

pub fn run(action: ConfigAction) -> CliResult {
    if let ConfigAction::Reset = action {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;
    match action {
        ConfigAction::Get { key } => {
            let value = config.get(&key).ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            tracing::debug!(%key, %value, "config updated");
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            for (key, value) in config.entries() {
                println!("{key} = {value}");
            }
        }
        ConfigAction::Reset => {}
    }
    Ok(())
}
