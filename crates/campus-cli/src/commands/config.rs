//! `campus config`: inspect and edit the harness settings file

use std::path::Path;

use clap::{Args, Subcommand, ValueEnum};

use crate::config::{Config, ConfigKey};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get { key: ConfigKey },
    /// Change one setting ("none" clears max_paths and default_map)
    Set { key: ConfigKey, value: String },
    /// Print every setting
    List,
    /// Print where the settings file lives
    Path,
    /// Write a settings file with the defaults
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, path: &Path) -> anyhow::Result<()> {
    match &args.action {
        ConfigAction::Get { key } => {
            println!("{}", display_value(&Config::load_from(path), *key));
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_from(path);
            config.set(*key, value)?;
            config.save_to(path)?;
            tracing::info!("Updated {} in {}", key.name(), path.display());
            println!("{} = {}", key.name(), display_value(&config, *key));
        }
        ConfigAction::List => {
            let config = Config::load_from(path);
            println!("# {}", path.display());
            for key in ConfigKey::value_variants() {
                println!("{} = {}", key.name(), display_value(&config, *key));
            }
        }
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (pass --force to replace it)",
                    path.display()
                );
            }
            Config::default().save_to(path)?;
            println!("Wrote default settings to {}", path.display());
        }
    }
    Ok(())
}

fn display_value(config: &Config, key: ConfigKey) -> String {
    config.get(key).unwrap_or_else(|| "(not set)".to_string())
}
