use std::path::Path;

use anyhow::{Context, Result};

use whist_core::config::Config;

pub fn print_effective(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("load config {}", config_path.display()))?;
    let output = config.to_toml_string()?;
    println!("{}", output);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }
    let config = Config::default_config();
    config.save(config_path)?;
    println!("Config written to {}", config_path.display());
    Ok(())
}
