//! Write a configuration file with the effective settings.

use standings_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, force: bool) -> anyhow::Result<()> {
    let path = config_file_path();
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (pass --force to overwrite)",
            path.display()
        );
    }

    config
        .save()
        .map_err(|e| anyhow::anyhow!("Failed to write config: {e}"))?;

    println!("Config written to {}", path.display());
    println!("  Storage: {}", config.data_dir.display());
    println!("  Export: {}", config.export.output_path().display());
    println!("  Log level: {}", config.logging.level);
    Ok(())
}
