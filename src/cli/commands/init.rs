//! Init command handler

use crate::config::Config;

pub fn cmd_init() -> anyhow::Result<()> {
    let created = Config::create_default_if_missing()?;
    if created {
        println!("✓ Config file created. Edit config.toml and run again.");
    } else {
        println!("Config file already exists, leaving it untouched.");
    }
    Ok(())
}
