//! Configuration commands

use std::path::Path;

use anyhow::{Context, Result};
use smartspend_core::config::{default_config_path, MAX_UPLOAD_ENV};
use smartspend_core::AnalyticsConfig;

pub fn cmd_config_path() -> Result<()> {
    let path = default_config_path().context("Could not determine data directory")?;
    println!("{}", path.display());
    Ok(())
}

pub fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = AnalyticsConfig::load_from(config_path)?;

    let source = config_path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .filter(|p| p.exists());

    println!();
    println!("⚙️  Analytics Configuration");
    println!("   ─────────────────────────────────────────────────────────────");
    match source {
        Some(path) => println!("   Source: {}", path.display()),
        None => println!("   Source: built-in defaults"),
    }
    if std::env::var(MAX_UPLOAD_ENV).is_ok() {
        println!("   Upload limit overridden by {}", MAX_UPLOAD_ENV);
    }
    println!();
    println!("   Rolling window:   {} rows", config.rolling_window);
    println!("   Anomaly sigma:    {}", config.anomaly_sigma);
    println!("   Currency symbol:  {}", config.currency_symbol);
    println!("   Max upload:       {} MB", config.max_upload_mb);

    Ok(())
}
