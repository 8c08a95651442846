//! CLI command implementations.
//!
//! - **generate**: load a report request, apply configured thresholds,
//!   render, and write the result
//! - **init**: write a default `.relato.toml`

use crate::config;
use crate::core::ReportFormat;
use crate::io;
use crate::render;
use anyhow::Result;
use std::path::PathBuf;

pub fn generate(request_path: PathBuf, format: ReportFormat, output: Option<PathBuf>) -> Result<()> {
    let request = io::load_request(&request_path)?;
    let policy = config::get_config().thresholds.policy();
    let report = render::generate_report(format, &request.user, &request.items, &policy);
    io::write_report(&report, output)
}

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(config::CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Relato Configuration

[thresholds]
# Admin rows strictly above this value render as priority.
priority = 1000.0

# Standard users see rows at or below this value.
standard_limit = 500.0
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", config::CONFIG_FILE);

    Ok(())
}
