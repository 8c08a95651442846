use crate::core::ReportRequest;
use crate::errors::RelatoError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a report request (user plus candidate items) from a JSON file.
pub fn load_request(path: &Path) -> Result<ReportRequest> {
    let contents =
        fs::read_to_string(path).map_err(|source| RelatoError::io(path, source))?;
    let request =
        serde_json::from_str(&contents).map_err(|source| RelatoError::request(path, source))?;
    Ok(request)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| RelatoError::io(path, source))?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| RelatoError::io(path, source))?;
    }
    Ok(())
}

/// Write a finished report to a file (creating parent directories) or, with
/// no destination, print it to stdout.
pub fn write_report(report: &str, output_file: Option<PathBuf>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                ensure_dir(parent)?;
            }
            write_file(&path, report)
        }
        None => {
            println!("{report}");
            Ok(())
        }
    }
}
