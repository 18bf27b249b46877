use std::path::Path;

use tally_common::Result;
use tracing::info;

use crate::config::SimConfig;

/// Writes the default config to `path` if nothing is there yet.
///
/// Returns `true` when a new file was written.
pub fn ensure_config<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    info!("⚠️ Config not found. Writing defaults to {}...", path.display());
    write_default_config(path)?;
    Ok(true)
}

pub fn write_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    SimConfig::default().save_to_file(path)?;
    info!("✅ Default config written to {}", path.display());
    Ok(())
}
