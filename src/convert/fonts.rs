// Font directory registration for the renderer

use crate::error::{Result, ServiceError};
use std::path::Path;
use tracing::{debug, info};

/// Register a directory of font files with the renderer.
///
/// Process-wide and called exactly once at startup, before the listener
/// binds; the renderer falls back to its built-in fonts when the directory
/// does not exist.
pub fn register_font_directory(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        debug!(
            "Font directory {} not found, using built-in fonts",
            dir.display()
        );
        return Ok(());
    }

    let dir = dir.to_string_lossy();
    vl_convert_rs::text::register_font_directory(&dir)
        .map_err(|e| ServiceError::FontRegistration(e.to_string()))?;

    info!("Registered font directory {}", dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_skipped() {
        assert!(register_font_directory(Path::new("/no/such/dir")).is_ok());
    }

    #[test]
    fn test_empty_directory_registers() {
        let dir = tempfile::tempdir().unwrap();
        assert!(register_font_directory(dir.path()).is_ok());
    }
}
