//! Write BubblesConfig to TOML on disk.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place, so a
//! crash mid-write never leaves a truncated config.

use std::path::Path;

use bubbles_common::ConfigError;

use crate::schema::BubblesConfig;
use crate::toml_loader::default_config_path;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Write config to the platform default path (`~/.config/bubbles/config.toml`).
pub fn save_config(config: &BubblesConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path, creating parent directories as needed.
pub fn save_config_to_path(config: &BubblesConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename across some filesystems fails; write in place instead.
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::ParseError(format!(
                "failed to write config to {}: {e2}",
                path.display()
            ))
        })?;
    }

    tracing::debug!(path = %path.display(), "Config saved to disk");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toml_loader::load_from_path;
    use tempfile::TempDir;

    #[test]
    fn save_config_writes_loadable_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = BubblesConfig::default();
        config.bubble.size = 72.0;
        config.engine.max_iterations = 40;
        save_config_to_path(&config, &path).unwrap();

        let loaded = load_from_path(&path).unwrap();
        assert!((loaded.bubble.size - 72.0).abs() < f64::EPSILON);
        assert_eq!(loaded.engine.max_iterations, 40);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.toml");

        save_config_to_path(&BubblesConfig::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_leaves_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        save_config_to_path(&BubblesConfig::default(), &path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn save_overwrites_existing_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[engine]\nmax_iterations = 3\n").unwrap();

        save_config_to_path(&BubblesConfig::default(), &path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.engine.max_iterations, 15);
    }
}
