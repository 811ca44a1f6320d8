use crate::lesson::types::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub const APP_DIR: &str = "lessonbook";

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join(APP_DIR);
    Ok(app_config_dir.join("config.jsonc"))
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let mut config: AppConfig = serde_json::from_reader(stripped)?;
    config.window = config.window.clamped();

    Ok(config)
}

/// Saves the configuration to the config file.
/// Note: Comments in the original file will not be preserved.
pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&get_config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    tracing::info!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::types::{ThemeMode, WindowSize};

    #[test]
    fn test_config_path() {
        let path = get_config_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("lessonbook"));
        assert!(path.to_string_lossy().ends_with("config.jsonc"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("missing.jsonc")).unwrap();
        assert_eq!(config, AppConfig::new());
    }

    #[test]
    fn test_load_config_with_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(
            &path,
            r#"{
                // dark dialogs
                "theme": "Dark",
                /* too small, gets clamped */
                "window": { "width": 200, "height": 400 }
            }"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.window.width, WindowSize::MIN_WIDTH);
        assert_eq!(config.window.height, 400);
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.jsonc");
        let config = AppConfig {
            theme: ThemeMode::Dark,
            ..AppConfig::new()
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Json(_))));
    }
}
