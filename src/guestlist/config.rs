use crate::error::{GuestError, Result};
use crate::model::Table;
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_PAGE_SIZE: &str = "page-size";
pub const KEY_IMPORT_EXTENSIONS: &str = "import-extensions";
pub const KEY_DEFAULT_TABLE: &str = "default-table";

/// Configuration for guestlist, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestConfig {
    /// Attendees shown per page of `list`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Extensions accepted by `import` (e.g. ".xlsx", ".csv")
    #[serde(default = "default_import_ext")]
    pub import_extensions: Vec<String>,

    /// Table used by `add` when none is given
    #[serde(default)]
    pub default_table: Table,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_import_ext() -> Vec<String> {
    [".xlsx", ".xls", ".xlsm", ".xlsb", ".ods", ".csv"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for GuestConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            import_extensions: default_import_ext(),
            default_table: Table::default(),
        }
    }
}

impl GuestConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GuestError::Io)?;
        let config: GuestConfig =
            serde_json::from_str(&content).map_err(GuestError::Serialization)?;
        Ok(config)
    }

    /// Like [`GuestConfig::load`], but an unreadable or malformed file falls
    /// back to defaults with a warning. The next `save` overwrites it.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            warn!(error = %e, "could not read config, using defaults");
            Self::default()
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GuestError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GuestError::Serialization)?;
        fs::write(config_path, content).map_err(GuestError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_PAGE_SIZE => Some(self.page_size.to_string()),
            KEY_IMPORT_EXTENSIONS => Some(self.import_extensions.join(" ")),
            KEY_DEFAULT_TABLE => Some(self.default_table.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_PAGE_SIZE => {
                let size: usize = value.trim().parse().map_err(|_| {
                    GuestError::Config(format!("{} must be a positive number", KEY_PAGE_SIZE))
                })?;
                if size == 0 {
                    return Err(GuestError::Config(format!(
                        "{} must be at least 1",
                        KEY_PAGE_SIZE
                    )));
                }
                self.page_size = size;
            }
            KEY_IMPORT_EXTENSIONS => {
                let exts: Vec<String> = value
                    .split(&[' ', ','][..])
                    .filter(|s| !s.is_empty())
                    .map(normalize_ext)
                    .collect();
                if exts.is_empty() {
                    return Err(GuestError::Config(format!(
                        "{} needs at least one extension",
                        KEY_IMPORT_EXTENSIONS
                    )));
                }
                self.import_extensions = exts;
            }
            KEY_DEFAULT_TABLE => {
                self.default_table = value.parse()?;
            }
            other => return Err(GuestError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        [KEY_PAGE_SIZE, KEY_IMPORT_EXTENSIONS, KEY_DEFAULT_TABLE]
            .into_iter()
            .filter_map(|k| self.get(k).map(|v| (k, v)))
            .collect()
    }

    /// Whether `import` accepts a file with this path's extension.
    pub fn accepts_import(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| normalize_ext(&ext.to_string_lossy()))
            .is_some_and(|ext| self.import_extensions.contains(&ext))
    }
}

/// Lowercases and ensures a leading dot.
fn normalize_ext(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GuestConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.default_table, Table::Numbered(1));
        assert!(config.import_extensions.contains(&".xlsx".to_string()));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = GuestConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, GuestConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = GuestConfig::default();
        config.set(KEY_PAGE_SIZE, "25").unwrap();
        config.set(KEY_DEFAULT_TABLE, "Principal").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = GuestConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 25);
        assert_eq!(loaded.default_table, Table::Principal);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 5}"#).unwrap();
        let loaded = GuestConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 5);
        assert_eq!(loaded.import_extensions, default_import_ext());
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{page_size: oops").unwrap();
        assert!(GuestConfig::load(dir.path()).is_err());
        assert_eq!(GuestConfig::load_or_default(dir.path()), GuestConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = GuestConfig::default();
        assert!(config.set(KEY_PAGE_SIZE, "0").is_err());
        assert!(config.set(KEY_PAGE_SIZE, "ten").is_err());
        assert!(config.set(KEY_DEFAULT_TABLE, "30").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, GuestConfig::default());
    }

    #[test]
    fn test_import_extensions_are_normalized() {
        let mut config = GuestConfig::default();
        config.set(KEY_IMPORT_EXTENSIONS, "CSV, .xlsx").unwrap();
        assert_eq!(config.import_extensions, vec![".csv", ".xlsx"]);
        assert!(config.accepts_import(Path::new("guests.CSV")));
        assert!(!config.accepts_import(Path::new("guests.ods")));
        assert!(!config.accepts_import(Path::new("guests")));
    }

    #[test]
    fn test_list_all_keys() {
        let config = GuestConfig::default();
        let keys: Vec<_> = config.list_all().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![KEY_PAGE_SIZE, KEY_IMPORT_EXTENSIONS, KEY_DEFAULT_TABLE]
        );
    }
}
