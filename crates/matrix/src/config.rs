use crate::error::ConfigError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ViewerConfig {
    pub data: DataConfig,
    pub filters: FiltersConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataConfig {
    /// Относительный путь или URL файла матрицы
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FiltersConfig {
    /// Сохранять выбранные фильтры между перезагрузками страницы
    pub persist: bool,
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    pub file_prefix: String,
    pub sheet_name: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[data]
url = "data.csv"

[filters]
persist = true
storage_key = "functional_matrix_filters_v1"

[export]
file_prefix = "functional-matrix"
sheet_name = "Матрица"
"#;

pub fn parse_config(raw: &str) -> Result<ViewerConfig, ConfigError> {
    Ok(toml::from_str(raw)?)
}

impl Default for ViewerConfig {
    fn default() -> Self {
        // встроенная конфигурация проверяется тестом ниже
        parse_config(DEFAULT_CONFIG).unwrap_or_else(|_| ViewerConfig {
            data: DataConfig {
                url: "data.csv".to_string(),
            },
            filters: FiltersConfig {
                persist: true,
                storage_key: "functional_matrix_filters_v1".to_string(),
            },
            export: ExportConfig {
                file_prefix: "functional-matrix".to_string(),
                sheet_name: "Матрица".to_string(),
            },
        })
    }
}

/// Load viewer configuration
///
/// Search order:
/// 1. Override supplied by the host page (inline TOML)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> ViewerConfig {
    if let Some(raw) = override_toml.filter(|r| !r.trim().is_empty()) {
        match parse_config(raw) {
            Ok(config) => {
                log::info!("Using config override from page");
                return config;
            }
            Err(e) => log::warn!("Config override rejected, using defaults: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    ViewerConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.data.url, "data.csv");
        assert!(config.filters.persist);
        assert_eq!(config.export.file_prefix, "functional-matrix");
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_override_replaces_defaults() {
        let raw = r#"
[data]
url = "/static/matrix-2024.csv"

[filters]
persist = false
storage_key = "k"

[export]
file_prefix = "matrix"
sheet_name = "Лист1"
"#;
        let config = load_config(Some(raw));
        assert_eq!(config.data.url, "/static/matrix-2024.csv");
        assert!(!config.filters.persist);
    }

    #[test]
    fn test_broken_override_falls_back() {
        assert_eq!(load_config(Some("[data")), ViewerConfig::default());
        assert_eq!(load_config(Some("   ")), ViewerConfig::default());
        assert_eq!(load_config(None), ViewerConfig::default());
    }
}
