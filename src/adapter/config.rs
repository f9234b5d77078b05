//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::domain::services::rendering::Locale;

fn default_report_courses() -> Vec<String> {
    vec!["Math".to_string()]
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// 表示ロケール（"ru" / "en"）
    #[serde(default)]
    pub locale: Locale,

    /// コース別平均を表示するコース
    #[serde(default = "default_report_courses")]
    pub report_courses: Vec<String>,

    /// シナリオファイルのパス（未指定時は組み込みサンプル）
    #[serde(default)]
    pub scenario_path: Option<String>,

    /// 却下された評価があればエラー終了する
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            report_courses: default_report_courses(),
            scenario_path: None,
            strict: false,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.report_courses, vec!["Math"]);
        assert!(config.scenario_path.is_none());
        assert!(!config.strict);
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "locale": "en",
            "report_courses": ["Math", "Singing"],
            "scenario_path": "./scenario.json",
            "strict": true
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.report_courses, vec!["Math", "Singing"]);
        assert_eq!(config.scenario_path.as_deref(), Some("./scenario.json"));
        assert!(config.strict);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"locale": "en"}"#).unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.report_courses, vec!["Math"]);
    }

    #[test]
    fn test_load_unknown_locale_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"locale": "de"}"#).unwrap();

        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/config.json").is_err());
    }
}
