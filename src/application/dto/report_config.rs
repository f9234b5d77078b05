//! # Report Configuration DTO
//!
//! レポート作成設定のData Transfer Object

use crate::domain::services::rendering::Locale;

/// レポート作成設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// 表示ロケール
    pub locale: Locale,
    /// コース別平均を表示するコース（表示順）
    pub courses: Vec<String>,
}

impl ReportConfig {
    /// 新しいレポート設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use gradebook::application::dto::report_config::ReportConfig;
    /// use gradebook::domain::services::rendering::Locale;
    ///
    /// let config = ReportConfig::new(Locale::En, vec!["Math".to_string()]);
    ///
    /// assert_eq!(config.locale, Locale::En);
    /// assert_eq!(config.courses, vec!["Math"]);
    /// ```
    pub fn new(locale: Locale, courses: Vec<String>) -> Self {
        Self { locale, courses }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(Locale::default(), vec!["Math".to_string()])
    }
}
