//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::domain::services::rendering::Locale;

/// 評価シナリオを適用して平均点レポートを出力するCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gradebook")]
#[command(about = "Rate lecturers and homework, then report average scores", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Scenario JSON file (overrides config; built-in sample when omitted)
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Output locale: ru or en (overrides config)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Course to report averages for; repeatable (overrides config)
    #[arg(long = "course")]
    pub courses: Vec<String>,

    /// Exit with an error when any rating is rejected
    #[arg(long)]
    pub strict: bool,

    /// Write the built-in sample scenario to this path and exit
    #[arg(long)]
    pub export_sample: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["gradebook"]);
        assert!(args.config.is_none());
        assert!(args.scenario.is_none());
        assert!(args.locale.is_none());
        assert!(args.courses.is_empty());
        assert!(!args.strict);
        assert!(args.export_sample.is_none());
    }

    #[test]
    fn test_args_locale() {
        let args = Args::parse_from(["gradebook", "--locale", "en"]);
        assert_eq!(args.locale, Some(Locale::En));
    }

    #[test]
    fn test_args_invalid_locale() {
        assert!(Args::try_parse_from(["gradebook", "--locale", "fr"]).is_err());
    }

    #[test]
    fn test_args_repeated_courses() {
        let args = Args::parse_from(["gradebook", "--course", "Math", "--course", "Singing"]);
        assert_eq!(args.courses, vec!["Math", "Singing"]);
    }

    #[test]
    fn test_args_combined() {
        let args = Args::parse_from([
            "gradebook",
            "-c",
            "/custom/config.json",
            "-s",
            "scenario.json",
            "--strict",
        ]);
        assert_eq!(args.config.as_deref(), Some("/custom/config.json"));
        assert_eq!(args.scenario.as_deref(), Some("scenario.json"));
        assert!(args.strict);
    }
}
