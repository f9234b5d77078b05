//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{bail, Result};
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_scenario_repository::JsonScenarioRepository;
use crate::adapter::repositories::sample_scenario_repository::{
    sample_scenario, SampleScenarioRepository,
};
use crate::application::dto::report_config::ReportConfig;
use crate::application::use_cases::apply_ratings::{ApplyRatingsUseCase, RatingSummary};
use crate::application::use_cases::build_report::{BuildReportUseCase, Report};

use super::cli::Args;

const SAMPLE_SOURCE: &str = "<built-in sample>";

/// CLI引数と設定ファイルを合わせた実行設定
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub scenario_path: Option<String>,
    pub report: ReportConfig,
    pub strict: bool,
}

/// CLI引数を設定ファイルの値より優先して実行設定を決める
pub fn resolve_settings(config: &Config, args: &Args) -> ResolvedSettings {
    let courses = if args.courses.is_empty() {
        config.report_courses.clone()
    } else {
        args.courses.clone()
    };

    ResolvedSettings {
        scenario_path: args.scenario.clone().or_else(|| config.scenario_path.clone()),
        report: ReportConfig::new(args.locale.unwrap_or(config.locale), courses),
        strict: args.strict || config.strict,
    }
}

/// ワークフローの実行結果
#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    pub report: Report,
    pub applied_count: usize,
    pub rejected_count: usize,
}

/// Gradebook Workflow
pub struct GradebookWorkflow {
    config: Config,
}

impl GradebookWorkflow {
    /// Create a new workflow instance with injected configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Apply the scenario and build the report without printing
    pub fn run(&self, args: &Args) -> Result<WorkflowOutcome> {
        let settings = resolve_settings(&self.config, args);

        let summary: RatingSummary = match &settings.scenario_path {
            Some(path) => {
                ApplyRatingsUseCase::new(Arc::new(JsonScenarioRepository::new())).execute(path)?
            }
            None => ApplyRatingsUseCase::new(Arc::new(SampleScenarioRepository::new()))
                .execute(SAMPLE_SOURCE)?,
        };

        let report = BuildReportUseCase::new(settings.report.clone()).execute(&summary);
        let outcome = WorkflowOutcome {
            report,
            applied_count: summary.applied_count,
            rejected_count: summary.rejected_count(),
        };

        if settings.strict && outcome.rejected_count > 0 {
            bail!(
                "{} of {} ratings were rejected (strict mode)",
                outcome.rejected_count,
                outcome.applied_count + outcome.rejected_count
            );
        }

        Ok(outcome)
    }

    /// Execute the workflow and print the report
    pub fn execute(&self, args: Args) -> Result<()> {
        if let Some(path) = &args.export_sample {
            JsonScenarioRepository::new().save(path, &sample_scenario())?;
            println!("✓ Wrote sample scenario to {}", path);
            return Ok(());
        }

        info!("Starting gradebook...");
        let outcome = self.run(&args)?;

        print!("{}", outcome.report);
        println!();
        println!(
            "✓ Applied {} ratings ({} rejected)",
            outcome.applied_count, outcome.rejected_count
        );

        Ok(())
    }
}
