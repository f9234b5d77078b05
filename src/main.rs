//! Gradebook
//!
//! 学生・講師・レビュアーの相互評価と平均点レポート

use anyhow::Result;
use clap::Parser;

use gradebook::adapter::config::Config;
use gradebook::driver::{Args, GradebookWorkflow};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Create workflow with injected configuration
    let workflow = GradebookWorkflow::new(config);

    workflow.execute(args)
}
