//! # Apply Ratings Use Case
//!
//! シナリオを読み込み、評価を順に適用するユースケース

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::domain::entities::roster::Roster;
use crate::domain::entities::scenario::RatingEvent;
use crate::domain::error::RosterError;
use crate::domain::repositories::scenario_repository::ScenarioRepository;

/// 却下された評価
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRating {
    /// シナリオ内の位置（0始まり）
    pub index: usize,
    pub event: RatingEvent,
    pub error: RosterError,
}

/// 評価適用結果のサマリー
#[derive(Debug, Clone)]
pub struct RatingSummary {
    /// 評価適用後の名簿
    pub roster: Roster,
    /// 比較する参加者IDの組（シナリオの指定そのまま）
    pub comparisons: Vec<(String, String)>,
    /// 適用された評価の数
    pub applied_count: usize,
    /// 却下された評価
    pub rejected: Vec<RejectedRating>,
}

impl RatingSummary {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// 評価適用ユースケース
///
/// 却下された評価で処理を中断せず、記録して次の評価へ進む
pub struct ApplyRatingsUseCase<R: ScenarioRepository> {
    scenario_repository: Arc<R>,
}

impl<R: ScenarioRepository> ApplyRatingsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `scenario_repository` - シナリオリポジトリ
    pub fn new(scenario_repository: Arc<R>) -> Self {
        Self {
            scenario_repository,
        }
    }

    /// シナリオを読み込んで評価を適用
    ///
    /// # Arguments
    ///
    /// * `source` - シナリオの読み込み元
    ///
    /// # Errors
    ///
    /// シナリオの読み込みに失敗した場合、またはIDが重複している場合
    pub fn execute(&self, source: &str) -> Result<RatingSummary> {
        let scenario = self.scenario_repository.load(source)?;
        let mut roster = scenario
            .build_roster()
            .context("Failed to build roster from scenario")?;

        let mut applied_count = 0;
        let mut rejected = Vec::new();
        for (index, event) in scenario.ratings.iter().enumerate() {
            match event.apply(&mut roster) {
                Ok(()) => applied_count += 1,
                Err(error) => {
                    warn!(
                        "Rejected rating #{} ({} -> {} on {}, grade {}): {}",
                        index, event.rater, event.target, event.course, event.grade, error
                    );
                    rejected.push(RejectedRating {
                        index,
                        event: event.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            "Applied {} ratings ({} rejected)",
            applied_count,
            rejected.len()
        );

        Ok(RatingSummary {
            roster,
            comparisons: scenario.comparisons,
            applied_count,
            rejected,
        })
    }
}
