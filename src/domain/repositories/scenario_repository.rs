//! # Scenario Repository Trait
//!
//! シナリオの読み込みを抽象化

use anyhow::Result;
#[cfg(test)]
use mockall::automock;

use crate::domain::entities::scenario::Scenario;

/// シナリオリポジトリ
///
/// 参加者と評価の流れ（シナリオ）の読み込みを担当するリポジトリ
#[cfg_attr(test, automock)]
pub trait ScenarioRepository {
    /// シナリオを読み込む
    ///
    /// # Arguments
    ///
    /// * `source` - 読み込み元（ファイルパスなど、実装ごとに解釈する）
    ///
    /// # Errors
    ///
    /// 読み込みまたはパースに失敗した場合にエラーを返す
    fn load(&self, source: &str) -> Result<Scenario>;
}
