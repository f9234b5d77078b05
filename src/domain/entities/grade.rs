//! # Grade Value Objects
//!
//! 評価値・コース別評価記録・平均点のバリューオブジェクト

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::domain::error::RatingError;

/// 評価値の下限
pub const MIN_GRADE: i64 = 1;
/// 評価値の上限
pub const MAX_GRADE: i64 = 10;

/// 評価値が有効かどうかを判定
///
/// 学生による講師評価とレビュアーによる課題評価の両方で共有される。
///
/// # Returns
///
/// `1 <= value <= 10` の場合に `true`
pub fn is_valid_grade(value: i64) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&value)
}

/// 検証済みの評価値（1〜10）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    /// 評価値を検証して作成
    ///
    /// # Errors
    ///
    /// 範囲外の場合に `RatingError::InvalidGrade` を返す
    pub fn new(value: i64) -> Result<Self, RatingError> {
        if !is_valid_grade(value) {
            return Err(RatingError::InvalidGrade(value.to_string()));
        }
        Ok(Self(value as u8))
    }

    /// JSON値から評価値を作成
    ///
    /// 整数以外（`9.5`、`9.0`、文字列、真偽値、null）は全て拒否する
    pub fn from_json(value: &Value) -> Result<Self, RatingError> {
        match value.as_i64() {
            Some(n) => Self::new(n),
            None => Err(RatingError::InvalidGrade(value.to_string())),
        }
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Grade {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 平均点（小数第1位に丸め済み）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AverageScore(f64);

impl AverageScore {
    /// 合計と件数から平均点を算出
    ///
    /// 件数が0の場合は `None`（合計値では判定しない）
    pub fn from_totals(sum: u64, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let mean = sum as f64 / count as f64;
        Some(Self((mean * 10.0).round() / 10.0))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for AverageScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// コース名ごとの評価記録
///
/// 追記のみ可能で、評価の削除は行わない
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseGrades {
    by_course: BTreeMap<String, Vec<Grade>>,
}

impl CourseGrades {
    pub fn new() -> Self {
        Self::default()
    }

    /// コースに評価を追加
    pub fn record(&mut self, course: &str, grade: Grade) {
        self.by_course
            .entry(course.to_string())
            .or_default()
            .push(grade);
    }

    /// コースの評価一覧を返す
    pub fn for_course(&self, course: &str) -> Option<&[Grade]> {
        self.by_course.get(course).map(Vec::as_slice)
    }

    /// 評価が記録されたコース名
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.by_course.keys().map(String::as_str)
    }

    pub fn total_count(&self) -> usize {
        self.by_course.values().map(Vec::len).sum()
    }

    pub fn total_sum(&self) -> u64 {
        self.by_course
            .values()
            .flatten()
            .map(|g| u64::from(g.value()))
            .sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// 全コースの評価の平均点
    pub fn average(&self) -> Option<AverageScore> {
        AverageScore::from_totals(self.total_sum(), self.total_count())
    }
}

/// 評価を受け取るエンティティ（学生・講師）
pub trait Graded {
    fn grades(&self) -> &CourseGrades;

    /// 全コースを通した平均点。評価がない場合は `None`
    fn avg_score(&self) -> Option<AverageScore> {
        self.grades().average()
    }
}
