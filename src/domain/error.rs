//! # Domain Errors
//!
//! ドメイン層のエラー定義
//!
//! 評価操作・比較・名簿操作はそれぞれ独自のエラー型を持つ。
//! いずれも局所的で致命的ではなく、失敗時に状態は変更されない。

use thiserror::Error;

use crate::domain::entities::participant::ParticipantKind;

/// 評価操作（`rate_lecturer` / `rate_hw`）のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// 1〜10の整数ではない評価値
    #[error("invalid grade: {0} (expected an integer from 1 to 10)")]
    InvalidGrade(String),

    /// 評価者（講師・レビュアー）が担当していないコース
    #[error("course '{0}' is not attached to the rater")]
    CourseNotAttached(String),

    /// 対象の学生が受講していないコース
    #[error("course '{0}' is not taken by the student")]
    CourseNotTaken(String),
}

/// 平均点による比較のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    /// 異なる種類の参加者同士の比較
    #[error("cannot compare {left} with {right}")]
    TypeMismatch {
        left: ParticipantKind,
        right: ParticipantKind,
    },

    /// 評価を持たない種類（レビュアー）の比較
    #[error("{0} has no grades to compare")]
    NotGraded(ParticipantKind),
}

/// 名簿操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    /// IDは存在するが期待した種類ではない
    #[error("participant '{id}' is a {found}, expected a {expected}")]
    WrongKind {
        id: String,
        expected: ParticipantKind,
        found: ParticipantKind,
    },

    #[error("duplicate participant id: {0}")]
    DuplicateId(String),

    #[error(transparent)]
    Rating(#[from] RatingError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}
