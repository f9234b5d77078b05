//! # Comparison Service
//!
//! 平均点による比較

use std::cmp::Ordering;

use crate::domain::entities::grade::Graded;
use crate::domain::entities::participant::{Participant, ParticipantKind};
use crate::domain::error::ComparisonError;

/// 同じ種類のエンティティを平均点で比較する
///
/// 評価がない場合はどの平均点よりも小さいものとして扱う
pub fn compare_by_avg<T: Graded>(left: &T, right: &T) -> Ordering {
    left.avg_score()
        .partial_cmp(&right.avg_score())
        .unwrap_or(Ordering::Equal)
}

/// 参加者同士を平均点で比較する
///
/// # Errors
///
/// 種類が異なる場合は `TypeMismatch`、レビュアー同士の場合は `NotGraded`
pub fn try_compare(left: &Participant, right: &Participant) -> Result<Ordering, ComparisonError> {
    match (left, right) {
        (Participant::Student(l), Participant::Student(r)) => Ok(compare_by_avg(l, r)),
        (Participant::Lecturer(l), Participant::Lecturer(r)) => Ok(compare_by_avg(l, r)),
        (Participant::Reviewer(_), Participant::Reviewer(_)) => {
            Err(ComparisonError::NotGraded(ParticipantKind::Reviewer))
        }
        _ => Err(ComparisonError::TypeMismatch {
            left: left.kind(),
            right: right.kind(),
        }),
    }
}
