//! # Domain Services
//!
//! 複数のエンティティにまたがるビジネスルール
//!
//! - **aggregation**: コース別の平均点集計
//! - **comparison**: 平均点による比較
//! - **rendering**: 参加者のテキスト表示

pub mod aggregation;
pub mod comparison;
pub mod rendering;
