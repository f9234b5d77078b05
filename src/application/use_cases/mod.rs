//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ApplyRatingsUseCase**: シナリオの読み込みと評価の適用
//! - **BuildReportUseCase**: 名簿からのレポート作成

pub mod apply_ratings;
pub mod build_report;
