//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - フレームワークに依存しない
//! - 入出力について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Student, Lecturer, Reviewerなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（集計・比較・表示）
//! - **error**: ドメインエラー

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
