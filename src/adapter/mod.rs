//! Adapter Layer
//!
//! 外部とのやり取り（設定ファイル、シナリオファイル）の実装

pub mod config;
pub mod repositories;
