//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Student**: 学生
//! - **Mentor / Lecturer / Reviewer**: 指導者（講師・レビュアー）
//! - **Participant**: 参加者の種類をまとめた列挙型
//! - **Roster**: IDで参加者を管理する名簿
//! - **Scenario**: 参加者と評価の流れを記述する入力データ
//!
//! ## バリューオブジェクト
//!
//! - **Grade / CourseGrades / AverageScore**: 評価値と平均点

pub mod grade;
pub mod mentor;
pub mod participant;
pub mod roster;
pub mod scenario;
pub mod student;
