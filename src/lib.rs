//! # Gradebook
//!
//! 学生・講師・レビュアーが相互に評価し、平均点を計算・比較するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、評価ルール、集計・比較・表示（外部依存なし）
//! - **Application層**: シナリオ適用とレポート作成のユースケース
//! - **Adapter層**: 設定ファイル、シナリオファイル、組み込みサンプル
//! - **Driver層**: CLI、依存性注入
//!
//! ```
//! use gradebook::domain::entities::grade::Graded;
//! use gradebook::domain::entities::mentor::{Lecturer, Reviewer};
//! use gradebook::domain::entities::student::Student;
//!
//! let mut student = Student::new("Tom", "Pane", "male");
//! student.add_course_in_progress("Math");
//!
//! let mut reviewer = Reviewer::new("Sid", "Mayer");
//! reviewer.attach_course("Math");
//! reviewer.rate_hw(&mut student, "Math", 10).unwrap();
//! reviewer.rate_hw(&mut student, "Math", 8).unwrap();
//! assert!(reviewer.rate_hw(&mut student, "Math", 11).is_err());
//!
//! let mut lecturer = Lecturer::new("Tony", "Stark");
//! lecturer.attach_course("Math");
//! student.rate_lecturer(&mut lecturer, "Math", 9).unwrap();
//!
//! assert_eq!(student.avg_score().unwrap().value(), 9.0);
//! assert_eq!(lecturer.avg_score().unwrap().to_string(), "9.0");
//! ```

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
