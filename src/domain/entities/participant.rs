//! # Participant
//!
//! 学生・講師・レビュアーをまとめて扱うための列挙型

use std::fmt;

use serde::{Deserialize, Serialize};

use super::grade::{AverageScore, Graded};
use super::mentor::{Lecturer, Reviewer};
use super::student::Student;
use crate::domain::services::rendering::{render_participant, Locale};

/// 参加者の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKind {
    Student,
    Lecturer,
    Reviewer,
}

impl fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Student => "student",
            Self::Lecturer => "lecturer",
            Self::Reviewer => "reviewer",
        };
        f.write_str(name)
    }
}

/// 参加者
#[derive(Debug, Clone)]
pub enum Participant {
    Student(Student),
    Lecturer(Lecturer),
    Reviewer(Reviewer),
}

impl Participant {
    pub fn kind(&self) -> ParticipantKind {
        match self {
            Self::Student(_) => ParticipantKind::Student,
            Self::Lecturer(_) => ParticipantKind::Lecturer,
            Self::Reviewer(_) => ParticipantKind::Reviewer,
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Self::Student(student) => Some(student),
            _ => None,
        }
    }

    pub fn as_lecturer(&self) -> Option<&Lecturer> {
        match self {
            Self::Lecturer(lecturer) => Some(lecturer),
            _ => None,
        }
    }

    pub fn as_reviewer(&self) -> Option<&Reviewer> {
        match self {
            Self::Reviewer(reviewer) => Some(reviewer),
            _ => None,
        }
    }

    /// 平均点（レビュアーは常に `None`）
    pub fn avg_score(&self) -> Option<AverageScore> {
        match self {
            Self::Student(student) => student.avg_score(),
            Self::Lecturer(lecturer) => lecturer.avg_score(),
            Self::Reviewer(_) => None,
        }
    }
}

impl From<Student> for Participant {
    fn from(student: Student) -> Self {
        Self::Student(student)
    }
}

impl From<Lecturer> for Participant {
    fn from(lecturer: Lecturer) -> Self {
        Self::Lecturer(lecturer)
    }
}

impl From<Reviewer> for Participant {
    fn from(reviewer: Reviewer) -> Self {
        Self::Reviewer(reviewer)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_participant(self, Locale::default()))
    }
}
