//! # Scenario Input
//!
//! 参加者と評価の流れを記述する入力データ
//!
//! `grade` は型なしのJSON値のまま保持し、整数以外の評価も
//! パース時ではなく評価時に検証エラーとなるようにする。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::mentor::{Lecturer, Reviewer};
use super::roster::Roster;
use super::student::Student;
use crate::domain::error::RosterError;

/// 学生の入力レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub courses_in_progress: Vec<String>,
    #[serde(default)]
    pub finished_courses: Vec<String>,
}

impl StudentRecord {
    pub fn to_student(&self) -> Student {
        let mut student = Student::new(&self.name, &self.surname, &self.gender);
        student.courses_in_progress = self.courses_in_progress.clone();
        student.finished_courses = self.finished_courses.clone();
        student
    }
}

/// 講師・レビュアーの入力レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorRecord {
    pub id: String,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub courses_attached: Vec<String>,
}

impl MentorRecord {
    pub fn to_lecturer(&self) -> Lecturer {
        let mut lecturer = Lecturer::new(&self.name, &self.surname);
        lecturer.mentor_mut().courses_attached = self.courses_attached.clone();
        lecturer
    }

    pub fn to_reviewer(&self) -> Reviewer {
        let mut reviewer = Reviewer::new(&self.name, &self.surname);
        reviewer.mentor_mut().courses_attached = self.courses_attached.clone();
        reviewer
    }
}

/// 評価の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingKind {
    /// 学生 → 講師
    Lecture,
    /// レビュアー → 学生
    Homework,
}

/// 1回分の評価
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEvent {
    pub kind: RatingKind,
    pub rater: String,
    pub target: String,
    pub course: String,
    pub grade: Value,
}

impl RatingEvent {
    pub fn lecture(rater: &str, target: &str, course: &str, grade: impl Into<Value>) -> Self {
        Self::new(RatingKind::Lecture, rater, target, course, grade.into())
    }

    pub fn homework(rater: &str, target: &str, course: &str, grade: impl Into<Value>) -> Self {
        Self::new(RatingKind::Homework, rater, target, course, grade.into())
    }

    fn new(kind: RatingKind, rater: &str, target: &str, course: &str, grade: Value) -> Self {
        Self {
            kind,
            rater: rater.to_string(),
            target: target.to_string(),
            course: course.to_string(),
            grade,
        }
    }

    /// 名簿に評価を適用する
    ///
    /// # Errors
    ///
    /// 評価が受け付けられなかった場合。名簿は変更されない
    pub fn apply(&self, roster: &mut Roster) -> Result<(), RosterError> {
        match self.kind {
            RatingKind::Lecture => {
                roster.rate_lecturer(&self.rater, &self.target, &self.course, &self.grade)
            }
            RatingKind::Homework => {
                roster.rate_hw(&self.rater, &self.target, &self.course, &self.grade)
            }
        }
    }
}

/// シナリオ全体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(default)]
    pub lecturers: Vec<MentorRecord>,
    #[serde(default)]
    pub reviewers: Vec<MentorRecord>,
    /// 適用順に並んだ評価
    #[serde(default)]
    pub ratings: Vec<RatingEvent>,
    /// 比較する参加者IDの組
    #[serde(default)]
    pub comparisons: Vec<(String, String)>,
}

impl Scenario {
    /// 評価適用前の名簿を作成
    ///
    /// # Errors
    ///
    /// IDが重複している場合
    pub fn build_roster(&self) -> Result<Roster, RosterError> {
        let mut roster = Roster::new();
        for record in &self.students {
            roster.add_student(&record.id, record.to_student())?;
        }
        for record in &self.lecturers {
            roster.add_lecturer(&record.id, record.to_lecturer())?;
        }
        for record in &self.reviewers {
            roster.add_reviewer(&record.id, record.to_reviewer())?;
        }
        Ok(roster)
    }
}
