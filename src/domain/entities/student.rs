//! # Student Entity
//!
//! 学生のドメインエンティティ

use std::cmp::Ordering;
use std::fmt;

use log::debug;
use serde_json::Value;

use super::grade::{CourseGrades, Grade, Graded};
use super::mentor::Lecturer;
use crate::domain::error::RatingError;
use crate::domain::services::comparison::compare_by_avg;
use crate::domain::services::rendering::{render_student, Locale};

/// 学生
///
/// 受講中・修了済みのコースと、レビュアーから受けた課題の評価を保持する。
/// 等価性と順序は平均点のみで決まる。
#[derive(Debug, Clone)]
pub struct Student {
    pub name: String,
    pub surname: String,
    pub gender: String,
    pub courses_in_progress: Vec<String>,
    pub finished_courses: Vec<String>,
    grades: CourseGrades,
}

impl Student {
    /// 新しい学生を作成（コース・評価は空）
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            gender: gender.into(),
            courses_in_progress: Vec::new(),
            finished_courses: Vec::new(),
            grades: CourseGrades::new(),
        }
    }

    pub fn add_course_in_progress(&mut self, course: impl Into<String>) {
        self.courses_in_progress.push(course.into());
    }

    pub fn add_finished_course(&mut self, course: impl Into<String>) {
        self.finished_courses.push(course.into());
    }

    pub fn is_taking(&self, course: &str) -> bool {
        self.courses_in_progress.iter().any(|c| c == course)
    }

    pub fn has_taken_or_taking(&self, course: &str) -> bool {
        self.is_taking(course) || self.finished_courses.iter().any(|c| c == course)
    }

    /// 講師を評価する
    ///
    /// 評価値が有効で、講師がコースを担当しており、学生がそのコースを
    /// 受講中または修了済みの場合のみ講師の評価記録に追加する。
    ///
    /// # Errors
    ///
    /// いずれかの条件を満たさない場合。講師の状態は変更されない
    pub fn rate_lecturer(
        &self,
        lecturer: &mut Lecturer,
        course: &str,
        grade: i64,
    ) -> Result<(), RatingError> {
        self.rate_lecturer_with(lecturer, course, Grade::new(grade))
    }

    /// JSON値の評価で講師を評価する（整数以外は拒否）
    pub fn rate_lecturer_json(
        &self,
        lecturer: &mut Lecturer,
        course: &str,
        grade: &Value,
    ) -> Result<(), RatingError> {
        self.rate_lecturer_with(lecturer, course, Grade::from_json(grade))
    }

    fn rate_lecturer_with(
        &self,
        lecturer: &mut Lecturer,
        course: &str,
        grade: Result<Grade, RatingError>,
    ) -> Result<(), RatingError> {
        let grade = grade?;
        if !lecturer.mentor().is_attached(course) {
            return Err(RatingError::CourseNotAttached(course.to_string()));
        }
        if !self.has_taken_or_taking(course) {
            return Err(RatingError::CourseNotTaken(course.to_string()));
        }

        debug!(
            "{} {} rated lecturer {} {} on {}: {}",
            self.name,
            self.surname,
            lecturer.mentor().name,
            lecturer.mentor().surname,
            course,
            grade
        );
        lecturer.receive_grade(course, grade);
        Ok(())
    }

    /// レビュアーからの課題評価を記録
    pub(crate) fn receive_grade(&mut self, course: &str, grade: Grade) {
        self.grades.record(course, grade);
    }
}

impl Graded for Student {
    fn grades(&self) -> &CourseGrades {
        &self.grades
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.avg_score() == other.avg_score()
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare_by_avg(self, other))
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_student(self, Locale::default()))
    }
}
