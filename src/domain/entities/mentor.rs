//! # Mentor Entities
//!
//! 講師・レビュアーのドメインエンティティ
//!
//! 共通部分（氏名・担当コース）は `Mentor` として合成する。

use std::cmp::Ordering;
use std::fmt;

use log::debug;
use serde_json::Value;

use super::grade::{CourseGrades, Grade, Graded};
use super::student::Student;
use crate::domain::error::RatingError;
use crate::domain::services::comparison::compare_by_avg;
use crate::domain::services::rendering::{render_lecturer, render_reviewer, Locale};

/// 氏名と担当コースを持つ指導者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mentor {
    pub name: String,
    pub surname: String,
    pub courses_attached: Vec<String>,
}

impl Mentor {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            courses_attached: Vec::new(),
        }
    }

    pub fn attach_course(&mut self, course: impl Into<String>) {
        self.courses_attached.push(course.into());
    }

    pub fn is_attached(&self, course: &str) -> bool {
        self.courses_attached.iter().any(|c| c == course)
    }
}

/// 講師
///
/// 学生から受けた講義の評価を保持する
#[derive(Debug, Clone)]
pub struct Lecturer {
    mentor: Mentor,
    grades: CourseGrades,
}

impl Lecturer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            mentor: Mentor::new(name, surname),
            grades: CourseGrades::new(),
        }
    }

    pub fn mentor(&self) -> &Mentor {
        &self.mentor
    }

    pub fn mentor_mut(&mut self) -> &mut Mentor {
        &mut self.mentor
    }

    pub fn attach_course(&mut self, course: impl Into<String>) {
        self.mentor.attach_course(course);
    }

    pub(crate) fn receive_grade(&mut self, course: &str, grade: Grade) {
        self.grades.record(course, grade);
    }
}

impl Graded for Lecturer {
    fn grades(&self) -> &CourseGrades {
        &self.grades
    }
}

impl PartialEq for Lecturer {
    fn eq(&self, other: &Self) -> bool {
        self.avg_score() == other.avg_score()
    }
}

impl PartialOrd for Lecturer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare_by_avg(self, other))
    }
}

impl fmt::Display for Lecturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_lecturer(self, Locale::default()))
    }
}

/// レビュアー
///
/// 学生の課題を評価する。自身は評価を受けない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reviewer {
    mentor: Mentor,
}

impl Reviewer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            mentor: Mentor::new(name, surname),
        }
    }

    pub fn mentor(&self) -> &Mentor {
        &self.mentor
    }

    pub fn mentor_mut(&mut self) -> &mut Mentor {
        &mut self.mentor
    }

    pub fn attach_course(&mut self, course: impl Into<String>) {
        self.mentor.attach_course(course);
    }

    /// 学生の課題を評価する
    ///
    /// レビュアーがコースを担当し、学生がそのコースを受講中で、
    /// 評価値が有効な場合のみ学生の評価記録に追加する。
    ///
    /// # Errors
    ///
    /// いずれかの条件を満たさない場合。学生の状態は変更されない
    pub fn rate_hw(
        &self,
        student: &mut Student,
        course: &str,
        grade: i64,
    ) -> Result<(), RatingError> {
        self.rate_hw_with(student, course, || Grade::new(grade))
    }

    /// JSON値の評価で課題を評価する（整数以外は拒否）
    pub fn rate_hw_json(
        &self,
        student: &mut Student,
        course: &str,
        grade: &Value,
    ) -> Result<(), RatingError> {
        self.rate_hw_with(student, course, || Grade::from_json(grade))
    }

    fn rate_hw_with(
        &self,
        student: &mut Student,
        course: &str,
        grade: impl FnOnce() -> Result<Grade, RatingError>,
    ) -> Result<(), RatingError> {
        if !self.mentor.is_attached(course) {
            return Err(RatingError::CourseNotAttached(course.to_string()));
        }
        if !student.is_taking(course) {
            return Err(RatingError::CourseNotTaken(course.to_string()));
        }
        let grade = grade()?;

        debug!(
            "reviewer {} {} graded homework of {} {} on {}: {}",
            self.mentor.name, self.mentor.surname, student.name, student.surname, course, grade
        );
        student.receive_grade(course, grade);
        Ok(())
    }
}

impl fmt::Display for Reviewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_reviewer(self, Locale::default()))
    }
}
