//! # Roster
//!
//! IDで参加者を管理する名簿
//!
//! 評価操作の「対象が講師（学生）であること」という実行時チェックはここで行う。

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde_json::Value;

use super::mentor::{Lecturer, Reviewer};
use super::participant::{Participant, ParticipantKind};
use super::student::Student;
use crate::domain::error::RosterError;
use crate::domain::services::comparison::try_compare;

/// 参加者の名簿
///
/// 種類ごとにIDの昇順で保持する。IDは種類をまたいで一意
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: BTreeMap<String, Student>,
    lecturers: BTreeMap<String, Lecturer>,
    reviewers: BTreeMap<String, Reviewer>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(
        &mut self,
        id: impl Into<String>,
        student: Student,
    ) -> Result<(), RosterError> {
        let id = self.ensure_new_id(id.into())?;
        self.students.insert(id, student);
        Ok(())
    }

    pub fn add_lecturer(
        &mut self,
        id: impl Into<String>,
        lecturer: Lecturer,
    ) -> Result<(), RosterError> {
        let id = self.ensure_new_id(id.into())?;
        self.lecturers.insert(id, lecturer);
        Ok(())
    }

    pub fn add_reviewer(
        &mut self,
        id: impl Into<String>,
        reviewer: Reviewer,
    ) -> Result<(), RosterError> {
        let id = self.ensure_new_id(id.into())?;
        self.reviewers.insert(id, reviewer);
        Ok(())
    }

    fn ensure_new_id(&self, id: String) -> Result<String, RosterError> {
        if self.participant_kind(&id).is_some() {
            return Err(RosterError::DuplicateId(id));
        }
        Ok(id)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn lecturer(&self, id: &str) -> Option<&Lecturer> {
        self.lecturers.get(id)
    }

    pub fn reviewer(&self, id: &str) -> Option<&Reviewer> {
        self.reviewers.get(id)
    }

    /// 学生をIDの昇順で返す
    pub fn students(&self) -> impl Iterator<Item = (&str, &Student)> {
        self.students.iter().map(|(id, s)| (id.as_str(), s))
    }

    pub fn lecturers(&self) -> impl Iterator<Item = (&str, &Lecturer)> {
        self.lecturers.iter().map(|(id, l)| (id.as_str(), l))
    }

    pub fn reviewers(&self) -> impl Iterator<Item = (&str, &Reviewer)> {
        self.reviewers.iter().map(|(id, r)| (id.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.students.len() + self.lecturers.len() + self.reviewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// IDの参加者の種類
    pub fn participant_kind(&self, id: &str) -> Option<ParticipantKind> {
        if self.students.contains_key(id) {
            Some(ParticipantKind::Student)
        } else if self.lecturers.contains_key(id) {
            Some(ParticipantKind::Lecturer)
        } else if self.reviewers.contains_key(id) {
            Some(ParticipantKind::Reviewer)
        } else {
            None
        }
    }

    /// IDの参加者のコピーを返す
    pub fn participant(&self, id: &str) -> Option<Participant> {
        self.student(id)
            .cloned()
            .map(Participant::from)
            .or_else(|| self.lecturer(id).cloned().map(Participant::from))
            .or_else(|| self.reviewer(id).cloned().map(Participant::from))
    }

    fn expect_kind(&self, id: &str, expected: ParticipantKind) -> Result<(), RosterError> {
        match self.participant_kind(id) {
            Some(found) if found == expected => Ok(()),
            Some(found) => Err(RosterError::WrongKind {
                id: id.to_string(),
                expected,
                found,
            }),
            None => Err(RosterError::UnknownParticipant(id.to_string())),
        }
    }

    /// 学生が講師を評価する
    ///
    /// # Errors
    ///
    /// IDが存在しない、種類が違う、または評価条件を満たさない場合
    pub fn rate_lecturer(
        &mut self,
        student_id: &str,
        lecturer_id: &str,
        course: &str,
        grade: &Value,
    ) -> Result<(), RosterError> {
        self.expect_kind(student_id, ParticipantKind::Student)?;
        self.expect_kind(lecturer_id, ParticipantKind::Lecturer)?;

        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| RosterError::UnknownParticipant(student_id.to_string()))?;
        let lecturer = self
            .lecturers
            .get_mut(lecturer_id)
            .ok_or_else(|| RosterError::UnknownParticipant(lecturer_id.to_string()))?;

        student.rate_lecturer_json(lecturer, course, grade)?;
        Ok(())
    }

    /// レビュアーが学生の課題を評価する
    ///
    /// # Errors
    ///
    /// IDが存在しない、種類が違う、または評価条件を満たさない場合
    pub fn rate_hw(
        &mut self,
        reviewer_id: &str,
        student_id: &str,
        course: &str,
        grade: &Value,
    ) -> Result<(), RosterError> {
        self.expect_kind(reviewer_id, ParticipantKind::Reviewer)?;
        self.expect_kind(student_id, ParticipantKind::Student)?;

        let reviewer = self
            .reviewers
            .get(reviewer_id)
            .ok_or_else(|| RosterError::UnknownParticipant(reviewer_id.to_string()))?;
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| RosterError::UnknownParticipant(student_id.to_string()))?;

        reviewer.rate_hw_json(student, course, grade)?;
        Ok(())
    }

    /// 2人の参加者を平均点で比較する
    ///
    /// # Errors
    ///
    /// IDが存在しない場合、または比較できない組み合わせの場合
    pub fn compare(&self, left_id: &str, right_id: &str) -> Result<Ordering, RosterError> {
        let left = self
            .participant(left_id)
            .ok_or_else(|| RosterError::UnknownParticipant(left_id.to_string()))?;
        let right = self
            .participant(right_id)
            .ok_or_else(|| RosterError::UnknownParticipant(right_id.to_string()))?;

        Ok(try_compare(&left, &right)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::grade::Graded;
    use crate::domain::error::{ComparisonError, RatingError};
    use serde_json::json;

    fn create_test_roster() -> Roster {
        let mut student = Student::new("Tom", "Pane", "male");
        student.add_course_in_progress("Math");
        student.add_finished_course("Python");

        let mut lecturer = Lecturer::new("Tony", "Stark");
        lecturer.attach_course("Math");
        lecturer.attach_course("Python");

        let mut reviewer = Reviewer::new("Sid", "Mayer");
        reviewer.attach_course("Math");

        let mut roster = Roster::new();
        roster.add_student("student1", student).unwrap();
        roster.add_lecturer("lecturer1", lecturer).unwrap();
        roster.add_reviewer("reviewer1", reviewer).unwrap();
        roster
    }

    #[test]
    fn test_add_and_lookup() {
        let roster = create_test_roster();

        assert_eq!(roster.len(), 3);
        assert!(!roster.is_empty());
        assert_eq!(
            roster.participant_kind("student1"),
            Some(ParticipantKind::Student)
        );
        assert_eq!(
            roster.participant_kind("lecturer1"),
            Some(ParticipantKind::Lecturer)
        );
        assert_eq!(roster.participant_kind("nobody"), None);
        assert_eq!(roster.student("student1").unwrap().name, "Tom");
        assert_eq!(
            roster.participant("reviewer1").unwrap().kind(),
            ParticipantKind::Reviewer
        );
    }

    #[test]
    fn test_duplicate_id_rejected_across_kinds() {
        let mut roster = create_test_roster();

        let result = roster.add_reviewer("student1", Reviewer::new("X", "Y"));

        assert_eq!(result, Err(RosterError::DuplicateId("student1".to_string())));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_rate_lecturer_by_id() {
        let mut roster = create_test_roster();

        roster
            .rate_lecturer("student1", "lecturer1", "Python", &json!(9))
            .unwrap();

        let lecturer = roster.lecturer("lecturer1").unwrap();
        assert_eq!(lecturer.avg_score().unwrap().value(), 9.0);
    }

    #[test]
    fn test_rate_lecturer_wrong_target_kind() {
        let mut roster = create_test_roster();

        let result = roster.rate_lecturer("student1", "reviewer1", "Math", &json!(9));

        assert_eq!(
            result,
            Err(RosterError::WrongKind {
                id: "reviewer1".to_string(),
                expected: ParticipantKind::Lecturer,
                found: ParticipantKind::Reviewer,
            })
        );
    }

    #[test]
    fn test_rate_hw_by_id() {
        let mut roster = create_test_roster();

        roster.rate_hw("reviewer1", "student1", "Math", &json!(10)).unwrap();
        let result = roster.rate_hw("reviewer1", "student1", "Math", &json!(10.5));

        assert_eq!(
            result,
            Err(RosterError::Rating(RatingError::InvalidGrade("10.5".to_string())))
        );
        assert_eq!(roster.student("student1").unwrap().grades().total_count(), 1);
    }

    #[test]
    fn test_rate_hw_unknown_student() {
        let mut roster = create_test_roster();

        let result = roster.rate_hw("reviewer1", "student9", "Math", &json!(10));

        assert_eq!(
            result,
            Err(RosterError::UnknownParticipant("student9".to_string()))
        );
    }

    #[test]
    fn test_rate_hw_target_must_be_student() {
        let mut roster = create_test_roster();

        let result = roster.rate_hw("reviewer1", "lecturer1", "Math", &json!(9));

        assert_eq!(
            result,
            Err(RosterError::WrongKind {
                id: "lecturer1".to_string(),
                expected: ParticipantKind::Student,
                found: ParticipantKind::Lecturer,
            })
        );
        assert!(roster.lecturer("lecturer1").unwrap().grades().is_empty());
    }

    #[test]
    fn test_rate_hw_rater_must_be_reviewer() {
        let mut roster = create_test_roster();

        let result = roster.rate_hw("lecturer1", "student1", "Math", &json!(9));

        assert_eq!(
            result,
            Err(RosterError::WrongKind {
                id: "lecturer1".to_string(),
                expected: ParticipantKind::Reviewer,
                found: ParticipantKind::Lecturer,
            })
        );
        assert!(roster.student("student1").unwrap().grades().is_empty());
    }

    #[test]
    fn test_rate_lecturer_rater_must_be_student() {
        let mut roster = create_test_roster();

        let result = roster.rate_lecturer("reviewer1", "lecturer1", "Math", &json!(9));

        assert_eq!(
            result,
            Err(RosterError::WrongKind {
                id: "reviewer1".to_string(),
                expected: ParticipantKind::Student,
                found: ParticipantKind::Reviewer,
            })
        );
        assert!(roster.lecturer("lecturer1").unwrap().grades().is_empty());
    }

    #[test]
    fn test_compare_by_id() {
        let mut roster = create_test_roster();
        roster
            .add_lecturer("lecturer2", Lecturer::new("Melissa", "Spider"))
            .unwrap();
        roster
            .rate_lecturer("student1", "lecturer1", "Math", &json!(7))
            .unwrap();

        assert_eq!(roster.compare("lecturer1", "lecturer2"), Ok(Ordering::Greater));
        assert_eq!(
            roster.compare("lecturer1", "student1"),
            Err(RosterError::Comparison(ComparisonError::TypeMismatch {
                left: ParticipantKind::Lecturer,
                right: ParticipantKind::Student,
            }))
        );
    }
}
