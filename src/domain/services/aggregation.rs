//! # Aggregation Service
//!
//! コース別の平均点集計

use crate::domain::entities::grade::{AverageScore, Graded};
use crate::domain::entities::mentor::Lecturer;
use crate::domain::entities::student::Student;

/// 指定コースの評価を全員分まとめた平均点
///
/// コースの評価を持たない要素は無視する。評価件数が0の場合は `None`
pub fn course_avg_rating<'a, T, I>(items: I, course: &str) -> Option<AverageScore>
where
    T: Graded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (sum, count) = items
        .into_iter()
        .filter_map(|item| item.grades().for_course(course))
        .flatten()
        .fold((0u64, 0usize), |(sum, count), grade| {
            (sum + u64::from(grade.value()), count + 1)
        });

    AverageScore::from_totals(sum, count)
}

/// 学生の課題評価のコース平均
///
/// 異なる種類が混在する集合は `Roster::students()` や
/// `Participant::as_student` で学生のみに絞り込んでから渡す
pub fn students_avg_rating<'a, I>(students: I, course: &str) -> Option<AverageScore>
where
    I: IntoIterator<Item = &'a Student>,
{
    course_avg_rating(students, course)
}

/// 講師の講義評価のコース平均
pub fn lecturers_avg_rating<'a, I>(lecturers: I, course: &str) -> Option<AverageScore>
where
    I: IntoIterator<Item = &'a Lecturer>,
{
    course_avg_rating(lecturers, course)
}
