//! # Rendering Service
//!
//! 参加者のテキスト表示
//!
//! 表示順は常に 名前 → 姓 → 平均点 → コース一覧。ラベルはロケールで切り替える。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::grade::{AverageScore, Graded};
use crate::domain::entities::mentor::{Lecturer, Reviewer};
use crate::domain::entities::participant::{Participant, ParticipantKind};
use crate::domain::entities::student::Student;

/// 表示ロケール
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale '{0}' (expected 'ru' or 'en')")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ru => "ru",
            Self::En => "en",
        })
    }
}

/// ロケールごとの表示ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub name: &'static str,
    pub surname: &'static str,
    pub homework_avg: &'static str,
    pub lecture_avg: &'static str,
    pub courses_in_progress: &'static str,
    pub finished_courses: &'static str,
    pub no_grades: &'static str,
    pub student: &'static str,
    pub lecturer: &'static str,
    pub reviewer: &'static str,
    pub lecturers_course_avg: &'static str,
    pub students_course_avg: &'static str,
    pub better_than: &'static str,
    pub not_comparable: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

const RU_LABELS: Labels = Labels {
    name: "Имя",
    surname: "Фамилия",
    homework_avg: "Средняя оценка за домашние задания",
    lecture_avg: "Средняя оценка за лекции",
    courses_in_progress: "Курсы в процессе изучения",
    finished_courses: "Завершенные курсы",
    no_grades: "нет оценок",
    student: "Студент",
    lecturer: "Лектор",
    reviewer: "Ревьюер",
    lecturers_course_avg: "Средняя оценка лекторов за курс",
    students_course_avg: "Средняя оценка студентов за курс",
    better_than: "круче",
    not_comparable: "нельзя сравнить",
    yes: "да",
    no: "нет",
};

const EN_LABELS: Labels = Labels {
    name: "Name",
    surname: "Surname",
    homework_avg: "Average homework grade",
    lecture_avg: "Average lecture grade",
    courses_in_progress: "Courses in progress",
    finished_courses: "Finished courses",
    no_grades: "no grades",
    student: "Student",
    lecturer: "Lecturer",
    reviewer: "Reviewer",
    lecturers_course_avg: "Average lecturer grade for course",
    students_course_avg: "Average student grade for course",
    better_than: "is better than",
    not_comparable: "not comparable",
    yes: "yes",
    no: "no",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::Ru => &RU_LABELS,
            Self::En => &EN_LABELS,
        }
    }
}

impl Labels {
    pub fn kind(&self, kind: ParticipantKind) -> &'static str {
        match kind {
            ParticipantKind::Student => self.student,
            ParticipantKind::Lecturer => self.lecturer,
            ParticipantKind::Reviewer => self.reviewer,
        }
    }

    /// 平均点の表示（評価がない場合はプレースホルダ）
    pub fn score(&self, score: Option<AverageScore>) -> String {
        score.map_or_else(|| self.no_grades.to_string(), |s| s.to_string())
    }

    pub fn verdict(&self, value: bool) -> &'static str {
        if value {
            self.yes
        } else {
            self.no
        }
    }
}

fn render_name(out: &mut String, labels: &Labels, name: &str, surname: &str) {
    out.push_str(&format!("{}: {}\n{}: {}", labels.name, name, labels.surname, surname));
}

pub fn render_student(student: &Student, locale: Locale) -> String {
    let labels = locale.labels();
    let mut out = String::new();
    render_name(&mut out, labels, &student.name, &student.surname);
    out.push_str(&format!(
        "\n{}: {}\n{}: {}\n{}: {}",
        labels.homework_avg,
        labels.score(student.avg_score()),
        labels.courses_in_progress,
        student.courses_in_progress.join(", "),
        labels.finished_courses,
        student.finished_courses.join(", "),
    ));
    out
}

pub fn render_lecturer(lecturer: &Lecturer, locale: Locale) -> String {
    let labels = locale.labels();
    let mentor = lecturer.mentor();
    let mut out = String::new();
    render_name(&mut out, labels, &mentor.name, &mentor.surname);
    out.push_str(&format!(
        "\n{}: {}",
        labels.lecture_avg,
        labels.score(lecturer.avg_score())
    ));
    out
}

/// レビュアーは評価を受けないため氏名のみ
pub fn render_reviewer(reviewer: &Reviewer, locale: Locale) -> String {
    let mut out = String::new();
    let mentor = reviewer.mentor();
    render_name(&mut out, locale.labels(), &mentor.name, &mentor.surname);
    out
}

pub fn render_participant(participant: &Participant, locale: Locale) -> String {
    match participant {
        Participant::Student(student) => render_student(student, locale),
        Participant::Lecturer(lecturer) => render_lecturer(lecturer, locale),
        Participant::Reviewer(reviewer) => render_reviewer(reviewer, locale),
    }
}
