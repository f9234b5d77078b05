//! # Build Report Use Case
//!
//! 名簿からテキストレポートを作成するユースケース

use std::cmp::Ordering;
use std::fmt;

use crate::application::dto::report_config::ReportConfig;
use crate::application::use_cases::apply_ratings::RatingSummary;
use crate::domain::entities::grade::AverageScore;
use crate::domain::entities::participant::ParticipantKind;
use crate::domain::entities::roster::Roster;
use crate::domain::error::RosterError;
use crate::domain::services::aggregation::{lecturers_avg_rating, students_avg_rating};
use crate::domain::services::rendering::{
    render_lecturer, render_reviewer, render_student, Labels, Locale,
};

/// レポート内の参加者1人分
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantSection {
    pub id: String,
    pub kind: ParticipantKind,
    pub rendered: String,
}

/// コース別の平均
#[derive(Debug, Clone, PartialEq)]
pub struct CourseAverage {
    pub course: String,
    pub lecturers: Option<AverageScore>,
    pub students: Option<AverageScore>,
}

/// 比較が成立した場合の結果（両者は同じ種類）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonVerdict {
    pub kind: ParticipantKind,
    pub ordering: Ordering,
}

/// 2人の参加者の比較結果
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonLine {
    pub left: String,
    pub right: String,
    pub outcome: Result<ComparisonVerdict, RosterError>,
}

impl ComparisonLine {
    /// 左側が右側より平均点が高いか
    pub fn is_better(&self) -> bool {
        matches!(
            self.outcome,
            Ok(ComparisonVerdict {
                ordering: Ordering::Greater,
                ..
            })
        )
    }
}

/// レポート
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub locale: Locale,
    pub participants: Vec<ParticipantSection>,
    pub course_averages: Vec<CourseAverage>,
    pub comparisons: Vec<ComparisonLine>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: &Labels = self.locale.labels();

        for section in &self.participants {
            writeln!(f, "{} {}:", labels.kind(section.kind), section.id)?;
            writeln!(f, "{}", section.rendered)?;
            writeln!(f)?;
        }

        for average in &self.course_averages {
            writeln!(
                f,
                "{} {}: {}",
                labels.lecturers_course_avg,
                average.course,
                labels.score(average.lecturers)
            )?;
            writeln!(
                f,
                "{} {}: {}",
                labels.students_course_avg,
                average.course,
                labels.score(average.students)
            )?;
        }

        for line in &self.comparisons {
            match &line.outcome {
                Ok(verdict) => writeln!(
                    f,
                    "{} {} {} {}: {}",
                    labels.kind(verdict.kind),
                    line.left,
                    labels.better_than,
                    line.right,
                    labels.verdict(line.is_better())
                )?,
                // エラー本文は診断用（英語のまま括弧内に出す）
                Err(error) => writeln!(
                    f,
                    "{} {} {}: {} ({})",
                    line.left, labels.better_than, line.right, labels.not_comparable, error
                )?,
            }
        }

        Ok(())
    }
}

/// レポート作成ユースケース
pub struct BuildReportUseCase {
    config: ReportConfig,
}

impl BuildReportUseCase {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// 評価適用結果からレポートを作成
    ///
    /// 比較の組が指定されていない場合は、先頭2人の講師と先頭2人の学生を比較する
    pub fn execute(&self, summary: &RatingSummary) -> Report {
        let roster = &summary.roster;
        let pairs = if summary.comparisons.is_empty() {
            default_comparisons(roster)
        } else {
            summary.comparisons.clone()
        };

        Report {
            locale: self.config.locale,
            participants: self.participant_sections(roster),
            course_averages: self
                .config
                .courses
                .iter()
                .map(|course| CourseAverage {
                    course: course.clone(),
                    lecturers: lecturers_avg_rating(roster.lecturers().map(|(_, l)| l), course),
                    students: students_avg_rating(roster.students().map(|(_, s)| s), course),
                })
                .collect(),
            comparisons: pairs
                .into_iter()
                .map(|(left, right)| ComparisonLine {
                    outcome: compare_pair(roster, &left, &right),
                    left,
                    right,
                })
                .collect(),
        }
    }

    fn participant_sections(&self, roster: &Roster) -> Vec<ParticipantSection> {
        let locale = self.config.locale;
        let students = roster.students().map(|(id, s)| ParticipantSection {
            id: id.to_string(),
            kind: ParticipantKind::Student,
            rendered: render_student(s, locale),
        });
        let lecturers = roster.lecturers().map(|(id, l)| ParticipantSection {
            id: id.to_string(),
            kind: ParticipantKind::Lecturer,
            rendered: render_lecturer(l, locale),
        });
        let reviewers = roster.reviewers().map(|(id, r)| ParticipantSection {
            id: id.to_string(),
            kind: ParticipantKind::Reviewer,
            rendered: render_reviewer(r, locale),
        });

        students.chain(lecturers).chain(reviewers).collect()
    }
}

fn first_pair<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<(String, String)> {
    let left = ids.next()?;
    let right = ids.next()?;
    Some((left.to_string(), right.to_string()))
}

fn default_comparisons(roster: &Roster) -> Vec<(String, String)> {
    first_pair(roster.lecturers().map(|(id, _)| id))
        .into_iter()
        .chain(first_pair(roster.students().map(|(id, _)| id)))
        .collect()
}

fn compare_pair(
    roster: &Roster,
    left: &str,
    right: &str,
) -> Result<ComparisonVerdict, RosterError> {
    let ordering = roster.compare(left, right)?;
    let kind = roster
        .participant_kind(left)
        .ok_or_else(|| RosterError::UnknownParticipant(left.to_string()))?;
    Ok(ComparisonVerdict { kind, ordering })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::repositories::sample_scenario_repository::sample_scenario;
    use crate::domain::error::ComparisonError;

    fn sample_summary() -> RatingSummary {
        let scenario = sample_scenario();
        let mut roster = scenario.build_roster().unwrap();
        let applied_count = scenario
            .ratings
            .iter()
            .filter(|event| event.apply(&mut roster).is_ok())
            .count();

        RatingSummary {
            roster,
            comparisons: scenario.comparisons,
            applied_count,
            rejected: Vec::new(),
        }
    }

    #[test]
    fn test_course_averages() {
        let use_case = BuildReportUseCase::new(ReportConfig::new(
            Locale::En,
            vec!["Math".to_string(), "Singing".to_string(), "Art".to_string()],
        ));

        let report = use_case.execute(&sample_summary());

        let averages: Vec<_> = report
            .course_averages
            .iter()
            .map(|a| {
                (
                    a.course.as_str(),
                    a.lecturers.map(AverageScore::value),
                    a.students.map(AverageScore::value),
                )
            })
            .collect();
        assert_eq!(
            averages,
            vec![
                ("Math", Some(9.3), Some(7.8)),
                ("Singing", Some(8.0), Some(8.0)),
                ("Art", None, None),
            ]
        );
    }

    #[test]
    fn test_participant_sections_order() {
        let report = BuildReportUseCase::new(ReportConfig::default()).execute(&sample_summary());

        let ids: Vec<_> = report.participants.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["student1", "student2", "lecturer1", "lecturer2", "reviewer1", "reviewer2"]
        );
        assert_eq!(report.participants[2].kind, ParticipantKind::Lecturer);
    }

    #[test]
    fn test_scenario_comparisons() {
        let report = BuildReportUseCase::new(ReportConfig::default()).execute(&sample_summary());

        assert_eq!(report.comparisons.len(), 2);
        assert_eq!(report.comparisons[0].left, "lecturer1");
        assert!(report.comparisons[0].is_better());
        assert_eq!(report.comparisons[1].left, "student1");
        assert_eq!(
            report.comparisons[1].outcome,
            Ok(ComparisonVerdict {
                kind: ParticipantKind::Student,
                ordering: Ordering::Less,
            })
        );
        assert!(!report.comparisons[1].is_better());
    }

    #[test]
    fn test_default_comparisons() {
        let mut summary = sample_summary();
        summary.comparisons.clear();

        let report = BuildReportUseCase::new(ReportConfig::default()).execute(&summary);

        let pairs: Vec<_> = report
            .comparisons
            .iter()
            .map(|c| (c.left.as_str(), c.right.as_str()))
            .collect();
        assert_eq!(pairs, vec![("lecturer1", "lecturer2"), ("student1", "student2")]);
    }

    #[test]
    fn test_mismatched_comparison_is_reported() {
        let mut summary = sample_summary();
        summary.comparisons = vec![("student1".to_string(), "lecturer1".to_string())];

        let report = BuildReportUseCase::new(ReportConfig::new(Locale::En, vec![]))
            .execute(&summary);

        assert_eq!(
            report.comparisons[0].outcome,
            Err(RosterError::Comparison(ComparisonError::TypeMismatch {
                left: ParticipantKind::Student,
                right: ParticipantKind::Lecturer,
            }))
        );
        assert!(report.to_string().contains(
            "student1 is better than lecturer1: not comparable \
             (cannot compare student with lecturer)\n"
        ));
    }

    #[test]
    fn test_mismatched_comparison_uses_locale_label() {
        let mut summary = sample_summary();
        summary.comparisons = vec![
            ("reviewer1".to_string(), "reviewer2".to_string()),
            ("student1".to_string(), "nobody".to_string()),
        ];

        let report = BuildReportUseCase::new(ReportConfig::new(Locale::Ru, vec![]))
            .execute(&summary);
        let text = report.to_string();

        assert!(text.contains("reviewer1 круче reviewer2: нельзя сравнить ("));
        assert!(text.contains("student1 круче nobody: нельзя сравнить ("));
        assert!(!text.contains("Ревьюер reviewer1 круче"));
        assert!(report.comparisons.iter().all(|c| !c.is_better()));
    }

    #[test]
    fn test_display_ru() {
        let report = BuildReportUseCase::new(ReportConfig::default()).execute(&sample_summary());

        let text = report.to_string();

        assert!(text.starts_with(
            "Студент student1:\n\
             Имя: Tom\n\
             Фамилия: Pane\n\
             Средняя оценка за домашние задания: 8.2\n\
             Курсы в процессе изучения: Math, Physics\n\
             Завершенные курсы: Python\n\n"
        ));
        assert!(text.contains(
            "Лектор lecturer1:\nИмя: Tony\nФамилия: Stark\nСредняя оценка за лекции: 9.4\n"
        ));
        assert!(text.contains("Ревьюер reviewer2:\nИмя: Alica\nФамилия: Kopperfield\n"));
        assert!(text.contains("Средняя оценка лекторов за курс Math: 9.3\n"));
        assert!(text.contains("Средняя оценка студентов за курс Math: 7.8\n"));
        assert!(text.ends_with(
            "Лектор lecturer1 круче lecturer2: да\n\
             Студент student1 круче student2: нет\n"
        ));
    }
}
