//! Sample Scenario Repository
//!
//! 組み込みのサンプルシナリオ（2人の学生・2人の講師・2人のレビュアー）

use anyhow::Result;
use log::info;

use crate::domain::entities::scenario::{MentorRecord, RatingEvent, Scenario, StudentRecord};
use crate::domain::repositories::scenario_repository::ScenarioRepository;

/// 組み込みサンプルを返すシナリオリポジトリ
///
/// `source` は無視する
#[derive(Debug, Default)]
pub struct SampleScenarioRepository;

impl SampleScenarioRepository {
    pub fn new() -> Self {
        Self
    }
}

fn student(
    id: &str,
    name: &str,
    surname: &str,
    gender: &str,
    in_progress: &[&str],
    finished: &[&str],
) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        surname: surname.to_string(),
        gender: gender.to_string(),
        courses_in_progress: in_progress.iter().map(|c| c.to_string()).collect(),
        finished_courses: finished.iter().map(|c| c.to_string()).collect(),
    }
}

fn mentor(id: &str, name: &str, surname: &str, courses: &[&str]) -> MentorRecord {
    MentorRecord {
        id: id.to_string(),
        name: name.to_string(),
        surname: surname.to_string(),
        courses_attached: courses.iter().map(|c| c.to_string()).collect(),
    }
}

/// サンプルシナリオ
///
/// `reviewer1` による `student2` の Math 評価2件は、Math が修了済みのため却下される
pub fn sample_scenario() -> Scenario {
    let mut ratings = vec![
        RatingEvent::lecture("student1", "lecturer1", "Python", 9),
        RatingEvent::lecture("student1", "lecturer1", "Math", 10),
        RatingEvent::lecture("student1", "lecturer1", "Math", 8),
        RatingEvent::lecture("student1", "lecturer1", "Physics", 10),
        RatingEvent::lecture("student2", "lecturer2", "Singing", 8),
        RatingEvent::lecture("student2", "lecturer2", "Dancing", 10),
        RatingEvent::lecture("student2", "lecturer1", "Math", 10),
    ];
    ratings.extend(
        [10, 3, 8, 10]
            .into_iter()
            .map(|g| RatingEvent::homework("reviewer1", "student1", "Math", g)),
    );
    ratings.push(RatingEvent::homework("reviewer1", "student1", "Physics", 10));
    ratings.push(RatingEvent::homework("reviewer1", "student2", "Math", 9));
    ratings.push(RatingEvent::homework("reviewer1", "student2", "Math", 10));
    ratings.extend(
        [10, 8, 6]
            .into_iter()
            .map(|g| RatingEvent::homework("reviewer2", "student2", "Singing", g)),
    );
    ratings.push(RatingEvent::homework("reviewer2", "student2", "Dancing", 10));

    Scenario {
        students: vec![
            student("student1", "Tom", "Pane", "male", &["Math", "Physics"], &["Python"]),
            student("student2", "Maria", "Osipova", "female", &["Singing", "Dancing"], &["Math"]),
        ],
        lecturers: vec![
            mentor("lecturer1", "Tony", "Stark", &["Math", "Physics", "Python"]),
            mentor("lecturer2", "Melissa", "Spider", &["Singing", "Dancing"]),
        ],
        reviewers: vec![
            mentor("reviewer1", "Sid", "Mayer", &["Math", "Physics", "Python"]),
            mentor("reviewer2", "Alica", "Kopperfield", &["Singing", "Dancing"]),
        ],
        ratings,
        comparisons: vec![
            ("lecturer1".to_string(), "lecturer2".to_string()),
            ("student1".to_string(), "student2".to_string()),
        ],
    }
}

impl ScenarioRepository for SampleScenarioRepository {
    fn load(&self, _source: &str) -> Result<Scenario> {
        info!("Using built-in sample scenario");
        Ok(sample_scenario())
    }
}
