//! JSON Scenario Repository Implementation
//!
//! ScenarioRepositoryのJSON実装（シナリオをJSONファイルから読み込む）

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::entities::scenario::Scenario;
use crate::domain::repositories::scenario_repository::ScenarioRepository;

/// JSONファイルベースのシナリオリポジトリ
pub struct JsonScenarioRepository;

impl JsonScenarioRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// シナリオをJSONファイルに書き出す
    ///
    /// 親ディレクトリが存在しない場合は作成する
    pub fn save(&self, path: &str, scenario: &Scenario) -> Result<()> {
        let path = Path::new(path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create scenario directory")?;
        }

        let json =
            serde_json::to_string_pretty(scenario).context("Failed to serialize scenario")?;

        fs::write(path, json).context("Failed to write scenario file")?;

        info!(
            "Saved scenario to {}: {} ratings",
            path.display(),
            scenario.ratings.len()
        );

        Ok(())
    }
}

impl ScenarioRepository for JsonScenarioRepository {
    fn load(&self, source: &str) -> Result<Scenario> {
        let content = fs::read_to_string(source)
            .with_context(|| format!("Failed to read scenario file: {}", source))?;

        let scenario: Scenario = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse scenario JSON: {}", source))?;

        info!(
            "Loaded scenario from {}: {} students, {} lecturers, {} reviewers, {} ratings",
            source,
            scenario.students.len(),
            scenario.lecturers.len(),
            scenario.reviewers.len(),
            scenario.ratings.len()
        );

        Ok(scenario)
    }
}

impl Default for JsonScenarioRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::scenario::RatingEvent;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_nonexistent_file() {
        let result = JsonScenarioRepository::new().load("/nonexistent/path/scenario.json");

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read scenario file"));
    }

    #[test]
    fn test_load_valid_scenario() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "students": [
                {"id": "student1", "name": "Tom", "surname": "Pane", "gender": "male",
                 "courses_in_progress": ["Math"], "finished_courses": []}
            ],
            "lecturers": [
                {"id": "lecturer1", "name": "Tony", "surname": "Stark", "courses_attached": ["Math"]}
            ],
            "ratings": [
                {"kind": "lecture", "rater": "student1", "target": "lecturer1", "course": "Math", "grade": 10}
            ]
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let scenario = JsonScenarioRepository::new()
            .load(file.path().to_str().unwrap())
            .unwrap();

        assert_eq!(scenario.students[0].name, "Tom");
        assert_eq!(scenario.lecturers[0].courses_attached, vec!["Math"]);
        assert!(scenario.reviewers.is_empty());
        assert_eq!(
            scenario.ratings,
            vec![RatingEvent::lecture("student1", "lecturer1", "Math", 10)]
        );
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = JsonScenarioRepository::new()
            .load(file.path().to_str().unwrap())
            .unwrap_err();

        assert!(err.to_string().contains("Failed to parse scenario JSON"));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/scenario.json");
        let path = path.to_str().unwrap();

        let mut scenario = Scenario::default();
        scenario
            .ratings
            .push(RatingEvent::homework("reviewer1", "student1", "Math", 7));

        let repo = JsonScenarioRepository::new();
        repo.save(path, &scenario).unwrap();

        // Reload and verify
        let loaded = repo.load(path).unwrap();
        assert_eq!(loaded, scenario);
    }
}
