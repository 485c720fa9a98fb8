use crate::error::{PersonaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

pub const TESTS_DIR: &str = "tests";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    /// Category -> score delta. Omitted categories contribute nothing;
    /// explicit zeros still mark the question as touching the category.
    #[serde(default)]
    pub scores: BTreeMap<String, i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn find_option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub id: String,
    pub name: String,
    /// Declared scoring vocabulary; also the ranking tie-break order.
    pub scoring_categories: Vec<String>,
    pub questions: Vec<Question>,
}

impl Test {
    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    /// Number of questions able to contribute to each declared category: a
    /// question counts when any of its options carries the category key.
    /// This is the q in the theoretical score range [-3q, +3q].
    pub fn questions_per_category(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = self
            .scoring_categories
            .iter()
            .map(|category| (category.clone(), 0))
            .collect();
        for question in &self.questions {
            for category in self.scoring_categories.iter() {
                let touches = question
                    .options
                    .iter()
                    .any(|option| option.scores.contains_key(category));
                if touches {
                    if let Some(count) = counts.get_mut(category) {
                        *count += 1;
                    }
                }
            }
        }
        counts
    }
}

/// All tests known to the application. Loaded once from static content;
/// immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    tests: Vec<Test>,
}

impl QuestionBank {
    pub fn load(content_root: &Path) -> Result<Self> {
        let tests_dir = content_root.join(TESTS_DIR);
        if !tests_dir.is_dir() {
            return Err(PersonaError::ContentDirNotFound(
                tests_dir.display().to_string(),
            ));
        }

        let mut paths: Vec<_> = WalkDir::new(&tests_dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.path().to_path_buf())
            .filter(|path| path.extension().map(|ext| ext == "json").unwrap_or(false))
            .collect();
        paths.sort();

        let mut tests = Vec::with_capacity(paths.len());
        for path in paths {
            let raw = std::fs::read_to_string(&path)?;
            let test: Test = serde_json::from_str(&raw).map_err(|e| {
                PersonaError::ContentParse(format!("{}: {}", path.display(), e))
            })?;
            tests.push(test);
        }
        Ok(Self { tests })
    }

    pub fn from_tests(tests: Vec<Test>) -> Self {
        Self { tests }
    }

    pub fn find_test(&self, test_id: &str) -> Result<&Test> {
        self.tests
            .iter()
            .find(|test| test.id == test_id)
            .ok_or_else(|| PersonaError::UnknownTest(test_id.to_string()))
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_test() -> Test {
        serde_json::from_str(
            r#"{
                "id": "mini",
                "name": "Mini Test",
                "scoringCategories": ["extraversion", "agreeableness"],
                "questions": [
                    {
                        "id": "q1",
                        "prompt": "A party invitation arrives. You…",
                        "options": [
                            {"id": "a", "text": "Go immediately", "scores": {"extraversion": 3}},
                            {"id": "b", "text": "Stay home", "scores": {"extraversion": -3}}
                        ]
                    },
                    {
                        "id": "q2",
                        "prompt": "A friend needs help moving. You…",
                        "options": [
                            {"id": "a", "text": "Offer the whole weekend", "scores": {"agreeableness": 3, "extraversion": 0}},
                            {"id": "b", "text": "Decline", "scores": {"agreeableness": -3}}
                        ]
                    }
                ]
            }"#,
        )
        .expect("sample test should parse")
    }

    #[test]
    fn load_reads_every_json_document_under_tests_dir() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join(TESTS_DIR)).expect("tests dir should create");
        let test = sample_test();
        fs::write(
            dir.path().join("tests/mini.json"),
            serde_json::to_string(&test).expect("test should serialize"),
        )
        .expect("test document should write");
        fs::write(dir.path().join("tests/notes.txt"), "ignored").expect("note should write");

        let bank = QuestionBank::load(dir.path()).expect("bank should load");
        assert_eq!(bank.tests().len(), 1);
        assert_eq!(bank.find_test("mini").expect("test should exist").name, "Mini Test");
    }

    #[test]
    fn load_fails_without_tests_dir() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = QuestionBank::load(dir.path()).expect_err("missing dir should fail");
        assert!(matches!(err, PersonaError::ContentDirNotFound(_)));
    }

    #[test]
    fn load_surfaces_malformed_documents_with_their_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join(TESTS_DIR)).expect("tests dir should create");
        fs::write(dir.path().join("tests/broken.json"), "{not json").expect("broken write");

        let err = QuestionBank::load(dir.path()).expect_err("broken document should fail");
        match err {
            PersonaError::ContentParse(message) => assert!(message.contains("broken.json")),
            other => panic!("expected ContentParse, got {other:?}"),
        }
    }

    #[test]
    fn find_test_reports_unknown_ids() {
        let bank = QuestionBank::from_tests(vec![sample_test()]);
        let err = bank.find_test("nope").expect_err("unknown id should fail");
        assert!(matches!(err, PersonaError::UnknownTest(_)));
    }

    #[test]
    fn questions_per_category_counts_touching_questions_only() {
        let test = sample_test();
        let counts = test.questions_per_category();
        // q1 touches extraversion only; q2 touches both (explicit zero counts)
        assert_eq!(counts["extraversion"], 2);
        assert_eq!(counts["agreeableness"], 1);
    }
}
