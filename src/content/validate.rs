use crate::content::bank::{QuestionBank, Test};
use crate::content::catalog::ProfileCatalog;
use crate::types::range::QualitativeRange;
use serde::Serialize;
use std::collections::BTreeSet;

/// Observed authoring range for score deltas.
const DELTA_MIN: i32 = -3;
const DELTA_MAX: i32 = 3;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    fn blocking(id: &str, title: &str, body: String) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking: true,
        }
    }

    fn warning(id: &str, title: &str, body: String) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking: false,
        }
    }
}

/// Authoring-time integrity check over the whole content pack. Runtime
/// scoring fails fast on the blocking subset anyway; running this first
/// tells content authors before a user ever hits the error.
pub fn validate_content(bank: &QuestionBank, catalog: &ProfileCatalog) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut declared_anywhere = BTreeSet::new();

    for test in bank.tests() {
        declared_anywhere.extend(test.scoring_categories.iter().cloned());
        validate_test(test, catalog, &mut findings);
    }

    for dimension in catalog.dimensions.keys() {
        if !declared_anywhere.contains(dimension) {
            findings.push(Finding::warning(
                "catalog.orphan_dimension",
                "Catalog dimension never declared",
                format!("Dimension {dimension} is not declared by any test."),
            ));
        }
    }

    findings
}

fn validate_test(test: &Test, catalog: &ProfileCatalog, findings: &mut Vec<Finding>) {
    let declared: BTreeSet<&str> = test
        .scoring_categories
        .iter()
        .map(String::as_str)
        .collect();

    if test.scoring_categories.len() < 2 {
        findings.push(Finding::warning(
            "bank.single_category",
            "Test cannot produce a secondary profile",
            format!(
                "Test {} declares {} scoring categories; results will have no secondary profile.",
                test.id,
                test.scoring_categories.len()
            ),
        ));
    }

    for category in &test.scoring_categories {
        for range in QualitativeRange::ALL {
            if !catalog.has_profile(category, range) {
                findings.push(Finding::blocking(
                    "catalog.missing_profile",
                    "Missing catalog profile",
                    format!(
                        "Test {} needs a profile for {category} at {} but the catalog has none.",
                        test.id,
                        range.as_str()
                    ),
                ));
            }
        }
    }

    let counts = test.questions_per_category();
    for (category, count) in &counts {
        if *count == 0 {
            findings.push(Finding::warning(
                "bank.unscored_category",
                "Declared category never scored",
                format!(
                    "Test {} declares {category} but no question scores it; it will always resolve to 0%.",
                    test.id
                ),
            ));
        }
    }

    let mut seen_questions = BTreeSet::new();
    for question in &test.questions {
        if !seen_questions.insert(question.id.as_str()) {
            findings.push(Finding::blocking(
                "bank.duplicate_question",
                "Duplicate question id",
                format!("Test {} declares question {} more than once.", test.id, question.id),
            ));
        }

        let mut seen_options = BTreeSet::new();
        for option in &question.options {
            if option.id.is_empty() {
                findings.push(Finding::blocking(
                    "bank.empty_option_id",
                    "Answer option without id",
                    format!(
                        "Question {} of test {} has an option with an empty id.",
                        question.id, test.id
                    ),
                ));
            }
            if !seen_options.insert(option.id.as_str()) {
                findings.push(Finding::blocking(
                    "bank.duplicate_option",
                    "Duplicate option id",
                    format!(
                        "Question {} of test {} declares option {} more than once.",
                        question.id, test.id, option.id
                    ),
                ));
            }

            for (category, delta) in &option.scores {
                if !declared.contains(category.as_str()) {
                    findings.push(Finding::blocking(
                        "bank.undeclared_category",
                        "Score delta for undeclared category",
                        format!(
                            "Option {} of question {} in test {} scores {category}, which the test does not declare.",
                            option.id, question.id, test.id
                        ),
                    ));
                }
                if *delta < DELTA_MIN || *delta > DELTA_MAX {
                    findings.push(Finding::warning(
                        "bank.delta_out_of_range",
                        "Score delta outside expected range",
                        format!(
                            "Option {} of question {} in test {} carries delta {delta} for {category}; expected {DELTA_MIN}..{DELTA_MAX}.",
                            option.id, question.id, test.id
                        ),
                    ));
                }
            }
        }
    }
}
