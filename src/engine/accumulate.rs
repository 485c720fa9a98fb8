use crate::content::bank::Test;
use crate::error::{PersonaError, Result};
use crate::types::answers::AnswerRecord;
use crate::types::score::ScoreMap;
use std::collections::BTreeSet;
use tracing::warn;

/// How the accumulator treats malformed or incomplete answer sets.
///
/// Strict fails fast on the first bad reference so content drift (a question
/// id typo, an undeclared category) surfaces immediately instead of silently
/// under-counting a dimension. Lenient skips the bad record and logs, for
/// callers that prefer a degraded result over no result. Duplicate answers
/// are an error under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePolicy {
    Strict,
    Lenient,
}

/// Reduces a completed attempt into per-category totals. Pure; answer order
/// never affects the sums.
pub fn accumulate(
    test: &Test,
    answers: &[AnswerRecord],
    policy: ReferencePolicy,
) -> Result<ScoreMap> {
    let mut scores = ScoreMap::new(&test.scoring_categories);
    let mut answered: BTreeSet<&str> = BTreeSet::new();

    for record in answers {
        if !answered.insert(record.question_id.as_str()) {
            return Err(PersonaError::DuplicateAnswer(record.question_id.clone()));
        }

        let question = match test.find_question(&record.question_id) {
            Some(question) => question,
            None if policy == ReferencePolicy::Strict => {
                return Err(PersonaError::UnknownQuestion(record.question_id.clone()));
            }
            None => {
                warn!(question = %record.question_id, "skipping answer for unknown question");
                continue;
            }
        };

        let option = match question.find_option(&record.option_id) {
            Some(option) => option,
            None if policy == ReferencePolicy::Strict => {
                return Err(PersonaError::UnknownOption {
                    question: record.question_id.clone(),
                    option: record.option_id.clone(),
                });
            }
            None => {
                warn!(
                    question = %record.question_id,
                    option = %record.option_id,
                    "skipping answer for unknown option"
                );
                continue;
            }
        };

        for (category, delta) in &option.scores {
            if scores.contains(category) {
                scores.add(category, *delta)?;
            } else if policy == ReferencePolicy::Strict {
                return Err(PersonaError::UndeclaredCategory {
                    question: question.id.clone(),
                    option: option.id.clone(),
                    category: category.clone(),
                });
            } else {
                warn!(
                    question = %question.id,
                    option = %option.id,
                    category = %category,
                    "skipping delta for undeclared category"
                );
            }
        }
    }

    for question in &test.questions {
        if !answered.contains(question.id.as_str()) {
            if policy == ReferencePolicy::Strict {
                return Err(PersonaError::MissingAnswer(question.id.clone()));
            }
            warn!(question = %question.id, "question unanswered; counting zero");
        }
    }

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bank::{AnswerOption, Question, Test};
    use std::collections::BTreeMap;

    fn option(id: &str, deltas: &[(&str, i32)]) -> AnswerOption {
        AnswerOption {
            id: id.to_string(),
            text: format!("option {id}"),
            scores: deltas
                .iter()
                .map(|(category, delta)| (category.to_string(), *delta))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn record(question: &str, option: &str) -> AnswerRecord {
        AnswerRecord {
            question_id: question.to_string(),
            option_id: option.to_string(),
        }
    }

    /// Two categories, two questions each touching one of them.
    fn two_axis_test() -> Test {
        Test {
            id: "two-axis".to_string(),
            name: "Two Axis".to_string(),
            scoring_categories: vec!["extraversion".to_string(), "agreeableness".to_string()],
            questions: vec![
                Question {
                    id: "q1".to_string(),
                    prompt: "q1".to_string(),
                    options: vec![
                        option("hi", &[("extraversion", 3)]),
                        option("lo", &[("extraversion", -3)]),
                    ],
                },
                Question {
                    id: "q2".to_string(),
                    prompt: "q2".to_string(),
                    options: vec![
                        option("hi", &[("agreeableness", 3)]),
                        option("lo", &[("agreeableness", -3)]),
                    ],
                },
            ],
        }
    }

    #[test]
    fn accumulate_sums_chosen_deltas_per_category() {
        let test = two_axis_test();
        let answers = vec![record("q1", "hi"), record("q2", "lo")];
        let scores =
            accumulate(&test, &answers, ReferencePolicy::Strict).expect("attempt should score");
        assert_eq!(scores.get("extraversion"), Some(3));
        assert_eq!(scores.get("agreeableness"), Some(-3));
    }

    #[test]
    fn answer_order_never_changes_the_totals() {
        let test = two_axis_test();
        let forward = vec![record("q1", "hi"), record("q2", "lo")];
        let backward = vec![record("q2", "lo"), record("q1", "hi")];

        let first =
            accumulate(&test, &forward, ReferencePolicy::Strict).expect("attempt should score");
        let second =
            accumulate(&test, &backward, ReferencePolicy::Strict).expect("attempt should score");
        assert_eq!(first, second);
    }

    #[test]
    fn key_set_is_exactly_the_declared_categories() {
        let test = two_axis_test();
        let answers = vec![record("q1", "hi"), record("q2", "hi")];
        let scores =
            accumulate(&test, &answers, ReferencePolicy::Strict).expect("attempt should score");
        let keys: Vec<&str> = scores.iter().map(|(category, _)| category).collect();
        assert_eq!(keys, vec!["extraversion", "agreeableness"]);
    }

    #[test]
    fn duplicate_answer_fails_under_both_policies() {
        let test = two_axis_test();
        let answers = vec![record("q1", "hi"), record("q1", "lo"), record("q2", "hi")];
        for policy in [ReferencePolicy::Strict, ReferencePolicy::Lenient] {
            let err = accumulate(&test, &answers, policy).expect_err("duplicate should fail");
            assert!(matches!(err, PersonaError::DuplicateAnswer(_)));
        }
    }

    #[test]
    fn strict_mode_rejects_unknown_question_and_option() {
        let test = two_axis_test();

        let unknown_question = vec![record("q9", "hi"), record("q1", "hi"), record("q2", "hi")];
        let err = accumulate(&test, &unknown_question, ReferencePolicy::Strict)
            .expect_err("unknown question should fail");
        assert!(matches!(err, PersonaError::UnknownQuestion(_)));

        let unknown_option = vec![record("q1", "zz"), record("q2", "hi")];
        let err = accumulate(&test, &unknown_option, ReferencePolicy::Strict)
            .expect_err("unknown option should fail");
        assert!(matches!(err, PersonaError::UnknownOption { .. }));
    }

    #[test]
    fn strict_mode_requires_an_answer_for_every_question() {
        let test = two_axis_test();
        let answers = vec![record("q1", "hi")];
        let err = accumulate(&test, &answers, ReferencePolicy::Strict)
            .expect_err("incomplete set should fail");
        match err {
            PersonaError::MissingAnswer(question) => assert_eq!(question, "q2"),
            other => panic!("expected MissingAnswer, got {other:?}"),
        }
    }

    #[test]
    fn lenient_mode_counts_bad_or_missing_records_as_zero() {
        let test = two_axis_test();
        let answers = vec![record("q1", "hi"), record("q9", "hi"), record("q2", "zz")];
        let scores =
            accumulate(&test, &answers, ReferencePolicy::Lenient).expect("lenient should score");
        assert_eq!(scores.get("extraversion"), Some(3));
        assert_eq!(scores.get("agreeableness"), Some(0));
    }

    #[test]
    fn strict_mode_rejects_deltas_for_undeclared_categories() {
        let mut test = two_axis_test();
        test.questions[0].options[0]
            .scores
            .insert("luck".to_string(), 2);
        let answers = vec![record("q1", "hi"), record("q2", "hi")];

        let err = accumulate(&test, &answers, ReferencePolicy::Strict)
            .expect_err("undeclared category should fail");
        assert!(matches!(err, PersonaError::UndeclaredCategory { .. }));

        let scores =
            accumulate(&test, &answers, ReferencePolicy::Lenient).expect("lenient should score");
        assert_eq!(scores.get("extraversion"), Some(3));
        assert!(scores.get("luck").is_none());
    }

    #[test]
    fn empty_answer_set_over_empty_test_yields_all_zeros() {
        let test = Test {
            id: "empty".to_string(),
            name: "Empty".to_string(),
            scoring_categories: vec!["extraversion".to_string()],
            questions: vec![],
        };
        let scores =
            accumulate(&test, &[], ReferencePolicy::Strict).expect("empty attempt should score");
        assert_eq!(scores.get("extraversion"), Some(0));
    }
}
