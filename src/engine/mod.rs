pub mod accumulate;
pub mod resolve;

use crate::content::bank::Test;
use crate::content::catalog::ProfileCatalog;
use crate::error::Result;
use crate::types::answers::AnswerSet;
use crate::types::result::ResultSummary;
use accumulate::{accumulate, ReferencePolicy};
use resolve::{resolve, ResolveContext};

/// Scores one completed attempt end to end: accumulate the chosen deltas,
/// then resolve them into the ranked, narrated summary.
pub fn score_attempt(
    test: &Test,
    answers: &AnswerSet,
    catalog: &ProfileCatalog,
    policy: ReferencePolicy,
) -> Result<ResultSummary> {
    let scores = accumulate(test, &answers.answers, policy)?;
    let questions_per_category = test.questions_per_category();
    let context = ResolveContext {
        test_id: &test.id,
        respondent: answers.respondent.as_deref(),
        questions_per_category: &questions_per_category,
    };
    resolve(&scores, &context, catalog)
}
