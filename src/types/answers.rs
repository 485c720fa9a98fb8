use serde::{Deserialize, Serialize};

/// One chosen option for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    pub option_id: String,
}

/// A completed attempt as submitted by the quiz UI: one record per question,
/// in question order. Reference and coverage checks happen in the
/// accumulator, not at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    pub test_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    pub answers: Vec<AnswerRecord>,
}
