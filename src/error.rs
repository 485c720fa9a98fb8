use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonaError {
    #[error("content directory not found: {0}")]
    ContentDirNotFound(String),

    #[error("content parse error: {0}")]
    ContentParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("answer set parse error: {0}")]
    AnswersParse(String),

    #[error("unknown test: {0}")]
    UnknownTest(String),

    #[error("answer references unknown question: {0}")]
    UnknownQuestion(String),

    #[error("answer for question {question} references unknown option: {option}")]
    UnknownOption { question: String, option: String },

    #[error("option {option} of question {question} scores undeclared category: {category}")]
    UndeclaredCategory {
        question: String,
        option: String,
        category: String,
    },

    #[error("score map rejects undeclared category key: {0}")]
    UndeclaredScoreKey(String),

    #[error("duplicate answer for question: {0}")]
    DuplicateAnswer(String),

    #[error("missing answer for question: {0}")]
    MissingAnswer(String),

    #[error("test {0} declares no scoring categories")]
    NoCategories(String),

    #[error("catalog has no profile for category {category} at range {range}")]
    MissingProfile { category: String, range: String },

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersonaError>;
