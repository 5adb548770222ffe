pub mod client;
pub mod credentials;

use serde::Deserialize;

use crate::error::ClassifierError;

/// Raw payload of the REST submissions endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionsPage {
    #[serde(default)]
    pub submissions_dump: Option<Vec<RawSubmission>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub title_slug: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub status_display: Option<String>,
}

/// Raw payload of the `questionTitle` GraphQL query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionEnvelope {
    #[serde(default)]
    pub data: Option<QuestionData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionData {
    #[serde(default)]
    pub question: Option<Question>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub question_id: Option<String>,
    #[serde(default)]
    pub question_frontend_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: String,
}

/// Judge operations the classification pipeline depends on.
pub trait JudgeApi {
    fn submissions(&self, limit: u8, offset: u32) -> Result<SubmissionsPage, ClassifierError>;
    fn question(&self, title_slug: &str) -> Result<QuestionEnvelope, ClassifierError>;
}
