pub mod config;
pub mod fetch;
pub mod metadata;
pub mod naming;
pub mod paths;
pub mod pipeline;
pub mod resolve;
pub mod store;

/// One accepted submission, as selected from a single fetch batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub source_code: String,
    pub title_slug: String,
    pub language: String,
}
