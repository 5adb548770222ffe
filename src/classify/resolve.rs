use crate::error::ClassifierError;
use crate::leetcode::{JudgeApi, QuestionEnvelope};

pub fn frontend_id_from(
    envelope: QuestionEnvelope,
    title_slug: &str,
) -> Result<String, ClassifierError> {
    let question = envelope.data.and_then(|data| data.question);
    let Some(question) = question else {
        let detail = envelope
            .errors
            .first()
            .map(|err| format!(" ({})", err.message))
            .unwrap_or_default();
        return Err(ClassifierError::data_missing(format!(
            "no question data for `{title_slug}`{detail}"
        )));
    };

    if let Some(returned) = question.title_slug.as_deref()
        && returned != title_slug
    {
        tracing::warn!(title_slug, returned, "question lookup returned a different slug");
    }

    match question.question_frontend_id {
        Some(id) if !id.trim().is_empty() => {
            tracing::debug!(
                title_slug,
                frontend_id = %id,
                question_id = question.question_id.as_deref().unwrap_or("?"),
                title = question.title.as_deref().unwrap_or("?"),
                "resolved question"
            );
            Ok(id.trim().to_string())
        }
        _ => Err(ClassifierError::data_missing(format!(
            "question frontend id (`questionFrontendId`) not found for `{title_slug}`"
        ))),
    }
}

pub fn resolve<A: JudgeApi + ?Sized>(api: &A, title_slug: &str) -> Result<String, ClassifierError> {
    let envelope = api.question(title_slug)?;
    frontend_id_from(envelope, title_slug)
}
