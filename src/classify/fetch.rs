use std::collections::HashSet;

use crate::classify::SubmissionRecord;
use crate::error::ClassifierError;
use crate::leetcode::{JudgeApi, RawSubmission, SubmissionsPage};

pub const MAX_BATCH_LIMIT: i64 = 10;
pub const ACCEPTED_STATUS: &str = "Accepted";

pub fn validate_limit(limit: i64) -> Result<u8, ClassifierError> {
    if !(1..=MAX_BATCH_LIMIT).contains(&limit) {
        return Err(ClassifierError::InvalidLimit(limit));
    }
    u8::try_from(limit).map_err(|_| ClassifierError::InvalidLimit(limit))
}

fn accepted_record(raw: RawSubmission) -> Option<SubmissionRecord> {
    if raw.status_display.as_deref() != Some(ACCEPTED_STATUS) {
        return None;
    }
    let (Some(source_code), Some(title_slug), Some(language)) =
        (raw.code, raw.title_slug, raw.lang)
    else {
        tracing::warn!("skipping accepted submission without code, title slug, or language");
        return None;
    };
    if source_code.is_empty() || title_slug.trim().is_empty() {
        tracing::warn!(%title_slug, "skipping accepted submission with empty code or slug");
        return None;
    }
    Some(SubmissionRecord {
        source_code,
        title_slug,
        language,
    })
}

/// Keep accepted submissions in API order, dropping later copies of identical code.
pub fn select_accepted(page: SubmissionsPage) -> Result<Vec<SubmissionRecord>, ClassifierError> {
    let Some(dump) = page.submissions_dump else {
        return Err(ClassifierError::data_missing(
            "no submissions (`submissions_dump`) found in the response data",
        ));
    };

    let total = dump.len();
    let mut seen_code = HashSet::new();
    let mut out = Vec::new();
    for record in dump.into_iter().filter_map(accepted_record) {
        if !seen_code.insert(record.source_code.clone()) {
            tracing::debug!(title_slug = %record.title_slug, "dropping duplicate submission code");
            continue;
        }
        out.push(record);
    }

    if out.is_empty() {
        return Err(ClassifierError::data_missing(format!(
            "no accepted submission found among {total} fetched"
        )));
    }
    Ok(out)
}

pub fn fetch<A: JudgeApi + ?Sized>(
    api: &A,
    limit: i64,
    offset: u32,
) -> Result<Vec<SubmissionRecord>, ClassifierError> {
    let limit = validate_limit(limit)?;
    tracing::info!(limit, offset, "fetching recent submissions");
    let page = api.submissions(limit, offset)?;
    let records = select_accepted(page)?;
    tracing::info!(accepted = records.len(), "selected accepted submissions");
    Ok(records)
}
