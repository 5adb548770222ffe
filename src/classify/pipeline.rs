use std::fmt;
use std::path::PathBuf;

use crate::classify::SubmissionRecord;
use crate::classify::fetch;
use crate::classify::metadata::{self, ClassificationMetadata};
use crate::classify::naming;
use crate::classify::resolve;
use crate::classify::store::{ArchiveStore, ArchiveTarget};
use crate::error::ClassifierError;
use crate::leetcode::JudgeApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolving,
    Naming,
    Archiving,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Resolving => "resolve",
            Stage::Naming => "name",
            Stage::Archiving => "archive",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArchivedSolution {
    pub title_slug: String,
    pub frontend_id: String,
    pub metadata: ClassificationMetadata,
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub content_hash: String,
}

#[derive(Debug)]
pub struct FailedSubmission {
    pub title_slug: String,
    pub stage: Stage,
    pub error: ClassifierError,
}

impl fmt::Display for FailedSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed at {}: {}",
            self.title_slug,
            self.stage.label(),
            self.error
        )
    }
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub archived: Vec<ArchivedSolution>,
    pub failed: Vec<FailedSubmission>,
}

impl BatchOutcome {
    pub fn processed(&self) -> usize {
        self.archived.len() + self.failed.len()
    }

    pub fn all_archived(&self) -> bool {
        self.failed.is_empty()
    }
}

fn process_submission<A: JudgeApi + ?Sized>(
    api: &A,
    store: &ArchiveStore,
    record: &SubmissionRecord,
) -> Result<ArchivedSolution, (Stage, ClassifierError)> {
    let slug = record.title_slug.as_str();

    let meta = metadata::extract(&record.source_code);
    if !meta.has_tag_annotation() {
        tracing::warn!(
            title_slug = slug,
            "add an `lct: tag, ...;` annotation to the submission; archiving at the store root"
        );
    }
    if meta.difficulty.is_none() {
        tracing::debug!(title_slug = slug, "no `lcd:` difficulty annotation");
    }

    let frontend_id =
        resolve::resolve(api, slug).map_err(|err| (Stage::Resolving, err))?;
    tracing::info!(title_slug = slug, %frontend_id, "resolved problem id");

    let file_name = naming::file_name(
        &frontend_id,
        slug,
        &record.language,
        meta.difficulty_label(),
    )
    .map_err(|err| (Stage::Naming, err))?;
    let target = ArchiveTarget::new(&meta.tags, file_name).map_err(|err| (Stage::Naming, err))?;

    let stored = store
        .archive(&target, &record.source_code)
        .map_err(|err| (Stage::Archiving, err))?;

    Ok(ArchivedSolution {
        title_slug: record.title_slug.clone(),
        frontend_id,
        metadata: meta,
        path: stored.path,
        relative_path: stored.relative_path,
        content_hash: stored.content_hash,
    })
}

/// Fetch one batch and archive each accepted submission in turn.
///
/// A fetch failure aborts the batch. Failures after that are recorded per
/// submission and processing moves on to the next one.
pub fn run_batch<A: JudgeApi + ?Sized>(
    api: &A,
    store: &ArchiveStore,
    limit: i64,
    offset: u32,
) -> Result<BatchOutcome, ClassifierError> {
    let records = fetch::fetch(api, limit, offset)?;
    let mut outcome = BatchOutcome::default();

    for record in &records {
        match process_submission(api, store, record) {
            Ok(archived) => {
                tracing::info!(
                    title_slug = %archived.title_slug,
                    path = %archived.path.display(),
                    "archived solution"
                );
                outcome.archived.push(archived);
            }
            Err((stage, error)) => {
                tracing::error!(
                    title_slug = %record.title_slug,
                    stage = stage.label(),
                    network = error.is_network(),
                    status = ?error.status_code(),
                    "{error}"
                );
                outcome.failed.push(FailedSubmission {
                    title_slug: record.title_slug.clone(),
                    stage,
                    error,
                });
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::{Stage, run_batch};
    use crate::classify::fetch::tests::raw;
    use crate::classify::store::ArchiveStore;
    use crate::error::ClassifierError;
    use crate::leetcode::{JudgeApi, QuestionEnvelope, SubmissionsPage};
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::tempdir;

    struct FakeJudge {
        page: SubmissionsPage,
        ids: BTreeMap<&'static str, &'static str>,
        lookups: RefCell<Vec<String>>,
    }

    impl FakeJudge {
        fn new(page: SubmissionsPage, ids: &[(&'static str, &'static str)]) -> Self {
            Self {
                page,
                ids: ids.iter().copied().collect(),
                lookups: RefCell::new(Vec::new()),
            }
        }
    }

    impl JudgeApi for FakeJudge {
        fn submissions(&self, _limit: u8, _offset: u32) -> Result<SubmissionsPage, ClassifierError> {
            Ok(self.page.clone())
        }

        fn question(&self, title_slug: &str) -> Result<QuestionEnvelope, ClassifierError> {
            self.lookups.borrow_mut().push(title_slug.to_string());
            let Some(id) = self.ids.get(title_slug) else {
                return Err(ClassifierError::HttpStatus {
                    endpoint: "graphql",
                    status: 500,
                });
            };
            Ok(serde_json::from_value(json!({
                "data": { "question": { "questionFrontendId": id, "titleSlug": title_slug } }
            }))
            .expect("valid envelope"))
        }
    }

    #[test]
    fn three_distinct_submissions_land_in_their_tag_directories() {
        let tmp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(tmp.path());
        let judge = FakeJudge::new(
            SubmissionsPage {
                submissions_dump: Some(vec![
                    raw("# lct: array, hashmap; lcd: Easy;", "two-sum", "python3", "Accepted"),
                    raw("// lct: dp; lcd: Easy;", "climbing-stairs", "cpp", "Accepted"),
                    raw("// lct: graph, bfs;", "number-of-islands", "java", "Accepted"),
                    raw("// wrong", "two-sum", "cpp", "Wrong Answer"),
                ]),
            },
            &[
                ("two-sum", "1"),
                ("climbing-stairs", "70"),
                ("number-of-islands", "200"),
            ],
        );

        let outcome = run_batch(&judge, &store, 4, 0).expect("batch runs");
        assert!(outcome.all_archived());
        assert_eq!(outcome.archived.len(), 3);
        assert_eq!(outcome.processed(), 3);

        assert!(tmp.path().join("array/hashmap/Easy-1-two-sum.py").is_file());
        assert!(tmp.path().join("dp/Easy-70-climbing-stairs.cpp").is_file());
        assert!(tmp.path().join("graph/bfs/200-number-of-islands.java").is_file());
        assert_eq!(
            fs::read_to_string(tmp.path().join("dp/Easy-70-climbing-stairs.cpp")).expect("read"),
            "// lct: dp; lcd: Easy;"
        );
    }

    #[test]
    fn per_submission_failures_do_not_stop_the_batch() {
        let tmp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(tmp.path());
        let judge = FakeJudge::new(
            SubmissionsPage {
                submissions_dump: Some(vec![
                    raw("// lct: a;", "unknown-slug", "cpp", "Accepted"),
                    raw("-- lct: sql;", "rust-only", "rust", "Accepted"),
                    raw("// lct: ../escape;", "escape", "cpp", "Accepted"),
                    raw("// lct: tree;", "same-tree", "c", "Accepted"),
                ]),
            },
            &[("rust-only", "5"), ("escape", "6"), ("same-tree", "100")],
        );

        let outcome = run_batch(&judge, &store, 4, 0).expect("fetch succeeds");
        assert_eq!(outcome.archived.len(), 1);
        assert_eq!(outcome.archived[0].frontend_id, "100");
        let stages: Vec<Stage> = outcome.failed.iter().map(|f| f.stage).collect();
        assert_eq!(stages, vec![Stage::Resolving, Stage::Naming, Stage::Naming]);
        assert!(outcome.failed[0].error.is_network());
        assert!(matches!(
            outcome.failed[1].error,
            ClassifierError::UnsupportedLanguage(_)
        ));
        assert!(
            outcome.failed[0]
                .to_string()
                .starts_with("unknown-slug failed at resolve")
        );
        assert!(tmp.path().join("tree/100-same-tree.c").is_file());
    }

    #[test]
    fn untagged_submission_is_written_at_store_root() {
        let tmp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(tmp.path());
        let judge = FakeJudge::new(
            SubmissionsPage {
                submissions_dump: Some(vec![raw("SELECT 1;", "big-countries", "mysql", "Accepted")]),
            },
            &[("big-countries", "595")],
        );

        let outcome = run_batch(&judge, &store, 1, 0).expect("batch runs");
        assert_eq!(outcome.archived.len(), 1);
        assert!(outcome.archived[0].metadata.tags.is_empty());
        assert!(tmp.path().join("595-big-countries.sql").is_file());
    }

    #[test]
    fn repeated_slugs_are_resolved_each_time() {
        let tmp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(tmp.path());
        let judge = FakeJudge::new(
            SubmissionsPage {
                submissions_dump: Some(vec![
                    raw("// lct: v2;", "two-sum", "cpp", "Accepted"),
                    raw("// lct: v1;", "two-sum", "cpp", "Accepted"),
                ]),
            },
            &[("two-sum", "1")],
        );

        let outcome = run_batch(&judge, &store, 2, 0).expect("batch runs");
        assert_eq!(outcome.archived.len(), 2);
        assert_eq!(judge.lookups.borrow().len(), 2);
    }

    #[test]
    fn empty_after_filter_writes_nothing() {
        let tmp = tempdir().expect("tempdir");
        let root = tmp.path().join("classification");
        let store = ArchiveStore::new(&root);
        let judge = FakeJudge::new(
            SubmissionsPage {
                submissions_dump: Some(vec![raw("x", "two-sum", "cpp", "Compile Error")]),
            },
            &[("two-sum", "1")],
        );

        let err = run_batch(&judge, &store, 1, 0).expect_err("nothing accepted");
        assert!(matches!(err, ClassifierError::DataMissing(_)));
        assert!(!root.exists());
        assert!(judge.lookups.borrow().is_empty());
    }
}
