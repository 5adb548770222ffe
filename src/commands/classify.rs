use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::classify::config::load_config;
use crate::classify::paths::resolve_paths;
use crate::classify::pipeline::run_batch;
use crate::classify::store::ArchiveStore;
use crate::commands::CommandReport;
use crate::leetcode::client::LeetCodeClient;

#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub limit: i64,
    pub offset: Option<u32>,
    pub store_dir: Option<PathBuf>,
    pub credentials: Option<PathBuf>,
}

pub fn run(opts: &ClassifyOptions) -> Result<CommandReport> {
    let mut paths = resolve_paths()?;
    if let Some(store_dir) = &opts.store_dir {
        paths.store_dir = store_dir.clone();
    }
    if let Some(credentials) = &opts.credentials {
        paths.credentials_file = credentials.clone();
    }
    let cfg = load_config()?;
    let offset = opts.offset.unwrap_or(cfg.fetch.offset);

    let mut report = CommandReport::new("classify");
    report.detail(format!("store_dir={}", paths.store_dir.display()));
    report.detail(format!("limit={} offset={offset}", opts.limit));

    let client = LeetCodeClient::new(cfg.api, paths.credentials_file.clone())?;
    let store = ArchiveStore::new(paths.store_dir);
    let outcome = run_batch(&client, &store, opts.limit, offset).with_context(|| {
        format!(
            "failed to fetch recent submissions (credentials: {})",
            paths.credentials_file.display()
        )
    })?;

    for archived in &outcome.archived {
        let difficulty = archived.metadata.difficulty_label().unwrap_or("-");
        report.detail(format!(
            "archived {} id={} difficulty={} sha256={}",
            archived.relative_path.display(),
            archived.frontend_id,
            difficulty,
            archived.content_hash
        ));
    }
    for failed in &outcome.failed {
        report.issue(failed.to_string());
    }
    report.detail(format!(
        "archived {} of {} submissions into {}",
        outcome.archived.len(),
        outcome.processed(),
        store.root().display()
    ));
    if outcome.all_archived() {
        report.detail("Success");
    }

    Ok(report)
}
