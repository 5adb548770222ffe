use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::commands::classify::{self, ClassifyOptions};

#[derive(Debug, Parser)]
#[command(
    name = "lc-classifier",
    version,
    about = "Archive recently accepted LeetCode solutions into a tag-organized store"
)]
pub struct Cli {
    /// Number of most recent submissions to fetch (1-10).
    #[arg(default_value_t = 1, allow_negative_numbers = true)]
    pub limit: i64,
    /// Skip this many of the most recent submissions.
    #[arg(long)]
    pub offset: Option<u32>,
    /// Root of the archive store (default: ./classification).
    #[arg(long)]
    pub store_dir: Option<PathBuf>,
    /// JSON file mapping request header names to values (default: ./cookie.json).
    #[arg(long)]
    pub credentials: Option<PathBuf>,
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

fn print_report(report: &CommandReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let report = classify::run(&ClassifyOptions {
        limit: cli.limit,
        offset: cli.offset,
        store_dir: cli.store_dir,
        credentials: cli.credentials,
    })?;
    print_report(&report, cli.json)?;

    if !report.ok {
        anyhow::bail!("{} submission(s) could not be archived", report.issues.len());
    }
    Ok(())
}
