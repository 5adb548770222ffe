use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

pub const STORE_DIR_NAME: &str = "classification";
pub const CREDENTIALS_FILE_NAME: &str = "cookie.json";

#[derive(Debug, Clone)]
pub struct ClassifierPaths {
    pub store_dir: PathBuf,
    pub credentials_file: PathBuf,
}

fn env_or_default_path(var: &str, fallback: PathBuf) -> PathBuf {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => fallback,
    }
}

pub fn resolve_paths_in(cwd: &Path) -> ClassifierPaths {
    ClassifierPaths {
        store_dir: env_or_default_path("LC_CLASSIFIER_STORE_DIR", cwd.join(STORE_DIR_NAME)),
        credentials_file: env_or_default_path(
            "LC_CLASSIFIER_CREDENTIALS",
            cwd.join(CREDENTIALS_FILE_NAME),
        ),
    }
}

pub fn resolve_paths() -> Result<ClassifierPaths> {
    let cwd = env::current_dir().context("current directory could not be resolved")?;
    Ok(resolve_paths_in(&cwd))
}
