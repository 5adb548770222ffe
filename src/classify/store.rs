use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::ClassifierError;

/// Where one solution lands, relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveTarget {
    pub directory: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct StoredFile {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub content_hash: String,
}

/// Join tags into a relative directory, one or more segments per tag.
///
/// Tags may nest (`graph/bfs`). Empty and `.` segments are skipped; anything
/// that would climb out of the store or re-root the path is rejected.
pub fn tag_directory(tags: &[String]) -> Result<PathBuf, ClassifierError> {
    let mut dir = PathBuf::new();
    for tag in tags {
        for component in Path::new(tag).components() {
            match component {
                Component::Normal(segment) => dir.push(segment),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(ClassifierError::UnsafePath(format!("tag `{tag}`")));
                }
            }
        }
    }
    Ok(dir)
}

impl ArchiveTarget {
    pub fn new(tags: &[String], file_name: impl Into<String>) -> Result<Self, ClassifierError> {
        let file_name = file_name.into();
        let mut components = Path::new(&file_name).components();
        let single_segment = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_segment || file_name.contains(['/', '\\']) {
            return Err(ClassifierError::UnsafePath(format!("file name `{file_name}`")));
        }
        Ok(Self {
            directory: tag_directory(tags)?,
            file_name,
        })
    }

    pub fn relative_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

pub fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone)]
pub struct ArchiveStore {
    root: PathBuf,
}

impl ArchiveStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` to the target, creating missing directories and
    /// replacing any file already at that path.
    pub fn archive(
        &self,
        target: &ArchiveTarget,
        content: &str,
    ) -> Result<StoredFile, ClassifierError> {
        let dir = self.root.join(&target.directory);
        fs::create_dir_all(&dir).map_err(|err| ClassifierError::io(&dir, err))?;

        let path = dir.join(&target.file_name);
        fs::write(&path, content).map_err(|err| ClassifierError::io(&path, err))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote solution");

        Ok(StoredFile {
            path,
            relative_path: target.relative_path(),
            content_hash: content_hash(content.as_bytes()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ArchiveStore, ArchiveTarget, content_hash, tag_directory};
    use crate::error::ClassifierError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn tags_join_in_order() {
        let dir = tag_directory(&tags(&["array", "hashmap"])).expect("safe tags");
        assert_eq!(dir, PathBuf::from("array").join("hashmap"));
    }

    #[test]
    fn no_tags_means_store_root() {
        assert_eq!(tag_directory(&[]).expect("empty"), PathBuf::new());
    }

    #[test]
    fn empty_and_nested_tags() {
        let dir = tag_directory(&tags(&["graph/bfs", "", "."])).expect("safe tags");
        assert_eq!(dir, PathBuf::from("graph").join("bfs"));
    }

    #[test]
    fn escaping_tags_are_rejected() {
        for bad in ["..", "a/../../etc", "/etc"] {
            let err = tag_directory(&tags(&[bad])).expect_err("escape rejected");
            assert!(matches!(err, ClassifierError::UnsafePath(_)), "tag {bad}");
        }
    }

    #[test]
    fn file_name_must_be_a_single_segment() {
        assert!(ArchiveTarget::new(&[], "1-two-sum.py").is_ok());
        for bad in ["a/b.py", "..", "", "x\\y.py"] {
            assert!(
                matches!(
                    ArchiveTarget::new(&[], bad),
                    Err(ClassifierError::UnsafePath(_))
                ),
                "file name {bad:?}"
            );
        }
    }

    #[test]
    fn archive_round_trips_content() {
        let tmp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(tmp.path().join("classification"));
        let target =
            ArchiveTarget::new(&tags(&["array", "hashmap"]), "Easy-1-two-sum.py").expect("target");
        let code = "class Solution:\n    # lct: array, hashmap; lcd: Easy;\n    pass\n";

        let stored = store.archive(&target, code).expect("archive");
        assert_eq!(
            stored.path,
            tmp.path()
                .join("classification/array/hashmap/Easy-1-two-sum.py")
        );
        assert_eq!(fs::read_to_string(&stored.path).expect("read back"), code);
        assert_eq!(stored.content_hash, content_hash(code.as_bytes()));
        assert_eq!(
            stored.relative_path,
            PathBuf::from("array/hashmap/Easy-1-two-sum.py")
        );
    }

    #[test]
    fn archive_overwrites_and_tolerates_existing_dirs() {
        let tmp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(tmp.path());
        let target = ArchiveTarget::new(&tags(&["dp"]), "70-climbing-stairs.cpp").expect("target");

        store
            .archive(&target, "a much longer first version of the file")
            .expect("first write");
        let stored = store.archive(&target, "short").expect("second write");
        assert_eq!(fs::read_to_string(stored.path).expect("read"), "short");
    }

    #[test]
    fn archive_without_tags_writes_at_root() {
        let tmp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(tmp.path());
        let target = ArchiveTarget::new(&[], "1-two-sum.c").expect("target");
        let stored = store.archive(&target, "int main(){}").expect("write");
        assert_eq!(stored.path, tmp.path().join("1-two-sum.c"));
    }

    #[test]
    fn archive_surfaces_io_errors() {
        let tmp = tempdir().expect("tempdir");
        let blocker = tmp.path().join("array");
        fs::write(&blocker, "not a directory").expect("write blocker");
        let store = ArchiveStore::new(tmp.path());
        let target = ArchiveTarget::new(&tags(&["array"]), "1-two-sum.py").expect("target");

        let err = store.archive(&target, "x").expect_err("dir blocked by file");
        assert!(matches!(err, ClassifierError::Io { .. }));
    }
}
