use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::PathDisplayExt;
use crate::filesystem::{Node, Tree};

/// One directory entry as seen by the builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File { size: u64 },
    Directory,
}

/// Source of directory listings for the builder.
pub trait DirectoryLister {
    fn list(&self, path: &Path) -> Result<Vec<RawEntry>, TraversalError>;
}

/// Lists directories on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<RawEntry>, TraversalError> {
        // The handle is dropped when this returns, before any recursion.
        fs::read_dir(path)
            .context(OpenSnafu { path })?
            .map(|entry| {
                let entry = entry.context(ListSnafu { path })?;
                // Does not follow symlinks, so links are leaves.
                let metadata = entry.metadata().context(ListSnafu {
                    path: entry.path(),
                })?;
                let kind = if metadata.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File {
                        size: metadata.len(),
                    }
                };
                Ok::<_, TraversalError>(RawEntry {
                    name: entry.file_name(),
                    kind,
                })
            })
            .collect()
    }
}

/// Walks `path` and returns its direct children, sorted by name, with full
/// subtrees attached to directories.
///
/// Only a failure to read `path` itself is returned as an error. A
/// subdirectory that cannot be read is kept as a directory with no children.
pub fn build(path: &Path) -> Result<Tree, TraversalError> {
    build_with(&FsLister, path)
}

pub fn build_with(lister: &impl DirectoryLister, path: &Path) -> Result<Tree, TraversalError> {
    let mut entries = lister.list(path)?;
    // Raw name bytes, not the lossy display form.
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(
        "Read {} entries from {}",
        entries.len(),
        path.absolute_display()
    );

    let tree = entries
        .into_iter()
        .map(|entry| node_from_entry(lister, path, entry))
        .collect();

    Ok(tree)
}

fn node_from_entry(lister: &impl DirectoryLister, parent: &Path, entry: RawEntry) -> Node {
    let name = entry.name.to_string_lossy().into_owned();

    if let EntryKind::File { size } = entry.kind {
        return Node::file(name, size);
    }

    let child_path = parent.join(&entry.name);
    let children = match build_with(lister, &child_path) {
        Ok(children) => children,
        Err(e) => {
            debug!("Skipping unreadable subtree {}: {e:?}", e.path().display());
            Tree::new()
        }
    };

    Node::directory(name, children)
}

#[derive(Debug, Snafu)]
pub enum TraversalError {
    #[snafu(display("Failed to open directory {}", path.absolute_display()))]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to list entries of {}", path.absolute_display()))]
    ListError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TraversalError {
    pub fn path(&self) -> &Path {
        match self {
            TraversalError::OpenError { path, .. } | TraversalError::ListError { path, .. } => path,
        }
    }
}
