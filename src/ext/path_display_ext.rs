use std::path::{self, Path, PathBuf};

/// Absolute form of `path` for messages. Purely lexical, so it also works for
/// paths that do not exist.
pub fn absolute_path_display(path: &Path) -> String {
    path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

pub trait PathDisplayExt {
    fn absolute_display(&self) -> String;
}

impl PathDisplayExt for Path {
    fn absolute_display(&self) -> String {
        absolute_path_display(self)
    }
}

impl PathDisplayExt for PathBuf {
    fn absolute_display(&self) -> String {
        absolute_path_display(self)
    }
}
