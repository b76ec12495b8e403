//! Temporary workspaces for CLI input files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("write input file");
        path
    }
}

pub(super) fn parse_output(buffer: &[u8]) -> serde_json::Value {
    let text = std::str::from_utf8(buffer).expect("utf-8 output");
    assert!(text.ends_with('\n'), "output should end with a newline");
    serde_json::from_str(text).expect("output is JSON")
}
