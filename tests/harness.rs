//! Test harness for pomelo integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dirs");
        full_path
    }

    /// Build the directory layout the listing tests share: a dotfile, a dot
    /// directory with plain files inside, and two levels of regular folders.
    pub fn with_listing_fixture() -> Self {
        let tree = Self::new();
        tree.add_file(".systemFile", "");
        tree.add_file(".systemFolder/fileInSystemFolder", "");
        tree.add_file(".systemFolder/somethingElse", "");
        tree.add_file("file1Level0.ext", "");
        tree.add_file("regularFolderLevel1/file1Level1.ext", "");
        tree.add_file("regularFolderLevel1/file2Level1.ext2", "");
        tree.add_file("regularFolderLevel1/regularFolderLevel2/differentName.ext", "");
        tree.add_file("regularFolderLevel1/regularFolderLevel2/file1Level2.ext3", "");
        tree.add_file("regularFolderLevel1/regularFolderLevel2/file2Level2.ext4", "");
        tree
    }
}

#[allow(dead_code)]
pub fn run_pomelo(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_pomelo");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run pomelo");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("sub/test.txt", "content");
        assert!(file_path.exists());
    }

    #[test]
    fn test_harness_fixture_layout() {
        let tree = TestTree::with_listing_fixture();
        assert!(tree.path().join(".systemFolder/somethingElse").exists());
        assert!(
            tree.path()
                .join("regularFolderLevel1/regularFolderLevel2/differentName.ext")
                .exists()
        );
    }
}
