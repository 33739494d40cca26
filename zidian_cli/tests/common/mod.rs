//!
//! # Test Common Utilities
//!
//! Helpers for the `zidian` CLI integration tests: an isolated data directory laid
//! out like the real `files/` folder, and a builder for commands pointed at it.
//!
//
// // # 测试通用工具
// //
// // 为 CLI 集成测试提供隔离的数据目录，以及指向该目录的命令构造函数。
// //
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Represents the context for a single test: a temporary working directory that
/// contains a `files/` data directory.
pub struct TestContext {
    /// Held for its Drop behavior to ensure cleanup.
    pub _temp_dir: TempDir,
    /// The `files/` directory inside the temporary directory.
    pub data_dir: PathBuf,
}

impl TestContext {
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = tempdir()?;
        let data_dir = temp_dir.path().join("files");
        fs::create_dir_all(&data_dir)?;
        Ok(TestContext {
            _temp_dir: temp_dir,
            data_dir,
        })
    }

    /// A `zidian` command run from the temporary directory, so the default
    /// `files/...` paths resolve inside it.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_zidian"));
        cmd.current_dir(self._temp_dir.path());
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn read_json(&self, name: &str) -> anyhow::Result<serde_json::Value> {
        let text = fs::read_to_string(self.path(name))?;
        Ok(serde_json::from_str(&text)?)
    }
}
