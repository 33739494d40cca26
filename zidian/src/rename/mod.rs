//! Bulk renaming of tone recordings.
//!
//! Audio files named `<syllable>_.mp3` are renamed to `<syllable>.mp3`. The directory
//! is listed once into a [`RenamePlan`], then every rename runs as an independent task
//! on a rayon thread pool. Each task's outcome is collected into a [`RenameReport`].
//!
//! Collisions are never resolved by overwriting: when the target name exists (either
//! in the listing or on disk at rename time) that task fails and the rest continue.

use std::io;
use std::path::{Path, PathBuf};

mod execute;
mod plan;

pub use plan::{RenamePlan, RenameTask, plan_directory, renamed_name};

/// Errors that stop the whole batch before any rename runs.
//
// // 使整个批处理无法开始的错误。
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("Failed to list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("The number of worker threads must be at least 1")]
    InvalidJobs,

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Why a single rename failed.
//
// // 单个重命名任务失败的原因。
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// 目标文件名已被占用
    #[error("Target already exists: {0}")]
    Collision(PathBuf),

    /// 权限不足、源文件已消失等
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug)]
pub struct RenameFailure {
    pub task: RenameTask,
    pub error: TaskError,
}

/// Aggregate result of one batch.
#[derive(Debug, Default)]
pub struct RenameReport {
    /// Renames that completed, in source-name order.
    pub renamed: Vec<RenameTask>,
    /// Entries that did not need renaming.
    pub skipped: usize,
    pub failures: Vec<RenameFailure>,
}

impl RenameReport {
    pub fn succeeded(&self) -> usize {
        self.renamed.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 列出 `dir` 并以 `jobs` 个工作线程执行全部重命名。
pub fn rename_directory(dir: &Path, jobs: Option<usize>) -> Result<RenameReport, RenameError> {
    plan_directory(dir)?.execute(jobs)
}
