use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use crate::common::constants::{AUDIO_STALE_SUFFIX, AUDIO_SUFFIX};
use crate::rename::RenameError;

/// Returns the corrected name for an audio file, or `None` if it does not need one.
///
/// Only a name ending in `_.mp3` matches, and exactly one underscore is removed:
/// `ni3hao3_.mp3` becomes `ni3hao3.mp3`, `a__.mp3` becomes `a_.mp3`.
//
// // 计算音频文件的新名称；不需要重命名时返回 `None`。
pub fn renamed_name(name: &str) -> Option<String> {
    name.strip_suffix(AUDIO_STALE_SUFFIX)
        .map(|stem| format!("{stem}{AUDIO_SUFFIX}"))
}

/// A single pending rename inside the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTask {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// The work derived from one enumeration of the directory.
///
/// The directory is listed exactly once, when the plan is built. Files that appear
/// afterwards are never part of it. Since [`renamed_name`] is injective, no two tasks
/// share a target.
//
// // 对目录进行一次快照后得到的重命名计划。
#[derive(Debug)]
pub struct RenamePlan {
    pub(crate) dir: PathBuf,
    pub(crate) tasks: Vec<RenameTask>,
    pub(crate) skipped: usize,
    /// 快照时目录中存在的所有名称，用于判定目标名冲突
    pub(crate) snapshot: HashSet<OsString>,
}

impl RenamePlan {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 待执行的任务，按源文件名排序
    pub fn tasks(&self) -> &[RenameTask] {
        &self.tasks
    }

    /// 未匹配规则或不是普通文件的条目数量
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether the target name of `task` was already taken when the directory was listed.
    pub fn collides(&self, task: &RenameTask) -> bool {
        task.target
            .file_name()
            .is_some_and(|name| self.snapshot.contains(name))
    }

    /// Tasks that are known to fail with a collision before anything runs.
    pub fn predicted_collisions(&self) -> impl Iterator<Item = &RenameTask> {
        self.tasks.iter().filter(|task| self.collides(task))
    }
}

/// 枚举目录（不递归），为每个需要改名的普通文件生成任务。
pub fn plan_directory(dir: &Path) -> Result<RenamePlan, RenameError> {
    let read_dir_error = |source| RenameError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut tasks = Vec::new();
    let mut skipped = 0;
    let mut snapshot = HashSet::new();

    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_name = entry.file_name();
        let path = entry.path();
        snapshot.insert(file_name.clone());

        // 跟随符号链接判断，与普通文件同等对待
        if !path.is_file() {
            skipped += 1;
            continue;
        }
        match file_name.to_str().and_then(renamed_name) {
            Some(new_name) => tasks.push(RenameTask {
                target: dir.join(new_name),
                source: path,
            }),
            None => skipped += 1,
        }
    }

    tasks.sort_by(|a, b| a.source.cmp(&b.source));
    tracing::debug!(
        dir = %dir.display(),
        tasks = tasks.len(),
        skipped,
        "planned renames"
    );

    Ok(RenamePlan {
        dir: dir.to_path_buf(),
        tasks,
        skipped,
        snapshot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_renamed_name_matching() {
        assert_eq!(renamed_name("ni3hao3_.mp3").as_deref(), Some("ni3hao3.mp3"));
        assert_eq!(renamed_name("ni3hao3.mp3"), None);
        assert_eq!(renamed_name("notes.txt"), None);
        assert_eq!(renamed_name("_.mp3").as_deref(), Some(".mp3"));
    }

    #[test]
    fn test_renamed_name_strips_one_underscore() {
        assert_eq!(renamed_name("a__.mp3").as_deref(), Some("a_.mp3"));
        assert_eq!(renamed_name("a_.mp3_.mp3").as_deref(), Some("a_.mp3.mp3"));
        assert_eq!(renamed_name("a_.MP3"), None);
        assert_eq!(renamed_name("a_.mp3.bak"), None);
    }

    #[test]
    fn test_plan_skips_directories_and_non_matching() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ma1_.mp3"), "a").unwrap();
        fs::write(dir.path().join("ma2.mp3"), "b").unwrap();
        fs::write(dir.path().join("notes.txt"), "c").unwrap();
        fs::create_dir(dir.path().join("sub_.mp3")).unwrap();

        let plan = plan_directory(dir.path()).unwrap();
        assert_eq!(plan.tasks().len(), 1);
        assert_eq!(plan.skipped(), 3);
        assert_eq!(plan.tasks()[0].source, dir.path().join("ma1_.mp3"));
        assert_eq!(plan.tasks()[0].target, dir.path().join("ma1.mp3"));
        assert_eq!(plan.predicted_collisions().count(), 0);
    }

    #[test]
    fn test_plan_predicts_collisions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ma1_.mp3"), "new").unwrap();
        fs::write(dir.path().join("ma1.mp3"), "existing").unwrap();
        fs::write(dir.path().join("ma2_.mp3"), "x").unwrap();

        let plan = plan_directory(dir.path()).unwrap();
        let collisions: Vec<_> = plan.predicted_collisions().collect();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].source, dir.path().join("ma1_.mp3"));
    }

    #[test]
    fn test_plan_missing_directory() {
        let dir = tempdir().unwrap();
        let err = plan_directory(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, RenameError::ReadDir { .. }));
    }
}
