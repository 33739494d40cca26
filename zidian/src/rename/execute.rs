use std::fs;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use crate::rename::plan::{RenamePlan, RenameTask};
use crate::rename::{RenameError, RenameFailure, RenameReport, TaskError};

impl RenamePlan {
    /// Runs every task on a pool of `jobs` worker threads and waits for all of them.
    ///
    /// `None` sizes the pool to the available parallelism. A failing task never stops
    /// the others; its error is collected into the report.
    pub fn execute(&self, jobs: Option<usize>) -> Result<RenameReport, RenameError> {
        self.execute_with(jobs, |_, _| {})
    }

    /// Like [`execute`](Self::execute), calling `on_done` from the worker thread as each
    /// task finishes.
    //
    // // 与 `execute` 相同，但在每个任务完成时于工作线程中回调 `on_done`（用于进度条）。
    pub fn execute_with<F>(&self, jobs: Option<usize>, on_done: F) -> Result<RenameReport, RenameError>
    where
        F: Fn(&RenameTask, Result<(), &TaskError>) + Sync,
    {
        if jobs == Some(0) {
            return Err(RenameError::InvalidJobs);
        }
        // num_threads(0) 表示使用 rayon 的默认线程数
        let pool = ThreadPoolBuilder::new()
            .num_threads(jobs.unwrap_or(0))
            .thread_name(|i| format!("zidian-rename-{i}"))
            .build()?;

        tracing::debug!(
            dir = %self.dir.display(),
            tasks = self.tasks.len(),
            workers = pool.current_num_threads(),
            "starting renames"
        );

        let outcomes: Vec<(RenameTask, Result<(), TaskError>)> = pool.install(|| {
            self.tasks
                .par_iter()
                .map(|task| {
                    let result = self.run_task(task);
                    on_done(task, result.as_ref().map(|_| ()));
                    (task.clone(), result)
                })
                .collect()
        });

        let mut report = RenameReport {
            renamed: Vec::new(),
            skipped: self.skipped,
            failures: Vec::new(),
        };
        for (task, result) in outcomes {
            match result {
                Ok(()) => report.renamed.push(task),
                Err(error) => {
                    tracing::warn!(
                        from = %task.source.display(),
                        to = %task.target.display(),
                        %error,
                        "rename failed"
                    );
                    report.failures.push(RenameFailure { task, error });
                }
            }
        }

        tracing::info!(
            dir = %self.dir.display(),
            renamed = report.renamed.len(),
            failed = report.failures.len(),
            skipped = report.skipped,
            "rename batch complete"
        );
        Ok(report)
    }

    /// 单个任务：目标名已存在（快照中或磁盘上）则失败，绝不覆盖。
    fn run_task(&self, task: &RenameTask) -> Result<(), TaskError> {
        if self.collides(task) || fs::symlink_metadata(&task.target).is_ok() {
            return Err(TaskError::Collision(task.target.clone()));
        }
        fs::rename(&task.source, &task.target)?;
        Ok(())
    }
}
