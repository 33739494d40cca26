use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};
use zidian::rename::plan_directory;
use crate::errors::CliError;
use crate::ui::printer::{print_rename_plan, print_rename_report};

/// 批量重命名声调音频。
///
/// 目录只被扫描一次；所有任务并行执行，全部完成后汇总报告。
/// 任何一个文件失败都会使命令以非零状态退出，但不会中断其他文件。
pub fn handle_rename_tones(dir: &Path, jobs: Option<usize>, dry_run: bool) -> Result<(), CliError> {
    println!("Scanning {:?}...", dir);
    let plan = plan_directory(dir)?;

    if plan.is_empty() {
        println!(
            "No files need renaming ({} entries skipped).",
            plan.skipped()
        );
        return Ok(());
    }

    if dry_run {
        print_rename_plan(&plan);
        return Ok(());
    }

    let pb = ProgressBar::new(plan.tasks().len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [Renaming] [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .map_err(|e| CliError::Unexpected(e.to_string()))?
            .progress_chars("#>-"),
    );

    // 进度条内部是线程安全的，可直接在工作线程中更新
    let report = plan.execute_with(jobs, |_, _| pb.inc(1))?;
    pb.finish_and_clear();

    print_rename_report(&report);
    if !report.is_success() {
        return Err(CliError::RenameFailed(report.failed()));
    }
    Ok(())
}
