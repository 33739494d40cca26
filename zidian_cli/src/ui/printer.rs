//! Functions for printing tool results to the console.

use std::path::Path;
use zidian::archive::ArchiveSummary;
use zidian::rename::{RenamePlan, RenameReport};

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// 打印 dry-run 模式下的重命名计划
pub fn print_rename_plan(plan: &RenamePlan) {
    println!(
        "The following {} files would be renamed in {:?}:",
        plan.tasks().len(),
        plan.dir()
    );
    for task in plan.tasks() {
        let marker = if plan.collides(task) { "  [target exists]" } else { "" };
        println!(
            "  - {} -> {}{}",
            file_name(&task.source),
            file_name(&task.target),
            marker
        );
    }
    println!("{} entries skipped.", plan.skipped());
}

/// 打印批量重命名的结果汇总
pub fn print_rename_report(report: &RenameReport) {
    for failure in &report.failures {
        eprintln!(
            "FAILED to rename {}: {}",
            file_name(&failure.task.source),
            failure.error
        );
    }
    println!(
        "Rename complete. {} succeeded, {} failed, {} skipped.",
        report.succeeded(),
        report.failed(),
        report.skipped
    );
}

/// 打印压缩/解压结果
pub fn print_archive_summary(verb: &str, input: &Path, output: &Path, summary: &ArchiveSummary) {
    let ratio = if summary.input_bytes == 0 {
        100.0
    } else {
        summary.output_bytes as f64 / summary.input_bytes as f64 * 100.0
    };
    println!(
        "{} {:?} ({} bytes) -> {:?} ({} bytes, {:.1}%)",
        verb, input, summary.input_bytes, output, summary.output_bytes, ratio
    );
}
