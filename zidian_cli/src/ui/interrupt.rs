//! Process-wide Ctrl-C handling for the interactive tools.

use std::process;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::errors::CliError;

/// Exits with status 0 on SIGINT, but never in the middle of a write.
///
/// rustyline only reports Ctrl-C as `Interrupted` while it owns a terminal; with
/// piped input, or while a file is being written, the signal reaches the process
/// directly. The handler takes the same lock the writer holds, so an interrupt that
/// arrives during a save waits for the save to finish before exiting.
//
// // 收到 SIGINT 时以状态 0 退出；如果正在写文件，则等待写入完成后再退出。
pub struct InterruptGuard {
    writing: Arc<Mutex<()>>,
}

impl InterruptGuard {
    pub fn install() -> Result<Self, CliError> {
        let writing = Arc::new(Mutex::new(()));
        let handler_lock = Arc::clone(&writing);
        ctrlc::set_handler(move || {
            // 退出时一直持有锁，主线程无法再开始新的写入
            let _guard = handler_lock.lock().unwrap_or_else(PoisonError::into_inner);
            println!("\nGoodbye!");
            process::exit(0);
        })?;
        Ok(Self { writing })
    }

    /// 持有返回值期间，Ctrl-C 会被推迟到写入结束。
    pub fn hold(&self) -> MutexGuard<'_, ()> {
        self.writing.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
