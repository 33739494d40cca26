//! Line-oriented input for the interactive tools.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use crate::errors::CliError;

/// 读取一行输入。用户按下 Ctrl-C 或输入结束 (Ctrl-D / 管道关闭) 时返回 `None`。
pub fn read_field(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>, CliError> {
    match rl.readline(prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                rl.add_history_entry(line.as_str())?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
