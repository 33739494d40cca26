use std::path::Path;
use rustyline::DefaultEditor;
use serde_json::Value;
use zidian::dataset::{WordRecord, append_word, load_array};
use crate::errors::CliError;
use crate::ui::interrupt::InterruptGuard;
use crate::ui::prompt::read_field;

/// 交互式追加词条，直到用户按下 Ctrl-C 或输入结束。
///
/// 每条词条都会立即写回文件，中途退出不会丢失已输入的内容。
pub fn handle_add_words(words_file: &Path) -> Result<(), CliError> {
    // 先读一次，文件缺失或损坏时在用户输入之前就报错
    let existing: Vec<Value> = load_array(words_file)?;
    println!(
        "Loaded {} words from {:?}. Press Ctrl-C to finish.",
        existing.len(),
        words_file
    );

    let interrupt = InterruptGuard::install()?;
    let mut rl = DefaultEditor::new()?;
    loop {
        let Some(traditional) = read_field(&mut rl, "Enter the traditional word: ")? else {
            break;
        };
        let Some(english) = read_field(&mut rl, "Enter the English translation: ")? else {
            break;
        };

        let record = WordRecord::from_input(&traditional, &english);
        let total = {
            let _writing = interrupt.hold();
            append_word(words_file, record)?
        };
        println!("Saved. The list now has {} words.", total);
    }

    println!("\nGoodbye!");
    Ok(())
}
