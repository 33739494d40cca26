#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use serde_json::{Value, json};
use tempfile::TempDir;

/// 辅助函数：在临时目录中写入一个 JSON 文件。
pub fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// 辅助函数：读取并解析 JSON 文件。
pub fn read_json(path: &PathBuf) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// 辅助函数：创建包含两条记录的生词表。
pub fn setup_words_file(dir: &TempDir) -> PathBuf {
    write_json(
        dir,
        "words.json",
        &json!([
            {"traditional": ["謝謝"], "simplified": ["谢谢"], "english": ["thank you"], "notes": null},
            {"traditional": ["再見"], "simplified": ["再见"], "english": ["goodbye"], "notes": "common"}
        ]),
    )
}

/// 辅助函数：创建一个拼音大小写混杂的词典文件。
///
/// - 记录 0: "Nǐ Hǎo"
/// - 记录 1: "ZHŌNGGUÓ"
/// - 记录 2: "wǒ" (已是小写)
pub fn setup_dictionary_file(dir: &TempDir) -> PathBuf {
    write_json(
        dir,
        "dictionary.json",
        &json!([
            {"traditional": "你好", "simplified": "你好", "english": "Hello", "pinyin": "Nǐ Hǎo"},
            {"traditional": "中國", "simplified": "中国", "english": "China", "pinyin": "ZHŌNGGUÓ"},
            {"traditional": "我", "simplified": "我", "english": "I", "pinyin": "wǒ"}
        ]),
    )
}

/// 辅助函数：创建声调音频目录，其中 `count` 个文件需要改名。
///
/// 另外放入一个已是正确名称的文件和一个无关文件。
pub fn setup_tones_dir(dir: &TempDir, count: usize) -> PathBuf {
    let tones = dir.path().join("tones2");
    fs::create_dir_all(&tones).unwrap();
    for i in 0..count {
        fs::write(tones.join(format!("syllable{:03}_.mp3", i)), format!("audio {}", i)).unwrap();
    }
    fs::write(tones.join("ok1.mp3"), "already fine").unwrap();
    fs::write(tones.join("notes.txt"), "not audio").unwrap();
    tones
}

/// 统计目录中仍以 `_.mp3` 结尾的文件数量。
pub fn count_stale(dir: &PathBuf) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with("_.mp3"))
        .count()
}
