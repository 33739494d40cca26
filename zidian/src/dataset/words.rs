use std::path::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::dataset::{DatasetError, load_array, save_array};

/// One entry of the vocabulary list (`words.json`).
//
// // 生词表中的一条记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// 繁体写法 (可有多个)
    pub traditional: Vec<String>,
    /// 简体写法 (可有多个)
    pub simplified: Vec<String>,
    /// 英文释义
    pub english: Vec<String>,
    /// 备注，为空时序列化为 `null`
    pub notes: Option<String>,
}

impl WordRecord {
    /// Builds a record from the two raw prompt answers.
    ///
    /// Both lines are comma-separated lists. The same list fills `traditional` and
    /// `simplified`; `notes` is left empty.
    pub fn from_input(traditional: &str, english: &str) -> Self {
        let forms = parse_list(traditional);
        Self {
            simplified: forms.clone(),
            traditional: forms,
            english: parse_list(english),
            notes: None,
        }
    }
}

/// 按逗号拆分并去除每一项两侧的空白。不做去空处理：空输入得到 `[""]`。
pub fn parse_list(input: &str) -> Vec<String> {
    input.split(',').map(|item| item.trim().to_string()).collect()
}

/// Appends a record to the array stored at `path` and rewrites the whole file.
///
/// Existing entries are carried through as raw JSON, so fields this type does not
/// model (`pinyin`, `tones`, list-valued `notes`, ...) survive untouched. Returns the
/// new number of records.
//
// // 已有记录按原始 JSON 读写，不会丢失本结构体未定义的字段。
pub fn append_word(path: &Path, record: WordRecord) -> Result<usize, DatasetError> {
    let mut words: Vec<Value> = load_array(path)?;
    let record = serde_json::to_value(record).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    words.push(record);
    save_array(path, &words)?;
    tracing::info!(path = %path.display(), total = words.len(), "appended word");
    Ok(words.len())
}
