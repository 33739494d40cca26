use std::path::Path;
use serde_json::Value;
use crate::dataset::{DatasetError, load_array, save_array};

/// Errors from the pinyin normalization pass.
//
// // 拼音规范化过程中的错误。
#[derive(Debug, thiserror::Error)]
pub enum PinyinError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// 第 N 条记录不是 JSON 对象
    #[error("Record {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// 第 N 条记录缺少 `pinyin` 字段
    #[error("Record {index} has no \"pinyin\" field")]
    MissingPinyin { index: usize },

    /// 第 N 条记录的 `pinyin` 不是字符串
    #[error("Record {index} has a non-string \"pinyin\" field")]
    PinyinNotString { index: usize },
}

/// Summary of one normalization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinyinReport {
    /// 记录总数
    pub total: usize,
    /// 实际发生变化的记录数
    pub changed: usize,
}

/// Lowercases the `pinyin` field of every record in place.
///
/// All records are checked before any is modified, so on error the slice is
/// untouched. Other fields are never read. Returns the number of records whose
/// value changed.
pub fn lowercase_pinyin(records: &mut [Value]) -> Result<usize, PinyinError> {
    for (index, record) in records.iter().enumerate() {
        let object = record.as_object().ok_or(PinyinError::NotAnObject { index })?;
        match object.get("pinyin") {
            Some(Value::String(_)) => {}
            Some(_) => return Err(PinyinError::PinyinNotString { index }),
            None => return Err(PinyinError::MissingPinyin { index }),
        }
    }

    let mut changed = 0;
    for record in records.iter_mut() {
        if let Some(Value::String(pinyin)) = record.get_mut("pinyin") {
            let lower = pinyin.to_lowercase();
            if *pinyin != lower {
                *pinyin = lower;
                changed += 1;
            }
        }
    }
    Ok(changed)
}

/// 读取词典文件，将每条记录的拼音转为小写，再整体写回。
pub fn normalize_pinyin_file(path: &Path) -> Result<PinyinReport, PinyinError> {
    let mut records: Vec<Value> = load_array(path)?;
    let changed = lowercase_pinyin(&mut records)?;
    save_array(path, &records)?;

    tracing::info!(path = %path.display(), total = records.len(), changed, "normalized pinyin");
    Ok(PinyinReport {
        total: records.len(),
        changed,
    })
}
