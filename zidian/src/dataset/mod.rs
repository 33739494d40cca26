//! Whole-file JSON array storage shared by the dataset tools.
//!
//! Every tool follows the same cycle: load the full array, transform it in memory,
//! and write it back atomically. Callers are expected to have exclusive access to the
//! file; two concurrent writers end with the last one winning.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;
use crate::common::constants::JSON_INDENT;
use crate::utils::fs::write_atomic;

pub mod dictionary;
pub mod words;

pub use dictionary::{PinyinError, PinyinReport, lowercase_pinyin, normalize_pinyin_file};
pub use words::{WordRecord, append_word, parse_list};

/// Errors raised while loading or saving a JSON array file.
//
// // 加载或保存 JSON 数组文件时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a valid JSON array of the expected records.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the new content (or replacing the old file) failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 读取整个 JSON 数组文件。
pub fn load_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_str(&contents).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

/// 以 4 空格缩进原子地写回整个 JSON 数组。非 ASCII 字符按原样输出。
pub fn save_array<T: Serialize>(path: &Path, records: &[T]) -> Result<(), DatasetError> {
    write_atomic(path, |writer| {
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        records.serialize(&mut serializer).map_err(io::Error::from)?;
        writer.write_all(b"\n")
    })
    .map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "saved dataset");
    Ok(())
}
