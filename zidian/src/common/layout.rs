use std::path::{Path, PathBuf};
use crate::common::constants::{
    DEFAULT_DATA_DIR, DICTIONARY_ARCHIVE_FILE, DICTIONARY_FILE, TONES_SUBDIR, WORDS_FILE,
};

/// Resolves the fixed file locations of the dataset from a single data directory.
///
/// Every tool works against one of these paths unless the caller passes an explicit one.
//
// // 根据数据目录解析数据集中各个文件的固定位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `files/words.json`
    pub fn words_file(&self) -> PathBuf {
        self.root.join(WORDS_FILE)
    }

    /// `files/dictionary.json`
    pub fn dictionary_file(&self) -> PathBuf {
        self.root.join(DICTIONARY_FILE)
    }

    /// `files/dictionary.json.zlib`
    pub fn dictionary_archive(&self) -> PathBuf {
        self.root.join(DICTIONARY_ARCHIVE_FILE)
    }

    /// `files/tones2`
    pub fn tones_dir(&self) -> PathBuf {
        self.root.join(TONES_SUBDIR)
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_paths() {
        let layout = DataLayout::default();
        assert_eq!(layout.root(), Path::new("files"));
        assert_eq!(layout.words_file(), Path::new("files").join("words.json"));
        assert_eq!(layout.dictionary_file(), Path::new("files").join("dictionary.json"));
        assert_eq!(
            layout.dictionary_archive(),
            Path::new("files").join("dictionary.json.zlib")
        );
        assert_eq!(layout.tones_dir(), Path::new("files").join("tones2"));
    }

    #[test]
    fn test_custom_root() {
        let layout = DataLayout::new("/srv/data");
        assert_eq!(layout.words_file(), Path::new("/srv/data/words.json"));
    }
}
