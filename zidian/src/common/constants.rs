// --- 数据目录布局 ---
/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "files";

/// 生词表文件名 (JSON 数组)。
pub const WORDS_FILE: &str = "words.json";

/// 词典文件名 (JSON 数组)。
pub const DICTIONARY_FILE: &str = "dictionary.json";

/// 压缩后的词典文件名。
pub const DICTIONARY_ARCHIVE_FILE: &str = "dictionary.json.zlib";

/// 声调音频所在的子目录。
pub const TONES_SUBDIR: &str = "tones2";

// --- 音频重命名规则 ---
/// Filename suffix that marks an audio file as needing a rename.
pub const AUDIO_STALE_SUFFIX: &str = "_.mp3";

/// The suffix a renamed audio file ends up with.
pub const AUDIO_SUFFIX: &str = ".mp3";

// --- 序列化 ---
/// JSON 文件使用的缩进 (4 个空格)。
pub const JSON_INDENT: &[u8] = b"    ";

/// 默认的 zlib 压缩级别。
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;
