use thiserror::Error;
use zidian::archive::ArchiveError;
use zidian::dataset::{DatasetError, PinyinError};
use zidian::rename::RenameError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Failed to install Ctrl-C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("{0}")]
    Dataset(#[from] DatasetError),

    #[error("Failed to normalize pinyin: {0}")]
    Pinyin(#[from] PinyinError),

    #[error("{0}")]
    Archive(#[from] ArchiveError),

    #[error("Failed to rename files: {0}")]
    Rename(#[from] RenameError),

    #[error("{0} file(s) could not be renamed")]
    RenameFailed(usize),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}
