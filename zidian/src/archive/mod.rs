//! zlib packing of whole files.
//!
//! Both directions read the input fully into memory and write the output
//! atomically, so a failed run never leaves a half-written file behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use crate::common::constants::DEFAULT_COMPRESSION_LEVEL;
use crate::utils::fs::write_atomic;

/// Defines errors that can occur while packing or unpacking an archive.
//
// // 定义打包或解包过程中可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The compression level is outside `0..=9`.
    //
    // // 压缩级别不在 0..=9 范围内。
    #[error("Invalid compression level {0}, expected 0-9")]
    InvalidLevel(u32),

    /// The input file could not be read.
    //
    // // 无法读取输入文件。
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not a valid zlib stream (truncated, corrupted or another format).
    //
    // // 输入不是有效的 zlib 数据流（被截断、损坏或格式错误）。
    #[error("Failed to decompress {path}: {source}")]
    Decompress {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Compressing the data or writing the output file failed.
    //
    // // 压缩数据或写入输出文件失败。
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Byte counts of one pack/unpack run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub input_bytes: u64,
    pub output_bytes: u64,
}

/// 校验并构造压缩级别。
pub fn compression_level(level: u32) -> Result<Compression, ArchiveError> {
    if level > 9 {
        return Err(ArchiveError::InvalidLevel(level));
    }
    Ok(Compression::new(level))
}

/// Compresses `data` into a single zlib stream.
pub fn compress(data: &[u8], level: Compression) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), level);
    encoder.write_all(data)?;
    encoder.finish()
}

/// Inverse of [`compress`]. Fails unless the input is exactly one complete zlib
/// stream: truncated, corrupted, concatenated or garbage-trailed data is rejected.
pub fn decompress(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(data.len().saturating_mul(4).max(64));

    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity());
        }
        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let remaining = &data[before_in as usize..];

        let status = inflater
            .decompress_vec(remaining, &mut out, FlushDecompress::None)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        match status {
            Status::StreamEnd => {
                if inflater.total_in() as usize != data.len() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "unexpected data after the end of the zlib stream",
                    ));
                }
                return Ok(out);
            }
            Status::Ok | Status::BufError => {
                let input_done = inflater.total_in() as usize == data.len();
                let stalled =
                    inflater.total_in() == before_in && inflater.total_out() == before_out;
                // 输出缓冲区仍有空间却没有到达流末尾：输入被截断
                if out.len() < out.capacity() && (input_done || stalled) {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "zlib stream ended before its trailer",
                    ));
                }
            }
        }
    }
}

/// 读取 `input`，压缩后写入 `output`。
pub fn pack_file(input: &Path, output: &Path, level: u32) -> Result<ArchiveSummary, ArchiveError> {
    let level = compression_level(level)?;
    let data = read_input(input)?;

    let compressed = compress(&data, level).map_err(|source| ArchiveError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    write_output(output, &compressed)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        input_bytes = data.len(),
        output_bytes = compressed.len(),
        "packed file"
    );
    Ok(ArchiveSummary {
        input_bytes: data.len() as u64,
        output_bytes: compressed.len() as u64,
    })
}

/// 使用默认压缩级别打包。
pub fn pack_file_default(input: &Path, output: &Path) -> Result<ArchiveSummary, ArchiveError> {
    pack_file(input, output, DEFAULT_COMPRESSION_LEVEL)
}

/// 读取 zlib 数据流 `input`，解压后写入 `output`。解压失败时不会触碰 `output`。
pub fn unpack_file(input: &Path, output: &Path) -> Result<ArchiveSummary, ArchiveError> {
    let data = read_input(input)?;

    let decompressed = decompress(&data).map_err(|source| ArchiveError::Decompress {
        path: input.to_path_buf(),
        source,
    })?;
    write_output(output, &decompressed)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        input_bytes = data.len(),
        output_bytes = decompressed.len(),
        "unpacked file"
    );
    Ok(ArchiveSummary {
        input_bytes: data.len() as u64,
        output_bytes: decompressed.len() as u64,
    })
}

fn read_input(path: &Path) -> Result<Vec<u8>, ArchiveError> {
    fs::read(path).map_err(|source| ArchiveError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), ArchiveError> {
    write_atomic(path, |writer| writer.write_all(bytes)).map_err(|source| ArchiveError::Write {
        path: path.to_path_buf(),
        source,
    })
}
