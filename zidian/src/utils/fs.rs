use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a file atomically: the content goes to a temporary file in the same
/// directory, which is then renamed over `path`.
///
/// If `write` fails, the temporary file is dropped (and deleted) and `path` is left
/// exactly as it was.
//
// // 原子写入文件：先写入同目录下的临时文件，再重命名覆盖目标路径。
// // 临时文件必须与目标位于同一文件系统，rename 才是原子的。
pub fn write_atomic<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<&File>) -> io::Result<()>,
{
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let temp_file = NamedTempFile::new_in(parent)?;

    {
        let mut writer = BufWriter::new(temp_file.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, |w| w.write_all(b"new")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_failure_keeps_original() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old").unwrap();

        let result = write_atomic(&path, |w| {
            w.write_all(b"partial")?;
            Err(io::Error::other("boom"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        // 临时文件应已被清理
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
