//! Directory creation and file size helpers.

use std::fs;
use std::io;

use camino::Utf8Path;
use tracing::info;

use crate::error::{Error, Result};

/// Ensure every directory in `paths` exists, creating parents as needed.
///
/// Existing directories are left alone, so calling this twice is harmless.
/// With `verbose` set, each directory is logged once it exists.
pub fn create_directories<I, P>(paths: I, verbose: bool) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Utf8Path>,
{
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        if verbose {
            info!("Created directory at: {}", path);
        }
    }
    Ok(())
}

/// Size of the file at `path` in bytes.
pub fn file_size_bytes(path: impl AsRef<Utf8Path>) -> Result<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|err| Error::from_io(path, err))?;
    Ok(metadata.len())
}

/// Approximate size of the file at `path`, formatted as `~ N KB`.
pub fn file_size_kb(path: impl AsRef<Utf8Path>) -> Result<String> {
    let path = path.as_ref();
    let kb = kilobytes(file_size_bytes(path)?);
    info!("File size of {}: ~ {} KB", path, kb);
    Ok(format!("~ {kb} KB"))
}

// Halves round to the even neighbour: 512 bytes is 0 KB, 1536 bytes is 2 KB.
fn kilobytes(bytes: u64) -> u64 {
    (bytes as f64 / 1024.0).round_ties_even() as u64
}

pub(crate) fn read_bytes(path: &Utf8Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| Error::from_io(path, err))
}

// Text that is not UTF-8 cannot be a well-formed structured file.
pub(crate) fn read_text(path: &Utf8Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData => Error::format(path, "file is not valid UTF-8"),
        _ => Error::from_io(path, err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn scratch() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, root)
    }

    #[test]
    fn create_directories_is_idempotent() {
        let (_guard, root) = scratch();
        let paths = vec![
            root.join("artifacts").join("data_ingestion"),
            root.join("artifacts").join("prepare_base_model"),
            root.join("logs"),
        ];

        create_directories(&paths, true).unwrap();
        create_directories(&paths, false).unwrap();

        for path in &paths {
            assert!(path.is_dir(), "{path} should exist");
        }
        let mut top: Vec<_> = fs::read_dir(&root)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        top.sort();
        assert_eq!(top, vec!["artifacts", "logs"]);
    }

    #[test]
    fn create_directories_rejects_existing_file() {
        let (_guard, root) = scratch();
        let file = root.join("occupied");
        fs::write(&file, b"x").unwrap();

        let err = create_directories([file.join("child")], false).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn size_of_two_kilobytes() {
        let (_guard, root) = scratch();
        let file = root.join("model.bin");
        fs::write(&file, vec![0u8; 2048]).unwrap();

        assert_eq!(file_size_bytes(&file).unwrap(), 2048);
        assert_eq!(file_size_kb(&file).unwrap(), "~ 2 KB");
    }

    #[test]
    fn kilobyte_rounding() {
        assert_eq!(kilobytes(0), 0);
        assert_eq!(kilobytes(511), 0);
        assert_eq!(kilobytes(512), 0);
        assert_eq!(kilobytes(513), 1);
        assert_eq!(kilobytes(1536), 2);
        assert_eq!(kilobytes(2560), 2);
        assert_eq!(kilobytes(10 * 1024 + 700), 11);
    }

    #[test]
    fn size_of_missing_file() {
        let (_guard, root) = scratch();
        let err = file_size_kb(root.join("absent.h5")).unwrap_err();
        assert!(err.is_not_found());
    }
}
