//! Reading the patch text.

use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a patch
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read patch from {name}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Patch from {0} is not valid UTF-8")]
    NotUtf8(String),
}

/// Read a patch from a file, or from stdin when `path` is `None` or `-`.
pub fn read_patch(path: Option<&Path>) -> Result<String, InputError> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path).map_err(|source| InputError::Read {
                name: path.display().to_string(),
                source,
            })?;
            read_patch_from(file, &path.display().to_string())
        }
        _ => read_patch_from(std::io::stdin().lock(), "stdin"),
    }
}

/// Read a whole patch from any reader.
pub fn read_patch_from(mut reader: impl Read, name: &str) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| InputError::Read {
            name: name.to_string(),
            source,
        })?;
    log::debug!("Read {} bytes from {}", bytes.len(), name);

    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_from_reader() {
        let patch = read_patch_from("@@ -1 +1 @@\n-a\n+b\n".as_bytes(), "test").unwrap();
        assert_eq!(patch, "@@ -1 +1 @@\n-a\n+b\n");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = read_patch_from(&[0xff, 0xfe, 0x00][..], "test").unwrap_err();
        assert!(matches!(err, InputError::NotUtf8(ref name) if name == "test"));
        assert_eq!(err.to_string(), "Patch from test is not valid UTF-8");
    }

    #[test]
    fn test_read_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "@@ -3 +3 @@\n x\n")?;

        let patch = read_patch(Some(file.path()))?;
        assert_eq!(patch, "@@ -3 +3 @@\n x\n");
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_patch(Some(&dir.path().join("missing.patch"))).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
    }
}
