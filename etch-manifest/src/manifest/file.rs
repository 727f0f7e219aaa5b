use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Document, Result, error::read_file};

/// Represents an etch.toml file with both raw content and parsed manifest.
pub struct EtchToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl EtchToml {
    /// Open and parse an etch.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let (path, content) = read_file(path.as_ref())?;
        let manifest = Manifest::parse(Document::new(&path.display().to_string(), &content))?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_and_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("etch.toml");
        std::fs::write(&path, "[generator]\nmarker = \"a.Marker\"\n").unwrap();

        let file = EtchToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert!(file.content().contains("a.Marker"));
        assert_eq!(file.manifest().generator.marker, "a.Marker");
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = EtchToml::open(temp.path().join("etch.toml"))
            .err()
            .unwrap();
        assert!(matches!(*err, crate::Error::Read { .. }));
    }
}
