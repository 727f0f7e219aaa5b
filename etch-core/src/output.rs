use std::{
    collections::BTreeMap,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// Where generated source files go.
///
/// Implementations hand out one [`SourceStream`] per artifact. The stream
/// borrows the area mutably, so only one file can be open at a time.
pub trait OutputArea {
    /// Open a new source file for a fully-qualified name such as `com.example.AutoClazz`.
    fn create_source_file(&mut self, name: &str) -> io::Result<Box<dyn SourceStream + '_>>;
}

impl<T: OutputArea + ?Sized> OutputArea for &mut T {
    fn create_source_file(&mut self, name: &str) -> io::Result<Box<dyn SourceStream + '_>> {
        (**self).create_source_file(name)
    }
}

/// A scoped write stream for one source file.
///
/// Content only becomes visible once [`commit`](SourceStream::commit) succeeds.
/// Dropping a stream without committing discards everything written to it.
pub trait SourceStream: Write {
    /// Publish the written content under the stream's name.
    fn commit(self: Box<Self>) -> io::Result<()>;
}

/// Output area rooted at a generated-sources directory.
///
/// `com.example.AutoClazz` lands at `<root>/com/example/AutoClazz.java`.
#[derive(Debug, Clone)]
pub struct FsOutputArea {
    root: PathBuf,
    extension: String,
}

impl FsOutputArea {
    /// Create an output area for `.java` files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "java".to_string(),
        }
    }

    /// Use a different file extension for generated files.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the file path for a fully-qualified name.
    pub fn path_for(&self, name: &str) -> io::Result<PathBuf> {
        let segments: Vec<&str> = name.split('.').collect();
        if let Some(bad) = segments.iter().find(|s| !is_path_safe(s)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{name}' is not a valid source file name (segment '{bad}')"),
            ));
        }

        let (file, dirs) = segments
            .split_last()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty source file name"))?;

        let mut path = self.root.clone();
        path.extend(dirs);
        path.push(format!("{}.{}", file, self.extension));
        Ok(path)
    }
}

fn is_path_safe(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.contains(['/', '\\', '\0'])
        && segment.trim() == segment
}

impl OutputArea for FsOutputArea {
    fn create_source_file(&mut self, name: &str) -> io::Result<Box<dyn SourceStream + '_>> {
        let path = self.path_for(name)?;
        let parent = path.parent().unwrap_or(&self.root);
        std::fs::create_dir_all(parent)?;
        let file = NamedTempFile::new_in(parent)?;
        Ok(Box::new(FsStream { file, path }))
    }
}

/// Writes into a temporary file next to the target and renames on commit.
struct FsStream {
    file: NamedTempFile,
    path: PathBuf,
}

impl Write for FsStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl SourceStream for FsStream {
    fn commit(self: Box<Self>) -> io::Result<()> {
        let FsStream { file, path } = *self;
        file.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// In-memory output area, used for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutputArea {
    files: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryOutputArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// An area that refuses to open any file.
    pub fn read_only() -> Self {
        Self {
            files: BTreeMap::new(),
            read_only: true,
        }
    }

    /// Get the committed content for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    /// All committed files, ordered by name.
    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Take the committed files out of the area.
    pub fn into_files(self) -> BTreeMap<String, String> {
        self.files
    }
}

impl OutputArea for MemoryOutputArea {
    fn create_source_file(&mut self, name: &str) -> io::Result<Box<dyn SourceStream + '_>> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "output area is read-only",
            ));
        }
        Ok(Box::new(MemoryStream {
            name: name.to_string(),
            buffer: Vec::new(),
            files: &mut self.files,
        }))
    }
}

struct MemoryStream<'a> {
    name: String,
    buffer: Vec<u8>,
    files: &'a mut BTreeMap<String, String>,
}

impl Write for MemoryStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SourceStream for MemoryStream<'_> {
    fn commit(self: Box<Self>) -> io::Result<()> {
        let MemoryStream {
            name,
            buffer,
            files,
        } = *self;
        let content =
            String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        files.insert(name, content);
        Ok(())
    }
}
