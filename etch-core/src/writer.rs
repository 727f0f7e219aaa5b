use std::io::{self, Write};

use etch_ir::SourceArtifact;
use thiserror::Error;

use crate::OutputArea;

/// The output area could not be opened or the write did not complete.
#[derive(Debug, Error)]
#[error("failed to write source file '{name}'")]
pub struct WriteError {
    /// Fully-qualified name of the artifact.
    pub name: String,
    #[source]
    pub source: io::Error,
}

/// Write an artifact into the output area.
///
/// The stream is committed only after the full content has been written and
/// flushed. On any failure the stream is dropped uncommitted, so nothing is
/// published under the artifact's name.
pub fn write_artifact<A>(artifact: &SourceArtifact, area: &mut A) -> Result<(), WriteError>
where
    A: OutputArea + ?Sized,
{
    let name = &artifact.fully_qualified_name;
    let wrap = |source: io::Error| WriteError {
        name: name.clone(),
        source,
    };

    let mut stream = area.create_source_file(name).map_err(wrap)?;
    stream.write_all(artifact.content.as_bytes()).map_err(wrap)?;
    stream.flush().map_err(wrap)?;
    stream.commit().map_err(wrap)?;

    tracing::debug!(artifact = %name, bytes = artifact.content.len(), "wrote source file");
    Ok(())
}
