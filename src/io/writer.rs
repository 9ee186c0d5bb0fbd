//! Output writing.
//!
//! Outputs are never written in place. Bytes go to a temporary file created
//! next to the target and the file is renamed over the target only after
//! the last byte has been flushed. If anything fails, or the staged file is
//! dropped without being persisted, the temporary file is removed and the
//! target path is left untouched.

use lopdf::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

use crate::config::CompressionLevel;
use crate::error::EngineError;

/// Statistics about a write operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WriteStatistics {
    /// Time taken to serialise and persist the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,
}

/// A temporary file that becomes the output on [`StagedFile::persist`].
pub(crate) struct StagedFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    /// Create the temporary file in the target's directory, so the final
    /// rename never crosses file systems.
    pub fn new(target: &Path) -> Result<Self, EngineError> {
        let dir = target
            .parent()
            .ok_or_else(|| EngineError::structure("output path has no parent directory"))?;

        let temp = tempfile::Builder::new()
            .prefix(".pdftool-")
            .suffix(".part")
            .tempfile_in(dir)?;

        tracing::debug!(staged = %temp.path().display(), target = %target.display(), "staging output");

        Ok(Self {
            temp,
            target: target.to_path_buf(),
        })
    }

    /// The staged file, for writers that need `Seek` as well as `Write`.
    pub fn file_mut(&mut self) -> &mut File {
        self.temp.as_file_mut()
    }

    /// Move the staged file over the target, replacing any existing file.
    pub fn persist(self) -> Result<u64, EngineError> {
        let target = self.target;
        let file = self.temp.persist(&target).map_err(|e| e.error)?;
        Ok(file.metadata()?.len())
    }
}

/// Writes PDF documents through a [`StagedFile`].
pub(crate) struct PdfWriter {
    compression: CompressionLevel,
}

impl PdfWriter {
    pub fn new(compression: CompressionLevel) -> Self {
        Self { compression }
    }

    /// Serialise `doc` to `path`.
    ///
    /// On error nothing is left at `path` and no temporary file remains.
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics, EngineError> {
        let start = Instant::now();

        match self.compression {
            CompressionLevel::None => {}
            CompressionLevel::Standard => doc.compress(),
            CompressionLevel::Maximum => {
                doc.prune_objects();
                doc.compress();
            }
        }

        let mut staged = StagedFile::new(path)?;
        {
            let mut writer = BufWriter::new(staged.file_mut());
            doc.save_to(&mut writer)?;
            writer.flush()?;
        }
        let file_size = staged.persist()?;
        tracing::debug!(path = %path.display(), file_size, "wrote pdf");

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
        })
    }
}
