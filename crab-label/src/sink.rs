//! Output sinks for finished print jobs

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::error::LabelResult;
use crate::language::CommandLanguage;
use crate::repeater::PrintJob;

/// Characters of barcode data kept in a generated file name
const FILE_NAME_PREFIX_CHARS: usize = 20;

/// Trait for print job destinations
#[allow(async_fn_in_trait)]
pub trait LabelSink {
    /// Deliver the job's command bytes
    async fn send(&self, job: &PrintJob) -> LabelResult<()>;
}

/// Build `barcode-labels-<prefix>.<ext>` from the barcode data.
///
/// The prefix is the first 20 characters of `data` with everything that is
/// not an ASCII letter or digit replaced by `-`.
pub fn suggested_file_name(data: &str, language: CommandLanguage) -> String {
    let prefix: String = data
        .chars()
        .take(FILE_NAME_PREFIX_CHARS)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("barcode-labels-{}.{}", prefix, language.extension())
}

/// Writes print jobs into a directory under their suggested file names
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the job, creating the directory if needed. Returns the file path.
    #[instrument(skip(self, job), fields(dir = %self.dir.display(), file = job.file_name()))]
    pub async fn write(&self, job: &PrintJob) -> LabelResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(job.file_name());
        tokio::fs::write(&path, job.as_bytes()).await?;
        info!(bytes = job.as_bytes().len(), "Label file written");
        Ok(path)
    }
}

impl LabelSink for FileSink {
    async fn send(&self, job: &PrintJob) -> LabelResult<()> {
        self.write(job).await.map(|_| ())
    }
}
