//! File-based report source
//!
//! Reads a JSON or YAML array of reports from disk on every fetch.

use super::ReportSource;
use crate::error::{Result, RuntimeError};
use scamguard_core::{types::ensure_unique_ids, Report};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Supported report file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FileFormat::Json),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            _ => Err(RuntimeError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// File-based report source
#[derive(Debug, Clone)]
pub struct FileSource {
    file_path: PathBuf,
    format: FileFormat,
}

impl FileSource {
    /// Create a new file source.
    ///
    /// The format is taken from the file extension (`.json`, `.yaml`, `.yml`).
    /// The file itself is only read when reports are fetched.
    pub fn new(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let format = FileFormat::from_path(&file_path)?;
        Ok(Self { file_path, format })
    }

    /// Path of the report file
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn parse(&self, content: &str) -> Result<Vec<Report>> {
        let reports: Vec<Report> = match self.format {
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
        };
        ensure_unique_ids(&reports)?;
        Ok(reports)
    }
}

#[async_trait::async_trait]
impl ReportSource for FileSource {
    async fn fetch_reports(&self) -> Result<Vec<Report>> {
        let content = fs::read_to_string(&self.file_path).await?;
        let reports = self.parse(&content)?;

        debug!(
            path = %self.file_path.display(),
            count = reports.len(),
            "Loaded reports from file"
        );

        Ok(reports)
    }

    fn describe(&self) -> String {
        format!("file ({})", self.file_path.display())
    }
}
