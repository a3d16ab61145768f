//! Report source initialization
//!
//! Converts the server's source configuration into a [`ReportSource`].

use crate::config::{ServerConfig, SourceType};
use anyhow::Result;
use scamguard_runtime::{FileSource, MemorySource, ReportSource};
use std::sync::Arc;
use tracing::{info, warn};

/// Build the report source selected by the configuration
pub fn init_source(config: &ServerConfig) -> Result<Arc<dyn ReportSource>> {
    match &config.source {
        SourceType::Memory => {
            info!("Using built-in demonstration reports");
            Ok(Arc::new(MemorySource::demo()))
        }
        SourceType::File { path } => {
            let source = FileSource::new(path.clone()).map_err(|e| {
                anyhow::anyhow!("Invalid report file '{}': {}", path.display(), e)
            })?;

            if !path.exists() {
                // The file is read per request, so it may appear later
                warn!("Report file {} does not exist yet", path.display());
            }

            info!("Using report file {}", path.display());
            Ok(Arc::new(source))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_init_memory_source() {
        let source = init_source(&ServerConfig::default()).unwrap();
        assert_eq!(source.describe(), "memory (6 reports)");
    }

    #[test]
    fn test_init_file_source() {
        let config = ServerConfig {
            source: SourceType::File {
                path: PathBuf::from("data/reports.yaml"),
            },
            ..ServerConfig::default()
        };

        let source = init_source(&config).unwrap();
        assert_eq!(source.describe(), "file (data/reports.yaml)");
    }

    #[test]
    fn test_init_file_source_rejects_unknown_extension() {
        let config = ServerConfig {
            source: SourceType::File {
                path: PathBuf::from("data/reports.csv"),
            },
            ..ServerConfig::default()
        };

        let err = init_source(&config).err().unwrap();
        assert!(err.to_string().contains("reports.csv"));
    }
}
