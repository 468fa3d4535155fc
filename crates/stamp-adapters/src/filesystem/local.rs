//! Local filesystem adapter using std::fs.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use stamp_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StampError, StampResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StampResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_file(&self, path: &Path) -> StampResult<Box<dyn Write>> {
        let file = File::create(path).map_err(|e| map_io_error(path, e, "create file"))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StampError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
