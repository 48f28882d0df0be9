use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::info;

/// Persists uploaded solution archives under a fixed directory.
pub struct UploadSink {
    dir: PathBuf,
}

impl UploadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `bytes` as `{candidate_id}_{filename}` and return the stored
    /// path. The filename must already be validated flat.
    pub fn save(&self, candidate_id: &str, filename: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{candidate_id}_{filename}"));
        fs::write(&path, bytes)?;

        info!(path = %path.display(), size = bytes.len(), "Archive stored");
        Ok(path)
    }
}
