use std::{io, path::PathBuf};

use async_trait::async_trait;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// Destination for accepted request bodies.
#[async_trait]
pub trait PayloadStore: Send + Sync {
    async fn persist(&self, payload: &[u8]) -> io::Result<()>;
}

/// Writes each payload to a fixed path, replacing whatever was there before.
///
/// Concurrent requests targeting the same path are not serialized here; if
/// two writes race, the file ends up with whichever one finishes last.
pub struct FilePayloadStore {
    path: PathBuf,
}

impl FilePayloadStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl PayloadStore for FilePayloadStore {
    async fn persist(&self, payload: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(&self.path).await?;
        file.write_all(payload).await?;
        // write_all only queues the write on the blocking pool; flush awaits
        // it so a failed write (e.g. ENOSPC) surfaces here instead of being
        // dropped after a 200 has already gone out.
        file.flush().await?;
        Ok(())
    }
}
