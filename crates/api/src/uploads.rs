//! Filesystem store for uploaded reference files (keyline artwork etc).
//!
//! Files land in a single flat directory under `<millis>-<sanitized name>`
//! and are served back read-only under `/uploads`.

use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use printspec_core::upload::{stored_filename, upload_url};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// How many timestamp bumps to try before giving up on a free name.
const MAX_NAME_ATTEMPTS: i64 = 16;

/// Result of a successful [`UploadStore::store`].
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Generated on-disk filename.
    pub filename: String,
    /// URL path the static server resolves to the stored bytes.
    pub url: String,
    /// Number of bytes written.
    pub size_bytes: usize,
}

/// Writes uploaded bytes into the upload directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory files are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory (and parents) if missing.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Store `bytes` under a generated name derived from `original_name`.
    ///
    /// Files are opened create-new, so an existing upload is never
    /// overwritten. On a name collision the timestamp component is advanced
    /// by one millisecond and the write retried.
    pub async fn store(&self, bytes: &[u8], original_name: &str) -> std::io::Result<StoredUpload> {
        let mut millis = chrono::Utc::now().timestamp_millis();

        for _ in 0..MAX_NAME_ATTEMPTS {
            let filename = stored_filename(millis, original_name);
            let path = self.dir.join(&filename);

            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => {
                    write_or_discard(file, &path, bytes).await?;
                    return Ok(StoredUpload {
                        url: upload_url(&filename),
                        filename,
                        size_bytes: bytes.len(),
                    });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => millis += 1,
                Err(e) => return Err(e),
            }
        }

        Err(Error::new(
            ErrorKind::AlreadyExists,
            format!("no free upload name for '{original_name}' after {MAX_NAME_ATTEMPTS} attempts"),
        ))
    }
}

/// Write `bytes` through `writer`, removing `path` if the write fails so a
/// truncated upload never stays reachable under its generated name.
async fn write_or_discard<W>(mut writer: W, path: &Path, bytes: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let result = async {
        writer.write_all(bytes).await?;
        writer.flush().await
    }
    .await;

    if let Err(e) = result {
        drop(writer);
        if let Err(remove_err) = tokio::fs::remove_file(path).await {
            tracing::warn!(path = %path.display(), error = %remove_err, "Failed to remove partial upload");
        }
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use super::*;

    /// Writer that fails every write, standing in for a full disk.
    struct FailingWriter;

    impl AsyncWrite for FailingWriter {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<std::io::Result<usize>> {
            Poll::Ready(Err(Error::new(ErrorKind::Other, "no space left on device")))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn failed_write_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1-partial.png");
        tokio::fs::write(&path, b"half").await.unwrap();

        let err = write_or_discard(FailingWriter, &path, b"artwork")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn successful_write_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1-ok.png");
        let file = tokio::fs::File::create(&path).await.unwrap();

        write_or_discard(file, &path, b"artwork").await.unwrap();

        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"artwork");
    }

    #[tokio::test]
    async fn store_writes_bytes_under_sanitized_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let stored = store.store(b"artwork", "a b?.png").await.unwrap();

        assert!(stored.filename.ends_with("-a_b_.png"));
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
        assert_eq!(stored.size_bytes, 7);

        let on_disk = tokio::fs::read(dir.path().join(&stored.filename)).await.unwrap();
        assert_eq!(on_disk, b"artwork");
    }

    #[tokio::test]
    async fn same_name_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let first = store.store(b"one", "cover.pdf").await.unwrap();
        let second = store.store(b"two", "cover.pdf").await.unwrap();

        assert_ne!(first.filename, second.filename);
        assert_eq!(
            tokio::fs::read(dir.path().join(&first.filename)).await.unwrap(),
            b"one"
        );
        assert_eq!(
            tokio::fs::read(dir.path().join(&second.filename)).await.unwrap(),
            b"two"
        );
    }

    #[tokio::test]
    async fn ensure_dir_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("nested").join("uploads"));

        store.ensure_dir().await.unwrap();
        assert!(store.dir().is_dir());
    }
}
