use anyhow::{Context, Result};
use axum::body::Bytes;
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use uuid::Uuid;

const FALLBACK_FILE_NAME: &str = "file";

/// Disk-backed store for uploaded files.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create upload directory {}", self.root.display()))
    }

    /// Builds `<unix-millis>-<token>-<name>` from the client supplied file name.
    pub fn generate_name(original_name: &str) -> String {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let token = Uuid::new_v4().simple().to_string();
        format!("{}-{}-{}", timestamp, &token[..8], sanitize_file_name(original_name))
    }

    /// Streams `content` into a newly named file and returns that name.
    pub async fn store<S, E>(&self, original_name: &str, content: S) -> Result<String>
    where
        S: Stream<Item = std::result::Result<Bytes, E>>,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.ensure_dir().await?;
        let mut content = std::pin::pin!(content);

        let filename = Self::generate_name(original_name);
        let path = self.root.join(&filename);
        let mut file = fs::File::create(&path)
            .await
            .with_context(|| format!("Failed to create {}", path.display()))?;

        let written = async {
            let mut written = 0usize;
            while let Some(chunk) = content.next().await {
                let chunk = chunk.context("Failed to read upload stream")?;
                file.write_all(&chunk)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                written += chunk.len();
            }
            file.flush().await?;
            Ok::<_, anyhow::Error>(written)
        }
        .await;

        match written {
            Ok(written) => {
                info!("Stored upload {} ({} bytes)", filename, written);
                Ok(filename)
            }
            Err(e) => {
                // Partial uploads must not stay reachable through the static route
                drop(file);
                if let Err(remove_err) = fs::remove_file(&path).await {
                    warn!("Failed to remove partial upload {}: {}", path.display(), remove_err);
                }
                Err(e)
            }
        }
    }
}

/// Keeps only the last path segment so names cannot escape the upload root.
fn sanitize_file_name(name: &str) -> &str {
    match name.rsplit(|c: char| c == '/' || c == '\\').next() {
        Some(segment) if !segment.is_empty() && segment != "." && segment != ".." => segment,
        _ => FALLBACK_FILE_NAME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\me\\scan.png"), "scan.png");
        assert_eq!(sanitize_file_name("dir/"), FALLBACK_FILE_NAME);
        assert_eq!(sanitize_file_name(".."), FALLBACK_FILE_NAME);
        assert_eq!(sanitize_file_name(""), FALLBACK_FILE_NAME);
    }

    #[test]
    fn test_generated_name_layout() {
        let name = FileStore::generate_name("akta notaris.pdf");
        let mut parts = name.splitn(3, '-');

        let timestamp = parts.next().unwrap();
        let token = parts.next().unwrap();
        let original = parts.next().unwrap();

        assert!(timestamp.parse::<i64>().is_ok());
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(original, "akta notaris.pdf");
    }

    #[test]
    fn test_generated_names_differ_for_same_file() {
        let first = FileStore::generate_name("same.txt");
        let second = FileStore::generate_name("same.txt");
        assert_ne!(first, second);
    }
}
