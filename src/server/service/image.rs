//! Banner image storage on the local filesystem.
//!
//! Images live under `<upload_dir>/banners/` and are referenced by the public URL
//! `/banners/<file>`. Serving that directory is left to the web server in front.

use std::{
    io,
    path::{Path, PathBuf},
};

use chrono::Utc;

use crate::server::model::banner::ImageUpload;

const BANNER_DIR: &str = "banners";
const BANNER_URL_PREFIX: &str = "/banners/";

#[derive(Clone, Debug)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn banner_dir(&self) -> PathBuf {
        self.root.join(BANNER_DIR)
    }

    /// Creates the banner directory if missing.
    pub async fn ensure_dirs(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(self.banner_dir()).await
    }

    /// Writes an uploaded image and returns its public URL.
    ///
    /// The stored name is `<field>-<unix millis>-<random><ext>`, with the extension taken
    /// from the client's file name.
    pub async fn save(&self, upload: &ImageUpload) -> io::Result<String> {
        let file_name = stored_file_name(upload);

        self.ensure_dirs().await?;
        tokio::fs::write(self.banner_dir().join(&file_name), &upload.bytes).await?;

        tracing::debug!("Stored banner image {}", file_name);

        Ok(format!("{}{}", BANNER_URL_PREFIX, file_name))
    }

    /// Removes the file behind a banner image URL.
    ///
    /// URLs outside `/banners/` and names that would escape the banner directory are
    /// ignored.
    ///
    /// # Returns
    /// - `Ok(true)` - The file was removed
    /// - `Ok(false)` - Nothing to remove
    /// - `Err(io::Error)` - The file exists but could not be removed
    pub async fn remove(&self, image_url: &str) -> io::Result<bool> {
        let Some(path) = self.resolve(image_url) else {
            return Ok(false);
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn resolve(&self, image_url: &str) -> Option<PathBuf> {
        let name = image_url.strip_prefix(BANNER_URL_PREFIX)?;

        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return None;
        }

        Some(self.banner_dir().join(name))
    }
}

fn stored_file_name(upload: &ImageUpload) -> String {
    let field: String = upload
        .field_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let field = if field.is_empty() { "image".to_string() } else { field };

    let extension = upload
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();

    format!(
        "{}-{}-{}{}",
        field,
        Utc::now().timestamp_millis(),
        rand::random_range(0..1_000_000_000u32),
        extension
    )
}
