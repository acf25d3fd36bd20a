use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::banner::BannerRepository,
    error::AppError,
    model::banner::{Banner, BannerForm, CreateBannerParams, ImageUpload, UpdateBannerParams},
    service::image::ImageStore,
};

pub struct BannerService<'a> {
    db: &'a DatabaseConnection,
    images: &'a ImageStore,
}

impl<'a> BannerService<'a> {
    pub fn new(db: &'a DatabaseConnection, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    /// Gets banners in display order, optionally only the active ones.
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Banner>, AppError> {
        Ok(BannerRepository::new(self.db).get_all(active_only).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Banner>, AppError> {
        Ok(BannerRepository::new(self.db).find_by_id(id).await?)
    }

    /// Stores the uploaded image and creates the banner.
    ///
    /// # Returns
    /// - `Ok(Banner)` - The created banner
    /// - `Err(AppError::BadRequest)` - Image missing or not an image
    pub async fn create(&self, form: BannerForm) -> Result<Banner, AppError> {
        let image = form
            .image
            .ok_or_else(|| AppError::BadRequest("Image file is required".to_string()))?;
        validate_image(&image)?;

        let image_url = self.images.save(&image).await?;

        let params = CreateBannerParams {
            name: form
                .name
                .unwrap_or_else(|| format!("Banner {}", Utc::now().timestamp_millis())),
            image_url,
            alt_text: form.alt_text.unwrap_or_default(),
            is_active: form.is_active.unwrap_or(true),
            display_order: form.display_order.unwrap_or(0),
        };

        let banner = BannerRepository::new(self.db).create(params).await?;

        tracing::info!("Created banner {} ({})", banner.id, banner.image_url);

        Ok(banner)
    }

    /// Updates a banner. A new image replaces the old file.
    ///
    /// # Returns
    /// - `Ok(Some(Banner))` - The updated banner
    /// - `Ok(None)` - No banner with this ID
    pub async fn update(&self, id: i32, form: BannerForm) -> Result<Option<Banner>, AppError> {
        let repo = BannerRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let new_image_url = match &form.image {
            Some(image) => {
                validate_image(image)?;
                Some(self.images.save(image).await?)
            }
            None => None,
        };

        let params = UpdateBannerParams {
            name: form.name,
            image_url: new_image_url.clone(),
            alt_text: form.alt_text,
            is_active: form.is_active,
            display_order: form.display_order,
        };

        let result = repo.update(id, params).await;

        // Whichever image the row no longer points at goes.
        if let Some(new_image_url) = &new_image_url {
            match &result {
                Ok(Some(_)) => self.remove_image(&existing.image_url).await,
                Ok(None) | Err(_) => self.remove_image(new_image_url).await,
            }
        }

        Ok(result?)
    }

    /// Stores several banner images without creating banners.
    ///
    /// Parts that are not images are skipped. If a write fails, the images already
    /// stored by this call are removed again.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Public URLs of the stored images
    /// - `Err(AppError::BadRequest)` - No image among the uploads
    pub async fn upload_files(&self, uploads: Vec<ImageUpload>) -> Result<Vec<String>, AppError> {
        let images: Vec<ImageUpload> = uploads
            .into_iter()
            .filter(|upload| validate_image(upload).is_ok())
            .collect();

        if images.is_empty() {
            return Err(AppError::BadRequest("No files uploaded".to_string()));
        }

        let mut urls = Vec::with_capacity(images.len());
        for image in &images {
            match self.images.save(image).await {
                Ok(url) => urls.push(url),
                Err(err) => {
                    for url in &urls {
                        self.remove_image(url).await;
                    }
                    return Err(err.into());
                }
            }
        }

        tracing::info!("Stored {} banner images", urls.len());

        Ok(urls)
    }

    /// Deletes a banner and its image file.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = BannerRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(false);
        };

        let deleted = repo.delete(id).await?;
        if deleted {
            self.remove_image(&existing.image_url).await;
        }

        Ok(deleted)
    }

    async fn remove_image(&self, image_url: &str) {
        if let Err(err) = self.images.remove(image_url).await {
            tracing::warn!("Failed to remove banner image {}: {}", image_url, err);
        }
    }
}

fn validate_image(image: &ImageUpload) -> Result<(), AppError> {
    let is_image = image
        .content_type
        .as_deref()
        .is_some_and(|content_type| content_type.starts_with("image/"));

    if !is_image {
        return Err(AppError::BadRequest("Only image files are allowed".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::Banner as BannerEntity;
    use sea_orm::ConnectionTrait;
    use test_utils::{builder::TestBuilder, factory::banner::BannerFactory};

    fn png(bytes: &[u8]) -> ImageUpload {
        ImageUpload {
            field_name: "image".to_string(),
            file_name: Some("banner.png".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: bytes.to_vec(),
        }
    }

    fn stored_path(store: &ImageStore, url: &str) -> std::path::PathBuf {
        store.banner_dir().join(url.trim_start_matches("/banners/"))
    }

    /// Tests creating a banner from form defaults.
    ///
    /// Expected: Ok with active banner at order 0 and the image on disk
    #[tokio::test]
    async fn creates_banner_with_defaults() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(BannerEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let service = BannerService::new(db, &images);

        let banner = service
            .create(BannerForm {
                image: Some(png(b"png")),
                ..Default::default()
            })
            .await?;

        assert!(banner.name.starts_with("Banner "));
        assert!(banner.is_active);
        assert_eq!(banner.display_order, 0);
        assert_eq!(banner.alt_text, "");
        assert!(stored_path(&images, &banner.image_url).exists());

        Ok(())
    }

    /// Tests the image requirements on create.
    ///
    /// Expected: Err(BadRequest) for a missing image and for a PDF
    #[tokio::test]
    async fn rejects_missing_or_non_image_upload() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(BannerEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let service = BannerService::new(db, &images);

        let missing = service.create(BannerForm::default()).await;
        let pdf = service
            .create(BannerForm {
                image: Some(ImageUpload {
                    content_type: Some("application/pdf".to_string()),
                    ..png(b"%PDF")
                }),
                ..Default::default()
            })
            .await;

        assert!(matches!(missing, Err(AppError::BadRequest(_))));
        assert!(matches!(pdf, Err(AppError::BadRequest(_))));
        assert!(service.get_all(false).await?.is_empty());

        Ok(())
    }

    /// Tests replacing a banner image.
    ///
    /// Expected: new image stored, old file removed, other fields unchanged
    #[tokio::test]
    async fn update_replaces_and_removes_old_image() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(BannerEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let service = BannerService::new(db, &images);

        let created = service
            .create(BannerForm {
                image: Some(png(b"old")),
                name: Some("Summer".to_string()),
                ..Default::default()
            })
            .await?;

        let updated = service
            .update(
                created.id,
                BannerForm {
                    image: Some(png(b"new")),
                    ..Default::default()
                },
            )
            .await?
            .unwrap();

        assert_ne!(updated.image_url, created.image_url);
        assert_eq!(updated.name, "Summer");
        assert!(!stored_path(&images, &created.image_url).exists());
        assert_eq!(
            std::fs::read(stored_path(&images, &updated.image_url)).unwrap(),
            b"new"
        );

        Ok(())
    }

    /// Tests deleting a banner whose image was never uploaded through the store.
    ///
    /// Seeded banners point at `/images/...`, which the store ignores.
    ///
    /// Expected: Ok(true), then Ok(false) for the same ID
    #[tokio::test]
    async fn deletes_banner_with_foreign_image_url() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(BannerEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let service = BannerService::new(db, &images);

        let banner = BannerFactory::new(db)
            .image_url("/images/banner1.webp")
            .build()
            .await?;

        assert!(service.delete(banner.id).await?);
        assert!(!service.delete(banner.id).await?);

        Ok(())
    }

    /// Tests a replacement image whose row update fails.
    ///
    /// Expected: Err, original image kept, no new file left behind
    #[tokio::test]
    async fn failed_update_removes_new_image() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(BannerEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let service = BannerService::new(db, &images);

        let created = service
            .create(BannerForm {
                image: Some(png(b"old")),
                ..Default::default()
            })
            .await?;

        db.execute_unprepared(
            "CREATE TRIGGER banner_read_only BEFORE UPDATE ON banner \
             BEGIN SELECT RAISE(ABORT, 'banner is read-only'); END",
        )
        .await?;

        let result = service
            .update(
                created.id,
                BannerForm {
                    image: Some(png(b"new")),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::DbErr(_))));
        assert!(stored_path(&images, &created.image_url).exists());
        assert_eq!(std::fs::read_dir(images.banner_dir()).unwrap().count(), 1);

        Ok(())
    }

    /// Tests storing several images in one upload.
    ///
    /// Expected: image parts stored in order, non-image parts skipped
    #[tokio::test]
    async fn uploads_only_image_files() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(BannerEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let service = BannerService::new(db, &images);

        let pdf = ImageUpload {
            content_type: Some("application/pdf".to_string()),
            ..png(b"%PDF")
        };
        let urls = service
            .upload_files(vec![png(b"one"), pdf, png(b"two")])
            .await?;

        assert_eq!(urls.len(), 2);
        assert_eq!(std::fs::read(stored_path(&images, &urls[0])).unwrap(), b"one");
        assert_eq!(std::fs::read(stored_path(&images, &urls[1])).unwrap(), b"two");
        assert!(service.get_all(false).await?.is_empty());

        let no_image = service
            .upload_files(vec![ImageUpload {
                content_type: None,
                ..png(b"?")
            }])
            .await;
        assert!(matches!(no_image, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests updating a banner that does not exist.
    ///
    /// Expected: Ok(None) and no file written
    #[tokio::test]
    async fn update_of_missing_banner_returns_none() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(BannerEntity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let service = BannerService::new(db, &images);

        let result = service
            .update(
                42,
                BannerForm {
                    image: Some(png(b"x")),
                    ..Default::default()
                },
            )
            .await?;

        assert!(result.is_none());
        assert!(!images.banner_dir().exists());

        Ok(())
    }
}
