use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        banner::{BannerDto, BannerFilesForm, BannerUploadForm, UploadedFilesDto},
    },
    server::{
        error::AppError,
        model::banner::{BannerForm, ImageUpload},
        service::banner::BannerService,
        state::AppState,
    },
};

/// Tag for grouping banner endpoints in OpenAPI documentation
pub static BANNER_TAG: &str = "banner";

#[derive(Deserialize)]
pub struct BannerListParams {
    #[serde(default)]
    pub active: Option<bool>,
}

/// Reads the banner multipart form.
///
/// Only the `image` field may carry a file; any other file field is rejected the way
/// an unexpected upload would be.
async fn read_banner_form(mut multipart: Multipart) -> Result<BannerForm, AppError> {
    let mut form = BannerForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        if field.file_name().is_some() {
            if field_name != "image" {
                return Err(AppError::BadRequest(format!(
                    "Unexpected file field: {}",
                    field_name
                )));
            }

            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await?;

            form.image = Some(ImageUpload {
                field_name,
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            });
            continue;
        }

        let value = field.text().await?;
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match field_name.as_str() {
            "name" => form.name = Some(value.to_string()),
            "altText" => form.alt_text = Some(value.to_string()),
            "isActive" => {
                form.is_active = Some(match value {
                    "true" => true,
                    "false" => false,
                    _ => {
                        return Err(AppError::BadRequest(
                            "isActive must be \"true\" or \"false\"".to_string(),
                        ))
                    }
                })
            }
            "displayOrder" => {
                form.display_order = Some(value.parse().map_err(|_| {
                    AppError::BadRequest("displayOrder must be an integer".to_string())
                })?)
            }
            "image" => {
                return Err(AppError::BadRequest(
                    "image must be uploaded as a file".to_string(),
                ))
            }
            other => tracing::debug!("Ignoring unknown banner form field {}", other),
        }
    }

    Ok(form)
}

/// Reads every file part sent under `files`.
async fn read_file_uploads(mut multipart: Multipart) -> Result<Vec<ImageUpload>, AppError> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        if field_name != "files" || field.file_name().is_none() {
            tracing::debug!("Ignoring upload form field {}", field_name);
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        uploads.push(ImageUpload {
            field_name,
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Ok(uploads)
}

/// List banners.
///
/// Banners are ordered by display order, then creation. Pass `active=true` to get
/// only the banners shown on the site.
#[utoipa::path(
    get,
    path = "/api/banners",
    tag = BANNER_TAG,
    params(
        ("active" = Option<bool>, Query, description = "Only return active banners when true")
    ),
    responses(
        (status = 200, description = "Successfully retrieved banners", body = Vec<BannerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banners(
    State(state): State<AppState>,
    Query(params): Query<BannerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db, &state.images);

    let banners = service.get_all(params.active.unwrap_or(false)).await?;
    let dtos: Vec<BannerDto> = banners.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(
        ("id" = i32, Path, description = "Banner ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved banner", body = BannerDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banner_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db, &state.images);

    let banner = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Banner not found".to_string()))?;

    Ok((StatusCode::OK, Json(banner.into_dto())))
}

/// Create a banner from a multipart upload.
///
/// # Returns
/// - `201 Created` - The created banner
/// - `400 Bad Request` - Image missing, not an image, or malformed form
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    post,
    path = "/api/banners",
    tag = BANNER_TAG,
    request_body(content = BannerUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created banner", body = BannerDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db, &state.images);

    let form = read_banner_form(multipart).await?;
    let banner = service.create(form).await?;

    Ok((StatusCode::CREATED, Json(banner.into_dto())))
}

/// Update a banner from a multipart form.
///
/// All fields are optional. Uploading a new image replaces the stored file.
#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(
        ("id" = i32, Path, description = "Banner ID")
    ),
    request_body(content = BannerUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated banner", body = BannerDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db, &state.images);

    let form = read_banner_form(multipart).await?;
    let banner = service
        .update(id, form)
        .await?
        .ok_or_else(|| AppError::NotFound("Banner not found".to_string()))?;

    Ok((StatusCode::OK, Json(banner.into_dto())))
}

/// Delete a banner and its stored image.
#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(
        ("id" = i32, Path, description = "Banner ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted banner"),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db, &state.images);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Banner not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Store banner images without creating banners.
///
/// Accepts any number of `files` parts. Parts that are not images are skipped; the
/// returned URLs can be used as `imageUrl` values later.
///
/// # Returns
/// - `200 OK` - URLs of the stored images
/// - `400 Bad Request` - No image among the uploads
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    post,
    path = "/api/banners/upload",
    tag = BANNER_TAG,
    request_body(content = BannerFilesForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully stored images", body = UploadedFilesDto),
        (status = 400, description = "No image uploaded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_banner_files(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let service = BannerService::new(&state.db, &state.images);

    let uploads = read_file_uploads(multipart).await?;
    let urls = service.upload_files(uploads).await?;

    Ok((
        StatusCode::OK,
        Json(UploadedFilesDto {
            message: "File upload successful".to_string(),
            urls,
        }),
    ))
}
