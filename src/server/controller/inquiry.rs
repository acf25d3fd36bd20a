use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        inquiry::{
            CreateInquiryDto, DeleteAllInquiriesDto, InquiryDto, RelayMessageDto,
            RelayedMessageDto, UpdateInquiryDto,
        },
    },
    server::{
        error::AppError,
        model::inquiry::{CreateInquiryParams, UpdateInquiryParams},
        service::inquiry::InquiryService,
        state::AppState,
    },
};

/// Tag for grouping inquiry endpoints in OpenAPI documentation
pub static INQUIRY_TAG: &str = "inquiry";

/// Create a booking inquiry.
///
/// Allocates the next sequential booking ID (`log001`, `log002`, ...), stores the
/// inquiry and notifies the rental desk.
///
/// # Returns
/// - `201 Created` - The stored inquiry with its booking ID
/// - `400 Bad Request` - Name or phone number missing
/// - `503 Service Unavailable` - Booking ID could not be allocated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/inquiries",
    tag = INQUIRY_TAG,
    request_body = CreateInquiryDto,
    responses(
        (status = 201, description = "Successfully created inquiry", body = InquiryDto),
        (status = 400, description = "Name or phone number missing", body = ErrorDto),
        (status = 503, description = "Booking ID allocation unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<CreateInquiryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db, state.notifier.as_ref());

    let inquiry = service
        .create(CreateInquiryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(inquiry.into_dto())))
}

/// List all inquiries, newest first.
#[utoipa::path(
    get,
    path = "/api/inquiries",
    tag = INQUIRY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved inquiries", body = Vec<InquiryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inquiries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db, state.notifier.as_ref());

    let inquiries = service.get_all().await?;
    let dtos: Vec<InquiryDto> = inquiries.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an inquiry by ID.
#[utoipa::path(
    get,
    path = "/api/inquiries/{id}",
    tag = INQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved inquiry", body = InquiryDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inquiry_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db, state.notifier.as_ref());

    let inquiry = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))?;

    Ok((StatusCode::OK, Json(inquiry.into_dto())))
}

/// Partially update an inquiry.
///
/// Only the supplied fields change; typically used by staff to move an inquiry
/// through its status values.
///
/// # Returns
/// - `200 OK` - The updated inquiry
/// - `404 Not Found` - Inquiry not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/inquiries/{id}",
    tag = INQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    request_body = UpdateInquiryDto,
    responses(
        (status = 200, description = "Successfully updated inquiry", body = InquiryDto),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInquiryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db, state.notifier.as_ref());

    let inquiry = service
        .update(id, UpdateInquiryParams::from_dto(payload))
        .await?
        .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))?;

    Ok((StatusCode::OK, Json(inquiry.into_dto())))
}

/// Delete an inquiry.
///
/// The booking ID of a deleted inquiry is never handed out again.
#[utoipa::path(
    delete,
    path = "/api/inquiries/{id}",
    tag = INQUIRY_TAG,
    params(
        ("id" = i32, Path, description = "Inquiry ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted inquiry"),
        (status = 404, description = "Inquiry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db, state.notifier.as_ref());

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Inquiry not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete all inquiries.
///
/// Removes every inquiry and resets the booking counter so the next booking
/// receives `log001`.
#[utoipa::path(
    delete,
    path = "/api/inquiries",
    tag = INQUIRY_TAG,
    responses(
        (status = 200, description = "Successfully deleted all inquiries", body = DeleteAllInquiriesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_all_inquiries(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db, state.notifier.as_ref());

    let deleted_count = service.delete_all().await?;

    Ok((StatusCode::OK, Json(DeleteAllInquiriesDto { deleted_count })))
}

/// Relay a WhatsApp widget message to the rental desk.
///
/// The message is forwarded through the notification channels and not stored.
///
/// # Returns
/// - `201 Created` - Message delivered
/// - `400 Bad Request` - Blank message
/// - `502 Bad Gateway` - Delivery failed
#[utoipa::path(
    post,
    path = "/api/whatsapp-inquiry",
    tag = INQUIRY_TAG,
    request_body = RelayMessageDto,
    responses(
        (status = 201, description = "Successfully relayed message", body = RelayedMessageDto),
        (status = 400, description = "Blank message", body = ErrorDto),
        (status = 502, description = "Message could not be delivered", body = ErrorDto)
    ),
)]
pub async fn relay_whatsapp_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<RelayMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = InquiryService::new(&state.db, state.notifier.as_ref());

    service.relay_message(&payload.msg).await?;

    Ok((
        StatusCode::CREATED,
        Json(RelayedMessageDto {
            message: "Message sent to the rental desk".to_string(),
        }),
    ))
}
