use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        banner::{BannerDto, BannerFilesForm, BannerUploadForm, UploadedFilesDto},
        inquiry::{
            CreateInquiryDto, DeleteAllInquiriesDto, InquiryDto, RelayMessageDto,
            RelayedMessageDto, UpdateInquiryDto,
        },
        sequence::SequenceResetDto,
    },
    server::{
        controller::{
            banner::{
                self, create_banner, delete_banner, get_banner_by_id, get_banners, update_banner,
                upload_banner_files,
            },
            inquiry::{
                self, create_inquiry, delete_all_inquiries, delete_inquiry, get_inquiries,
                get_inquiry_by_id, relay_whatsapp_inquiry, update_inquiry,
            },
            sequence::{self, reset_sequence},
            status::{self, get_status},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Rent-a-car API"),
    paths(
        status::get_status,
        inquiry::create_inquiry,
        inquiry::get_inquiries,
        inquiry::get_inquiry_by_id,
        inquiry::update_inquiry,
        inquiry::delete_inquiry,
        inquiry::delete_all_inquiries,
        inquiry::relay_whatsapp_inquiry,
        sequence::reset_sequence,
        banner::get_banners,
        banner::get_banner_by_id,
        banner::create_banner,
        banner::update_banner,
        banner::delete_banner,
        banner::upload_banner_files,
    ),
    components(schemas(
        ErrorDto,
        StatusDto,
        InquiryDto,
        CreateInquiryDto,
        UpdateInquiryDto,
        DeleteAllInquiriesDto,
        RelayMessageDto,
        RelayedMessageDto,
        SequenceResetDto,
        BannerDto,
        BannerUploadForm,
        BannerFilesForm,
        UploadedFilesDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_status))
        .route(
            "/api/inquiries",
            post(create_inquiry)
                .get(get_inquiries)
                .delete(delete_all_inquiries),
        )
        .route(
            "/api/inquiries/{id}",
            get(get_inquiry_by_id)
                .patch(update_inquiry)
                .delete(delete_inquiry),
        )
        .route("/api/whatsapp-inquiry", post(relay_whatsapp_inquiry))
        .route("/api/admin/sequences/{name}/reset", post(reset_sequence))
        .route("/api/banners", get(get_banners).post(create_banner))
        .route("/api/banners/upload", post(upload_banner_files))
        .route(
            "/api/banners/{id}",
            get(get_banner_by_id)
                .put(update_banner)
                .delete(delete_banner),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .fallback(route_not_found)
}

async fn route_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: format!("Route not found: {}", uri.path()),
        }),
    )
}
