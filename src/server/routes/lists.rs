//! List upload and distribution views
//!
//! `POST /api/lists/upload` takes a multipart form with a `file` field.

use crate::server::routes::parse_agent_id;
use crate::server::state::AppState;
use crate::services::UploadedFile;
use crate::utils::error::{DispatchError, Result};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use bytes::BytesMut;
use futures::StreamExt;
use tracing::{debug, info};

/// Configure list routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/lists")
            .route("", web::get().to(get_lists))
            .route("/upload", web::post().to(upload_list))
            .route("/agent/{agent_id}", web::get().to(get_agent_lists))
            .route("/batch/{batch_id}", web::get().to(get_batch)),
    );
}

/// Upload a list and distribute it across agents
/// POST /api/lists/upload
pub async fn upload_list(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse> {
    let max_size = state.config.upload().max_file_size;
    let file = read_upload(payload, max_size).await?;
    info!(
        "Received upload {:?} ({}, {} bytes)",
        file.file_name,
        file.content_type,
        file.bytes.len()
    );

    let outcome = state.lists.upload(file).await?;
    Ok(HttpResponse::Created().json(outcome))
}

/// Batches and per-agent totals
/// GET /api/lists
pub async fn get_lists(state: web::Data<AppState>) -> Result<HttpResponse> {
    let overview = state.lists.overview().await?;
    Ok(HttpResponse::Ok().json(overview))
}

/// One agent's items and batch breakdown
/// GET /api/lists/agent/{agent_id}
pub async fn get_agent_lists(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let agent_id = parse_agent_id(&path)?;
    let detail = state.lists.agent_detail(agent_id).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Items of one batch
/// GET /api/lists/batch/{batch_id}
pub async fn get_batch(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let detail = state.lists.batch_detail(&path).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Pull the `file` field out of the form, enforcing the size limit while streaming
async fn read_upload(mut payload: Multipart, max_size: usize) -> Result<UploadedFile> {
    let mut upload: Option<UploadedFile> = None;

    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|e| DispatchError::bad_request(format!("Invalid multipart data: {}", e)))?;

        if field.name() != Some("file") || upload.is_some() {
            // Drain fields we don't use
            while field.next().await.is_some() {}
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        let mut data = BytesMut::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| DispatchError::bad_request(format!("Error reading file: {}", e)))?;
            if data.len() + chunk.len() > max_size {
                return Err(DispatchError::bad_request(format!(
                    "File exceeds the maximum upload size of {} bytes",
                    max_size
                )));
            }
            data.extend_from_slice(&chunk);
        }

        debug!("Read file field: {} bytes", data.len());
        upload = Some(UploadedFile {
            file_name,
            content_type,
            bytes: data.freeze(),
        });
    }

    upload.ok_or_else(|| DispatchError::bad_request("Please upload a file"))
}
