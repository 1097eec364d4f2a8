//! Agent management endpoints

use crate::core::models::{AgentUpdate, NewAgent};
use crate::server::routes::parse_agent_id;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Configure agent routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/agents")
            .route("", web::post().to(create_agent))
            .route("", web::get().to(list_agents))
            .route("/{id}", web::get().to(get_agent))
            .route("/{id}", web::put().to(update_agent))
            .route("/{id}", web::delete().to(delete_agent))
            .route("/{id}/assigned-items", web::get().to(get_assigned_items)),
    );
}

/// POST /api/agents
pub async fn create_agent(
    state: web::Data<AppState>,
    payload: web::Json<NewAgent>,
) -> Result<HttpResponse> {
    let agent = state.agents.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(agent))
}

/// GET /api/agents
pub async fn list_agents(state: web::Data<AppState>) -> Result<HttpResponse> {
    let agents = state.agents.list().await?;
    Ok(HttpResponse::Ok().json(agents))
}

/// GET /api/agents/{id}
pub async fn get_agent(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let agent = state.agents.get(parse_agent_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(agent))
}

/// PUT /api/agents/{id}
pub async fn update_agent(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<AgentUpdate>,
) -> Result<HttpResponse> {
    let id = parse_agent_id(&path)?;
    let agent = state.agents.update(id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(agent))
}

/// DELETE /api/agents/{id}
pub async fn delete_agent(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let released = state.agents.delete(parse_agent_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Agent removed",
        "releasedItems": released
    })))
}

/// GET /api/agents/{id}/assigned-items
pub async fn get_assigned_items(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let items = state.agents.assigned_items(parse_agent_id(&path)?).await?;
    Ok(HttpResponse::Ok().json(items))
}
