//! Routes for tool listings and tool pages.

use std::collections::HashSet;

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::models::tool::{CreateTool, Tool, ToolStatus};
use serde::{Deserialize, Serialize};
use services::services::{
    internal_linking::{autolink, build_link_candidates, smart_alternatives},
    slug::resolve_unique_slug,
};
use tracing::info;
use ts_rs::TS;
use utils::response::ApiResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// How many related tools a tool page shows.
const ALTERNATIVES_LIMIT: usize = 6;

/// A tool page: the row itself plus the rendered description with internal
/// links injected, and related tools.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ToolPageResponse {
    pub tool: Tool,
    pub description_html: String,
    pub alternatives: Vec<Tool>,
}

/// List all published tools, most viewed first
pub async fn list_tools(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Tool>>>, ApiError> {
    let tools = Tool::find_published(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(tools)))
}

/// Fetch one tool page by slug
pub async fn get_tool(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ResponseJson<ApiResponse<ToolPageResponse>>, ApiError> {
    let tool = Tool::find_by_slug(&state.db.pool, &slug)
        .await?
        .ok_or(ApiError::NotFound)?;

    Tool::increment_views(&state.db.pool, tool.id).await?;

    let candidates = build_link_candidates(
        &state.db.pool,
        &state.seo,
        Some(&tool.category),
        Some(tool.id),
    )
    .await;
    let description_html = autolink(
        tool.full_description.as_deref().unwrap_or(""),
        &candidates,
        &state.seo,
    );
    let alternatives = smart_alternatives(&state.db.pool, &tool, ALTERNATIVES_LIMIT).await;

    Ok(ResponseJson(ApiResponse::success(ToolPageResponse {
        tool,
        description_html,
        alternatives,
    })))
}

/// Create a tool listing, deriving a collision-free slug from its name
pub async fn create_tool(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateTool>,
) -> Result<ResponseJson<ApiResponse<Tool>>, ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let existing: HashSet<String> = Tool::find_all_slugs(&state.db.pool)
        .await?
        .into_iter()
        .collect();
    let id = Uuid::new_v4();
    let slug = resolve_unique_slug(&payload.name, &id, &existing);

    let tool = Tool::create(&state.db.pool, &payload, id, &slug).await?;

    info!(tool_id = %tool.id, slug = %tool.slug, "created tool listing");

    Ok(ResponseJson(ApiResponse::success(tool)))
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UpdateToolStatus {
    pub status: ToolStatus,
}

/// Move a tool through its lifecycle (draft, published, archived)
pub async fn update_tool_status(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    axum::Json(payload): axum::Json<UpdateToolStatus>,
) -> Result<ResponseJson<ApiResponse<Tool>>, ApiError> {
    let tool = Tool::find_by_slug(&state.db.pool, &slug)
        .await?
        .ok_or(ApiError::NotFound)?;

    Tool::update_status(&state.db.pool, tool.id, payload.status.clone()).await?;
    info!(tool_id = %tool.id, status = %payload.status, "updated tool status");

    let updated = Tool::find_by_id(&state.db.pool, tool.id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(updated)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tools", get(list_tools).post(create_tool))
        .route("/tools/{slug}", get(get_tool))
        .route("/tools/{slug}/status", put(update_tool_status))
}
