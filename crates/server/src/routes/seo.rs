//! Routes exposing indexability verdicts to sitemap builders and crawl
//! tooling. XML rendering happens elsewhere; these return the raw subsets.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::tool::Tool;
use serde::{Deserialize, Serialize};
use services::services::seo_gatekeeper::{
    compute_indexable_categories, filter_indexable_tools, is_category_indexable,
    is_tool_indexable,
};
use ts_rs::TS;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CategoryVerdict {
    pub category: String,
    pub indexable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ToolVerdict {
    pub slug: String,
    pub indexable: bool,
}

/// Published tools that pass the quality gate, for the tools sitemap
pub async fn indexable_tools(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Tool>>>, ApiError> {
    let tools = Tool::find_published(&state.db.pool).await?;
    let indexable = filter_indexable_tools(tools, &state.seo);
    Ok(ResponseJson(ApiResponse::success(indexable)))
}

/// Categories with at least one indexable tool, for the categories sitemap
pub async fn indexable_categories(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<String>>>, ApiError> {
    let tools = Tool::find_published(&state.db.pool).await?;
    let categories = compute_indexable_categories(&tools, &state.seo);
    Ok(ResponseJson(ApiResponse::success(categories)))
}

/// Indexability verdict for a single category
pub async fn category_verdict(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<ResponseJson<ApiResponse<CategoryVerdict>>, ApiError> {
    let indexable = is_category_indexable(&state.db.pool, &category, &state.seo).await;
    Ok(ResponseJson(ApiResponse::success(CategoryVerdict {
        category,
        indexable,
    })))
}

/// Indexability verdict for a single tool
pub async fn tool_verdict(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ResponseJson<ApiResponse<ToolVerdict>>, ApiError> {
    let tool = Tool::find_by_slug(&state.db.pool, &slug)
        .await?
        .ok_or(ApiError::NotFound)?;
    let indexable = is_tool_indexable(&tool, &state.seo);
    Ok(ResponseJson(ApiResponse::success(ToolVerdict {
        slug: tool.slug,
        indexable,
    })))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/seo",
        Router::new()
            .route("/indexable-tools", get(indexable_tools))
            .route("/indexable-categories", get(indexable_categories))
            .route("/categories/{category}/verdict", get(category_verdict))
            .route("/tools/{slug}/verdict", get(tool_verdict)),
    )
}
