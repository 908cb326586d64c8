//! Read capability injected into the SEO gatekeeper and the internal linker.
//!
//! Keeping this behind a trait means the rule logic never touches the pool
//! directly and can be exercised against in-memory stubs.

use async_trait::async_trait;
use db::models::tool::{Tool, ToolSummary};
use sqlx::SqlitePool;
use uuid::Uuid;

#[async_trait]
pub trait ToolReader: Send + Sync {
    /// Number of published tools referencing the given category.
    async fn count_published_in_category(&self, category: &str) -> Result<i64, sqlx::Error>;

    /// Most viewed published tools in a category, optionally excluding one.
    async fn top_published_in_category(
        &self,
        category: &str,
        exclude_tool: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<ToolSummary>, sqlx::Error>;

    /// Published tools carrying every one of the given tags.
    async fn published_sharing_tags(
        &self,
        exclude_tool: Uuid,
        tags: &[String],
        limit: i64,
    ) -> Result<Vec<Tool>, sqlx::Error>;

    /// Published tools in the same category.
    async fn published_in_category(
        &self,
        category: &str,
        exclude_tool: Uuid,
        limit: i64,
    ) -> Result<Vec<Tool>, sqlx::Error>;
}

#[async_trait]
impl ToolReader for SqlitePool {
    async fn count_published_in_category(&self, category: &str) -> Result<i64, sqlx::Error> {
        Tool::count_published_in_category(self, category).await
    }

    async fn top_published_in_category(
        &self,
        category: &str,
        exclude_tool: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<ToolSummary>, sqlx::Error> {
        Tool::top_published_in_category(self, category, exclude_tool, limit).await
    }

    async fn published_sharing_tags(
        &self,
        exclude_tool: Uuid,
        tags: &[String],
        limit: i64,
    ) -> Result<Vec<Tool>, sqlx::Error> {
        Tool::published_sharing_tags(self, exclude_tool, tags, limit).await
    }

    async fn published_in_category(
        &self,
        category: &str,
        exclude_tool: Uuid,
        limit: i64,
    ) -> Result<Vec<Tool>, sqlx::Error> {
        Tool::published_in_category(self, category, exclude_tool, limit).await
    }
}
