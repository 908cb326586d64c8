use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type, types::Json};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

/// Lifecycle status of a tool listing
#[derive(
    Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[sqlx(type_name = "tool_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ToolStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// A directory listing for one AI tool
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Tool {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub url: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub icon: Option<String>,
    pub category: String,
    #[ts(type = "Array<string>")]
    pub tags: Json<Vec<String>>,
    pub views: i64,
    pub status: ToolStatus,
    pub seo_ignore: bool, // Manual de-index override
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal projection used when only link identity is needed
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct ToolSummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateTool {
    pub name: String,
    pub url: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub icon: Option<String>,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub status: Option<ToolStatus>,
    pub seo_ignore: Option<bool>,
}

impl Tool {
    /// Combined description length in characters, treating missing fields as
    /// empty strings.
    pub fn combined_description_len(&self) -> usize {
        self.short_description
            .as_deref()
            .unwrap_or("")
            .chars()
            .count()
            + self
                .full_description
                .as_deref()
                .unwrap_or("")
                .chars()
                .count()
    }

    /// Whether a visual asset exists for the listing.
    pub fn has_icon(&self) -> bool {
        self.icon.as_deref().is_some_and(|icon| !icon.is_empty())
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Tool>("SELECT * FROM tools WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Tool>("SELECT * FROM tools WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// All published tools, most viewed first.
    pub async fn find_published(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Tool>("SELECT * FROM tools WHERE status = $1 ORDER BY views DESC")
            .bind(ToolStatus::Published)
            .fetch_all(pool)
            .await
    }

    /// Most viewed published tools in a category, optionally excluding one
    /// tool (the page currently being rendered).
    pub async fn top_published_in_category(
        pool: &SqlitePool,
        category: &str,
        exclude_tool: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<ToolSummary>, sqlx::Error> {
        sqlx::query_as::<_, ToolSummary>(
            r#"SELECT id, name, slug
               FROM tools
               WHERE category = $1
                 AND status = $2
                 AND ($3 IS NULL OR id <> $3)
               ORDER BY views DESC
               LIMIT $4"#,
        )
        .bind(category)
        .bind(ToolStatus::Published)
        .bind(exclude_tool)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    pub async fn count_published_in_category(
        pool: &SqlitePool,
        category: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tools WHERE category = $1 AND status = $2",
        )
        .bind(category)
        .bind(ToolStatus::Published)
        .fetch_one(pool)
        .await
    }

    /// Published tools carrying every one of the given tags (at most two
    /// tags are considered), excluding the given tool.
    pub async fn published_sharing_tags(
        pool: &SqlitePool,
        exclude_tool: Uuid,
        tags: &[String],
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let first = tags.first().map(String::as_str);
        let second = tags.get(1).map(String::as_str);
        sqlx::query_as::<_, Tool>(
            r#"SELECT t.*
               FROM tools t
               WHERE t.status = $1
                 AND t.id <> $2
                 AND EXISTS (
                     SELECT 1 FROM json_each(t.tags)
                     WHERE json_each.value = $3
                 )
                 AND ($4 IS NULL OR EXISTS (
                     SELECT 1 FROM json_each(t.tags)
                     WHERE json_each.value = $4
                 ))
               LIMIT $5"#,
        )
        .bind(ToolStatus::Published)
        .bind(exclude_tool)
        .bind(first)
        .bind(second)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Published tools in the same category, excluding the given tool.
    pub async fn published_in_category(
        pool: &SqlitePool,
        category: &str,
        exclude_tool: Uuid,
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Tool>(
            r#"SELECT *
               FROM tools
               WHERE category = $1
                 AND status = $2
                 AND id <> $3
               ORDER BY views DESC
               LIMIT $4"#,
        )
        .bind(category)
        .bind(ToolStatus::Published)
        .bind(exclude_tool)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Every slug currently in use.
    pub async fn find_all_slugs(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT slug FROM tools")
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &CreateTool,
        id: Uuid,
        slug: &str,
    ) -> Result<Self, sqlx::Error> {
        let status = data.status.clone().unwrap_or_default();
        let tags = Json(data.tags.clone().unwrap_or_default());
        sqlx::query_as::<_, Tool>(
            r#"INSERT INTO tools (id, name, slug, url, short_description, full_description, icon, category, tags, status, seo_ignore)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
               RETURNING *"#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(slug)
        .bind(&data.url)
        .bind(&data.short_description)
        .bind(&data.full_description)
        .bind(&data.icon)
        .bind(&data.category)
        .bind(tags)
        .bind(status)
        .bind(data.seo_ignore.unwrap_or(false))
        .fetch_one(pool)
        .await
    }

    pub async fn update_status(
        pool: &SqlitePool,
        id: Uuid,
        status: ToolStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE tools SET status = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $1",
        )
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
        Ok(())
    }

    pub async fn increment_views(pool: &SqlitePool, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE tools SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    fn sample(name: &str, category: &str, status: ToolStatus, tags: &[&str]) -> CreateTool {
        CreateTool {
            name: name.to_string(),
            url: Some(format!("https://{}.example.com", name.to_lowercase())),
            short_description: Some("Short description".to_string()),
            full_description: Some("Full description".to_string()),
            icon: Some("/icons/sample.png".to_string()),
            category: category.to_string(),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            status: Some(status),
            seo_ignore: None,
        }
    }

    async fn insert(pool: &SqlitePool, data: CreateTool, slug: &str) -> Tool {
        Tool::create(pool, &data, Uuid::new_v4(), slug).await.unwrap()
    }

    #[tokio::test]
    async fn create_and_find_by_slug() {
        let pool = test_pool().await;
        let created = insert(
            &pool,
            sample("ChatGPT", "Chatbots", ToolStatus::Published, &["chat"]),
            "chatgpt",
        )
        .await;

        let found = Tool::find_by_slug(&pool, "chatgpt").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.status, ToolStatus::Published);
        assert_eq!(found.tags.0, vec!["chat".to_string()]);
        assert!(!found.seo_ignore);
    }

    #[tokio::test]
    async fn top_published_orders_by_views_and_excludes() {
        let pool = test_pool().await;
        let a = insert(
            &pool,
            sample("Alpha", "Writing", ToolStatus::Published, &[]),
            "alpha",
        )
        .await;
        let b = insert(
            &pool,
            sample("Beta", "Writing", ToolStatus::Published, &[]),
            "beta",
        )
        .await;
        insert(
            &pool,
            sample("Gamma", "Writing", ToolStatus::Draft, &[]),
            "gamma",
        )
        .await;

        for _ in 0..3 {
            Tool::increment_views(&pool, b.id).await.unwrap();
        }
        Tool::increment_views(&pool, a.id).await.unwrap();

        let top = Tool::top_published_in_category(&pool, "Writing", None, 10)
            .await
            .unwrap();
        assert_eq!(
            top.iter().map(|t| t.slug.as_str()).collect::<Vec<_>>(),
            vec!["beta", "alpha"]
        );

        let excluded = Tool::top_published_in_category(&pool, "Writing", Some(b.id), 10)
            .await
            .unwrap();
        assert_eq!(
            excluded.iter().map(|t| t.slug.as_str()).collect::<Vec<_>>(),
            vec!["alpha"]
        );
    }

    #[tokio::test]
    async fn count_published_ignores_drafts() {
        let pool = test_pool().await;
        insert(
            &pool,
            sample("One", "Audio", ToolStatus::Published, &[]),
            "one",
        )
        .await;
        insert(&pool, sample("Two", "Audio", ToolStatus::Draft, &[]), "two").await;

        assert_eq!(
            Tool::count_published_in_category(&pool, "Audio").await.unwrap(),
            1
        );
        assert_eq!(
            Tool::count_published_in_category(&pool, "Writing").await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn update_status_publishes_a_draft() {
        let pool = test_pool().await;
        let tool = insert(
            &pool,
            sample("Draft", "Writing", ToolStatus::Draft, &[]),
            "draft",
        )
        .await;

        Tool::update_status(&pool, tool.id, ToolStatus::Published)
            .await
            .unwrap();

        let reloaded = Tool::find_by_id(&pool, tool.id).await.unwrap().unwrap();
        assert_eq!(reloaded.status, ToolStatus::Published);
    }

    #[tokio::test]
    async fn tag_match_requires_every_leading_tag() {
        let pool = test_pool().await;
        let base = insert(
            &pool,
            sample("Base", "Writing", ToolStatus::Published, &["copywriting", "seo"]),
            "base",
        )
        .await;
        insert(
            &pool,
            sample("Match", "Chatbots", ToolStatus::Published, &["seo", "copywriting", "chat"]),
            "match",
        )
        .await;
        // Shares only the weaker second tag; must not surface
        insert(
            &pool,
            sample("Partial", "Chatbots", ToolStatus::Published, &["seo"]),
            "partial",
        )
        .await;
        insert(
            &pool,
            sample("Unrelated", "Audio", ToolStatus::Published, &["music"]),
            "unrelated",
        )
        .await;

        let related = Tool::published_sharing_tags(&pool, base.id, &base.tags.0, 6)
            .await
            .unwrap();
        assert_eq!(
            related.iter().map(|t| t.slug.as_str()).collect::<Vec<_>>(),
            vec!["match"]
        );
    }

    #[tokio::test]
    async fn single_tag_match_works_without_a_second_tag() {
        let pool = test_pool().await;
        let base = insert(
            &pool,
            sample("Base", "Writing", ToolStatus::Published, &["seo"]),
            "base",
        )
        .await;
        insert(
            &pool,
            sample("Match", "Chatbots", ToolStatus::Published, &["seo", "chat"]),
            "match",
        )
        .await;

        let related = Tool::published_sharing_tags(&pool, base.id, &base.tags.0, 6)
            .await
            .unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "match");
    }

    #[tokio::test]
    async fn create_persists_seo_ignore() {
        let pool = test_pool().await;
        let mut data = sample("Hidden", "Writing", ToolStatus::Published, &[]);
        data.seo_ignore = Some(true);

        let created = insert(&pool, data, "hidden").await;
        assert!(created.seo_ignore);

        let reloaded = Tool::find_by_slug(&pool, "hidden").await.unwrap().unwrap();
        assert!(reloaded.seo_ignore);
    }
}
