use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{
    ArticleContent, ArticleFilters, ExternalId, Language, NewsArticle, NewsArticleId,
    NewsArticleRepository, Source,
};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const COLUMNS: &str = "id, external_id, title, description, content, source_name, url, image_url, published_at, language, created_at, updated_at";

/// Timestamps are stored as fixed-width RFC3339 text (nanoseconds, `Z`)
/// so lexical order in SQL equals chronological order.
fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

#[derive(Clone)]
pub struct SqliteNewsArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteNewsArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsArticleRow {
    id: i64,
    external_id: String,
    title: String,
    description: String,
    content: String,
    source_name: String,
    url: String,
    image_url: Option<String>,
    published_at: DateTime<Utc>,
    language: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NewsArticleRow> for NewsArticle {
    type Error = DomainError;

    fn try_from(row: NewsArticleRow) -> Result<Self, Self::Error> {
        Ok(NewsArticle::reconstitute(
            NewsArticleId::new(row.id)?,
            ExternalId::new(row.external_id)?,
            ArticleContent::new(row.title, row.description, row.content)?,
            Source::new(row.source_name)?,
            row.url,
            row.image_url,
            row.published_at,
            Language::new(row.language)?,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// Escape LIKE wildcards so the keyword is matched literally.
fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

fn push_clause(builder: &mut QueryBuilder<'_, Sqlite>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

fn apply_filters(builder: &mut QueryBuilder<'_, Sqlite>, filters: &ArticleFilters) {
    let mut has_where = false;

    if let Some(keyword) = &filters.keyword {
        let pattern = like_pattern(keyword);
        push_clause(builder, &mut has_where);
        builder.push("(title LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\' OR description LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\' OR content LIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\')");
    }

    if let Some(language) = &filters.language {
        push_clause(builder, &mut has_where);
        builder.push("language = ");
        builder.push_bind(language.code().to_string());
    }

    if let Some(source) = &filters.source {
        push_clause(builder, &mut has_where);
        builder.push("source_name = ");
        builder.push_bind(source.clone());
    }

    if let Some(from) = filters.from {
        push_clause(builder, &mut has_where);
        builder.push("published_at >= ");
        builder.push_bind(timestamp(from));
    }

    if let Some(to) = filters.to {
        push_clause(builder, &mut has_where);
        builder.push("published_at <= ");
        builder.push_bind(timestamp(to));
    }
}

#[async_trait]
impl NewsArticleRepository for SqliteNewsArticleRepository {
    async fn find_by_id(&self, id: NewsArticleId) -> DomainResult<Option<NewsArticle>> {
        let row = sqlx::query_as::<_, NewsArticleRow>(&format!(
            "SELECT {COLUMNS} FROM news_articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(NewsArticle::try_from).transpose()
    }

    async fn find_by_external_id(
        &self,
        external_id: &ExternalId,
    ) -> DomainResult<Option<NewsArticle>> {
        let row = sqlx::query_as::<_, NewsArticleRow>(&format!(
            "SELECT {COLUMNS} FROM news_articles WHERE external_id = ?"
        ))
        .bind(external_id.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(NewsArticle::try_from).transpose()
    }

    async fn save(&self, article: &NewsArticle) -> DomainResult<NewsArticle> {
        let content = article.content();

        // id and created_at are never overwritten by the upsert.
        let row = sqlx::query_as::<_, NewsArticleRow>(&format!(
            "INSERT INTO news_articles (external_id, title, description, content, source_name, url, image_url, published_at, language, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (external_id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                content = excluded.content,
                source_name = excluded.source_name,
                url = excluded.url,
                image_url = excluded.image_url,
                published_at = excluded.published_at,
                language = excluded.language,
                updated_at = excluded.updated_at
             RETURNING {COLUMNS}"
        ))
        .bind(article.external_id().as_str())
        .bind(content.title())
        .bind(content.description())
        .bind(content.content())
        .bind(article.source().name())
        .bind(article.url())
        .bind(article.image_url())
        .bind(timestamp(article.published_at()))
        .bind(article.language().code())
        .bind(timestamp(article.created_at()))
        .bind(timestamp(article.updated_at()))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        NewsArticle::try_from(row)
    }

    async fn find_with_filters(
        &self,
        filters: &ArticleFilters,
        page: u32,
        limit: u32,
    ) -> DomainResult<Vec<NewsArticle>> {
        let page = page.max(1);
        let limit = limit.max(1);
        let offset = i64::from(page - 1) * i64::from(limit);

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM news_articles"));
        apply_filters(&mut builder, filters);
        builder.push(" ORDER BY published_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<NewsArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(NewsArticle::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn count_with_filters(&self, filters: &ArticleFilters) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM news_articles");
        apply_filters(&mut builder, filters);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or(0))
    }
}
