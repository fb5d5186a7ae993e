// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::news::IngestNewsCommand,
    dto::{IngestionStats, NewsArticleDto, PaginatedResponse},
    queries::news::{GetNewsByIdQuery, ListNewsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct IngestNewsRequest {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub from: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub max: Option<u32>,
}

impl From<IngestNewsRequest> for IngestNewsCommand {
    fn from(request: IngestNewsRequest) -> Self {
        Self {
            keyword: request.keyword,
            language: request.language,
            country: request.country,
            from: request.from,
            to: request.to,
            max: request.max,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNewsParams {
    pub keyword: Option<String>,
    pub language: Option<String>,
    pub source: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<ListNewsParams> for ListNewsQuery {
    fn from(params: ListNewsParams) -> Self {
        Self {
            keyword: params.keyword,
            language: params.language,
            source: params.source,
            from: params.from,
            to: params.to,
            page: params.page,
            limit: params.limit,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/news/ingest",
    request_body = IngestNewsRequest,
    responses(
        (status = 201, description = "Batch fetched and reconciled.", body = IngestionStats),
        (status = 400, description = "Request rejected.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "Upstream news source failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn ingest_news(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<IngestNewsRequest>,
) -> HttpResult<(StatusCode, Json<IngestionStats>)> {
    let stats = state
        .services
        .news_commands
        .ingest(payload.into())
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/news",
    params(ListNewsParams),
    responses(
        (status = 200, description = "One page of stored articles, newest first.", body = crate::presentation::http::openapi::NewsListResponse),
        (status = 400, description = "Invalid filters.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListNewsParams>,
) -> HttpResult<Json<PaginatedResponse<NewsArticleDto>>> {
    state
        .services
        .news_queries
        .list_news(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Stored article.", body = NewsArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn get_news(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<NewsArticleDto>> {
    state
        .services
        .news_queries
        .get_news(GetNewsByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}
