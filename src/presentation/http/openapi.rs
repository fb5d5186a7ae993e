// src/presentation/http/openapi.rs
use crate::application::dto::NewsArticleDto;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Schema of `GET /api/news`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsListResponse {
    pub items: Vec<NewsArticleDto>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::news::ingest_news,
        crate::presentation::http::controllers::news::list_news,
        crate::presentation::http::controllers::news::get_news,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            NewsListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::news::IngestNewsRequest,
            crate::presentation::http::controllers::news::ListNewsParams,
            crate::application::dto::IngestionStats,
            crate::application::dto::NewsArticleDto,
            crate::application::validation::Violation
        )
    ),
    tags(
        (name = "News", description = "News ingestion and retrieval"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "News Aggregator API",
        description = "Ingests GNews search results and serves the stored articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }

        if servers.is_empty() {
            openapi.servers = None;
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and ReDoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
