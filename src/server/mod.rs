//! JSON API server over a shared catalog

use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{ArticleId, ArticleSummary, Catalog, CategoryFilter, TagFilter};
use crate::error::CatalogError;
use crate::i18n::Locale;
use crate::Blog;

/// Server state.
///
/// Reads share the lock; a comment append holds it exclusively, so at most
/// one append is ever in flight and ids are assigned without interleaving.
pub struct AppState {
    catalog: RwLock<Catalog>,
    config: SiteConfig,
    locale: Locale,
}

impl AppState {
    pub fn new(catalog: Catalog, config: SiteConfig) -> Self {
        let locale = config.locale();
        Self {
            catalog: RwLock::new(catalog),
            config,
            locale,
        }
    }
}

/// Build the API router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/articles", get(list_articles))
        .route("/api/articles/:id", get(get_article))
        .route("/api/article", get(get_article_by_query))
        .route("/api/comments", post(add_comment))
        .route("/api/archive", get(archive))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/:slug", get(category_articles))
        .route("/api/tags", get(list_tags))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let catalog = blog.load_catalog()?;
    let state = Arc::new(AppState::new(catalog, blog.config.clone()));
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}/api/articles", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Error body shared by every failing endpoint
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = match &err {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Validation { .. } => StatusCode::BAD_REQUEST,
            CatalogError::Transport { .. } | CatalogError::Invalid(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match err {
            CatalogError::NotFound(_) => "Article not found".to_string(),
            other => other.to_string(),
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    category: Option<String>,
    tags: Option<String>,
}

/// GET /api/articles?category=&tags=a,b
async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let category = query
        .category
        .as_deref()
        .map(|c| CategoryFilter::parse(c, &state.config.all_category))
        .unwrap_or_default();
    let tags = query
        .tags
        .as_deref()
        .map(TagFilter::parse)
        .unwrap_or_default();

    let catalog = state.catalog.read().await;
    let articles: Vec<ArticleSummary> = catalog
        .filter(&category, &tags)
        .into_iter()
        .map(|a| a.summary())
        .collect();
    Json(articles).into_response()
}

/// GET /api/articles/:id
async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let catalog = state.catalog.read().await;
    let article = catalog.get_by_id(&id)?;
    Ok(Json(article).into_response())
}

#[derive(Debug, Deserialize)]
struct ArticleQuery {
    id: Option<String>,
}

/// GET /api/article?id=
async fn get_article_by_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticleQuery>,
) -> Result<Response, ApiError> {
    let id = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Article ID is required"))?;
    let catalog = state.catalog.read().await;
    let article = catalog.get_by_id(&id)?;
    Ok(Json(article).into_response())
}

#[derive(Debug, Deserialize)]
struct CommentRequest {
    article_id: Option<serde_json::Value>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    text: String,
}

/// POST /api/comments
async fn add_comment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CommentRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let required = || ApiError::bad_request("article_id, author and text are required");
    let id = match request.article_id.ok_or_else(required)? {
        serde_json::Value::Number(n) => n
            .as_u64()
            .filter(|n| *n > 0)
            .map(ArticleId)
            .ok_or_else(required)?,
        serde_json::Value::String(s) => {
            ArticleId::parse(&s).ok_or_else(|| CatalogError::NotFound(s.clone()))?
        }
        _ => return Err(required()),
    };

    let comment = state
        .catalog
        .write()
        .await
        .append_comment(id, &request.author, &request.text)?;
    tracing::info!("New comment {} on article {}", comment.id, id);

    Ok((StatusCode::CREATED, Json(comment)).into_response())
}

#[derive(Debug, Serialize)]
struct ArchiveMonth<'a> {
    month: String,
    label: String,
    articles: Vec<ArticleSummary<'a>>,
}

/// GET /api/archive
async fn archive(State(state): State<Arc<AppState>>) -> Response {
    let locale = state.locale;
    let catalog = state.catalog.read().await;
    let months: Vec<ArchiveMonth> = catalog
        .group_by_month()
        .into_iter()
        .map(|(month, articles)| ArchiveMonth {
            month: month.to_string(),
            label: month.label(locale),
            articles: articles.into_iter().map(|a| a.summary()).collect(),
        })
        .collect();
    Json(months).into_response()
}

/// GET /api/categories
async fn list_categories(State(state): State<Arc<AppState>>) -> Response {
    let catalog = state.catalog.read().await;
    Json(catalog.categories()).into_response()
}

/// GET /api/categories/:slug
async fn category_articles(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let catalog = state.catalog.read().await;
    let category = catalog.category_by_slug(&slug).ok_or_else(|| ApiError {
        status: StatusCode::NOT_FOUND,
        message: format!("Category not found: {}", slug),
    })?;
    let articles: Vec<ArticleSummary> = catalog
        .filter(&CategoryFilter::Only(category.to_string()), &TagFilter::new())
        .into_iter()
        .map(|a| a.summary())
        .collect();
    Ok(Json(articles).into_response())
}

/// GET /api/tags
async fn list_tags(State(state): State<Arc<AppState>>) -> Response {
    let catalog = state.catalog.read().await;
    Json(catalog.tags()).into_response()
}
