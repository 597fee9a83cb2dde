use crate::core::query::{Pagination, SearchQuery, TrademarkFilter, DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::core::service::TrademarkService;
use crate::domain::model::TrademarkRecord;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Page-size policy applied to incoming requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    pub default_limit: usize,
    pub max_limit: Option<usize>,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: None,
        }
    }
}

impl QueryLimits {
    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self {
            default_limit: config.default_limit(),
            max_limit: config.max_limit(),
        }
    }

    /// Requested page size, or the default, capped by `max_limit`.
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        let limit = requested.unwrap_or(self.default_limit);
        match self.max_limit {
            Some(max) => limit.min(max),
            None => limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<TrademarkService>,
    pub limits: QueryLimits,
}

impl AppState {
    pub fn new(service: Arc<TrademarkService>, limits: QueryLimits) -> Self {
        Self { service, limits }
    }
}

/// Query string of `GET /trademarks`. Dates use `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub status: Option<String>,
    pub product_name: Option<String>,
    pub application_number: Option<String>,
    pub application_date_from: Option<NaiveDate>,
    pub application_date_to: Option<NaiveDate>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl SearchParams {
    pub fn into_query(self, limits: &QueryLimits) -> SearchQuery {
        SearchQuery {
            filter: TrademarkFilter {
                status: self.status,
                product_name: self.product_name,
                application_number: self.application_number,
                application_date_from: self.application_date_from,
                application_date_to: self.application_date_to,
            },
            pagination: Pagination::new(
                self.skip.unwrap_or(DEFAULT_SKIP),
                limits.resolve(self.limit),
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
    records: usize,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    error: ErrorPayload,
}

#[derive(Debug, Clone, Serialize)]
struct ErrorPayload {
    code: &'static str,
    message: String,
}

#[derive(Debug, Clone)]
pub struct ApiFailure {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiFailure {
    fn invalid_query(rejection: &QueryRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "invalid_query",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorPayload {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trademarks", get(search_trademarks))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.service.len(),
    })
}

async fn search_trademarks(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> std::result::Result<([(&'static str, String); 1], Json<Vec<TrademarkRecord>>), ApiFailure> {
    let Query(params) = params.map_err(|rejection| ApiFailure::invalid_query(&rejection))?;
    let query = params.into_query(&state.limits);

    let page = state.service.search_page(&query);
    tracing::debug!(
        skip = query.pagination.skip,
        limit = query.pagination.limit,
        "Returning {} of {} matching trademarks",
        page.items.len(),
        page.total
    );

    Ok((
        [(TOTAL_COUNT_HEADER, page.total.to_string())],
        Json(page.items),
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

/// Serve the API until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
