//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use remit_types::{
    AppError, Currency, ExchangeRateResponse, FeeCalculationResponse, FeeStructureResponse,
    RateProvider, TransactionId, TransactionStore, TransferRequest, fee,
};

use crate::TransferService;

/// Application state shared across handlers.
pub struct AppState<S: TransactionStore, P: RateProvider> {
    pub service: TransferService<S, P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Preview a transfer without saving it.
#[tracing::instrument(skip(state), fields(mode = %req.input_mode))]
pub async fn preview<S: TransactionStore, P: RateProvider + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Json(req): Json<TransferRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let amount = req.driving_amount().map_err(AppError::from)?;
    let quote = state.service.preview(req.input_mode, amount).await?;
    Ok(Json(quote))
}

/// Commit a transfer simulation to the history.
#[tracing::instrument(skip(state), fields(mode = %req.input_mode))]
pub async fn simulate<S: TransactionStore, P: RateProvider + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Json(req): Json<TransferRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let amount = req.driving_amount().map_err(AppError::from)?;
    let tx = state.service.simulate(req.input_mode, amount).await?;
    Ok((StatusCode::CREATED, Json(tx)))
}

/// List all committed simulations, newest first.
#[tracing::instrument(skip(state))]
pub async fn history<S: TransactionStore, P: RateProvider + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let transactions = state.service.history().await?;
    Ok(Json(transactions))
}

/// Get a single simulation by id.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn get_transaction<S: TransactionStore, P: RateProvider + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: TransactionId = id
        .parse()
        .map_err(|_| AppError::BadRequest("invalid transaction id".into()))?;

    let tx = state.service.transaction(id).await?;
    Ok(Json(tx))
}

/// Current (or fallback) JPY→VND exchange rate.
#[tracing::instrument(skip(state))]
pub async fn exchange_rate<S: TransactionStore, P: RateProvider + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let (rate, source) = state.service.exchange_rate().await;
    Ok(Json(ExchangeRateResponse::new(rate, source)))
}

/// The published fee schedule.
pub async fn fee_structure<S: TransactionStore, P: RateProvider + 'static>(
    State(_state): State<Arc<AppState<S, P>>>,
) -> impl IntoResponse {
    Json(FeeStructureResponse {
        currency: Currency::JPY,
        tiers: fee::TIERS.to_vec(),
    })
}

/// Query string for `GET /calculate-fee`.
#[derive(Debug, serde::Deserialize)]
pub struct FeeQuery {
    pub amount: i64,
}

/// Fee for a specific JPY amount.
#[tracing::instrument(skip(state), fields(amount = query.amount))]
pub async fn calculate_fee<S: TransactionStore, P: RateProvider + 'static>(
    State(state): State<Arc<AppState<S, P>>>,
    Query(query): Query<FeeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let fee = state.service.calculate_fee(query.amount)?;
    Ok(Json(FeeCalculationResponse {
        amount: query.amount,
        fee,
        currency: Currency::JPY,
    }))
}
