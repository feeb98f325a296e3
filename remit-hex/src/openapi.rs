//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use remit_types::domain::{Currency, InputMode, Quote, RateSource, Transaction, TransactionId};
use remit_types::dto::{
    ExchangeRateResponse, FeeCalculationResponse, FeeStructureResponse, TransferRequest,
};
use remit_types::fee::FeeTier;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Preview a transfer without saving it
#[utoipa::path(
    post,
    path = "/preview",
    tag = "transfers",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Quote for the prospective transfer", body = Quote),
        (status = 400, description = "Below-minimum or invalid amount")
    )
)]
async fn preview() {}

/// Commit a transfer simulation to the history
#[utoipa::path(
    post,
    path = "/simulate",
    tag = "transfers",
    request_body = TransferRequest,
    responses(
        (status = 201, description = "Simulation recorded", body = Transaction),
        (status = 400, description = "Below-minimum or invalid amount")
    )
)]
async fn simulate() {}

/// List all committed simulations, newest first
#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "Simulation history", body = Vec<Transaction>)
    )
)]
async fn history() {}

/// Get a single simulation by id
#[utoipa::path(
    get,
    path = "/history/{id}",
    tag = "history",
    params(
        ("id" = i64, Path, description = "Transaction id")
    ),
    responses(
        (status = 200, description = "The simulation", body = Transaction),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Unknown id")
    )
)]
async fn get_transaction() {}

/// Current (or fallback) JPY→VND exchange rate
#[utoipa::path(
    get,
    path = "/exchange-rate",
    tag = "rates",
    responses(
        (status = 200, description = "Current rate", body = ExchangeRateResponse)
    )
)]
async fn exchange_rate() {}

/// The published fee schedule
#[utoipa::path(
    get,
    path = "/fee-structure",
    tag = "fees",
    responses(
        (status = 200, description = "Fee tiers, lowest band first", body = FeeStructureResponse)
    )
)]
async fn fee_structure() {}

/// Fee for a specific JPY amount
#[utoipa::path(
    get,
    path = "/calculate-fee",
    tag = "fees",
    params(
        ("amount" = i64, Query, description = "JPY send amount")
    ),
    responses(
        (status = 200, description = "Fee for the amount", body = FeeCalculationResponse),
        (status = 400, description = "Amount below the transfer minimum")
    )
)]
async fn calculate_fee() {}

/// OpenAPI documentation for the Remittance API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Remittance Simulation Service API",
        version = "1.0.0",
        description = "Quote-and-record service for JPY→VND transfer simulations: bidirectional conversion, a tiered fee schedule, preview vs. commit, and an append-only history. No real money moves.",
        license(name = "MIT"),
    ),
    paths(
        health,
        preview,
        simulate,
        history,
        get_transaction,
        exchange_rate,
        fee_structure,
        calculate_fee,
    ),
    components(
        schemas(
            TransferRequest,
            Quote,
            Transaction,
            TransactionId,
            InputMode,
            RateSource,
            Currency,
            FeeTier,
            ExchangeRateResponse,
            FeeStructureResponse,
            FeeCalculationResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "transfers", description = "Preview and simulate transfers"),
        (name = "history", description = "Append-only simulation history"),
        (name = "rates", description = "Exchange rate lookup"),
        (name = "fees", description = "Fee schedule and calculation"),
    )
)]
pub struct ApiDoc;
