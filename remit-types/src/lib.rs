//! # Remit Types
//!
//! Domain types and port traits for the JPY→VND remittance simulation
//! service. This crate has ZERO external IO dependencies - only data
//! structures, business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (fees, conversion, Quote, Transaction)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Currency, InputMode, MIN_TRANSFER_JPY, Quote, RateSource, Transaction, TransactionId,
    fee::{self, FeeTier},
};
pub use dto::*;
pub use error::{AppError, DomainError, StoreError};
pub use ports::{RateError, RateProvider, TransactionStore};
