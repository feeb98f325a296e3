//! Domain models for the remittance service.

pub mod convert;
pub mod currency;
pub mod fee;
pub mod quote;
pub mod transaction;

pub use currency::Currency;
pub use fee::MIN_TRANSFER_JPY;
pub use quote::{InputMode, Quote, RateSource};
pub use transaction::{Transaction, TransactionId};
