//! Predictor Facade
//!
//! High-level API for sales prediction. Re-exports all public types
//! from the predictor stack for convenient usage.

// Re-export everything from core (which includes the SPI)
pub use predictor_core::*;

// Explicit re-exports for documentation
pub use predictor_core::prelude;
pub use predictor_spi::{PredictError, Regressor};
