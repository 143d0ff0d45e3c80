//! Prediction models

pub mod predictor;

pub use predictor::{FixedLinearModel, PredictorError};
