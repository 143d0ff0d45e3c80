//! # Research Utilities
//!
//! A grab-bag of helpers shared across research scripts: serialization
//! backends, time-series reshaping for supervised learning, rotation
//! matrices over numeric or symbolic scalars, and a prediction-only
//! linear model.
//!
//! ## Modules
//!
//! - `logging` - Explicit tracing setup from a config object
//! - `storage` - Interchangeable file serialization backends and map lookup
//! - `data` - Reshaping time series into supervised-learning frames
//! - `rotation` - 3x3 rotation matrices, numeric or symbolic
//! - `models` - Fixed-coefficient linear predictor

pub mod data;
pub mod logging;
pub mod models;
pub mod rotation;
pub mod storage;

pub use data::supervised::{series_to_supervised, series_to_supervised_1d, SupervisedFrame};
pub use logging::LoggingConfig;
pub use models::predictor::FixedLinearModel;
pub use rotation::symbolic::Expr;
pub use rotation::{rot_x, rot_y, rot_z, Matrix3};
pub use storage::backend::{Backend, BincodeBackend, JsonBackend, TomlBackend};
pub use storage::get_key;
