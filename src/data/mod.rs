//! Data reshaping utilities

pub mod supervised;

pub use supervised::{series_to_supervised, series_to_supervised_1d, SupervisedFrame};
