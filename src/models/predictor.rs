//! Fixed-coefficient linear predictor
//!
//! A prediction-only linear model holding externally supplied parameters,
//! e.g. coefficients estimated offline or taken from a publication. It is
//! a plain struct rather than a trainable model with fitting switched off;
//! the parameters are set once at construction and only scoring is
//! offered.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing or using the predictor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictorError {
    #[error("shape mismatch: {targets} coefficient rows but intercept of length {intercept}")]
    ShapeMismatch { targets: usize, intercept: usize },

    #[error("coefficients are required; provide coefficients alone or with an intercept")]
    MissingCoefficients,

    #[error("dimension mismatch: model expects {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("model is for prediction only; fitting is not supported")]
    FitUnsupported,
}

/// Linear model with fixed, externally supplied parameters.
///
/// Coefficients are `(n_targets, n_features)` and the intercept has one
/// entry per target. Prediction computes `x · coefᵀ + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedLinearModel {
    /// Coefficients of the linear model, one row per target
    pub coefficients: Array2<f64>,
    /// Independent term, one entry per target
    pub intercept: Array1<f64>,
}

impl FixedLinearModel {
    /// Create a model from coefficients with a zero intercept.
    pub fn new(coefficients: Array2<f64>) -> Self {
        let intercept = Array1::zeros(coefficients.nrows());
        Self {
            coefficients,
            intercept,
        }
    }

    /// Create a model from optional parts.
    ///
    /// - coefficients only: intercept defaults to zeros
    /// - both: leading dimensions must agree
    /// - intercept without coefficients, or neither: invalid configuration
    ///
    /// # Errors
    ///
    /// [`PredictorError::ShapeMismatch`] when the coefficient row count
    /// and the intercept length differ,
    /// [`PredictorError::MissingCoefficients`] when no coefficients are
    /// given.
    pub fn from_params(
        coefficients: Option<Array2<f64>>,
        intercept: Option<Array1<f64>>,
    ) -> Result<Self, PredictorError> {
        let coefficients = coefficients.ok_or(PredictorError::MissingCoefficients)?;

        let intercept = match intercept {
            Some(intercept) => {
                if intercept.len() != coefficients.nrows() {
                    return Err(PredictorError::ShapeMismatch {
                        targets: coefficients.nrows(),
                        intercept: intercept.len(),
                    });
                }
                intercept
            }
            None => Array1::zeros(coefficients.nrows()),
        };

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    /// Number of input features the model expects
    pub fn n_features(&self) -> usize {
        self.coefficients.ncols()
    }

    /// Number of predicted targets
    pub fn n_targets(&self) -> usize {
        self.coefficients.nrows()
    }

    /// Score input features: `x · coefᵀ + intercept`.
    ///
    /// # Errors
    ///
    /// [`PredictorError::DimensionMismatch`] when `x` has a different
    /// number of columns than the model has features.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictorError> {
        if x.ncols() != self.n_features() {
            return Err(PredictorError::DimensionMismatch {
                expected: self.n_features(),
                got: x.ncols(),
            });
        }

        Ok(x.dot(&self.coefficients.t()) + &self.intercept)
    }

    /// This model cannot be fitted.
    ///
    /// Present for call-site parity with trainable models; always returns
    /// [`PredictorError::FitUnsupported`].
    pub fn fit(&mut self, _x: &Array2<f64>, _y: &Array1<f64>) -> Result<(), PredictorError> {
        Err(PredictorError::FitUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_default_intercept_is_zero() {
        let model = FixedLinearModel::from_params(Some(array![[1.0, 2.0]]), None).unwrap();
        assert_eq!(model.intercept, array![0.0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = FixedLinearModel::from_params(
            Some(array![[1.0, 2.0]]),
            Some(array![1.0, 2.0, 3.0]),
        )
        .unwrap_err();

        assert_eq!(
            err,
            PredictorError::ShapeMismatch {
                targets: 1,
                intercept: 3
            }
        );
    }

    #[test]
    fn test_intercept_without_coefficients() {
        let err = FixedLinearModel::from_params(None, Some(array![1.0])).unwrap_err();
        assert_eq!(err, PredictorError::MissingCoefficients);
    }

    #[test]
    fn test_predict_single_target() {
        let model =
            FixedLinearModel::from_params(Some(array![[1.0, 2.0]]), Some(array![0.5])).unwrap();

        let y = model.predict(&array![[3.0, 4.0], [1.0, 0.0]]).unwrap();
        assert_abs_diff_eq!(y[[0, 0]], 11.5);
        assert_abs_diff_eq!(y[[1, 0]], 1.5);
    }

    #[test]
    fn test_predict_multi_target() {
        let model = FixedLinearModel::from_params(
            Some(array![[1.0, 0.0], [0.0, -1.0]]),
            Some(array![0.0, 10.0]),
        )
        .unwrap();

        let y = model.predict(&array![[2.0, 3.0]]).unwrap();
        assert_abs_diff_eq!(y[[0, 0]], 2.0);
        assert_abs_diff_eq!(y[[0, 1]], 7.0);
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let model = FixedLinearModel::new(array![[1.0, 2.0]]);
        let err = model.predict(&array![[1.0, 2.0, 3.0]]).unwrap_err();
        assert_eq!(
            err,
            PredictorError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn test_fit_is_unsupported() {
        let mut model = FixedLinearModel::new(array![[1.0, 2.0]]);
        let err = model
            .fit(&array![[1.0, 2.0]], &array![1.0])
            .unwrap_err();
        assert_eq!(err, PredictorError::FitUnsupported);
    }
}
