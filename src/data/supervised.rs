//! Time-series to supervised-learning reshaping
//!
//! Frames a time-ordered table as lagged input / lead output columns so
//! that forecasting can be treated as ordinary supervised learning. The
//! construction mirrors the classic sliding-window recipe: shift the whole
//! table down once per lag step, up once per lead step, and concatenate
//! the shifted copies column-wise.

use ndarray::{Array2, ArrayView1};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building a supervised frame
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("input table is empty")]
    EmptyInput,

    #[error("window is empty: n_in + n_out must be at least 1")]
    EmptyWindow,
}

/// A reshaped table with one named column per variable per time offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SupervisedFrame {
    /// Column names, e.g. `var1(t-1)`, `var1(t)`, `var2(t+1)`
    pub columns: Vec<String>,
    /// Row-major values; missing cells hold NaN
    pub values: Array2<f64>,
}

impl SupervisedFrame {
    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|idx| self.values.column(idx))
    }
}

/// Reshape a multivariate time series into a supervised-learning frame.
///
/// `data` has one row per time step and one column per variable. For each
/// lag step `i` in `n_in..=1` the frame gains the columns `var{j}(t-i)`,
/// then for each lead step `s` in `0..n_out` the columns `var{j}(t)` /
/// `var{j}(t+s)`, variables numbered from 1. Rows whose window extends
/// past either end of the series hold NaN in the unresolved cells; with
/// `dropnan` set, any row containing a NaN anywhere is removed.
///
/// # Errors
///
/// [`FrameError::EmptyInput`] if `data` has no rows or no columns,
/// [`FrameError::EmptyWindow`] if both `n_in` and `n_out` are zero.
pub fn series_to_supervised(
    data: &Array2<f64>,
    n_in: usize,
    n_out: usize,
    dropnan: bool,
) -> Result<SupervisedFrame, FrameError> {
    if data.nrows() == 0 || data.ncols() == 0 {
        return Err(FrameError::EmptyInput);
    }
    if n_in + n_out == 0 {
        return Err(FrameError::EmptyWindow);
    }

    let n_rows = data.nrows();
    let n_vars = data.ncols();
    let n_cols = (n_in + n_out) * n_vars;

    let mut columns = Vec::with_capacity(n_cols);
    let mut values = Array2::from_elem((n_rows, n_cols), f64::NAN);
    let mut col = 0;

    // Lag columns: table shifted down by i rows
    for i in (1..=n_in).rev() {
        for j in 0..n_vars {
            columns.push(format!("var{}(t-{})", j + 1, i));
            for row in i..n_rows {
                values[[row, col]] = data[[row - i, j]];
            }
            col += 1;
        }
    }

    // Current/lead columns: table shifted up by s rows
    for s in 0..n_out {
        for j in 0..n_vars {
            if s == 0 {
                columns.push(format!("var{}(t)", j + 1));
            } else {
                columns.push(format!("var{}(t+{})", j + 1, s));
            }
            for row in 0..n_rows.saturating_sub(s) {
                values[[row, col]] = data[[row + s, j]];
            }
            col += 1;
        }
    }

    if dropnan {
        let valid_rows: Vec<usize> = (0..n_rows)
            .filter(|&i| !values.row(i).iter().any(|v| v.is_nan()))
            .collect();

        debug!(
            kept = valid_rows.len(),
            dropped = n_rows - valid_rows.len(),
            "dropped rows with unresolved lag/lead values"
        );

        let flat: Vec<f64> = valid_rows
            .iter()
            .flat_map(|&i| values.row(i).to_vec())
            .collect();
        values = Array2::from_shape_vec((valid_rows.len(), n_cols), flat)
            .expect("row filtering preserves column count");
    }

    Ok(SupervisedFrame { columns, values })
}

/// Reshape a single sequence. Convenience wrapper around
/// [`series_to_supervised`] for one-variable data.
pub fn series_to_supervised_1d(
    data: &[f64],
    n_in: usize,
    n_out: usize,
    dropnan: bool,
) -> Result<SupervisedFrame, FrameError> {
    if data.is_empty() {
        return Err(FrameError::EmptyInput);
    }
    let table = Array2::from_shape_vec((data.len(), 1), data.to_vec())
        .expect("a slice always reshapes into one column");
    series_to_supervised(&table, n_in, n_out, dropnan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column_one_lag_one_lead() {
        let frame = series_to_supervised_1d(&[1.0, 2.0, 3.0, 4.0], 1, 1, true).unwrap();

        assert_eq!(frame.columns, vec!["var1(t-1)", "var1(t)"]);
        assert_eq!(frame.n_rows(), 3);
        assert_eq!(
            frame.values,
            Array2::from_shape_vec((3, 2), vec![1.0, 2.0, 2.0, 3.0, 3.0, 4.0]).unwrap()
        );
    }

    #[test]
    fn test_nan_markers_kept_without_drop() {
        let frame = series_to_supervised_1d(&[1.0, 2.0, 3.0], 1, 1, false).unwrap();

        assert_eq!(frame.n_rows(), 3);
        // First row has no t-1 value
        assert!(frame.values[[0, 0]].is_nan());
        assert_eq!(frame.values[[0, 1]], 1.0);
        assert_eq!(frame.values[[2, 0]], 2.0);
        assert_eq!(frame.values[[2, 1]], 3.0);
    }

    #[test]
    fn test_lead_columns_shift_up() {
        let frame = series_to_supervised_1d(&[1.0, 2.0, 3.0, 4.0], 0, 2, false).unwrap();

        assert_eq!(frame.columns, vec!["var1(t)", "var1(t+1)"]);
        assert_eq!(frame.values[[0, 0]], 1.0);
        assert_eq!(frame.values[[0, 1]], 2.0);
        // Last row has no t+1 value
        assert!(frame.values[[3, 1]].is_nan());
    }

    #[test]
    fn test_multivariate_column_order() {
        let data = Array2::from_shape_vec(
            (3, 2),
            vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0],
        )
        .unwrap();
        let frame = series_to_supervised(&data, 1, 1, true).unwrap();

        assert_eq!(
            frame.columns,
            vec!["var1(t-1)", "var2(t-1)", "var1(t)", "var2(t)"]
        );
        assert_eq!(frame.n_rows(), 2);
        assert_eq!(
            frame.values.row(0).to_vec(),
            vec![1.0, 10.0, 2.0, 20.0]
        );
        assert_eq!(
            frame.values.row(1).to_vec(),
            vec![2.0, 20.0, 3.0, 30.0]
        );
    }

    #[test]
    fn test_column_lookup() {
        let frame = series_to_supervised_1d(&[1.0, 2.0, 3.0, 4.0], 1, 1, true).unwrap();

        let lagged = frame.column("var1(t-1)").unwrap();
        assert_eq!(lagged.to_vec(), vec![1.0, 2.0, 3.0]);
        assert!(frame.column("var9(t)").is_none());
    }

    #[test]
    fn test_empty_input() {
        let err = series_to_supervised_1d(&[], 1, 1, true).unwrap_err();
        assert_eq!(err, FrameError::EmptyInput);
    }

    #[test]
    fn test_empty_window() {
        let err = series_to_supervised_1d(&[1.0, 2.0], 0, 0, true).unwrap_err();
        assert_eq!(err, FrameError::EmptyWindow);
    }

    #[test]
    fn test_window_longer_than_series_drops_everything() {
        let frame = series_to_supervised_1d(&[1.0, 2.0], 3, 1, true).unwrap();
        assert_eq!(frame.n_rows(), 0);
        assert_eq!(frame.n_cols(), 4);
    }
}
