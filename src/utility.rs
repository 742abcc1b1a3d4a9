//! Small array helpers shared by the finite difference code.

use crate::error::{AnalysisError, Result};
use ndarray::{s, Array1, ArrayD, IxDyn};

/// Forward differences between neighboring coordinate values, one shorter than `coord`.
pub(crate) fn forward_spacing(coord: &Array1<f64>) -> Array1<f64> {
    if coord.len() < 2 {
        return Array1::zeros(0);
    }

    &coord.slice(s![1..]) - &coord.slice(s![..-1])
}

/// Reshape a one dimensional array so it lies along `axis` of an array with `ndim` dimensions,
/// with length one on every other axis, ready for broadcasting.
pub(crate) fn along_axis(values: Array1<f64>, axis: usize, ndim: usize) -> Result<ArrayD<f64>> {
    let mut shape = vec![1; ndim];
    shape[axis] = values.len();

    values
        .into_shape(IxDyn(&shape))
        .map_err(|_| AnalysisError::ShapeMismatch {
            name: format!("axis {}", axis),
            expected: shape.clone(),
            actual: vec![ndim],
        })
}
