use crate::error::{AnalysisError, Result};
use itertools::Itertools;
use ndarray::{ArrayD, Axis, IxDyn};

/// A multidimensional array of values labeled with the names of its dimensions.
///
/// Missing values are stored as `NaN` and propagate through every computation in this crate.
#[derive(Clone, Debug)]
pub struct DataArray {
    dims: Vec<String>,
    values: ArrayD<f64>,
}

impl DataArray {
    /// Create a new `DataArray`, one dimension name per axis of `values`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ndarray::ArrayD;
    /// use windeval::DataArray;
    ///
    /// let da = DataArray::new(&["latitude", "longitude"], ArrayD::zeros(vec![5, 4])).unwrap();
    /// assert_eq!(da.dims(), &["latitude", "longitude"]);
    ///
    /// // Wrong number of dimension names
    /// assert!(DataArray::new(&["latitude"], ArrayD::zeros(vec![5, 4])).is_err());
    /// ```
    pub fn new<S>(dims: &[S], values: ArrayD<f64>) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let dims: Vec<String> = dims.iter().map(|d| d.as_ref().to_owned()).collect();

        if dims.len() != values.ndim() || dims.iter().unique().count() != dims.len() {
            return Err(AnalysisError::ShapeMismatch {
                name: dims.iter().join(", "),
                expected: vec![values.ndim()],
                actual: vec![dims.len()],
            });
        }

        Ok(DataArray { dims, values })
    }

    /// The dimension names, in axis order.
    #[inline]
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// The values.
    #[inline]
    pub fn values(&self) -> &ArrayD<f64> {
        &self.values
    }

    /// Take the values, dropping the dimension labels.
    #[inline]
    pub fn into_values(self) -> ArrayD<f64> {
        self.values
    }

    /// The axis labeled with `dim`, if there is one.
    #[inline]
    pub fn axis_of(&self, dim: &str) -> Option<Axis> {
        self.dims.iter().position(|d| d == dim).map(Axis)
    }

    /// Retrieve a single value, `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        self.values.get(IxDyn(index)).copied()
    }

    /// Align these values to `dims`, which must contain every dimension of this array, and
    /// broadcast them to `shape`.
    pub(crate) fn aligned_to(
        &self,
        name: &str,
        dims: &[String],
        shape: &[usize],
    ) -> Result<ArrayD<f64>> {
        let not_broadcastable = || AnalysisError::NotBroadcastable {
            name: name.to_owned(),
            dims: dims.iter().join(", "),
        };

        // (position in target, source axis)
        let mut order = self
            .dims
            .iter()
            .enumerate()
            .map(|(axis, dim)| {
                dims.iter()
                    .position(|d| d == dim)
                    .map(|pos| (pos, axis))
                    .ok_or_else(not_broadcastable)
            })
            .collect::<Result<Vec<_>>>()?;
        order.sort_unstable();

        let mut view = self
            .values
            .view()
            .permuted_axes(order.iter().map(|&(_, axis)| axis).collect::<Vec<_>>());

        for (pos, dim) in dims.iter().enumerate() {
            if !self.dims.contains(dim) {
                view.insert_axis_inplace(Axis(pos));
            }
        }

        view.broadcast(IxDyn(shape))
            .map(|v| v.to_owned())
            .ok_or_else(not_broadcastable)
    }
}
