//! Data type and methods to store a labeled, gridded or station, wind product.

use crate::{
    error::{AnalysisError, Result},
    utility::along_axis,
};
use itertools::Itertools;
use ndarray::{Array1, ArrayD, IxDyn};
use std::{collections::BTreeMap, fmt};

pub use self::data_array::DataArray;

mod data_array;

/// A mapping from names to fields that share a common coordinate system.
///
/// Coordinates are one dimensional. Every dimension of a field must be a coordinate of the same
/// length. A coordinate with exactly one value that is not a dimension of a field is a scalar
/// coordinate for that field, this is how station data carries its location.
///
/// Functions computing derived quantities mutate the dataset by attaching new fields and hand the
/// same dataset back for chaining. The returned value is never a copy.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    coords: BTreeMap<String, Array1<f64>>,
    fields: BTreeMap<String, DataArray>,
}

impl Dataset {
    /// Create a new, empty, dataset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windeval::Dataset;
    ///
    /// let ds = Dataset::new();
    /// assert_eq!(ds.field_names().count(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Add or replace a coordinate, see `insert_coordinate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ndarray::Array1;
    /// use windeval::Dataset;
    ///
    /// let ds = Dataset::new()
    ///     .with_coordinate("latitude", Array1::linspace(-10.0, 10.0, 5))
    ///     .and_then(|ds| ds.with_coordinate("longitude", Array1::from(vec![-23.0])))
    ///     .unwrap();
    ///
    /// assert_eq!(ds.coordinate("latitude").unwrap().len(), 5);
    /// ```
    #[inline]
    pub fn with_coordinate<S>(mut self, name: S, values: Array1<f64>) -> Result<Self>
    where
        S: Into<String>,
    {
        self.insert_coordinate(name, values)?;
        Ok(self)
    }

    /// Attach a coordinate, replacing any coordinate with the same name.
    ///
    /// Fails if a field already spans this coordinate with a different length.
    pub fn insert_coordinate<S>(&mut self, name: S, values: Array1<f64>) -> Result<()>
    where
        S: Into<String>,
    {
        let name = name.into();

        for (field_name, field) in &self.fields {
            if let Some(axis) = field.axis_of(&name) {
                let actual = field.values().shape().to_vec();
                if actual[axis.index()] != values.len() {
                    let mut expected = actual.clone();
                    expected[axis.index()] = values.len();
                    return Err(AnalysisError::ShapeMismatch {
                        name: field_name.clone(),
                        expected,
                        actual,
                    });
                }
            }
        }

        self.coords.insert(name, values);
        Ok(())
    }

    /// Add a field, see `insert_field`.
    #[inline]
    pub fn with_field<S>(mut self, name: S, field: DataArray) -> Result<Self>
    where
        S: Into<String>,
    {
        self.insert_field(name, field)?;
        Ok(self)
    }

    /// Attach a field, replacing any field with the same name.
    ///
    /// Fails if a dimension of the field is not a coordinate of the dataset, or if the lengths
    /// do not agree.
    pub fn insert_field<S>(&mut self, name: S, field: DataArray) -> Result<()>
    where
        S: Into<String>,
    {
        let name = name.into();

        let expected = self.shape_of(field.dims())?;
        if expected != field.values().shape() {
            return Err(AnalysisError::ShapeMismatch {
                name,
                expected,
                actual: field.values().shape().to_vec(),
            });
        }

        self.fields.insert(name, field);
        Ok(())
    }

    /// Is there a field with this name?
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get a field by name.
    #[inline]
    pub fn field(&self, name: &str) -> Result<&DataArray> {
        self.fields
            .get(name)
            .ok_or_else(|| AnalysisError::FieldNotFound(name.to_owned()))
    }

    /// Get a coordinate by name.
    #[inline]
    pub fn coordinate(&self, name: &str) -> Result<&Array1<f64>> {
        self.coords
            .get(name)
            .ok_or_else(|| AnalysisError::CoordinateNotFound(name.to_owned()))
    }

    /// Names of all the fields, sorted.
    #[inline]
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Names of all the coordinates, sorted.
    #[inline]
    pub fn coordinate_names(&self) -> impl Iterator<Item = &str> {
        self.coords.keys().map(String::as_str)
    }

    /// The shape of an array spanning the coordinates `dims`, in that order.
    pub fn shape_of<S>(&self, dims: &[S]) -> Result<Vec<usize>>
    where
        S: AsRef<str>,
    {
        dims.iter()
            .map(|d| self.coordinate(d.as_ref()).map(|c| c.len()))
            .collect()
    }

    /// The values of a field aligned to, and broadcast over, the dimensions `dims`.
    pub fn broadcast_field(&self, name: &str, dims: &[String]) -> Result<ArrayD<f64>> {
        let shape = self.shape_of(dims)?;
        self.field(name)?.aligned_to(name, dims, &shape)
    }

    /// The values of a coordinate broadcast over the dimensions `dims`.
    #[inline]
    pub fn broadcast_coordinate(&self, name: &str, dims: &[String]) -> Result<ArrayD<f64>> {
        self.broadcast_coordinate_map(name, dims, |x| x)
    }

    /// Apply `func` to the values of a coordinate and broadcast the result over the dimensions
    /// `dims`.
    ///
    /// If the coordinate is not one of `dims` it must be a scalar coordinate.
    pub fn broadcast_coordinate_map<F>(
        &self,
        name: &str,
        dims: &[String],
        func: F,
    ) -> Result<ArrayD<f64>>
    where
        F: Fn(f64) -> f64,
    {
        let values = self.coordinate(name)?.mapv(func);
        let shape = self.shape_of(dims)?;

        match dims.iter().position(|d| d == name) {
            Some(axis) => {
                let values = along_axis(values, axis, dims.len())?;
                values
                    .broadcast(IxDyn(&shape))
                    .map(|v| v.to_owned())
                    .ok_or_else(|| AnalysisError::NotBroadcastable {
                        name: name.to_owned(),
                        dims: dims.iter().join(", "),
                    })
            }
            None if values.len() == 1 => Ok(ArrayD::from_elem(IxDyn(&shape), values[0])),
            None => Err(AnalysisError::NotBroadcastable {
                name: name.to_owned(),
                dims: dims.iter().join(", "),
            }),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Coordinates:")?;
        for (name, values) in &self.coords {
            writeln!(f, "  {} ({})", name, values.len())?;
        }
        writeln!(f, "Fields:")?;
        for (name, field) in &self.fields {
            writeln!(f, "  {} ({})", name, field.dims().iter().join(", "))?;
        }
        Ok(())
    }
}
