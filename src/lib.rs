#![warn(missing_docs)]
//! Wind stress, Ekman transport and Sverdrup transport from gridded or station wind products.
//!
//! A wind product is a [`Dataset`] of named fields over named coordinates. The diagnostics in this
//! crate read the wind components and ancillary fields from it and attach their results under
//! well known names ([`DerivedField`]). Intermediate fields, like the stresses needed by a
//! transport, are computed on demand with default settings if they are not already there.
//!
//! ```rust
//! use ndarray::{Array1, ArrayD, IxDyn};
//! use windeval::{sverdrup, BulkFormula, DataArray, Dataset, DragCoefficient};
//!
//! let dims = ["latitude", "longitude"];
//! let wind = |x: f64| ArrayD::from_elem(IxDyn(&[4, 3]), x);
//!
//! let mut ds = Dataset::new()
//!     .with_coordinate("latitude", Array1::from(vec![20.0, 22.0, 24.0, 26.0]))
//!     .unwrap()
//!     .with_coordinate("longitude", Array1::from(vec![-40.0, -38.0, -36.0]))
//!     .unwrap()
//!     .with_field("eastward_wind", DataArray::new(&dims, wind(7.0)).unwrap()).unwrap()
//!     .with_field("northward_wind", DataArray::new(&dims, wind(-5.0)).unwrap()).unwrap()
//!     .with_field("air_density", DataArray::new(&dims, wind(1.2)).unwrap()).unwrap();
//!
//! let bf = BulkFormula::new().with_drag_coefficient(DragCoefficient::LargeAndYeager2004);
//! let ds = sverdrup(&mut ds, &bf).unwrap();
//!
//! let v = ds.field("sverdrup_transport").unwrap();
//! assert_eq!(v.get(&[0, 0]), Some(0.0));
//! assert!(v.get(&[3, 0]).unwrap().is_nan());
//! ```

//
// API
//
pub use crate::{
    bulk_formula::{BulkFormula, Formula},
    coriolis::{beta, coriolis_parameter, coriolis_parameter_field, OMEGA, SIDEREAL_DAY},
    dataset::{DataArray, Dataset},
    diagnostics::{ekman, sverdrup, Component},
    drag_coefficient::DragCoefficient,
    error::{AnalysisError, Result},
    keys::DerivedField,
    resolver::{ensure, ensure_field, Recipe},
    stress::{surface_downward_eastward_stress, surface_downward_northward_stress, wind_speed},
    transport::{eastward_ekman_transport, northward_ekman_transport, sverdrup_transport},
};

pub mod keys;

//
// Internal use only
//

// Modules
mod bulk_formula;
mod coriolis;
mod dataset;
mod diagnostics;
mod drag_coefficient;
mod error;
mod resolver;
mod stress;
#[cfg(test)]
mod test_data;
mod transport;
mod utility;
