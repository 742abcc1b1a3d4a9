//! Compute derived fields on demand.
//!
//! Every `DerivedField` has a single default recipe, a function of the dataset alone that uses
//! the default `BulkFormula`. Asking for a field that is already present does nothing, so a field
//! computed earlier with other settings is kept.

use crate::{
    dataset::Dataset,
    error::{AnalysisError, Result},
    keys::DerivedField,
    stress::{surface_downward_eastward_stress, surface_downward_northward_stress, wind_speed},
    transport::{eastward_ekman_transport, northward_ekman_transport, sverdrup_transport},
    BulkFormula,
};
use log::debug;
use std::str::FromStr;

/// A function computing a field and attaching it to the dataset.
pub type Recipe = fn(&mut Dataset) -> Result<&mut Dataset>;

impl DerivedField {
    /// The default recipe for this field.
    pub fn recipe(self) -> Recipe {
        use self::DerivedField::*;

        match self {
            SurfaceDownwardEastwardStress => default_eastward_stress,
            SurfaceDownwardNorthwardStress => default_northward_stress,
            NorthwardEkmanTransport => northward_ekman_transport,
            EastwardEkmanTransport => eastward_ekman_transport,
            SverdrupTransport => sverdrup_transport,
            WindSpeed => wind_speed,
        }
    }
}

fn default_eastward_stress(ds: &mut Dataset) -> Result<&mut Dataset> {
    surface_downward_eastward_stress(ds, &BulkFormula::default())
}

fn default_northward_stress(ds: &mut Dataset) -> Result<&mut Dataset> {
    surface_downward_northward_stress(ds, &BulkFormula::default())
}

/// Make sure the field `name` is in the dataset, computing it with its default recipe if it is
/// not.
///
/// # Examples
///
/// ```rust
/// use windeval::{ensure, AnalysisError, Dataset};
///
/// let mut ds = Dataset::new();
/// assert_eq!(
///     ensure(&mut ds, "total_transport").unwrap_err(),
///     AnalysisError::UnknownField("total_transport".to_owned())
/// );
/// ```
pub fn ensure<'a>(ds: &'a mut Dataset, name: &str) -> Result<&'a mut Dataset> {
    let field =
        DerivedField::from_str(name).map_err(|_| AnalysisError::UnknownField(name.to_owned()))?;

    ensure_field(ds, field)
}

/// Make sure `field` is in the dataset, see `ensure`.
pub fn ensure_field(ds: &mut Dataset, field: DerivedField) -> Result<&mut Dataset> {
    if ds.contains(field.as_ref()) {
        return Ok(ds);
    }

    debug!("{} missing, computing it with the default recipe", field);
    (field.recipe())(ds)
}
