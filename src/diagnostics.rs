//! One call diagnostics: compute the stresses with a chosen bulk formula, then the transport.

use crate::{
    bulk_formula::BulkFormula,
    dataset::Dataset,
    error::Result,
    keys::{DerivedField, EASTWARD_WIND, NORTHWARD_WIND},
    transport::{eastward_ekman_field, northward_ekman_field, sverdrup_field},
};
use log::debug;
use strum_macros::{AsRefStr, Display, EnumString};

/// Direction of an Ekman transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
pub enum Component {
    /// Eastward, driven by the northward stress.
    #[strum(serialize = "eastward")]
    Eastward,
    /// Northward, driven by the eastward stress.
    #[strum(serialize = "northward")]
    Northward,
}

impl Default for Component {
    fn default() -> Self {
        Component::Eastward
    }
}

/// Compute the stress driving the `component` Ekman transport with `bulk_formula`, replacing any
/// earlier stress, then the transport.
///
/// Nothing is attached if any step fails.
///
/// # Examples
///
/// ```rust
/// use ndarray::{Array1, ArrayD, IxDyn};
/// use windeval::{ekman, BulkFormula, Component, DataArray, Dataset};
///
/// let dims = ["latitude", "longitude"];
/// let grid = || ArrayD::from_elem(IxDyn(&[3, 2]), 8.0);
///
/// let mut ds = Dataset::new()
///     .with_coordinate("latitude", Array1::from(vec![10.0, 20.0, 30.0]))
///     .unwrap()
///     .with_coordinate("longitude", Array1::from(vec![-30.0, -20.0]))
///     .unwrap()
///     .with_field("eastward_wind", DataArray::new(&dims, grid()).unwrap()).unwrap()
///     .with_field("northward_wind", DataArray::new(&dims, grid()).unwrap()).unwrap()
///     .with_field("air_density", DataArray::new(&dims, grid() / 8.0 * 1.2).unwrap()).unwrap();
///
/// let bf = BulkFormula::from_names(Some("large_and_pond_1981"), None, None).unwrap();
/// let ds = ekman(&mut ds, Component::Northward, &bf).unwrap();
///
/// assert!(ds.contains("surface_downward_eastward_stress"));
/// assert!(ds.contains("northward_ekman_transport"));
/// assert!(!ds.contains("eastward_ekman_transport"));
/// ```
pub fn ekman<'a>(
    ds: &'a mut Dataset,
    component: Component,
    bulk_formula: &BulkFormula,
) -> Result<&'a mut Dataset> {
    let (stress, target, tau, transport) = match component {
        Component::Eastward => {
            let tau_y = bulk_formula.stress(ds, NORTHWARD_WIND)?;
            let transport = eastward_ekman_field(ds, &tau_y)?;
            (
                DerivedField::SurfaceDownwardNorthwardStress,
                DerivedField::EastwardEkmanTransport,
                tau_y,
                transport,
            )
        }
        Component::Northward => {
            let tau_x = bulk_formula.stress(ds, EASTWARD_WIND)?;
            let transport = northward_ekman_field(ds, &tau_x)?;
            (
                DerivedField::SurfaceDownwardEastwardStress,
                DerivedField::NorthwardEkmanTransport,
                tau_x,
                transport,
            )
        }
    };

    debug!("attaching {} and {}", stress, target);
    ds.insert_field(stress.as_ref(), tau)?;
    ds.insert_field(target.as_ref(), transport)?;
    Ok(ds)
}

/// Compute both stresses with `bulk_formula`, replacing any earlier stresses, then the Sverdrup
/// transport.
///
/// Nothing is attached if any step fails.
pub fn sverdrup<'a>(ds: &'a mut Dataset, bulk_formula: &BulkFormula) -> Result<&'a mut Dataset> {
    let tau_x = bulk_formula.stress(ds, EASTWARD_WIND)?;
    let tau_y = bulk_formula.stress(ds, NORTHWARD_WIND)?;
    let transport = sverdrup_field(ds, &tau_x, &tau_y)?;

    debug!(
        "attaching the stresses and {} ({} drag coefficient)",
        DerivedField::SverdrupTransport,
        bulk_formula.drag_coefficient()
    );
    ds.insert_field(DerivedField::SurfaceDownwardEastwardStress.as_ref(), tau_x)?;
    ds.insert_field(DerivedField::SurfaceDownwardNorthwardStress.as_ref(), tau_y)?;
    ds.insert_field(DerivedField::SverdrupTransport.as_ref(), transport)?;
    Ok(ds)
}
