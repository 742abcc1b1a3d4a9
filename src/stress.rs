//! Wind stress at the sea surface.

use crate::{
    bulk_formula::BulkFormula,
    dataset::{DataArray, Dataset},
    error::Result,
    keys::{DerivedField, EASTWARD_WIND, NORTHWARD_WIND},
};
use log::debug;
use ndarray::Zip;

/// Compute the eastward wind stress from `eastward_wind` and attach it as
/// `surface_downward_eastward_stress`, replacing a previous value.
pub fn surface_downward_eastward_stress<'a>(
    ds: &'a mut Dataset,
    bulk_formula: &BulkFormula,
) -> Result<&'a mut Dataset> {
    attach_stress(
        ds,
        bulk_formula,
        EASTWARD_WIND,
        DerivedField::SurfaceDownwardEastwardStress,
    )
}

/// Compute the northward wind stress from `northward_wind` and attach it as
/// `surface_downward_northward_stress`, replacing a previous value.
pub fn surface_downward_northward_stress<'a>(
    ds: &'a mut Dataset,
    bulk_formula: &BulkFormula,
) -> Result<&'a mut Dataset> {
    attach_stress(
        ds,
        bulk_formula,
        NORTHWARD_WIND,
        DerivedField::SurfaceDownwardNorthwardStress,
    )
}

fn attach_stress<'a>(
    ds: &'a mut Dataset,
    bulk_formula: &BulkFormula,
    wind_component: &str,
    target: DerivedField,
) -> Result<&'a mut Dataset> {
    let tau = bulk_formula.stress(ds, wind_component)?;

    debug!(
        "attaching {} ({} drag coefficient)",
        target,
        bulk_formula.drag_coefficient()
    );
    ds.insert_field(target.as_ref(), tau)?;
    Ok(ds)
}

/// Compute the magnitude of the wind from its components and attach it as `wind_speed`.
///
/// The result has the dimensions of `eastward_wind`.
pub fn wind_speed(ds: &mut Dataset) -> Result<&mut Dataset> {
    let u = ds.field(EASTWARD_WIND)?;
    let dims = u.dims().to_vec();
    let v = ds.broadcast_field(NORTHWARD_WIND, &dims)?;

    let speed = Zip::from(u.values())
        .and(&v)
        .map_collect(|&u, &v| u.hypot(v));

    debug!("attaching {}", DerivedField::WindSpeed);
    ds.insert_field(DerivedField::WindSpeed.as_ref(), DataArray::new(&dims, speed)?)?;
    Ok(ds)
}
