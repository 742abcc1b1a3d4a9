use super::{attach_computed, computed, stress_or_default};
use crate::{
    coriolis::coriolis_parameter_field,
    dataset::{DataArray, Dataset},
    error::Result,
    keys::{DerivedField, EASTWARD_WIND, LATITUDE, NORTHWARD_WIND},
};
use log::{debug, warn};

/// Northward Ekman transport, −τx / f, attached as `northward_ekman_transport`.
///
/// Where the Coriolis parameter vanishes, at the equator, the result is infinite or `NaN`.
pub fn northward_ekman_transport(ds: &mut Dataset) -> Result<&mut Dataset> {
    let tau_x = stress_or_default(ds, DerivedField::SurfaceDownwardEastwardStress, EASTWARD_WIND)?;
    let transport = northward_ekman_field(ds, &tau_x)?;

    let tau_x = computed(tau_x);
    attach_computed(ds, DerivedField::SurfaceDownwardEastwardStress, tau_x)?;
    attach(ds, DerivedField::NorthwardEkmanTransport, transport)
}

/// Eastward Ekman transport, τy / f, attached as `eastward_ekman_transport`.
///
/// Where the Coriolis parameter vanishes, at the equator, the result is infinite or `NaN`.
pub fn eastward_ekman_transport(ds: &mut Dataset) -> Result<&mut Dataset> {
    let tau_y = stress_or_default(
        ds,
        DerivedField::SurfaceDownwardNorthwardStress,
        NORTHWARD_WIND,
    )?;
    let transport = eastward_ekman_field(ds, &tau_y)?;

    let tau_y = computed(tau_y);
    attach_computed(ds, DerivedField::SurfaceDownwardNorthwardStress, tau_y)?;
    attach(ds, DerivedField::EastwardEkmanTransport, transport)
}

/// −τx / f over the dimensions of the eastward stress `tau_x`, nothing is attached.
pub(crate) fn northward_ekman_field(ds: &Dataset, tau_x: &DataArray) -> Result<DataArray> {
    ekman_field(ds, tau_x, -1.0, DerivedField::NorthwardEkmanTransport)
}

/// τy / f over the dimensions of the northward stress `tau_y`, nothing is attached.
pub(crate) fn eastward_ekman_field(ds: &Dataset, tau_y: &DataArray) -> Result<DataArray> {
    ekman_field(ds, tau_y, 1.0, DerivedField::EastwardEkmanTransport)
}

fn ekman_field(
    ds: &Dataset,
    tau: &DataArray,
    sign: f64,
    target: DerivedField,
) -> Result<DataArray> {
    let f = coriolis_parameter_field(ds, tau.dims())?;

    if ds.coordinate(LATITUDE)?.iter().any(|&lat| lat == 0.0) {
        warn!("{} at the equator is not finite", target);
    }

    DataArray::new(tau.dims(), tau.values() / &f * sign)
}

fn attach(ds: &mut Dataset, target: DerivedField, transport: DataArray) -> Result<&mut Dataset> {
    debug!("attaching {}", target);
    ds.insert_field(target.as_ref(), transport)?;
    Ok(ds)
}
