use super::{attach_computed, computed, stress_or_default};
use crate::{
    coriolis::beta,
    dataset::{DataArray, Dataset},
    error::{AnalysisError, Result},
    keys::{DerivedField, EASTWARD_WIND, LATITUDE, LONGITUDE, NORTHWARD_WIND},
    utility::{along_axis, forward_spacing},
};
use itertools::Itertools;
use log::debug;
use ndarray::{ArrayD, ArrayViewD, Axis, Slice};

/// Sverdrup transport from the curl of the wind stress divided by β, attached as
/// `sverdrup_transport`.
///
/// Forward differences over the, possibly non-uniform, latitude and longitude spacing are used,
/// in coordinate units. For every cell (j, i) below the last latitude and longitude index
///
/// ```text
/// V = [ (τy[j+1, i] - τy[j, i]) / (φ[j+1] - φ[j])
///     - (τx[j, i+1] - τx[j, i]) / (λ[i+1] - λ[i]) ] / β(φ[j+1])
/// ```
///
/// over all the other dimensions. The last latitude row and longitude column are `NaN`, there is
/// no backward difference at the boundary. The result has the dimensions of the northward stress,
/// in the same order.
pub fn sverdrup_transport(ds: &mut Dataset) -> Result<&mut Dataset> {
    let tau_x = stress_or_default(ds, DerivedField::SurfaceDownwardEastwardStress, EASTWARD_WIND)?;
    let tau_y = stress_or_default(
        ds,
        DerivedField::SurfaceDownwardNorthwardStress,
        NORTHWARD_WIND,
    )?;
    let transport = sverdrup_field(ds, &tau_x, &tau_y)?;

    let (tau_x, tau_y) = (computed(tau_x), computed(tau_y));
    attach_computed(ds, DerivedField::SurfaceDownwardEastwardStress, tau_x)?;
    attach_computed(ds, DerivedField::SurfaceDownwardNorthwardStress, tau_y)?;

    debug!("attaching {}", DerivedField::SverdrupTransport);
    ds.insert_field(DerivedField::SverdrupTransport.as_ref(), transport)?;
    Ok(ds)
}

/// The Sverdrup transport over the dimensions of `tau_y`, nothing is attached.
pub(crate) fn sverdrup_field(
    ds: &Dataset,
    tau_x: &DataArray,
    tau_y: &DataArray,
) -> Result<DataArray> {
    let dims = tau_y.dims();
    let tau_x = tau_x.aligned_to(
        DerivedField::SurfaceDownwardEastwardStress.as_ref(),
        dims,
        tau_y.values().shape(),
    )?;

    let not_gridded = || AnalysisError::NotBroadcastable {
        name: DerivedField::SverdrupTransport.to_string(),
        dims: dims.iter().join(", "),
    };
    let lat_axis = tau_y.axis_of(LATITUDE).ok_or_else(not_gridded)?;
    let lon_axis = tau_y.axis_of(LONGITUDE).ok_or_else(not_gridded)?;

    let latitude = ds.coordinate(LATITUDE)?;
    let longitude = ds.coordinate(LONGITUDE)?;

    let mut transport = ArrayD::from_elem(tau_y.values().raw_dim(), std::f64::NAN);

    if latitude.len() > 1 && longitude.len() > 1 {
        let ndim = dims.len();

        let dtau_y = forward_difference(tau_y.values().view(), lat_axis)
            / &along_axis(forward_spacing(latitude), lat_axis.index(), ndim)?;
        let dtau_x = forward_difference(tau_x.view(), lon_axis)
            / &along_axis(forward_spacing(longitude), lon_axis.index(), ndim)?;

        // Both restricted to the cells with a forward neighbor in each direction.
        let curl = &drop_last(dtau_y.view(), lon_axis) - &drop_last(dtau_x.view(), lat_axis);

        let beta_upper = latitude.slice(ndarray::s![1..]).mapv(beta);
        let values = curl / &along_axis(beta_upper, lat_axis.index(), ndim)?;

        let mut interior = transport.view_mut();
        interior.slice_axis_inplace(lat_axis, Slice::new(0, Some(-1), 1));
        interior.slice_axis_inplace(lon_axis, Slice::new(0, Some(-1), 1));
        interior.assign(&values);
    }

    DataArray::new(dims, transport)
}

/// a[k+1] - a[k] along `axis`, one shorter than `a` along it.
fn forward_difference(a: ArrayViewD<f64>, axis: Axis) -> ArrayD<f64> {
    let mut upper = a.clone();
    upper.slice_axis_inplace(axis, Slice::new(1, None, 1));
    let mut lower = a;
    lower.slice_axis_inplace(axis, Slice::new(0, Some(-1), 1));

    &upper - &lower
}

fn drop_last(mut a: ArrayViewD<f64>, axis: Axis) -> ArrayViewD<f64> {
    a.slice_axis_inplace(axis, Slice::new(0, Some(-1), 1));
    a
}
