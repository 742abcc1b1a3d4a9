//! The Coriolis parameter and its latitudinal derivative.

use crate::{dataset::Dataset, error::Result, keys::LATITUDE};
use ndarray::ArrayD;
use std::f64::consts::PI;

/// Length of the sidereal day in seconds.
pub const SIDEREAL_DAY: f64 = 86_164.1;

/// Rotation rate of the Earth in radians per second.
pub const OMEGA: f64 = 2.0 * PI / SIDEREAL_DAY;

/// The Coriolis parameter, f = 2Ω sin φ, in 1/s for a latitude in degrees.
#[inline]
pub fn coriolis_parameter(latitude: f64) -> f64 {
    2.0 * OMEGA * latitude.to_radians().sin()
}

/// The derivative of the Coriolis parameter with respect to latitude, β = 2Ω cos φ, for a latitude
/// in degrees.
#[inline]
pub fn beta(latitude: f64) -> f64 {
    2.0 * OMEGA * latitude.to_radians().cos()
}

/// The Coriolis parameter at the latitude coordinate of a dataset, broadcast over `dims`.
pub fn coriolis_parameter_field(ds: &Dataset, dims: &[String]) -> Result<ArrayD<f64>> {
    ds.broadcast_coordinate_map(LATITUDE, dims, coriolis_parameter)
}
