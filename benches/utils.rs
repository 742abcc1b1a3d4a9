use ndarray::{Array1, Array3};
use windeval::{DataArray, Dataset};

/// A month of daily winds on a 1 degree grid over the tropical Atlantic, 30S to 30N.
pub fn load_wind_grid() -> Dataset {
    let time = Array1::range(0.0, 30.0, 1.0);
    let latitude = Array1::range(-30.0, 30.5, 1.0);
    let longitude = Array1::range(-60.0, 10.5, 1.0);
    let shape = (time.len(), latitude.len(), longitude.len());
    let dims = ["time", "latitude", "longitude"];

    // trade winds, easterly in the tropics, with some variation in time and space
    let u = Array3::from_shape_fn(shape, |(t, j, i)| {
        -6.0 * latitude[j].to_radians().cos() + (t as f64 / 5.0).sin() + 0.01 * i as f64
    });
    let v = Array3::from_shape_fn(shape, |(t, j, _)| {
        -2.0 * latitude[j].to_radians().sin() + (t as f64 / 7.0).cos()
    });
    let rho = Array3::from_elem(shape, 1.2);
    let sst = Array3::from_shape_fn(shape, |(_, j, _)| 28.0 - 0.2 * latitude[j].abs());
    let air = sst.mapv(|t| t - 1.5);

    let field = |values: Array3<f64>| DataArray::new(&dims, values.into_dyn()).expect("oops");

    Dataset::new()
        .with_coordinate("time", time)
        .and_then(|ds| ds.with_coordinate("latitude", latitude))
        .and_then(|ds| ds.with_coordinate("longitude", longitude))
        .and_then(|ds| ds.with_field("eastward_wind", field(u)))
        .and_then(|ds| ds.with_field("northward_wind", field(v)))
        .and_then(|ds| ds.with_field("air_density", field(rho)))
        .and_then(|ds| ds.with_field("sea_surface_temperature", field(sst)))
        .and_then(|ds| ds.with_field("air_temperature", field(air)))
        .expect("oops")
}
