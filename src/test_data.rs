//! Data used in tests.

use crate::{DataArray, Dataset};
use ndarray::{Array1, ArrayD, IxDyn};

const SHAPE: [usize; 4] = [6, 5, 5, 4];

pub(crate) fn grid_dims() -> Vec<String> {
    ["time", "depth", "latitude", "longitude"]
        .iter()
        .map(|&d| d.to_owned())
        .collect()
}

fn grid_field(head: &[f64]) -> DataArray {
    let n: usize = SHAPE.iter().product();
    let mut values = vec![1.0; n];
    values[..head.len()].copy_from_slice(head);

    DataArray::new(
        &grid_dims(),
        ArrayD::from_shape_vec(IxDyn(&SHAPE), values).unwrap(),
    )
    .unwrap()
}

/// Uniform 1 m/s wind on a 1 degree grid starting at the equator, except for the first two
/// cells along longitude: eastward wind (3, 1) and northward wind (4, NaN).
pub(crate) fn wind_grid() -> Dataset {
    let coord = |n: usize| Array1::range(0.0, n as f64, 1.0);

    Dataset::new()
        .with_coordinate("time", coord(SHAPE[0]))
        .unwrap()
        .with_coordinate("depth", coord(SHAPE[1]))
        .unwrap()
        .with_coordinate("latitude", coord(SHAPE[2]))
        .unwrap()
        .with_coordinate("longitude", coord(SHAPE[3]))
        .unwrap()
        .with_field("eastward_wind", grid_field(&[3.0, 1.0]))
        .unwrap()
        .with_field("northward_wind", grid_field(&[4.0, std::f64::NAN]))
        .unwrap()
        .with_field("air_density", grid_field(&[1.0, 1.0]))
        .unwrap()
}

/// A day of hourly winds at a buoy at 10N 23W, no air density.
pub(crate) fn station_winds() -> Dataset {
    let hours = Array1::<f64>::range(0.0, 24.0, 1.0);
    let u = hours.mapv(|h| 5.0 + (h / 4.0).sin()).into_dyn();
    let v = hours.mapv(|h| -3.0 + (h / 6.0).cos()).into_dyn();

    Dataset::new()
        .with_coordinate("time", hours)
        .unwrap()
        .with_coordinate("latitude", Array1::from(vec![10.0]))
        .unwrap()
        .with_coordinate("longitude", Array1::from(vec![-23.0]))
        .unwrap()
        .with_field("eastward_wind", DataArray::new(&["time"], u).unwrap())
        .unwrap()
        .with_field("northward_wind", DataArray::new(&["time"], v).unwrap())
        .unwrap()
}

pub(crate) fn wind_station() -> Dataset {
    station_winds()
        .with_field(
            "air_density",
            DataArray::new(&["time"], Array1::from_elem(24, 1.22).into_dyn()).unwrap(),
        )
        .unwrap()
}
