use ndarray::{Array1, ArrayD, IxDyn};
use windeval::{DataArray, Dataset};

pub const DIMS: [&str; 4] = ["time", "depth", "latitude", "longitude"];
pub const SHAPE: [usize; 4] = [6, 5, 5, 4];

#[allow(dead_code)]
pub fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
    assert!(eps > 0.0);

    (val1 - val2).abs() < eps
}

#[allow(dead_code)]
pub fn rel_equal(val1: f64, val2: f64, rel_tol: f64) -> bool {
    assert!(rel_tol > 0.0);

    (val1 - val2).abs() <= rel_tol * val1.abs().max(val2.abs())
}

fn grid_field(head: &[f64], fill: f64) -> DataArray {
    let n: usize = SHAPE.iter().product();
    let mut values = vec![fill; n];
    values[..head.len()].copy_from_slice(head);

    DataArray::new(
        &DIMS,
        ArrayD::from_shape_vec(IxDyn(&SHAPE), values).expect("bad test grid"),
    )
    .expect("bad test grid")
}

/// The 4 x 5 x 5 x 6 test grid, uniform 1 m/s wind except eastward (3, 1) and northward
/// (4, NaN) in the first two cells.
pub fn load_wind_grid() -> Dataset {
    let coord = |n: usize| Array1::range(0.0, n as f64, 1.0);

    Dataset::new()
        .with_coordinate("time", coord(SHAPE[0]))
        .and_then(|ds| ds.with_coordinate("depth", coord(SHAPE[1])))
        .and_then(|ds| ds.with_coordinate("latitude", coord(SHAPE[2])))
        .and_then(|ds| ds.with_coordinate("longitude", coord(SHAPE[3])))
        .and_then(|ds| ds.with_field("eastward_wind", grid_field(&[3.0, 1.0], 1.0)))
        .and_then(|ds| ds.with_field("northward_wind", grid_field(&[4.0, std::f64::NAN], 1.0)))
        .and_then(|ds| ds.with_field("air_density", grid_field(&[], 1.0)))
        .and_then(|ds| ds.with_field("sea_surface_temperature", grid_field(&[], 27.5)))
        .and_then(|ds| ds.with_field("air_temperature", grid_field(&[], 26.0)))
        .expect("bad test grid")
}

/// Generate a module of end to end tests on the test grid for one drag coefficient.
#[allow(unused_macros)] // False alarm
macro_rules! test_formula {
    ($test_mod_name:ident, $formula:expr, $extend_ranges:expr) => {
        mod $test_mod_name {
            use crate::utils;
            use windeval::{BulkFormula, Component, DragCoefficient};

            fn bulk_formula() -> BulkFormula {
                BulkFormula::new()
                    .with_drag_coefficient($formula)
                    .with_extend_ranges($extend_ranges)
            }

            #[test]
            fn ekman_propagates_missing_wind() {
                let mut ds = utils::load_wind_grid();
                let ds = windeval::ekman(&mut ds, Component::Eastward, &bulk_formula()).unwrap();

                let m = ds.field("eastward_ekman_transport").unwrap();
                assert!(m.get(&[0, 0, 0, 1]).unwrap().is_nan());
            }

            #[test]
            fn sverdrup_boundary_is_nan() {
                let mut ds = utils::load_wind_grid();
                let ds = windeval::sverdrup(&mut ds, &bulk_formula()).unwrap();

                let v = ds.field("sverdrup_transport").unwrap();
                assert_eq!(v.dims(), &utils::DIMS);
                for t in 0..utils::SHAPE[0] {
                    for lat in 0..utils::SHAPE[2] {
                        assert!(v.get(&[t, 0, lat, utils::SHAPE[3] - 1]).unwrap().is_nan());
                    }
                    for lon in 0..utils::SHAPE[3] {
                        assert!(v.get(&[t, 0, utils::SHAPE[2] - 1, lon]).unwrap().is_nan());
                    }
                }
            }

            #[test]
            fn selected_by_name() {
                let name = $formula.to_string();
                let bf =
                    BulkFormula::from_names(Some(name.as_str()), Some("generic"), Some($extend_ranges))
                        .unwrap();
                assert_eq!(bf, bulk_formula());
                assert_eq!(DragCoefficient::from_name(&name).unwrap(), $formula);
            }
        }
    };
}
