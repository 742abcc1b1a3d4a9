//! The bulk formula for the wind stress at the sea surface.

use crate::{
    dataset::{DataArray, Dataset},
    drag_coefficient::DragCoefficient,
    error::{AnalysisError, Result},
    keys::{AIR_DENSITY, AIR_TEMPERATURE, SEA_SURFACE_TEMPERATURE},
};
use log::trace;
use ndarray::Zip;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The equations combining a drag coefficient with the wind into a stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Display)]
pub enum Formula {
    /// τ = ρ C_d |u| u
    #[strum(serialize = "generic")]
    Generic,
}

impl Default for Formula {
    fn default() -> Self {
        Formula::Generic
    }
}

impl Formula {
    /// Select a formula by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        Formula::from_str(&name.to_lowercase())
            .map_err(|_| AnalysisError::UnknownFormula(name.to_owned()))
    }
}

/// A drag coefficient paired with a bulk formula, and how to treat wind speeds outside of the
/// interval where the drag coefficient is defined.
///
/// # Examples
///
/// ```rust
/// use windeval::{BulkFormula, DragCoefficient, Formula};
///
/// let bf = BulkFormula::new();
/// assert_eq!(bf.drag_coefficient(), DragCoefficient::NcepNcar2007);
/// assert_eq!(bf.formula(), Formula::Generic);
/// assert!(!bf.extend_ranges());
///
/// let bf = BulkFormula::new()
///     .with_drag_coefficient(DragCoefficient::LargeAndPond1981)
///     .with_extend_ranges(true);
/// assert_eq!(
///     bf,
///     BulkFormula::from_names(Some("large_and_pond_1981"), None, Some(true)).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkFormula {
    drag_coefficient: DragCoefficient,
    formula: Formula,
    extend_ranges: bool,
}

impl BulkFormula {
    /// A bulk formula with the default settings.
    #[inline]
    pub fn new() -> Self {
        BulkFormula::default()
    }

    /// Build from names, any `None` keeps the default. Unknown names fail right away.
    pub fn from_names(
        drag_coefficient: Option<&str>,
        bulk_formula: Option<&str>,
        extend_ranges: Option<bool>,
    ) -> Result<Self> {
        let mut bf = BulkFormula::default();

        if let Some(name) = drag_coefficient {
            bf.drag_coefficient = DragCoefficient::from_name(name)?;
        }
        if let Some(name) = bulk_formula {
            bf.formula = Formula::from_name(name)?;
        }
        if let Some(extend_ranges) = extend_ranges {
            bf.extend_ranges = extend_ranges;
        }

        trace!("selected {:?}", bf);
        Ok(bf)
    }

    /// Set the drag coefficient.
    #[inline]
    pub fn with_drag_coefficient(self, drag_coefficient: DragCoefficient) -> Self {
        BulkFormula {
            drag_coefficient,
            ..self
        }
    }

    /// Set the bulk formula.
    #[inline]
    pub fn with_formula(self, formula: Formula) -> Self {
        BulkFormula { formula, ..self }
    }

    /// Extrapolate the drag coefficient outside of its interval instead of yielding `NaN`.
    #[inline]
    pub fn with_extend_ranges(self, extend_ranges: bool) -> Self {
        BulkFormula {
            extend_ranges,
            ..self
        }
    }

    /// The drag coefficient.
    #[inline]
    pub fn drag_coefficient(&self) -> DragCoefficient {
        self.drag_coefficient
    }

    /// The bulk formula.
    #[inline]
    pub fn formula(&self) -> Formula {
        self.formula
    }

    /// Are the drag coefficients extended outside of their intervals?
    #[inline]
    pub fn extend_ranges(&self) -> bool {
        self.extend_ranges
    }

    /// Compute the stress due to one wind component of the dataset.
    ///
    /// The drag coefficient is evaluated at the magnitude of the component, the stress has the
    /// sign of the component. Needs `air_density`, and for Kara et al. 2000 also
    /// `sea_surface_temperature` and `air_temperature`, all broadcastable against the wind.
    pub fn stress(&self, ds: &Dataset, wind_component: &str) -> Result<DataArray> {
        let wind = ds.field(wind_component)?;
        let dims = wind.dims();
        let u = wind.values();

        let rho = ds.broadcast_field(AIR_DENSITY, dims)?;

        let temperatures = if self.drag_coefficient.requires_temperatures() {
            Some((
                ds.broadcast_field(SEA_SURFACE_TEMPERATURE, dims)?,
                ds.broadcast_field(AIR_TEMPERATURE, dims)?,
            ))
        } else {
            None
        };

        let speed = u.mapv(f64::abs);
        let cd = self.drag_coefficient.evaluate_array(
            speed.view(),
            temperatures.as_ref().map(|(ts, ta)| (ts.view(), ta.view())),
            self.extend_ranges,
        )?;

        let tau = match self.formula {
            Formula::Generic => Zip::from(&rho)
                .and(&cd)
                .and(u)
                .map_collect(|&rho, &cd, &u| rho * cd * u.abs() * u),
        };

        DataArray::new(dims, tau)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{keys::EASTWARD_WIND, test_data, utility::test_tools::approx_equal};
    use ndarray::{arr1, Array1};

    fn station(u: &[f64]) -> Dataset {
        let n = u.len();
        Dataset::new()
            .with_coordinate("time", Array1::range(0.0, n as f64, 1.0))
            .unwrap()
            .with_field(
                EASTWARD_WIND,
                DataArray::new(&["time"], arr1(u).into_dyn()).unwrap(),
            )
            .unwrap()
            .with_field(
                AIR_DENSITY,
                DataArray::new(&["time"], Array1::ones(n).into_dyn()).unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn test_from_names() {
        assert_eq!(BulkFormula::from_names(None, None, None), Ok(BulkFormula::new()));
        assert_eq!(
            BulkFormula::from_names(None, Some("bulk_2020"), None),
            Err(AnalysisError::UnknownFormula("bulk_2020".to_owned()))
        );
        assert_eq!(
            BulkFormula::from_names(Some("cd"), None, None),
            Err(AnalysisError::UnknownFormula("cd".to_owned()))
        );
        assert_eq!(
            BulkFormula::from_names(Some("KARA_ETAL_2000"), Some("Generic"), None)
                .unwrap()
                .drag_coefficient(),
            DragCoefficient::KaraEtal2000
        );
    }

    #[test]
    fn test_stress_keeps_sign_and_nan() {
        let ds = station(&[3.0, std::f64::NAN, -2.0]);
        let tau = BulkFormula::new().stress(&ds, EASTWARD_WIND).unwrap();

        assert!(approx_equal(tau.get(&[0]).unwrap(), 1.3e-3 * 9.0, 1.0e-15));
        assert!(tau.get(&[1]).unwrap().is_nan());
        assert!(approx_equal(tau.get(&[2]).unwrap(), -1.3e-3 * 4.0, 1.0e-15));
    }

    #[test]
    fn test_stress_out_of_range_is_nan() {
        let ds = station(&[1.0, -12.0, 30.0]);

        let tau = BulkFormula::new()
            .with_drag_coefficient(DragCoefficient::LargeAndPond1981)
            .stress(&ds, EASTWARD_WIND)
            .unwrap();
        assert!(tau.get(&[0]).unwrap().is_nan());
        assert!(approx_equal(tau.get(&[1]).unwrap(), -1.27e-3 * 144.0, 1.0e-12));
        assert!(tau.get(&[2]).unwrap().is_nan());

        let tau = BulkFormula::new()
            .with_drag_coefficient(DragCoefficient::LargeAndPond1981)
            .with_extend_ranges(true)
            .stress(&ds, EASTWARD_WIND)
            .unwrap();
        assert!(tau.values().iter().all(|t| t.is_finite()));
    }

    #[test]
    fn test_stress_missing_fields() {
        let ds = test_data::wind_grid();

        let kara = BulkFormula::new().with_drag_coefficient(DragCoefficient::KaraEtal2000);
        assert_eq!(
            kara.stress(&ds, EASTWARD_WIND).unwrap_err(),
            AnalysisError::FieldNotFound(SEA_SURFACE_TEMPERATURE.to_owned())
        );

        let ds = Dataset::new()
            .with_coordinate("time", Array1::zeros(2))
            .unwrap()
            .with_field(
                EASTWARD_WIND,
                DataArray::new(&["time"], Array1::ones(2).into_dyn()).unwrap(),
            )
            .unwrap();
        assert_eq!(
            BulkFormula::new().stress(&ds, EASTWARD_WIND).unwrap_err(),
            AnalysisError::FieldNotFound(AIR_DENSITY.to_owned())
        );
    }

    #[test]
    fn test_stress_kara_broadcasts_temperatures() {
        let ds = test_data::wind_grid();
        let dims = vec!["latitude".to_owned()];
        let ds = ds
            .with_field(
                SEA_SURFACE_TEMPERATURE,
                DataArray::new(&dims, Array1::from_elem(5, 27.0).into_dyn()).unwrap(),
            )
            .unwrap()
            .with_field(
                AIR_TEMPERATURE,
                DataArray::new(&dims, Array1::from_elem(5, 25.0).into_dyn()).unwrap(),
            )
            .unwrap();

        let kara = BulkFormula::new().with_drag_coefficient(DragCoefficient::KaraEtal2000);
        let tau = kara.stress(&ds, EASTWARD_WIND).unwrap();

        // clamped to 2.5 m/s, 2 degrees warmer sea
        let v: f64 = 2.5;
        let cd = (0.862 + 0.088 * v - 0.00089 * v * v) * 1e-3
            + (0.1034 - 0.00678 * v + 0.0001147 * v * v) * 1e-3 * 2.0;
        assert!(approx_equal(tau.get(&[1, 1, 1, 1]).unwrap(), cd, 1.0e-15));

        // 3 m/s eastward wind in the first cell
        let v: f64 = 3.0;
        let cd = (0.862 + 0.088 * v - 0.00089 * v * v) * 1e-3
            + (0.1034 - 0.00678 * v + 0.0001147 * v * v) * 1e-3 * 2.0;
        assert!(approx_equal(tau.get(&[0, 0, 0, 0]).unwrap(), cd * 9.0, 1.0e-15));
    }
}
