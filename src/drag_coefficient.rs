//! Empirical drag coefficients for the momentum flux between the atmosphere and the ocean.
//!
//! Every formula maps the absolute wind speed at 10 m (and for Kara et al. the air-sea
//! temperature difference) to a dimensionless drag coefficient.
//!
//! Evaluating a single value is strict, outside of the interval where a formula is defined it
//! fails with an error naming the interval. Evaluating an array never fails for that reason,
//! the undefined elements are `NaN` instead. With `extend_ranges` set both paths extrapolate the
//! boundary branches of the piecewise formulas.
//!
//! # References
//!
//! * Large and Pond, 1981. <https://doi.org/10.1175/1520-0485(1981)011<0324:OOMFMI>2.0.CO;2>
//! * Trenberth et al., 1990. <https://doi.org/10.1175/1520-0485(1990)020<1742:TMACIG>2.0.CO;2>
//! * Yelland and Taylor, 1996. <https://doi.org/10.1175/1520-0485(1996)026<0541:WSMFTO>2.0.CO;2>
//! * Kara et al., 2000. <https://doi.org/10.1175/1520-0426(2000)017<1421:EAABPO>2.0.CO;2>
//! * Large and Yeager, 2004. <http://dx.doi.org/10.5065/D6KK98Q6>
//! * Köhl and Heimbach, 2007. *A note on parameterizations of the drag coefficient*.

use crate::error::{AnalysisError, Result};
use metfor::{Celsius, MetersPSec, Quantity};
use ndarray::{ArrayD, ArrayViewD, Zip};
use optional::Optioned;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Added to the wind speed in denominators when extending the formulas to zero wind speed.
const EPS: f64 = std::f64::EPSILON;

/// The drag coefficient formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Display)]
pub enum DragCoefficient {
    /// Large and Pond, 1981. Defined for 4 ≤ U ≤ 25 m/s.
    ///
    /// 1.2 × 10⁻³ for U < 11 m/s, (0.49 + 0.065 U) × 10⁻³ above.
    #[strum(serialize = "large_and_pond_1981")]
    LargeAndPond1981,
    /// Trenberth, Large and Olson, 1990. Defined everywhere.
    ///
    /// 2.18 × 10⁻³ for U ≤ 1, (0.62 + 1.56 / U) × 10⁻³ for 1 < U ≤ 3, 1.14 × 10⁻³ for
    /// 3 < U < 10 and (0.49 + 0.065 U) × 10⁻³ otherwise. Possibly not exactly the published
    /// form, kept as is.
    #[strum(serialize = "trenberth_etal_1990")]
    TrenberthEtal1990,
    /// Yelland and Taylor, 1996. Defined for 3 ≤ U ≤ 26 m/s.
    ///
    /// (0.29 + 3.1 / U + 7.7 / U²) × 10⁻³ for U < 6 m/s, (0.6 + 0.07 U) × 10⁻³ above.
    #[strum(serialize = "yelland_and_taylor_1996")]
    YellandAndTaylor1996,
    /// Kara et al., 2000. Needs the sea surface and air temperatures.
    ///
    /// The wind speed is clamped to [2.5, 32.5] m/s before use, so it is defined everywhere.
    #[strum(serialize = "kara_etal_2000")]
    KaraEtal2000,
    /// Large and Yeager, 2004. (0.142 + 0.076 U + 2.7 / U) × 10⁻³, undefined for U = 0.
    #[strum(serialize = "large_and_yeager_2004")]
    LargeAndYeager2004,
    /// NCEP/NCAR as described by Köhl and Heimbach, 2007. A constant 1.3 × 10⁻³.
    #[strum(serialize = "ncep_ncar_2007")]
    NcepNcar2007,
}

impl Default for DragCoefficient {
    fn default() -> Self {
        DragCoefficient::NcepNcar2007
    }
}

impl DragCoefficient {
    /// Select a formula by name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windeval::{AnalysisError, DragCoefficient};
    ///
    /// assert_eq!(
    ///     DragCoefficient::from_name("Large_and_Pond_1981"),
    ///     Ok(DragCoefficient::LargeAndPond1981)
    /// );
    /// assert_eq!(
    ///     DragCoefficient::from_name("charnock_1955"),
    ///     Err(AnalysisError::UnknownFormula("charnock_1955".to_owned()))
    /// );
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        DragCoefficient::from_str(&name.to_lowercase())
            .map_err(|_| AnalysisError::UnknownFormula(name.to_owned()))
    }

    /// The interval of wind speeds, in m/s, outside of which the formula is undefined. `None`
    /// for formulas defined everywhere.
    pub fn interval(self) -> Option<(f64, f64)> {
        use self::DragCoefficient::*;

        match self {
            LargeAndPond1981 => Some((4.0, 25.0)),
            YellandAndTaylor1996 => Some((3.0, 26.0)),
            TrenberthEtal1990 | KaraEtal2000 | LargeAndYeager2004 | NcepNcar2007 => None,
        }
    }

    /// Does this formula depend on the sea surface and air temperatures?
    #[inline]
    pub fn requires_temperatures(self) -> bool {
        self == DragCoefficient::KaraEtal2000
    }

    /// Evaluate the drag coefficient for a single wind speed.
    ///
    /// The temperatures are only used by `KaraEtal2000`, which fails with `MissingValue` if
    /// either is missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::{Celsius, MetersPSec};
    /// use optional::{none, some};
    /// use windeval::{AnalysisError, DragCoefficient};
    ///
    /// let lp81 = DragCoefficient::LargeAndPond1981;
    /// let cd = lp81.evaluate(MetersPSec(12.0), none(), none(), false).unwrap();
    /// assert!((cd - 1.27e-3).abs() < 1.0e-15);
    ///
    /// assert_eq!(
    ///     lp81.evaluate(MetersPSec(26.0), none(), none(), false),
    ///     Err(AnalysisError::OutOfRange { lower: 4.0, upper: 25.0 })
    /// );
    ///
    /// let k00 = DragCoefficient::KaraEtal2000;
    /// assert!(k00
    ///     .evaluate(MetersPSec(10.0), some(Celsius(20.0)), some(Celsius(19.0)), false)
    ///     .is_ok());
    /// ```
    pub fn evaluate<W>(
        self,
        wind_speed: W,
        sea_surface_temperature: Optioned<Celsius>,
        air_temperature: Optioned<Celsius>,
        extend_ranges: bool,
    ) -> Result<f64>
    where
        MetersPSec: From<W>,
    {
        let u = MetersPSec::from(wind_speed).unpack();

        let dt = if self.requires_temperatures() {
            let ts = sea_surface_temperature
                .into_option()
                .ok_or(AnalysisError::MissingValue)?;
            let ta = air_temperature
                .into_option()
                .ok_or(AnalysisError::MissingValue)?;
            ts.unpack() - ta.unpack()
        } else {
            0.0
        };

        self.coefficient(u, dt, extend_ranges)
            .ok_or_else(|| self.domain_error())
    }

    /// Evaluate the drag coefficient elementwise over an array of wind speeds.
    ///
    /// Undefined elements are `NaN`. For `KaraEtal2000` `temperatures` holds the sea surface
    /// and air temperatures with the same shape as `wind_speed`, other formulas ignore it.
    pub fn evaluate_array(
        self,
        wind_speed: ArrayViewD<f64>,
        temperatures: Option<(ArrayViewD<f64>, ArrayViewD<f64>)>,
        extend_ranges: bool,
    ) -> Result<ArrayD<f64>> {
        if !self.requires_temperatures() {
            return Ok(wind_speed.mapv(|u| {
                self.coefficient(u, 0.0, extend_ranges)
                    .unwrap_or(std::f64::NAN)
            }));
        }

        let (ts, ta) = temperatures.ok_or(AnalysisError::MissingValue)?;
        for shape in &[ts.shape(), ta.shape()] {
            if *shape != wind_speed.shape() {
                return Err(AnalysisError::ShapeMismatch {
                    name: self.to_string(),
                    expected: wind_speed.shape().to_vec(),
                    actual: shape.to_vec(),
                });
            }
        }

        Ok(Zip::from(&wind_speed)
            .and(&ts)
            .and(&ta)
            .map_collect(|&u, &ts, &ta| kara_etal_2000(u, ts - ta)))
    }

    fn coefficient(self, u: f64, dt: f64, extend_ranges: bool) -> Option<f64> {
        use self::DragCoefficient::*;

        let eps = if extend_ranges { EPS } else { 0.0 };

        match self {
            LargeAndPond1981 => large_and_pond_1981(u, extend_ranges),
            TrenberthEtal1990 => Some(trenberth_etal_1990(u)),
            YellandAndTaylor1996 => yelland_and_taylor_1996(u, extend_ranges, eps),
            KaraEtal2000 => Some(kara_etal_2000(u, dt)),
            LargeAndYeager2004 => large_and_yeager_2004(u, extend_ranges, eps),
            NcepNcar2007 => Some(1.3e-3),
        }
    }

    fn domain_error(self) -> AnalysisError {
        match self.interval() {
            Some((lower, upper)) => AnalysisError::OutOfRange { lower, upper },
            None => AnalysisError::UndefinedAtZero,
        }
    }
}

fn large_and_pond_1981(u: f64, extend_ranges: bool) -> Option<f64> {
    let low = || 1.2e-3;
    let high = || (0.49 + 0.065 * u) * 1e-3;

    if extend_ranges {
        if u < 11.0 {
            Some(low())
        } else {
            Some(high())
        }
    } else if (4.0..11.0).contains(&u) {
        Some(low())
    } else if (11.0..=25.0).contains(&u) {
        Some(high())
    } else {
        None
    }
}

fn trenberth_etal_1990(u: f64) -> f64 {
    if u <= 1.0 {
        2.18e-3
    } else if u <= 3.0 {
        (0.62 + 1.56 / u) * 1e-3
    } else if u < 10.0 {
        1.14e-3
    } else {
        (0.49 + 0.065 * u) * 1e-3
    }
}

fn yelland_and_taylor_1996(u: f64, extend_ranges: bool, eps: f64) -> Option<f64> {
    let low = || (0.29 + 3.1 / (u + eps) + 7.7 / (u + eps).powi(2)) * 1e-3;
    let high = || (0.6 + 0.07 * u) * 1e-3;

    if extend_ranges {
        if u < 6.0 {
            Some(low())
        } else {
            Some(high())
        }
    } else if (3.0..6.0).contains(&u) {
        Some(low())
    } else if (6.0..=26.0).contains(&u) {
        Some(high())
    } else {
        None
    }
}

// dt is the sea surface temperature minus the air temperature
fn kara_etal_2000(u: f64, dt: f64) -> f64 {
    let v = u.clamp(2.5, 32.5);

    let cd0 = (0.862 + 0.088 * v - 0.00089 * v * v) * 1e-3;
    let cd1 = (0.1034 - 0.00678 * v + 0.0001147 * v * v) * 1e-3;

    cd0 + cd1 * dt
}

fn large_and_yeager_2004(u: f64, extend_ranges: bool, eps: f64) -> Option<f64> {
    if u == 0.0 && !extend_ranges {
        None
    } else {
        Some((0.142 + 0.076 * u + 2.7 / (u + eps)) * 1e-3)
    }
}
