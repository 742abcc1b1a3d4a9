//! Names of the fields and coordinates read from and written to a `Dataset`.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Eastward component of the wind at 10 m, m/s.
pub const EASTWARD_WIND: &str = "eastward_wind";
/// Northward component of the wind at 10 m, m/s.
pub const NORTHWARD_WIND: &str = "northward_wind";
/// Density of the air at the surface, kg/m³.
pub const AIR_DENSITY: &str = "air_density";
/// Sea surface temperature.
pub const SEA_SURFACE_TEMPERATURE: &str = "sea_surface_temperature";
/// Air temperature, same units as the sea surface temperature.
pub const AIR_TEMPERATURE: &str = "air_temperature";

/// Latitude coordinate, degrees north.
pub const LATITUDE: &str = "latitude";
/// Longitude coordinate, degrees east.
pub const LONGITUDE: &str = "longitude";

/// Fields this crate knows how to compute. Each has exactly one default recipe, see
/// [`ensure`](crate::ensure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Display)]
pub enum DerivedField {
    /// Wind stress acting eastward on the sea surface, N/m².
    #[strum(serialize = "surface_downward_eastward_stress")]
    SurfaceDownwardEastwardStress,
    /// Wind stress acting northward on the sea surface, N/m².
    #[strum(serialize = "surface_downward_northward_stress")]
    SurfaceDownwardNorthwardStress,
    /// Northward Ekman transport.
    #[strum(serialize = "northward_ekman_transport")]
    NorthwardEkmanTransport,
    /// Eastward Ekman transport.
    #[strum(serialize = "eastward_ekman_transport")]
    EastwardEkmanTransport,
    /// Sverdrup transport.
    #[strum(serialize = "sverdrup_transport")]
    SverdrupTransport,
    /// Magnitude of the wind, m/s.
    #[strum(serialize = "wind_speed")]
    WindSpeed,
}
