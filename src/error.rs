//! Error types for the windeval crate.
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AnalysisError {
    /// A drag coefficient formula was evaluated outside of its interval of definition.
    #[error("Bulk-formula is not defined for values outside of the interval I = [{lower}, {upper}]")]
    OutOfRange {
        /// Lower bound of the interval in m/s.
        lower: f64,
        /// Upper bound of the interval in m/s.
        upper: f64,
    },
    /// A drag coefficient formula was evaluated at zero wind speed where it has a pole.
    #[error("Bulk-formula is not defined for U = 0")]
    UndefinedAtZero,
    /// A value (temperature, etc) that is required is not available.
    #[error("Missing value required for analysis.")]
    MissingValue,
    /// A field required for the analysis is not in the dataset.
    #[error("Field not found: {0}")]
    FieldNotFound(String),
    /// A coordinate required for the analysis is not in the dataset.
    #[error("Coordinate not found: {0}")]
    CoordinateNotFound(String),
    /// A drag coefficient or bulk formula name that is not known to this crate.
    #[error("Unknown formula: {0}")]
    UnknownFormula(String),
    /// A derived field name without a registered recipe.
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// The shape of a field does not agree with the coordinates of the dataset.
    #[error("Shape mismatch for {name}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Name of the offending field or coordinate.
        name: String,
        /// Shape implied by the dataset coordinates.
        expected: Vec<usize>,
        /// Shape of the supplied values.
        actual: Vec<usize>,
    },
    /// A field or coordinate cannot be broadcast against the requested dimensions.
    #[error("Cannot broadcast {name} against dimensions ({dims})")]
    NotBroadcastable {
        /// Name of the field or coordinate.
        name: String,
        /// The target dimensions, comma separated.
        dims: String,
    },
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, AnalysisError>;
