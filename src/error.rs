use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type used across the predictor crate.
pub type Result<T> = std::result::Result<T, PredictorError>;

/// All errors that can occur while loading artifacts, collecting input,
/// assembling feature vectors or scoring them.
#[derive(Debug)]
pub enum PredictorError {
    /// A startup artifact does not exist at the configured location.
    MissingArtifact { path: PathBuf },
    /// An underlying I/O error while reading an artifact.
    Io(io::Error),
    /// An artifact is not valid JSON or does not have the expected shape.
    Json(serde_json::Error),
    /// The feature schema violates one of its structural invariants.
    InvalidSchema(String),
    /// A schema column could not be found in the working mapping after default-fill.
    MissingColumn { column: String },
    /// A schema column is absent from the raw input and is not expected to be.
    UnexpectedAbsentColumn { column: String },
    /// A raw input feature has no column in the schema.
    UnknownFeature { feature: String },
    /// The vector handed to a predictor has columns in a different order than its schema.
    SchemaMismatch {
        position: usize,
        expected: String,
        got: String,
    },
    /// The vector handed to a predictor has the wrong number of entries.
    ShapeMismatch { got: usize, expected: usize },
    /// The dot product overflowed or the inputs held a non-finite value.
    NonFinitePrediction(f64),
    /// The model coefficients do not line up with the schema columns.
    ModelSchemaMismatch(String),
    /// A bounded input was outside its range or off its step grid.
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
        step: i64,
    },
    /// A raw value could not be interpreted by the input collector.
    InvalidInput(String),
}

impl Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArtifact { path } => {
                write!(f, "artifact not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "invalid json: {e}"),
            Self::InvalidSchema(msg) => write!(f, "invalid schema: {msg}"),
            Self::MissingColumn { column } => {
                write!(f, "column '{column}' is missing from the assembled mapping")
            }
            Self::UnexpectedAbsentColumn { column } => write!(
                f,
                "schema column '{column}' was not produced by any input and is not an expected-optional column"
            ),
            Self::UnknownFeature { feature } => {
                write!(f, "input feature '{feature}' has no column in the schema")
            }
            Self::SchemaMismatch {
                position,
                expected,
                got,
            } => write!(
                f,
                "schema mismatch at position {position}: expected '{expected}', got '{got}'"
            ),
            Self::ShapeMismatch { got, expected } => {
                write!(f, "shape mismatch: got {got} values, expected {expected}")
            }
            Self::NonFinitePrediction(v) => write!(f, "prediction is not a finite number: {v}"),
            Self::ModelSchemaMismatch(msg) => write!(f, "model does not match schema: {msg}"),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
                step,
            } => write!(
                f,
                "{field} must be between {min} and {max} in steps of {step}, got {value}"
            ),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for PredictorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PredictorError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PredictorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
