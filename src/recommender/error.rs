use crate::artifacts::ArtifactError;
use std::fmt;

/// Represents the different types of errors that can occur while producing
/// crop recommendations.
#[derive(Debug)]
pub enum RecommenderError {
    /// A required model or label decoder artifact is missing or unreadable
    MissingArtifact(String),
    /// The batch input columns do not match the schema the model was trained on
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// The underlying classifier lacks a required prediction capability
    CapabilityUnsupported(String),
    /// Error occurred while making predictions
    PredictionError(String),
    /// Error occurred while reading or writing a prediction table
    TableError(String),
}

impl fmt::Display for RecommenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArtifact(msg) => write!(f, "Missing artifact: {}", msg),
            Self::SchemaMismatch { expected, found } => write!(
                f,
                "Column mismatch: expected {:?}, found {:?}",
                expected, found
            ),
            Self::CapabilityUnsupported(msg) => {
                write!(f, "Unsupported model capability: {}", msg)
            }
            Self::PredictionError(msg) => write!(f, "Prediction error: {}", msg),
            Self::TableError(msg) => write!(f, "Table error: {}", msg),
        }
    }
}

impl std::error::Error for RecommenderError {}

impl From<ArtifactError> for RecommenderError {
    fn from(err: ArtifactError) -> Self {
        RecommenderError::MissingArtifact(err.to_string())
    }
}

impl From<csv::Error> for RecommenderError {
    fn from(err: csv::Error) -> Self {
        RecommenderError::TableError(err.to_string())
    }
}
