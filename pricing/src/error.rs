use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error(
        "schema mismatch: expected {expected} slots, got {actual} (missing: {missing:?}, unexpected: {unexpected:?})"
    )]
    Mismatch {
        expected: usize,
        actual: usize,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    #[error("duplicate schema slot '{0}'")]
    Duplicate(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("unknown {column} '{value}'")]
    UnknownCategory { column: String, value: String },
    #[error("failed to load encoder: {0}")]
    Load(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("{0} does not provide class probabilities")]
    ProbabilityUnavailable(String),
    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no classifiers configured")]
    Empty,
    #[error("classifier '{0}' is configured twice")]
    DuplicateModel(String),
    #[error("default model '{0}' is not among the configured classifiers")]
    UnknownDefault(String),
    #[error("classifier '{model}' does not fit the feature schema: {source}")]
    Schema { model: String, source: SchemaError },
    #[error("classifier '{model}' is invalid: {source}")]
    Classifier {
        model: String,
        source: ClassifierError,
    },
    #[error(transparent)]
    Encoder(#[from] EncodeError),
}

/// Every rule a submitted form broke, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("invalid input: {}", .messages.join("; "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("unknown model '{0}'")]
    UnknownModel(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
