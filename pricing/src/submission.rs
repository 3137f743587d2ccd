use serde::de::DeserializeOwned;

use crate::{
    encoder::BrandEncoder,
    error::{PredictError, ValidationError},
    model::Featurizable,
};

/// Raw user input as collected by a form, before it becomes a record.
///
/// Range and category validation live here, not in the feature builder.
pub trait Submission: DeserializeOwned + Send + 'static {
    type Record: Featurizable + Send + 'static;

    /// Requested classifier; `None` means the registry default.
    fn model_name(&self) -> Option<&str>;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Called only after [`Submission::validate`] succeeded.
    fn into_record(self, encoder: &dyn BrandEncoder) -> Result<Self::Record, PredictError>;
}
