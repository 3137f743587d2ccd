use metrics::{counter, histogram};
use std::{sync::Arc, time::Instant};
use tracing::{debug, info, warn};

use crate::{
    builder::FeatureVectorBuilder,
    error::PredictError,
    model::{FeatureSchema, Featurizable, Label, Prediction},
    registry::ModelRegistry,
    submission::Submission,
};

pub struct Predictor<R: Featurizable> {
    builder: FeatureVectorBuilder<R>,
    registry: Arc<ModelRegistry>,
}

impl<R: Featurizable> Predictor<R> {
    pub fn new(builder: FeatureVectorBuilder<R>, registry: Arc<ModelRegistry>) -> Self {
        info!(
            slots = builder.schema().len(),
            models = registry.len(),
            "Initializing new Predictor"
        );
        Self { builder, registry }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn schema(&self) -> &FeatureSchema {
        self.builder.schema()
    }

    /// Runs `record` through the named model (or the default).
    pub fn predict(&self, model: Option<&str>, record: &R) -> Result<Prediction, PredictError> {
        let (name, classifier) = self.registry.resolve(model)?;
        let started = Instant::now();

        let vector = self.builder.build(record);
        debug!(model = name, active = ?vector.active_slots(self.schema()), "Built feature vector");

        let classified = classifier.predict_proba(&vector).and_then(|probability| {
            let label = match probability {
                Some(p) => Label::from_probability(p),
                None => classifier.predict(&vector)?,
            };
            Ok((label, probability))
        });
        let (label, probability) = classified.inspect_err(|e| {
            warn!(model = name, error = %e, "Classifier failed");
        })?;

        histogram!("pricing_predict_seconds", "model" => name.to_string())
            .record(started.elapsed().as_secs_f64());
        counter!(
            "pricing_predictions_total",
            "model" => name.to_string(),
            "label" => label.to_string()
        )
        .increment(1);

        info!(model = name, label = %label, probability = ?probability, "Predicted price category");
        Ok(Prediction::new(name, label, probability))
    }

    /// Validates and encodes a raw submission, then predicts.
    pub fn predict_submission<S>(&self, submission: S) -> Result<Prediction, PredictError>
    where
        S: Submission<Record = R>,
    {
        if let Err(e) = submission.validate() {
            debug!(error = %e, "Rejected submission");
            return Err(e.into());
        }
        let model = submission.model_name().map(str::to_owned);
        let record = submission.into_record(self.registry.encoder())?;
        self.predict(model.as_deref(), &record)
    }
}
