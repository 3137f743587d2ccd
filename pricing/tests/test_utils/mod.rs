#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use axum::{body::Body, response::Response};
use http_body_util::BodyExt;
use mockall::mock;
use serde::Deserialize;
use serde_json::{Value, json};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use common::test_helpers::ArtifactDir;
use pricing::{
    builder::FeatureVectorBuilder,
    classifier::Classifier,
    encoder::{BrandEncoder, TargetEncoder, UnknownPolicy},
    error::{ClassifierError, EncodeError, PredictError, ValidationError},
    model::{FeatureSchema, FeatureValue, FeatureVector, Featurizable, Label, OneHotAxis},
    predictor::Predictor,
    registry::ModelRegistry,
    submission::Submission,
};

pub const GADGET_FEATURES: [&str; 5] = [
    "weight",
    "waterproof",
    "brand_encoded",
    "colour_Red",
    "colour_Blue",
];

pub fn gadget_schema() -> FeatureSchema {
    FeatureSchema::new(GADGET_FEATURES).expect("gadget schema has unique names")
}

/// `Green` deliberately has no schema slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
pub enum Colour {
    Red,
    Blue,
    Green,
}

impl OneHotAxis for Colour {
    const PREFIX: &'static str = "colour_";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GadgetKey {
    Weight,
    Waterproof,
    Brand,
    Colour(Colour),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gadget {
    pub weight: f64,
    pub waterproof: bool,
    pub brand_encoded: f64,
    pub colour: Option<Colour>,
}

impl Gadget {
    pub fn new(weight: f64, waterproof: bool, colour: Option<Colour>) -> Self {
        Self {
            weight,
            waterproof,
            brand_encoded: 0.0,
            colour,
        }
    }
}

impl Featurizable for Gadget {
    type Key = GadgetKey;

    fn slot_keys() -> Vec<(GadgetKey, String)> {
        let mut keys = vec![
            (GadgetKey::Weight, "weight".to_string()),
            (GadgetKey::Waterproof, "waterproof".to_string()),
            (GadgetKey::Brand, "brand_encoded".to_string()),
        ];
        keys.extend(Colour::one_hot_keys(GadgetKey::Colour));
        keys
    }

    fn features(&self) -> Vec<(GadgetKey, FeatureValue)> {
        let mut out: Vec<(GadgetKey, FeatureValue)> = vec![
            (GadgetKey::Weight, self.weight.into()),
            (GadgetKey::Waterproof, self.waterproof.into()),
            (GadgetKey::Brand, self.brand_encoded.into()),
        ];
        if let Some(colour) = self.colour {
            out.push((GadgetKey::Colour(colour), true.into()));
        }
        out
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GadgetForm {
    pub brand: String,
    pub weight: f64,
    pub waterproof: bool,
    pub colour: String,
    pub model: Option<String>,
}

impl Default for GadgetForm {
    fn default() -> Self {
        Self {
            brand: "acme".to_string(),
            weight: 1.0,
            waterproof: false,
            colour: "Red".to_string(),
            model: None,
        }
    }
}

impl Submission for GadgetForm {
    type Record = Gadget;

    fn model_name(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();
        if !(0.0..=10.0).contains(&self.weight) {
            errors.push(format!("weight must be between 0 and 10, got {}", self.weight));
        }
        if self.colour.parse::<Colour>().is_err() {
            errors.push(format!("unknown colour '{}'", self.colour));
        }
        errors.into_result()
    }

    fn into_record(self, encoder: &dyn BrandEncoder) -> Result<Gadget, PredictError> {
        Ok(Gadget {
            weight: self.weight,
            waterproof: self.waterproof,
            brand_encoded: encoder.encode(&self.brand)?,
            colour: self.colour.parse().ok(),
        })
    }
}

mock! {
    pub Classifier {}

    impl Classifier for Classifier {
        fn n_features(&self) -> usize;
        fn predict_proba(&self, x: &FeatureVector) -> Result<Option<f64>, ClassifierError>;
        fn predict(&self, x: &FeatureVector) -> Result<Label, ClassifierError>;
    }
}

mock! {
    pub BrandEncoder {}

    impl BrandEncoder for BrandEncoder {
        fn encode(&self, brand: &str) -> Result<f64, EncodeError>;
    }
}

/// A mock that always answers `label` with `probability`.
pub fn fixed_classifier(label: Label, probability: Option<f64>) -> MockClassifier {
    let mut clf = MockClassifier::new();
    clf.expect_n_features().return_const(GADGET_FEATURES.len());
    clf.expect_predict().returning(move |_| Ok(label));
    clf.expect_predict_proba().returning(move |_| Ok(probability));
    clf
}

pub fn gadget_encoder() -> TargetEncoder {
    let mapping = HashMap::from([("acme".to_string(), 0.8), ("budget".to_string(), 0.1)]);
    TargetEncoder::new("brand", mapping, 0.4, UnknownPolicy::Error)
        .expect("gadget encoder is valid")
}

pub fn registry_with(models: Vec<(&str, MockClassifier)>) -> ModelRegistry {
    let models: Vec<(String, Arc<dyn Classifier>)> = models
        .into_iter()
        .map(|(name, clf)| (name.to_string(), Arc::new(clf) as Arc<dyn Classifier>))
        .collect();
    ModelRegistry::new(Arc::new(gadget_encoder()), models, None, &gadget_schema())
        .expect("registry must build")
}

pub fn gadget_predictor(registry: ModelRegistry) -> Predictor<Gadget> {
    Predictor::new(FeatureVectorBuilder::new(gadget_schema()), Arc::new(registry))
}

/// Logistic model over the gadget schema: expensive when waterproof.
pub fn waterproof_lr_artifact() -> Value {
    json!({
        "kind": "logistic_regression",
        "weights": [0.0, 4.0, 0.0, 0.0, 0.0],
        "intercept": -2.0
    })
}

pub fn heavy_svm_artifact() -> Value {
    json!({
        "kind": "linear_svm",
        "weights": [1.0, 0.0, 0.0, 0.0, 0.0],
        "intercept": -5.0
    })
}

pub fn encoder_artifact() -> Value {
    json!({
        "column": "brand",
        "mapping": { "acme": 0.8, "budget": 0.1 },
        "prior": 0.4,
        "handle_unknown": "error"
    })
}

/// Writes encoder and both classifiers into a fresh directory.
pub fn write_gadget_artifacts() -> ArtifactDir {
    let dir = ArtifactDir::new();
    dir.write("encoder.json", &encoder_artifact());
    dir.write("lr.json", &waterproof_lr_artifact());
    dir.write("svm.json", &heavy_svm_artifact());
    dir
}

pub async fn response_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be JSON")
}

pub async fn response_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be readable")
        .to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}
