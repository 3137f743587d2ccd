use chrono::{DateTime, Utc, serde::ts_seconds};
use serde::{Deserialize, Serialize};
use std::error::Error;
use strum_macros::Display as EnumDisplay;

pub mod featurizable;
pub mod schema;
pub mod vector;

pub use featurizable::{Featurizable, OneHotAxis};
pub use schema::FeatureSchema;
pub use vector::FeatureVector;

pub type GenericError = Box<dyn Error + Send + Sync>;

/// A single raw value headed for one schema slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Double(f64),
    Bool(bool),
}

impl FeatureValue {
    /// Numeric form as fed to a classifier; booleans become 1/0.
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Double(v) => v,
            FeatureValue::Bool(true) => 1.0,
            FeatureValue::Bool(false) => 0.0,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Double(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Bool(v)
    }
}

/// Binary price category predicted by a classifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumDisplay,
)]
pub enum Label {
    #[strum(to_string = "Not Expensive")]
    NotExpensive,
    #[strum(to_string = "Expensive")]
    Expensive,
}

impl Label {
    pub fn code(self) -> u8 {
        match self {
            Label::NotExpensive => 0,
            Label::Expensive => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Label::NotExpensive),
            1 => Some(Label::Expensive),
            _ => None,
        }
    }

    /// Positive class only when strictly above one half; ties go to class 0.
    pub fn from_probability(p: f64) -> Self {
        if p > 0.5 {
            Label::Expensive
        } else {
            Label::NotExpensive
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub model: String,
    pub label: Label,
    pub code: u8,
    pub probability: Option<f64>,
    #[serde(with = "ts_seconds")]
    pub predicted_at: DateTime<Utc>,
}

impl Prediction {
    pub fn new(model: impl Into<String>, label: Label, probability: Option<f64>) -> Self {
        Self {
            model: model.into(),
            label,
            code: label.code(),
            probability,
            predicted_at: Utc::now(),
        }
    }
}
