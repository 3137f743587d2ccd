use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::str::FromStr;

use pricing::{
    encoder::BrandEncoder,
    error::{PredictError, ValidationError},
    model::Label,
    submission::Submission,
};

use crate::{
    brands::{BRANDS, is_known_brand},
    categories::{
        NOTCH_FORM_ORDER, NotchType, OS_FORM_ORDER, OsName, PROCESSOR_FORM_ORDER, ProcessorBrand,
        labels,
    },
    raw_inputs::RawInputs,
};

/// A smartphone as submitted by the web form or the `predict` CLI.
///
/// Every input is required; only `model` may be left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneForm {
    /// Classifier name; empty or missing selects the registry default.
    #[serde(default)]
    pub model: Option<String>,
    pub brand: String,
    pub rating: f64,
    pub clock_speed_ghz: f64,
    pub ram_gb: f64,
    pub ram_tier: f64,
    pub fast_charging_power_w: f64,
    pub memory_card_support: bool,
    pub memory_card_size_gb: f64,
    pub storage_gb: f64,
    pub has_5g: bool,
    pub has_vo5g: bool,
    pub has_nfc: bool,
    pub primary_rear_camera_mp: f64,
    pub primary_front_camera_mp: f64,
    pub num_rear_cameras: f64,
    pub screen_size_in: f64,
    pub resolution_width: f64,
    pub resolution_height: f64,
    pub refresh_rate_hz: f64,
    pub notch_type: String,
    pub os_version: f64,
    pub os_name: String,
    pub processor_brand: String,
}

impl Default for PhoneForm {
    fn default() -> Self {
        Self {
            model: None,
            brand: BRANDS[0].to_string(),
            rating: 0.0,
            clock_speed_ghz: 1.0,
            ram_gb: 1.0,
            ram_tier: 1.0,
            fast_charging_power_w: 0.0,
            memory_card_support: true,
            memory_card_size_gb: 0.0,
            storage_gb: 4.0,
            has_5g: false,
            has_vo5g: false,
            has_nfc: false,
            primary_rear_camera_mp: 2.0,
            primary_front_camera_mp: 1.0,
            num_rear_cameras: 1.0,
            screen_size_in: 3.0,
            resolution_width: 128.0,
            resolution_height: 128.0,
            refresh_rate_hz: 30.0,
            notch_type: NOTCH_FORM_ORDER[0].to_string(),
            os_version: 1.0,
            os_name: OS_FORM_ORDER[0].to_string(),
            processor_brand: PROCESSOR_FORM_ORDER[0].to_string(),
        }
    }
}

/// Accepted range of one numeric form field.
pub struct FieldRange {
    pub field: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub integer: bool,
    value: fn(&PhoneForm) -> f64,
}

impl FieldRange {
    const fn int(
        field: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        value: fn(&PhoneForm) -> f64,
    ) -> Self {
        Self {
            field,
            label,
            min,
            max,
            integer: true,
            value,
        }
    }

    const fn float(
        field: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        value: fn(&PhoneForm) -> f64,
    ) -> Self {
        Self {
            field,
            label,
            min,
            max,
            integer: false,
            value,
        }
    }

    fn check(&self, form: &PhoneForm) -> Option<String> {
        let v = (self.value)(form);
        if !v.is_finite() {
            return Some(format!("{} must be a finite number", self.field));
        }
        if v < self.min || v > self.max {
            return Some(format!(
                "{} must be between {} and {}, got {}",
                self.field, self.min, self.max, v
            ));
        }
        if self.integer && v.fract() != 0.0 {
            return Some(format!("{} must be a whole number, got {}", self.field, v));
        }
        None
    }

    pub fn to_json(&self) -> Value {
        json!({
            "field": self.field,
            "label": self.label,
            "min": self.min,
            "max": self.max,
            "integer": self.integer,
        })
    }
}

pub const FIELD_RANGES: [FieldRange; 15] = [
    FieldRange::int("rating", "Rating (0-100)", 0.0, 100.0, |f| f.rating),
    FieldRange::float("clock_speed_ghz", "Clock Speed (GHz, 1.0-4.6)", 1.0, 4.6, |f| f.clock_speed_ghz),
    FieldRange::int("ram_gb", "RAM (GB)", 1.0, 24.0, |f| f.ram_gb),
    FieldRange::int("ram_tier", "RAM Tier", 1.0, 4.0, |f| f.ram_tier),
    FieldRange::int("fast_charging_power_w", "Fast Charging Power (W, 0-250)", 0.0, 250.0, |f| {
        f.fast_charging_power_w
    }),
    FieldRange::int("memory_card_size_gb", "Memory Card Size (GB)", 0.0, 2048.0, |f| {
        f.memory_card_size_gb
    }),
    FieldRange::int("storage_gb", "Storage (GB)", 4.0, 2048.0, |f| f.storage_gb),
    FieldRange::int("primary_rear_camera_mp", "Primary Rear Camera (MP)", 2.0, 200.0, |f| {
        f.primary_rear_camera_mp
    }),
    FieldRange::int("primary_front_camera_mp", "Primary Front Camera (MP)", 1.0, 100.0, |f| {
        f.primary_front_camera_mp
    }),
    FieldRange::int("num_rear_cameras", "Number of Rear Cameras", 1.0, 5.0, |f| f.num_rear_cameras),
    FieldRange::float("screen_size_in", "Screen Size (inches)", 3.0, 10.0, |f| f.screen_size_in),
    FieldRange::int("resolution_width", "Resolution Width", 128.0, 4000.0, |f| f.resolution_width),
    FieldRange::int("resolution_height", "Resolution Height", 128.0, 4000.0, |f| {
        f.resolution_height
    }),
    FieldRange::int("refresh_rate_hz", "Refresh Rate (Hz)", 30.0, 240.0, |f| f.refresh_rate_hz),
    FieldRange::float("os_version", "OS Version (1.0 - 20.0)", 1.0, 20.0, |f| f.os_version),
];

impl PhoneForm {
    /// Card size the model sees: zero whenever cards are unsupported.
    pub fn effective_memory_card_size(&self) -> f64 {
        if self.memory_card_support {
            self.memory_card_size_gb
        } else {
            0.0
        }
    }
}

fn check_category<T: FromStr>(errors: &mut ValidationError, field: &str, value: &str) {
    if value.parse::<T>().is_err() {
        errors.push(format!("{} '{}' is not a known option", field, value));
    }
}

impl Submission for PhoneForm {
    type Record = RawInputs;

    fn model_name(&self) -> Option<&str> {
        self.model.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::default();

        if self.brand.trim().is_empty() {
            errors.push("brand must not be empty");
        } else if !is_known_brand(&self.brand) {
            errors.push(format!("brand '{}' is not a known option", self.brand));
        }

        for range in &FIELD_RANGES {
            if range.field == "memory_card_size_gb" && !self.memory_card_support {
                continue;
            }
            if let Some(message) = range.check(self) {
                errors.push(message);
            }
        }

        check_category::<NotchType>(&mut errors, "notch_type", &self.notch_type);
        check_category::<OsName>(&mut errors, "os_name", &self.os_name);
        check_category::<ProcessorBrand>(&mut errors, "processor_brand", &self.processor_brand);

        errors.into_result()
    }

    fn into_record(self, encoder: &dyn BrandEncoder) -> Result<RawInputs, PredictError> {
        let brand_encoded = encoder.encode(&self.brand)?;
        Ok(RawInputs {
            rating: self.rating,
            has_5g: self.has_5g,
            has_vo5g: self.has_vo5g,
            has_nfc: self.has_nfc,
            clock_speed_ghz: self.clock_speed_ghz,
            ram_gb: self.ram_gb,
            storage_gb: self.storage_gb,
            ram_tier: self.ram_tier,
            fast_charging_power_w: self.fast_charging_power_w,
            screen_size_in: self.screen_size_in,
            resolution_width: self.resolution_width,
            resolution_height: self.resolution_height,
            refresh_rate_hz: self.refresh_rate_hz,
            primary_rear_camera_mp: self.primary_rear_camera_mp,
            num_rear_cameras: self.num_rear_cameras,
            primary_front_camera_mp: self.primary_front_camera_mp,
            memory_card_support: self.memory_card_support,
            os_version: self.os_version,
            memory_card_size_gb: self.effective_memory_card_size(),
            brand_encoded,
            notch_type: self.notch_type.parse().ok(),
            os_name: self.os_name.parse().ok(),
            processor_brand: self.processor_brand.parse().ok(),
        })
    }
}

pub fn display_label(label: Label) -> &'static str {
    match label {
        Label::Expensive => "Expensive Smartphone",
        Label::NotExpensive => "Not Expensive Smartphone",
    }
}

/// Everything the page needs to render its widgets.
pub fn form_options(models: &[String], default_model: &str) -> Value {
    json!({
        "brands": BRANDS.as_slice(),
        "notch_types": labels(&NOTCH_FORM_ORDER),
        "os_names": labels(&OS_FORM_ORDER),
        "processor_brands": labels(&PROCESSOR_FORM_ORDER),
        "ram_tiers": [1, 2, 3, 4],
        "models": models,
        "default_model": default_model,
        "ranges": FIELD_RANGES.iter().map(FieldRange::to_json).collect::<Vec<_>>(),
        "defaults": PhoneForm::default(),
    })
}
