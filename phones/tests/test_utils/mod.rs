#![allow(dead_code)]

use std::path::{Path, PathBuf};

use common::config::Config;
use phones::{
    categories::{NotchType, OsName, ProcessorBrand},
    form::PhoneForm,
    raw_inputs::RawInputs,
    schema::PHONE_SCHEMA,
};
use pricing::registry::ModelRegistry;

pub fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

pub fn demo_artifacts_dir() -> PathBuf {
    manifest_dir().join("artifacts").join("demo")
}

/// `config/base.yaml` with artifacts resolved against this crate.
pub fn demo_config() -> Config {
    let path = manifest_dir().join("config").join("base.yaml");
    let mut config = Config::load(&path.to_string_lossy()).expect("base config must load");
    config.common.artifacts_dir = demo_artifacts_dir().to_string_lossy().into_owned();
    config
}

pub fn demo_registry() -> ModelRegistry {
    let config = demo_config();
    ModelRegistry::load(&config.common, &config.models, &PHONE_SCHEMA)
        .expect("demo artifacts must load")
}

/// rating 80, 5G, 2.8 GHz, 8/128 GB, tier 3, 65 W, 6.5", 1080x2400@120,
/// 50 MP x3 rear, 16 MP front, no card, OS 14, brand 12.3,
/// Punch Hole / Android / Snapdragon.
pub fn worked_example() -> RawInputs {
    RawInputs {
        rating: 80.0,
        has_5g: true,
        has_vo5g: false,
        has_nfc: false,
        clock_speed_ghz: 2.8,
        ram_gb: 8.0,
        storage_gb: 128.0,
        ram_tier: 3.0,
        fast_charging_power_w: 65.0,
        screen_size_in: 6.5,
        resolution_width: 1080.0,
        resolution_height: 2400.0,
        refresh_rate_hz: 120.0,
        primary_rear_camera_mp: 50.0,
        num_rear_cameras: 3.0,
        primary_front_camera_mp: 16.0,
        memory_card_support: false,
        os_version: 14.0,
        memory_card_size_gb: 0.0,
        brand_encoded: 12.3,
        notch_type: Some(NotchType::PunchHole),
        os_name: Some(OsName::Android),
        processor_brand: Some(ProcessorBrand::Snapdragon),
    }
}

/// The worked example as a form submission for a real brand.
pub fn flagship_form() -> PhoneForm {
    PhoneForm {
        brand: "Samsung".to_string(),
        rating: 80.0,
        has_5g: true,
        clock_speed_ghz: 2.8,
        ram_gb: 8.0,
        storage_gb: 128.0,
        ram_tier: 3.0,
        fast_charging_power_w: 65.0,
        screen_size_in: 6.5,
        resolution_width: 1080.0,
        resolution_height: 2400.0,
        refresh_rate_hz: 120.0,
        primary_rear_camera_mp: 50.0,
        num_rear_cameras: 3.0,
        primary_front_camera_mp: 16.0,
        memory_card_support: false,
        os_version: 14.0,
        notch_type: "Punch Hole".to_string(),
        os_name: "Android".to_string(),
        processor_brand: "Snapdragon".to_string(),
        ..PhoneForm::default()
    }
}

pub fn budget_form() -> PhoneForm {
    PhoneForm {
        brand: "Itel".to_string(),
        rating: 65.0,
        clock_speed_ghz: 1.8,
        ram_gb: 3.0,
        storage_gb: 32.0,
        ram_tier: 1.0,
        fast_charging_power_w: 10.0,
        screen_size_in: 6.5,
        resolution_width: 720.0,
        resolution_height: 1600.0,
        refresh_rate_hz: 60.0,
        primary_rear_camera_mp: 13.0,
        num_rear_cameras: 1.0,
        primary_front_camera_mp: 5.0,
        memory_card_support: true,
        memory_card_size_gb: 128.0,
        os_version: 12.0,
        notch_type: "Water Drop Notch".to_string(),
        os_name: "Android".to_string(),
        processor_brand: "Unisoc".to_string(),
        ..PhoneForm::default()
    }
}
