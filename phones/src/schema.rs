use pricing::{
    builder::{FeatureVectorBuilder, build_feature_vector},
    model::{FeatureSchema, FeatureVector},
};

use crate::raw_inputs::RawInputs;

/// Slot layout the deployed classifiers were trained on.
pub const PHONE_FEATURES: [&str; 41] = [
    "rating",
    "5G",
    "Vo5G",
    "NFC",
    "Clock_Speed_GHz",
    "RAM Size GB",
    "Storage Size GB",
    "RAM Tier",
    "fast_charging_power",
    "Screen_Size",
    "Resolution_Width",
    "Resolution_Height",
    "Refresh_Rate",
    "primary_rear_camera_mp",
    "num_rear_cameras",
    "primary_front_camera_mp",
    "memory_card_support",
    "os_version",
    "memory_card_size_gb",
    "brand_encoded",
    "Notch_Type_Dual Punch Hole",
    "Notch_Type_Large Notch",
    "Notch_Type_No Notch",
    "Notch_Type_Punch Hole",
    "Notch_Type_Small Notch",
    "Notch_Type_Water Drop Notch",
    "os_name_Android",
    "os_name_EMUI",
    "os_name_HarmonyOS",
    "os_name_KAI OS",
    "os_name_Pragati OS",
    "os_name_iOS",
    "Processor_Brand_Bionic",
    "Processor_Brand_Dimensity",
    "Processor_Brand_Exynos",
    "Processor_Brand_Google Tensor",
    "Processor_Brand_Helio",
    "Processor_Brand_Kirin",
    "Processor_Brand_Other",
    "Processor_Brand_Snapdragon",
    "Processor_Brand_Unisoc",
];

lazy_static::lazy_static! {
    pub static ref PHONE_SCHEMA: FeatureSchema = phone_schema();
}

// PHONE_FEATURES has no duplicates, checked by `every_slot_is_bound`.
fn phone_schema() -> FeatureSchema {
    FeatureSchema::new(PHONE_FEATURES).expect("smartphone schema names are unique")
}

pub fn phone_builder() -> FeatureVectorBuilder<RawInputs> {
    FeatureVectorBuilder::new(PHONE_SCHEMA.clone())
}

pub fn build_phone_vector(raw: &RawInputs) -> FeatureVector {
    build_feature_vector(raw, &PHONE_SCHEMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_is_bound() {
        let builder = phone_builder();
        assert_eq!(builder.schema().len(), 41);
        assert_eq!(builder.slots().bound(), 41);
    }
}
