use pricing::model::{FeatureValue, Featurizable, OneHotAxis};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

use crate::categories::{NotchType, OsName, ProcessorBrand};

/// Direct (non-indicator) slots, labelled with their schema names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum DirectField {
    #[strum(serialize = "rating")]
    Rating,
    #[strum(serialize = "5G")]
    FiveG,
    #[strum(serialize = "Vo5G")]
    Vo5G,
    #[strum(serialize = "NFC")]
    Nfc,
    #[strum(serialize = "Clock_Speed_GHz")]
    ClockSpeedGhz,
    #[strum(serialize = "RAM Size GB")]
    RamGb,
    #[strum(serialize = "Storage Size GB")]
    StorageGb,
    #[strum(serialize = "RAM Tier")]
    RamTier,
    #[strum(serialize = "fast_charging_power")]
    FastChargingPower,
    #[strum(serialize = "Screen_Size")]
    ScreenSize,
    #[strum(serialize = "Resolution_Width")]
    ResolutionWidth,
    #[strum(serialize = "Resolution_Height")]
    ResolutionHeight,
    #[strum(serialize = "Refresh_Rate")]
    RefreshRate,
    #[strum(serialize = "primary_rear_camera_mp")]
    PrimaryRearCameraMp,
    #[strum(serialize = "num_rear_cameras")]
    NumRearCameras,
    #[strum(serialize = "primary_front_camera_mp")]
    PrimaryFrontCameraMp,
    #[strum(serialize = "memory_card_support")]
    MemoryCardSupport,
    #[strum(serialize = "os_version")]
    OsVersion,
    #[strum(serialize = "memory_card_size_gb")]
    MemoryCardSizeGb,
    #[strum(serialize = "brand_encoded")]
    BrandEncoded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneSlot {
    Direct(DirectField),
    Notch(NotchType),
    Os(OsName),
    Processor(ProcessorBrand),
}

/// Validated, typed inputs for one smartphone; the builder's record type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawInputs {
    pub rating: f64,
    pub has_5g: bool,
    pub has_vo5g: bool,
    pub has_nfc: bool,
    pub clock_speed_ghz: f64,
    pub ram_gb: f64,
    pub storage_gb: f64,
    pub ram_tier: f64,
    pub fast_charging_power_w: f64,
    pub screen_size_in: f64,
    pub resolution_width: f64,
    pub resolution_height: f64,
    pub refresh_rate_hz: f64,
    pub primary_rear_camera_mp: f64,
    pub num_rear_cameras: f64,
    pub primary_front_camera_mp: f64,
    pub memory_card_support: bool,
    pub os_version: f64,
    pub memory_card_size_gb: f64,
    pub brand_encoded: f64,
    pub notch_type: Option<NotchType>,
    pub os_name: Option<OsName>,
    pub processor_brand: Option<ProcessorBrand>,
}

impl RawInputs {
    pub fn direct_value(&self, field: DirectField) -> FeatureValue {
        use DirectField::*;
        match field {
            Rating => self.rating.into(),
            FiveG => self.has_5g.into(),
            Vo5G => self.has_vo5g.into(),
            Nfc => self.has_nfc.into(),
            ClockSpeedGhz => self.clock_speed_ghz.into(),
            RamGb => self.ram_gb.into(),
            StorageGb => self.storage_gb.into(),
            RamTier => self.ram_tier.into(),
            FastChargingPower => self.fast_charging_power_w.into(),
            ScreenSize => self.screen_size_in.into(),
            ResolutionWidth => self.resolution_width.into(),
            ResolutionHeight => self.resolution_height.into(),
            RefreshRate => self.refresh_rate_hz.into(),
            PrimaryRearCameraMp => self.primary_rear_camera_mp.into(),
            NumRearCameras => self.num_rear_cameras.into(),
            PrimaryFrontCameraMp => self.primary_front_camera_mp.into(),
            MemoryCardSupport => self.memory_card_support.into(),
            OsVersion => self.os_version.into(),
            MemoryCardSizeGb => self.memory_card_size_gb.into(),
            BrandEncoded => self.brand_encoded.into(),
        }
    }
}

impl Featurizable for RawInputs {
    type Key = PhoneSlot;

    fn slot_keys() -> Vec<(PhoneSlot, String)> {
        let mut keys: Vec<(PhoneSlot, String)> = DirectField::iter()
            .map(|f| (PhoneSlot::Direct(f), f.as_ref().to_string()))
            .collect();
        keys.extend(NotchType::one_hot_keys(PhoneSlot::Notch));
        keys.extend(OsName::one_hot_keys(PhoneSlot::Os));
        keys.extend(ProcessorBrand::one_hot_keys(PhoneSlot::Processor));
        keys
    }

    fn features(&self) -> Vec<(PhoneSlot, FeatureValue)> {
        let mut out: Vec<(PhoneSlot, FeatureValue)> = DirectField::iter()
            .map(|f| (PhoneSlot::Direct(f), self.direct_value(f)))
            .collect();
        let selections = [
            self.notch_type.map(PhoneSlot::Notch),
            self.os_name.map(PhoneSlot::Os),
            self.processor_brand.map(PhoneSlot::Processor),
        ];
        out.extend(selections.into_iter().flatten().map(|k| (k, FeatureValue::Bool(true))));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_direct_field_has_a_key() {
        let keys = RawInputs::slot_keys();
        assert_eq!(keys.len(), 20 + 6 + 6 + 9);
        assert!(keys.iter().any(|(_, n)| n == "RAM Size GB"));
        assert!(keys.iter().any(|(_, n)| n == "Processor_Brand_Google Tensor"));
    }

    #[test]
    fn unset_selections_emit_nothing() {
        let raw = RawInputs::default();
        let features = raw.features();
        assert_eq!(features.len(), 20);
        assert!(features.iter().all(|(k, _)| matches!(k, PhoneSlot::Direct(_))));
    }
}
