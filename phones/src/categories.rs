//! Categorical axes of the smartphone form.
//!
//! Variant order is the order of the indicator slots in the trained schema.
//! Labels are the exact strings the form submits.

use pricing::model::OneHotAxis;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter, Display)]
pub enum NotchType {
    #[strum(serialize = "Dual Punch Hole")]
    DualPunchHole,
    #[strum(serialize = "Large Notch")]
    LargeNotch,
    #[strum(serialize = "No Notch")]
    NoNotch,
    #[strum(serialize = "Punch Hole")]
    PunchHole,
    #[strum(serialize = "Small Notch")]
    SmallNotch,
    #[strum(serialize = "Water Drop Notch")]
    WaterDropNotch,
}

impl OneHotAxis for NotchType {
    const PREFIX: &'static str = "Notch_Type_";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter, Display)]
pub enum OsName {
    Android,
    #[strum(serialize = "EMUI")]
    Emui,
    HarmonyOS,
    #[strum(serialize = "KAI OS")]
    KaiOs,
    #[strum(serialize = "Pragati OS")]
    PragatiOs,
    #[strum(serialize = "iOS")]
    Ios,
}

impl OneHotAxis for OsName {
    const PREFIX: &'static str = "os_name_";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter, Display)]
pub enum ProcessorBrand {
    Bionic,
    Dimensity,
    Exynos,
    #[strum(serialize = "Google Tensor")]
    GoogleTensor,
    Helio,
    Kirin,
    Other,
    Snapdragon,
    Unisoc,
}

impl OneHotAxis for ProcessorBrand {
    const PREFIX: &'static str = "Processor_Brand_";
}

/// Order in which the form lists each axis (first entry is the default).
pub const NOTCH_FORM_ORDER: [NotchType; 6] = [
    NotchType::DualPunchHole,
    NotchType::LargeNotch,
    NotchType::NoNotch,
    NotchType::PunchHole,
    NotchType::SmallNotch,
    NotchType::WaterDropNotch,
];

pub const OS_FORM_ORDER: [OsName; 6] = [
    OsName::Android,
    OsName::Ios,
    OsName::Emui,
    OsName::HarmonyOS,
    OsName::KaiOs,
    OsName::PragatiOs,
];

pub const PROCESSOR_FORM_ORDER: [ProcessorBrand; 9] = [
    ProcessorBrand::Snapdragon,
    ProcessorBrand::Bionic,
    ProcessorBrand::Dimensity,
    ProcessorBrand::Exynos,
    ProcessorBrand::GoogleTensor,
    ProcessorBrand::Helio,
    ProcessorBrand::Kirin,
    ProcessorBrand::Unisoc,
    ProcessorBrand::Other,
];

pub fn labels<T: AsRef<str>>(values: &[T]) -> Vec<&str> {
    values.iter().map(AsRef::as_ref).collect()
}
