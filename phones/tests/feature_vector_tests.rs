mod test_utils;

use phones::{
    categories::{NotchType, OsName, ProcessorBrand},
    raw_inputs::{DirectField, RawInputs},
    schema::{PHONE_FEATURES, PHONE_SCHEMA, build_phone_vector, phone_builder},
};
use pricing::model::{FeatureSchema, OneHotAxis};
use strum::IntoEnumIterator;

use test_utils::worked_example;

fn axis_sum(raw: &RawInputs, prefix: &str) -> f64 {
    let vector = build_phone_vector(raw);
    PHONE_SCHEMA
        .iter()
        .zip(vector.values())
        .filter(|(name, _)| name.starts_with(prefix))
        .map(|(_, v)| *v)
        .sum()
}

#[test]
fn test_worked_example() {
    let vector = build_phone_vector(&worked_example());
    let value = |name: &str| vector.value_of(&PHONE_SCHEMA, name).unwrap();

    assert_eq!(vector.len(), 41);
    assert_eq!(value("rating"), 80.0);
    assert_eq!(value("5G"), 1.0);
    assert_eq!(value("Vo5G"), 0.0);
    assert_eq!(value("Clock_Speed_GHz"), 2.8);
    assert_eq!(value("RAM Size GB"), 8.0);
    assert_eq!(value("Resolution_Height"), 2400.0);
    assert_eq!(value("brand_encoded"), 12.3);
    assert_eq!(value("Notch_Type_Punch Hole"), 1.0);
    assert_eq!(value("os_name_Android"), 1.0);
    assert_eq!(value("Processor_Brand_Snapdragon"), 1.0);

    let indicators: f64 = vector.values()[20..].iter().sum();
    assert_eq!(indicators, 3.0);
}

#[test]
fn test_exactly_one_indicator_per_axis() {
    for notch in NotchType::iter() {
        for os in OsName::iter() {
            for processor in ProcessorBrand::iter() {
                let raw = RawInputs {
                    notch_type: Some(notch),
                    os_name: Some(os),
                    processor_brand: Some(processor),
                    ..worked_example()
                };
                assert_eq!(axis_sum(&raw, NotchType::PREFIX), 1.0);
                assert_eq!(axis_sum(&raw, OsName::PREFIX), 1.0);
                assert_eq!(axis_sum(&raw, ProcessorBrand::PREFIX), 1.0);

                let vector = build_phone_vector(&raw);
                assert_eq!(vector.value_of(&PHONE_SCHEMA, &processor.slot_name()), Some(1.0));
            }
        }
    }
}

#[test]
fn test_unset_notch_leaves_block_zero() {
    let raw = RawInputs {
        notch_type: None,
        ..worked_example()
    };
    assert_eq!(axis_sum(&raw, "Notch_Type_"), 0.0);
    assert_eq!(axis_sum(&raw, "os_name_"), 1.0);
}

#[test]
fn test_direct_slots_ignore_selections() {
    let base = build_phone_vector(&worked_example());
    let other = build_phone_vector(&RawInputs {
        notch_type: Some(NotchType::NoNotch),
        os_name: Some(OsName::Ios),
        processor_brand: None,
        ..worked_example()
    });
    assert_eq!(base.values()[..20], other.values()[..20]);
}

#[test]
fn test_direct_slots_match_inputs() {
    let raw = worked_example();
    let vector = build_phone_vector(&raw);
    for field in DirectField::iter() {
        assert_eq!(
            vector.value_of(&PHONE_SCHEMA, field.as_ref()),
            Some(raw.direct_value(field).as_f64()),
            "slot {}",
            field.as_ref()
        );
    }
}

#[test]
fn test_values_pass_through_unclamped() {
    let raw = RawInputs {
        rating: 250.0,
        storage_gb: -1.0,
        ..worked_example()
    };
    let vector = build_phone_vector(&raw);
    assert_eq!(vector.get(0), Some(250.0));
    assert_eq!(vector.value_of(&PHONE_SCHEMA, "Storage Size GB"), Some(-1.0));
}

#[test]
fn test_deterministic() {
    let builder = phone_builder();
    let a = builder.build(&worked_example());
    let b = builder.build(&worked_example());
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(a.values()), bits(b.values()));
    assert_eq!(a, build_phone_vector(&worked_example()));
}

#[test]
fn test_schema_without_a_variant_is_silent() {
    // a deployment trained without the iOS column
    let names: Vec<&str> = PHONE_FEATURES
        .iter()
        .copied()
        .filter(|n| *n != "os_name_iOS")
        .collect();
    let schema = FeatureSchema::new(names).unwrap();
    let raw = RawInputs {
        os_name: Some(OsName::Ios),
        ..worked_example()
    };
    let vector = pricing::builder::build_feature_vector(&raw, &schema);

    assert_eq!(vector.len(), 40);
    let os_block: f64 = schema
        .iter()
        .zip(vector.values())
        .filter(|(n, _)| n.starts_with("os_name_"))
        .map(|(_, v)| *v)
        .sum();
    assert_eq!(os_block, 0.0);
}

#[test]
fn test_schema_matches_deployed_layout() {
    let same = FeatureSchema::new(PHONE_FEATURES).unwrap();
    assert!(same.ensure_matches(&PHONE_SCHEMA).is_ok());

    let mut renamed: Vec<String> = PHONE_FEATURES.iter().map(|s| s.to_string()).collect();
    renamed[4] = "clock_speed".to_string();
    let renamed = FeatureSchema::new(renamed).unwrap();
    assert!(renamed.ensure_matches(&PHONE_SCHEMA).is_err());
}
