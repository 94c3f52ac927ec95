use proptest::prelude::*;
use proptest::test_runner::Config;
use woundscan::{
    classify, color_name_to_ph, color_to_ph, ph_to_color, ph_to_level, IndicatorColor,
    InfectionLevel, RgbSample, ScanError,
};

fn expected_level(color: IndicatorColor) -> InfectionLevel {
    match color {
        IndicatorColor::Yellow => InfectionLevel::Healthy,
        IndicatorColor::Green => InfectionLevel::MildRisk,
        IndicatorColor::Blue => InfectionLevel::MediumInfection,
        IndicatorColor::DarkBlue => InfectionLevel::HighInfection,
    }
}

#[test]
fn forward_mapping_matches_table() {
    for color in IndicatorColor::ALL {
        assert_eq!(ph_to_level(color_to_ph(color).value()).unwrap(), expected_level(color));
    }
}

#[test]
fn classifier_is_total_over_coarse_grid() {
    for r in (0..=255u8).step_by(5) {
        for g in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(5) {
                let color = classify(RgbSample::new(r, g, b));
                assert!(IndicatorColor::ALL.contains(&color));
            }
        }
    }
}

proptest! {
    #![proptest_config(Config::with_cases(512))]

    #[test]
    fn classifier_is_deterministic(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let sample = RgbSample::new(r, g, b);
        let first = classify(sample);
        prop_assert_eq!(first, classify(sample));
        prop_assert!(IndicatorColor::ALL.contains(&first));
    }

    #[test]
    fn ph_to_level_is_total_on_observable_range(ph in 5.5f64..=14.0) {
        let level = ph_to_level(ph).unwrap();
        let color = ph_to_color(ph).unwrap();
        prop_assert_eq!(level, expected_level(color));
    }

    #[test]
    fn ph_to_level_is_monotonic(a in 5.5f64..=14.0, b in 5.5f64..=14.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ph_to_level(low).unwrap() <= ph_to_level(high).unwrap());
    }

    #[test]
    fn ph_below_range_fails(ph in -100.0f64..5.5) {
        prop_assert!(matches!(ph_to_level(ph), Err(ScanError::OutOfRange { .. })), "pH {} accepted", ph);
    }

    #[test]
    fn unknown_color_names_fail(name in "[a-z ]{0,12}") {
        // Lowercase names never match the capitalized vocabulary
        let result = color_name_to_ph(&name);
        prop_assert!(matches!(result, Err(ScanError::UnknownColor { .. })), "{:?} accepted", name);
    }
}
